use once_cell::sync::Lazy;
use std::collections::HashMap;

/// How many following tokens an option consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Presence flag; consumes nothing.
    NoValue,
    /// Consumes exactly one token; later occurrences overwrite.
    Single,
    /// Repeatable; consumes one token per occurrence.
    Multi,
}

pub type OptionRow = &'static [(&'static str, Arity)];

/// Options each legacy subcommand used to accept. Subcommands that
/// took no options keep an empty row so the full command set stays
/// visible; anything outside this table has no row at all.
static ALLOWED_OPTIONS: Lazy<HashMap<&'static str, OptionRow>> = Lazy::new(|| {
    use Arity::{Multi, NoValue, Single};

    let mut table: HashMap<&'static str, OptionRow> = HashMap::new();
    table.insert("create", &[("replicas", Single)]);
    table.insert("add-node", &[("slave", NoValue), ("master-id", Single)]);
    table.insert(
        "import",
        &[("from", Single), ("copy", NoValue), ("replace", NoValue)],
    );
    table.insert(
        "reshard",
        &[
            ("from", Single),
            ("to", Single),
            ("slots", Single),
            ("yes", NoValue),
            ("timeout", Single),
            ("pipeline", Single),
        ],
    );
    table.insert(
        "rebalance",
        &[
            ("weight", Multi),
            ("auto-weights", NoValue),
            ("use-empty-masters", NoValue),
            ("timeout", Single),
            ("simulate", NoValue),
            ("pipeline", Single),
            ("threshold", Single),
        ],
    );
    table.insert("fix", &[("timeout", Single)]);
    table.insert("check", &[]);
    table.insert("info", &[]);
    table.insert("del-node", &[]);
    table.insert("set-timeout", &[]);
    table.insert("call", &[]);
    table.insert("help", &[]);
    table
});

/// Option row for a subcommand, if the legacy tool knew the name at all.
pub fn options_for(command: &str) -> Option<OptionRow> {
    ALLOWED_OPTIONS.get(command).copied()
}

/// Arity of `option` under `command`, or `None` when the pair was
/// never part of the legacy grammar.
pub fn arity_of(command: &str, option: &str) -> Option<Arity> {
    options_for(command)?
        .iter()
        .find(|(name, _)| *name == option)
        .map(|(_, arity)| *arity)
}
