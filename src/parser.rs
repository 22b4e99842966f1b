use std::collections::VecDeque;

use indexmap::IndexMap;

use crate::grammar::{self, Arity};

/// Value recorded for a recognized option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    /// Presence flag.
    Flag,
    /// Single value; the last occurrence wins.
    Value(String),
    /// Repeatable option; values kept in the order given.
    Values(Vec<String>),
}

/// Recognized options in first-insertion order.
pub type OptionMap = IndexMap<String, OptionValue>;

/// Outcome of scanning a legacy command line.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ParsedArgs {
    pub options: OptionMap,
    pub args: Vec<String>,
    /// `--verbose` is accepted for every subcommand and reported here
    /// instead of in the option map.
    pub verbose: bool,
}

/// Scan the arguments following `command`, consuming `argv` from the
/// front.
///
/// Options the legacy tool never recognized for `command` are dropped
/// without consuming a value, and a value-taking option that ends the
/// argument list is dropped as well. Tokens starting with a single
/// dash are discarded outright; everything else is a positional
/// argument.
pub fn parse_options(command: &str, argv: &mut VecDeque<String>) -> ParsedArgs {
    let command = command.to_lowercase();
    let mut parsed = ParsedArgs::default();

    while let Some(token) = argv.pop_front() {
        let Some(option) = token.strip_prefix("--") else {
            if !token.starts_with('-') {
                parsed.args.push(token);
            }
            continue;
        };

        if option == "verbose" {
            parsed.verbose = true;
            continue;
        }

        let Some(arity) = grammar::arity_of(&command, option) else {
            continue;
        };

        match arity {
            Arity::NoValue => {
                parsed.options.insert(option.to_string(), OptionValue::Flag);
            }
            Arity::Single => {
                let Some(value) = argv.pop_front() else { continue };
                parsed
                    .options
                    .insert(option.to_string(), OptionValue::Value(value));
            }
            Arity::Multi => {
                let Some(value) = argv.pop_front() else { continue };
                let entry = parsed
                    .options
                    .entry(option.to_string())
                    .or_insert_with(|| OptionValue::Values(Vec::new()));
                if let OptionValue::Values(values) = entry {
                    values.push(value);
                }
            }
        }
    }

    parsed
}
