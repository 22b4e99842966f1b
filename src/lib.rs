//! Deprecation shim for the retired `valkey-trib.rb` cluster tool.
//!
//! The legacy command line is re-parsed with the old per-subcommand
//! option tables and echoed back as the equivalent `valkey-cli --cluster`
//! invocation, alongside a migration notice. The process always exits
//! with a failure status; no cluster operation is performed.

mod commands;
mod grammar;
mod parser;
mod render;
mod style;

pub use commands::run;
pub use grammar::{Arity, OptionRow, arity_of, options_for};
pub use parser::{OptionMap, OptionValue, ParsedArgs, parse_options};
pub use render::{REPLACEMENT_CLI, command_example};
pub use style::{Tint, decorate};
