use crate::parser::{OptionMap, OptionValue};

/// The tool that replaced valkey-trib.rb.
pub const REPLACEMENT_CLI: &str = "valkey-cli";

/// Rebuild a legacy invocation as the equivalent `valkey-cli --cluster`
/// command line.
///
/// Positional arguments keep their order; an argument containing a
/// space is double-quoted so it survives as one shell token. Options
/// follow in the order they were first seen, renamed to their
/// `--cluster-` form, with repeated values joined by single spaces.
pub fn command_example(command: &str, args: &[String], options: &OptionMap) -> String {
    let mut example = format!("{} --cluster {}", REPLACEMENT_CLI, command);

    for arg in args {
        if arg.contains(' ') {
            example.push_str(&format!(" {:?}", arg));
        } else {
            example.push(' ');
            example.push_str(arg);
        }
    }

    for (option, value) in options {
        example.push_str(&format!(" --cluster-{}", option.to_lowercase()));
        match value {
            OptionValue::Flag => {}
            OptionValue::Value(value) => {
                example.push(' ');
                example.push_str(value);
            }
            OptionValue::Values(values) => {
                example.push(' ');
                example.push_str(&values.join(" "));
            }
        }
    }

    example
}
