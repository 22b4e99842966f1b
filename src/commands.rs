use std::collections::VecDeque;
use std::io::Write;

use anyhow::Result;

use crate::parser::parse_options;
use crate::render::{REPLACEMENT_CLI, command_example};
use crate::style::{Tint, decorate};

/// Print the migration notice for a legacy invocation.
///
/// The first token of `argv` is taken as the legacy subcommand and the
/// rest is parsed with that subcommand's option table to rebuild the
/// equivalent `valkey-cli --cluster` call. Without arguments a canned
/// example is shown instead.
pub fn run(argv: Vec<String>) -> Result<()> {
    let mut argv: VecDeque<String> = argv.into();

    let example = match argv.pop_front() {
        Some(command) => {
            let command = command.to_lowercase();
            let parsed = parse_options(&command, &mut argv);
            command_example(&command, &parsed.args, &parsed.options)
        }
        None => format!("{} --cluster info 127.0.0.1:7000", REPLACEMENT_CLI),
    };

    let stdout = std::io::stdout();
    write_notice(&mut stdout.lock(), &example)?;
    Ok(())
}

fn write_notice(out: &mut impl Write, example: &str) -> std::io::Result<()> {
    writeln!(
        out,
        "{}",
        decorate(
            "WARNING: valkey-trib.rb is not longer available!",
            Tint::Yellow
        )
    )?;
    writeln!(
        out,
        "You should use {} instead.",
        decorate(REPLACEMENT_CLI, Tint::Bold)
    )?;
    writeln!(out)?;
    writeln!(
        out,
        "All commands and features belonging to valkey-trib.rb have been moved"
    )?;
    writeln!(out, "to valkey-cli.")?;
    writeln!(
        out,
        "In order to use them you should call valkey-cli with the {}",
        decorate("--cluster", Tint::Bold)
    )?;
    writeln!(
        out,
        "option followed by the subcommand name, arguments and options."
    )?;
    writeln!(out)?;
    writeln!(out, "Use the following syntax:")?;
    writeln!(
        out,
        "{}",
        decorate(
            "valkey-cli --cluster SUBCOMMAND [ARGUMENTS] [OPTIONS]",
            Tint::Bold
        )
    )?;
    writeln!(out)?;
    writeln!(out, "Example:")?;
    writeln!(out, "{}", decorate(example, Tint::Bold))?;
    writeln!(out)?;
    writeln!(out, "To get help about all subcommands, type:")?;
    writeln!(
        out,
        "{}",
        decorate("valkey-cli --cluster help", Tint::Bold)
    )?;
    writeln!(out)?;
    Ok(())
}
