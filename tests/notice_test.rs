use assert_cmd::Command;
use predicates::prelude::*;

/// Run the shim with color disabled so output is byte-stable.
#[allow(deprecated)]
fn valkey_trib() -> Command {
    let mut cmd = Command::cargo_bin("valkey-trib").expect("Failed to find valkey-trib binary");
    cmd.env_remove("TERM");
    cmd
}

#[test]
fn test_always_exits_with_failure() {
    valkey_trib()
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains(
            "valkey-cli --cluster info 127.0.0.1:7000",
        ));
}

#[test]
fn test_recognized_subcommand_still_fails() {
    valkey_trib()
        .args(["check", "127.0.0.1:7000"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("valkey-cli --cluster check 127.0.0.1:7000"));
}

#[test]
fn test_create_invocation_is_translated() {
    valkey_trib()
        .args(["create", "--replicas", "2", "192.168.1.1:7000"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "valkey-cli --cluster create 192.168.1.1:7000 --cluster-replicas 2",
        ));
}

#[test]
fn test_repeated_weights_stay_ordered() {
    valkey_trib()
        .args([
            "rebalance",
            "--weight",
            "a=2",
            "--weight",
            "b=3",
            "--auto-weights",
        ])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "--cluster-weight a=2 b=3 --cluster-auto-weights",
        ));
}

#[test]
fn test_positionals_precede_options() {
    valkey_trib()
        .args(["import", "--from", "OLDHOST", "--copy", "extra-arg"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "valkey-cli --cluster import extra-arg --cluster-from OLDHOST --cluster-copy",
        ));
}

#[test]
fn test_unrecognized_option_keeps_following_token() {
    valkey_trib()
        .args(["create", "--slaves", "3", "127.0.0.1:7000"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "valkey-cli --cluster create 3 127.0.0.1:7000",
        ));
}

#[test]
fn test_single_dash_tokens_vanish() {
    valkey_trib()
        .args(["check", "-v", "127.0.0.1:7000"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "valkey-cli --cluster check 127.0.0.1:7000",
        ))
        .stdout(predicate::str::contains("-v").not());
}

#[test]
fn test_uppercase_subcommand_is_normalized() {
    valkey_trib()
        .args(["CREATE", "127.0.0.1:7000"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "valkey-cli --cluster create 127.0.0.1:7000",
        ));
}

#[test]
fn test_spaced_argument_is_quoted() {
    valkey_trib()
        .args(["call", "my node", "GET", "k"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "valkey-cli --cluster call \"my node\" GET k",
        ));
}

#[test]
fn test_verbose_is_not_echoed() {
    valkey_trib()
        .args(["check", "--verbose", "127.0.0.1:7000"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "valkey-cli --cluster check 127.0.0.1:7000",
        ))
        .stdout(predicate::str::contains("verbose").not());
}

#[test]
fn test_notice_points_at_replacement_help() {
    valkey_trib()
        .args(["help"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "To get help about all subcommands, type:",
        ))
        .stdout(predicate::str::contains("valkey-cli --cluster help"));
}

#[test]
fn test_ansi_codes_with_xterm() {
    valkey_trib()
        .env("TERM", "xterm-256color")
        .args(["check", "127.0.0.1:7000"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("\u{1b}[33m"))
        .stdout(predicate::str::contains("\u{1b}[1m"));
}

#[test]
fn test_plain_output_without_xterm() {
    valkey_trib()
        .env("TERM", "dumb")
        .args(["check", "127.0.0.1:7000"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("\u{1b}[").not());
}
