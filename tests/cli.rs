use assert_cmd::prelude::*;
use std::process::Command;

// We check the --help output in order to confirm that the clap cli is setup correctly.
// Any arguments that are incorrectly will cause clap to panic regardless of the arguments or
// options provided.
// Calling help does not require any application logic so if this tests fails then we know it
// is to do with the clap cli setup code.
#[test]
fn check_clap_cli_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("bookfinder")?;

    cmd.arg("--help");
    cmd.assert().success();

    Ok(())
}

#[test]
fn check_search_subcommand_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("bookfinder")?;

    cmd.args(["search", "--help"]);
    let output = cmd.output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("--filter"), "{stdout}");
    assert!(stdout.contains("--json"), "{stdout}");

    Ok(())
}

// A blank query never reaches the network so this runs offline.
#[test]
fn blank_search_prints_prompt() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("bookfinder")?;

    cmd.args(["-q", "search", "   "]);
    let output = cmd.output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("Search for your favorite books"), "{stdout}");

    Ok(())
}

#[test]
fn unknown_filter_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("bookfinder")?;

    cmd.args(["search", "--filter", "publisher", "dune"]);
    cmd.assert().failure();

    Ok(())
}
