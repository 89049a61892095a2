use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

fn run_help(home: &TempDir, args: &[&str]) {
    let mut cmd = cargo_bin_cmd!("oddcheck");
    cmd.env("HOME", home.path())
        .args(args)
        .arg("--help")
        .assert()
        .success();
}

#[test]
fn every_cli_command_has_help_path() {
    let home = TempDir::new().expect("temp home");

    // top-level
    run_help(&home, &[]);

    run_help(&home, &["check"]);
    run_help(&home, &["questions"]);
    run_help(&home, &["scan"]);
    run_help(&home, &["report"]);
    run_help(&home, &["history"]);
}

#[test]
fn unknown_backend_is_rejected_by_parser() {
    let home = TempDir::new().expect("temp home");
    let mut cmd = cargo_bin_cmd!("oddcheck");
    cmd.env("HOME", home.path())
        .args(["check", ".", "--backend", "telepathy"])
        .assert()
        .failure();
}
