use assert_cmd::Command;

fn run_help(args: &[&str]) -> String {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("folio");
    let output = cmd.args(args).arg("--help").output().unwrap();
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn test_main_help_lists_subcommands() {
    let help = run_help(&[]);
    for name in ["view", "terminal", "show", "init"] {
        assert!(help.contains(name), "missing {name} in:\n{help}");
    }
    assert!(help.contains("--data-dir"));
}

#[test]
fn test_terminal_help() {
    let help = run_help(&["terminal"]);
    assert!(help.contains("exec"));
    assert!(help.contains("commands"));
}

#[test]
fn test_show_help_lists_targets() {
    let help = run_help(&["show"]);
    for target in ["profile", "projects", "skills", "about", "contact"] {
        assert!(help.contains(target), "missing {target} in:\n{help}");
    }
}

#[test]
fn test_version() {
    let mut cmd: Command = assert_cmd::cargo::cargo_bin_cmd!("folio");
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicates::str::starts_with("folio "));
}
