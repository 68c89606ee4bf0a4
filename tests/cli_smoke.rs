use assert_cmd::Command;
use predicates::str::contains;

#[test]
fn pk_help_works() {
    Command::cargo_bin("pk")
        .expect("binary")
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("to-do list manager"));
}

#[test]
fn subcommand_help_works() {
    for cmd in ["add", "list", "update"] {
        Command::cargo_bin("pk")
            .expect("binary")
            .arg(cmd)
            .arg("--help")
            .assert()
            .success();
    }
}

#[test]
fn add_requires_task_and_cat() {
    Command::cargo_bin("pk")
        .expect("binary")
        .arg("add")
        .assert()
        .failure();
}

#[test]
fn update_requires_an_id_argument() {
    Command::cargo_bin("pk")
        .expect("binary")
        .arg("update")
        .assert()
        .failure();
}
