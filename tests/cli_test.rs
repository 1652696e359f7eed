use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn sexp_eval_cmd() -> Command {
    let mut cmd = Command::cargo_bin("sexp-eval").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_evaluates_arguments() {
    sexp_eval_cmd()
        .arg("(+ 1 (max 2 3))")
        .arg("(- 10 3 2)")
        .assert()
        .success()
        .stdout("4\n5\n");
}

#[test]
fn test_reads_stdin_when_no_arguments() {
    sexp_eval_cmd()
        .write_stdin("(min 4 2 9)\n\n(1 2 3)\n")
        .assert()
        .success()
        .stdout("2\n[1, 2, 3]\n");
}

#[test]
fn test_json_output() {
    sexp_eval_cmd()
        .arg("--json")
        .arg("(+ 0.5 1)")
        .arg("(1 2)")
        .assert()
        .success()
        .stdout("1.5\n[1.0,2.0]\n");
}

#[test]
fn test_failure_exit_code() {
    sexp_eval_cmd()
        .arg("(foo 1 2)")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Error: Parsing failed: Unknown token: foo",
        ));

    sexp_eval_cmd()
        .arg("(- 5)")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Eval failed"));
}

#[test]
fn test_parse_error_points_at_position() {
    sexp_eval_cmd()
        .arg("(+ 1 (* 2 3))")
        .assert()
        .failure()
        .stderr(predicate::str::ends_with(
            "Error: Parsing failed: Unknown token: *\n  (+ 1 (* 2 3))\n        ^\n",
        ));

    // Eval errors carry no position, so no caret is drawn.
    sexp_eval_cmd()
        .arg("(- 5)")
        .assert()
        .failure()
        .stderr(predicate::str::contains("^").not());
}

#[test]
fn test_caret_counts_characters_not_bytes() {
    sexp_eval_cmd()
        .write_stdin("(+\u{3000}1 x)\n")
        .assert()
        .failure()
        .stderr(predicate::str::ends_with("  (+\u{3000}1 x)\n       ^\n"));
}

#[test]
fn test_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "max_depth": 1 }}"#).unwrap();

    sexp_eval_cmd()
        .arg("--config")
        .arg(file.path())
        .arg("(+ 1 2)")
        .assert()
        .success()
        .stdout("3\n");

    sexp_eval_cmd()
        .arg("--config")
        .arg(file.path())
        .arg("(+ 1 (+ 2 3))")
        .assert()
        .failure()
        .stderr(predicate::str::contains("nesting deeper than 1"));
}

#[test]
fn test_malformed_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "not json").unwrap();

    sexp_eval_cmd()
        .arg("--config")
        .arg(file.path())
        .arg("(+ 1 2)")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config error"));
}
