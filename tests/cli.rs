use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn backpack() -> Command {
    let mut cmd = Command::cargo_bin("backpack").unwrap();
    cmd.env_remove("BACKPACK_JSON").env_remove("RUST_LOG");
    cmd
}

#[test]
fn run_first_trip_demo() {
    backpack()
        .args(["run", "demos/first_trip.pack"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "You now have George's backpack and put a tent into it.",
        ))
        .stdout(predicate::str::contains("This backpack belongs to George."))
        .stdout(predicate::str::contains("The main compartment contains tent, jacket."))
        .stdout(predicate::str::contains("Your backpack does not contain stove."))
        .stdout(predicate::str::contains("You have removed a tent from George's backpack."))
        .stdout(predicate::str::contains("The main compartment contains jacket."))
        .stderr(predicate::str::contains("Warning"));
}

#[test]
fn run_dump_demo_ends_empty() {
    backpack()
        .args(["run", "demos/dump_it_all.pack"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "You have dumped tent, jacket on the ground.",
        ))
        .stdout(predicate::str::ends_with("The main compartment is empty.\n"));
}

#[test]
fn run_two_backpacks_demo_keeps_them_apart() {
    backpack()
        .args(["run", "demos/two_backpacks.pack"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "The main compartment contains tent, socks, sandwich.",
        ))
        .stdout(predicate::str::contains(
            "The main compartment contains sleeping bag, binoculars.",
        ));
}

#[test]
fn exec_unrecognized_payload() {
    backpack()
        .args(["exec", r#"PACK "Jim" WITH 42"#])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "I have no idea what 42 is - chucking it on the ground.",
        ));
}

#[test]
fn exec_out_of_range_number_payload() {
    backpack()
        .args(["exec", r#"PACK "Jim" WITH 1e400"#])
        .assert()
        .success()
        .stdout(predicate::str::contains("I have no idea what 1e400 is"));
}

#[test]
fn exec_json_output() {
    let output = backpack()
        .args(["--json", "exec", r#"PACK "Jim" WITH ["tent", "socks"]"#])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["event"], "packed");
    assert_eq!(value["owner"], "Jim");
    assert_eq!(value["diagnostic"], serde_json::Value::Null);
}

#[test]
fn exec_unknown_owner_fails() {
    backpack()
        .args(["exec", r#"LOOK IN "Jim""#])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Nobody has packed a backpack for Jim"));
}

#[test]
fn exec_parse_error_fails() {
    backpack()
        .args(["exec", "PACK Jim"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Parse error"));
}

#[test]
fn run_rejects_invalid_script() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("bad.pack");
    fs::write(&path, r#"ADD "jacket" TO "Jim";"#).unwrap();

    backpack()
        .arg("run")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Jim has no backpack at this point"));
}

#[test]
fn run_exports_next_to_script() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("trip.pack");
    fs::write(
        &path,
        r#"PACK "Jim" WITH "tent"; ADD "jacket" TO "Jim"; EXPORT "Jim" TO "jim.pack";"#,
    )
    .unwrap();

    backpack().arg("run").arg(&path).assert().success();

    let exported = temp_dir.path().join("jim.pack");
    let content = fs::read_to_string(&exported).unwrap();
    assert!(content.contains(r#"PACK "Jim" WITH ["tent","jacket"];"#));

    // The export is itself a runnable script
    backpack()
        .arg("run")
        .arg(&exported)
        .assert()
        .success()
        .stdout(predicate::str::contains("put a tent, jacket into it."));
}

#[test]
fn explain_statement() {
    backpack()
        .args(["explain", r#"REMOVE "tent" FROM "Jim""#])
        .assert()
        .success()
        .stdout(predicate::str::contains("Remove the first tent from Jim's backpack"));
}

#[test]
fn explain_script_file() {
    backpack()
        .args(["explain", "demos/dump_it_all.pack"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Statements: 9"))
        .stdout(predicate::str::contains("Validation Notes:"));
}

#[test]
fn check_reports_errors() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("twice.pack");
    fs::write(&path, r#"PACK "Jim" WITH "tent"; PACK "Jim" WITH "socks";"#).unwrap();

    backpack()
        .arg("check")
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("already has a backpack"));

    backpack()
        .args(["check", "demos/two_backpacks.pack"])
        .assert()
        .success()
        .stdout(predicate::str::contains("statements OK"));
}
