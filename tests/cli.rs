use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn memo(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("memo").unwrap();
    cmd.env("HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("MEMO_DB")
        .env_remove("MEMO_LOG");
    cmd
}

#[test]
fn test_add_then_list() {
    let home = TempDir::new().unwrap();

    memo(&home)
        .write_stdin("Buy milk\nand eggs\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Memo added"))
        .stdout(predicate::str::contains("ID: 1"));

    memo(&home)
        .write_stdin("  Call mom  \n")
        .assert()
        .success();

    memo(&home)
        .arg("-l")
        .assert()
        .success()
        .stdout("Buy milk\nCall mom\n");

    assert!(home.path().join(".memo").join("memo.db").exists());
}

#[test]
fn test_empty_input_is_reported() {
    let home = TempDir::new().unwrap();

    memo(&home)
        .write_stdin("   \n\n")
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("Memo content is empty"));

    memo(&home)
        .write_stdin("")
        .assert()
        .success()
        .stderr(predicate::str::contains("Memo content is empty"));

    memo(&home).arg("-l").assert().success().stdout("");
}

#[test]
fn test_unknown_argument_is_noop() {
    let home = TempDir::new().unwrap();

    memo(&home).arg("-x").assert().success().stdout("");
    memo(&home).arg("whatever").assert().success().stdout("");

    assert!(!home.path().join(".memo").exists());
}

#[test]
fn test_first_flag_decides() {
    let home = TempDir::new().unwrap();

    memo(&home).write_stdin("Keep me").assert().success();

    memo(&home)
        .args(["-l", "-d"])
        .assert()
        .success()
        .stdout("Keep me\n");
    memo(&home)
        .args(["-l", "-l"])
        .assert()
        .success()
        .stdout("Keep me\n");
    memo(&home)
        .args(["-l", "extra"])
        .assert()
        .success()
        .stdout("Keep me\n");
    memo(&home)
        .args(["-l", "-r"])
        .assert()
        .success()
        .stdout("Keep me\n");
}

#[test]
fn test_read_and_delete_on_empty_store() {
    let home = TempDir::new().unwrap();

    memo(&home)
        .arg("-r")
        .assert()
        .success()
        .stdout(predicate::str::contains("No memos found."));

    memo(&home)
        .arg("-d")
        .assert()
        .success()
        .stdout(predicate::str::contains("No memos found."));
}

#[test]
fn test_json_outcome_on_empty_store() {
    let home = TempDir::new().unwrap();

    for flag in ["-r", "-d"] {
        let output = memo(&home)
            .args([flag, "-o", "json"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(value, serde_json::json!({"status": "empty"}));
    }
}

#[test]
fn test_custom_database_path() {
    let home = TempDir::new().unwrap();
    let data = TempDir::new().unwrap();
    let db = data.path().join("notes.db");

    memo(&home)
        .arg("--db")
        .arg(&db)
        .write_stdin("elsewhere")
        .assert()
        .success();

    memo(&home)
        .env("MEMO_DB", &db)
        .arg("-l")
        .assert()
        .success()
        .stdout("elsewhere\n");

    assert!(db.exists());
    assert!(!home.path().join(".memo").join("memo.db").exists());
}

#[test]
fn test_unopenable_database_fails() {
    let home = TempDir::new().unwrap();
    let db = home.path().join("no-such-dir").join("memo.db");

    memo(&home)
        .arg("--db")
        .arg(&db)
        .arg("-l")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Storage error"));
}

#[test]
fn test_in_memory_database() {
    let home = TempDir::new().unwrap();

    memo(&home)
        .args(["--db", ":memory:"])
        .write_stdin("gone after exit")
        .assert()
        .success();

    memo(&home)
        .args(["--db", ":memory:", "-l"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_list_json() {
    let home = TempDir::new().unwrap();

    memo(&home).write_stdin("First\nbody").assert().success();

    let output = memo(&home)
        .args(["-l", "-o", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["count"], 1);
    assert_eq!(value["items"][0]["label"], "First");
}

#[test]
fn test_config_default_output() {
    let home = TempDir::new().unwrap();
    let root = home.path().join(".memo");
    std::fs::create_dir_all(&root).unwrap();
    std::fs::write(root.join("config.yaml"), "default_output: json\n").unwrap();

    memo(&home)
        .arg("-l")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"count\": 0"));
}

#[test]
fn test_completions() {
    let home = TempDir::new().unwrap();

    memo(&home)
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("memo"));

    assert!(!home.path().join(".memo").exists());
}
