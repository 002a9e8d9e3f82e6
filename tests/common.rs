#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use serde_json::Value;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, isolated from the real `~/.rpayroll` config.
pub fn rpay() -> Command {
    let home = env::temp_dir().join("rpayroll_test_home");
    fs::create_dir_all(&home).ok();
    rpay_with_home(&home)
}

/// Same, but with a caller-provided home (for tests that write a config file).
pub fn rpay_with_home(home: &std::path::Path) -> Command {
    let mut cmd = cargo_bin_cmd!("rpayroll");
    cmd.env("HOME", home);
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rpayroll.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Run with `--json` and parse the single object printed on stdout.
pub fn json_of(cmd: &mut Command) -> Value {
    let output = cmd.arg("--json").output().expect("run rpayroll");
    serde_json::from_slice(&output.stdout).expect("stdout is one JSON object")
}

/// Fresh database with one company, two employees, one bus type and two works.
///
/// Employees get ids 1 and 2, works ids 1 and 2.
pub fn init_db_with_data(db_path: &str) {
    rpay()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    rpay()
        .args(["--db", db_path, "company", "add", "--name", "Acme"])
        .assert()
        .success();

    for name in ["Ravi Kumar", "Suresh Babu"] {
        rpay()
            .args(["--db", db_path, "employee", "add", "--name", name])
            .assert()
            .success();
    }

    rpay()
        .args(["--db", db_path, "bus-type", "add", "--name", "Sleeper"])
        .assert()
        .success();

    for (work, cost) in [("Seat fitting", "10"), ("Roof panel", "20")] {
        rpay()
            .args([
                "--db", db_path, "work", "add", "--name", work, "--bus-type", "Sleeper", "--cost", cost,
            ])
            .assert()
            .success();
    }
}

/// `salary add` arguments for Acme with the given employee, type and vectors.
pub fn salary_args<'a>(
    db_path: &'a str,
    employee: &'a str,
    kind: &'a str,
    costs: &'a str,
    quantities: &'a str,
) -> Vec<&'a str> {
    vec![
        "--db",
        db_path,
        "salary",
        "add",
        "--payment",
        "500",
        "--date",
        "2024-03-01",
        "--employee",
        employee,
        "--type",
        kind,
        "--company",
        "Acme",
        "--work-ids",
        "1,2",
        "--costs",
        costs,
        "--quantities",
        quantities,
    ]
}
