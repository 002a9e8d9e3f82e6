use predicates::str::contains;
use rpayroll::utils::colors::{BOLD, GREEN};
use std::fs;
use std::path::Path;

mod common;
use common::{init_db_with_data, json_of, rpay, salary_args, setup_test_db, temp_out};

fn seed(db_path: &str) {
    init_db_with_data(db_path);
    rpay()
        .args(salary_args(db_path, "1", "salary", "10,20", "2,3"))
        .assert()
        .success();
    rpay()
        .args(salary_args(db_path, "2", "advance", "0", "0"))
        .assert()
        .success();
}

#[test]
fn test_export_csv_all_entries() {
    let db_path = setup_test_db("export_csv_all");
    seed(&db_path);
    let out = temp_out("export_csv_all", "csv");

    rpay()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).unwrap();
    let mut lines = content.lines();
    assert_eq!(
        lines.next().unwrap(),
        "salary_entry_id,record_date,employee_id,company,type_of_payment,mode_of_payment,payment,work_done,work_ids,costs,quantities,created_at"
    );
    assert_eq!(lines.count(), 2);
    assert!(content.contains("\"[10,20]\""));
}

#[test]
fn test_export_json_filtered_by_employee() {
    let db_path = setup_test_db("export_json_emp");
    seed(&db_path);
    let out = temp_out("export_json_emp", "json");

    let report = json_of(rpay().args([
        "--db", &db_path, "export", "--format", "json", "--file", &out, "--employee", "2",
    ]));
    assert_eq!(report["exported"], 1);

    let data: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    let rows = data.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["type_of_payment"], "advance");
    assert_eq!(rows[0]["costs"], serde_json::json!([0]));
}

#[test]
fn test_export_empty_selection_writes_nothing() {
    let db_path = setup_test_db("export_empty");
    seed(&db_path);
    let out = temp_out("export_empty", "csv");

    let report = json_of(rpay().args([
        "--db", &db_path, "export", "--file", &out, "--company", "Nobody Ltd",
    ]));
    assert_eq!(report["exported"], 0);
    assert!(!Path::new(&out).exists());
}

#[test]
fn test_export_refuses_overwrite_without_force() {
    let db_path = setup_test_db("export_force");
    seed(&db_path);
    let out = temp_out("export_force", "csv");
    fs::write(&out, "keep me").unwrap();

    // empty stdin answers "no"
    let refused = json_of(rpay().args(["--db", &db_path, "export", "--file", &out]).write_stdin(""));
    assert_eq!(refused["kind"], "export");
    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

    rpay()
        .args(["--db", &db_path, "export", "--file", &out, "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).unwrap().starts_with("salary_entry_id"));
}

#[test]
fn test_export_rejects_relative_path() {
    let db_path = setup_test_db("export_relative");
    seed(&db_path);

    let out = json_of(rpay().args(["--db", &db_path, "export", "--file", "relative.csv"]));
    assert_eq!(out["kind"], "export");
}

#[test]
fn test_backup_plain_and_compressed() {
    let db_path = setup_test_db("backup");
    seed(&db_path);

    let plain = temp_out("backup_plain", "sqlite");
    rpay()
        .args(["--db", &db_path, "backup", "--file", &plain])
        .assert()
        .success()
        .stdout(contains("Backup created"))
        .stdout(contains(format!("{}{}", GREEN, BOLD)));
    assert!(Path::new(&plain).exists());

    let zipped = temp_out("backup_zip", "sqlite");
    let zip_path = Path::new(&zipped).with_extension("zip");
    fs::remove_file(&zip_path).ok();

    let report = json_of(rpay().args(["--db", &db_path, "backup", "--file", &zipped, "--compress"]));
    assert_eq!(report["backup"], zip_path.to_string_lossy().to_string());
    assert!(zip_path.exists());
    assert!(!Path::new(&zipped).exists());

    let log = json_of(rpay().args(["--db", &db_path, "log", "--print"]));
    let backups = log["log"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|e| e["operation"] == "backup")
        .count();
    assert_eq!(backups, 2);
}

#[test]
fn test_db_info_and_check() {
    let db_path = setup_test_db("db_info");
    seed(&db_path);

    let info = json_of(rpay().args(["--db", &db_path, "db", "--info"]));
    let tables = info["info"]["tables"].as_array().unwrap();
    let salaries = tables.iter().find(|t| t["table"] == "salaries").unwrap();
    assert_eq!(salaries["rows"], 2);
    assert_eq!(info["info"]["first_record_date"], "2024-03-01");

    let check = json_of(rpay().args(["--db", &db_path, "db", "--check"]));
    assert_eq!(check["integrity"], "ok");
}

#[test]
fn test_compressed_backup_asks_before_replacing_zip() {
    let db_path = setup_test_db("backup_zip_exists");
    seed(&db_path);

    let dest = temp_out("backup_zip_exists", "sqlite");
    let zip_path = Path::new(&dest).with_extension("zip");
    fs::write(&zip_path, "older archive").unwrap();

    // empty stdin declines the overwrite
    let report = json_of(
        rpay()
            .args(["--db", &db_path, "backup", "--file", &dest, "--compress"])
            .write_stdin(""),
    );
    assert_eq!(report["has_error"], false);
    assert!(report["message"].as_str().unwrap().contains("cancelled"));
    assert_eq!(fs::read_to_string(&zip_path).unwrap(), "older archive");
    assert!(!Path::new(&dest).exists());

    rpay()
        .args(["--db", &db_path, "backup", "--file", &dest, "--compress"])
        .write_stdin("y\n")
        .assert()
        .success();
    assert_ne!(fs::read(&zip_path).unwrap(), b"older archive".to_vec());
}
