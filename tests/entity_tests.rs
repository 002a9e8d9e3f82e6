use predicates::str::contains;

mod common;
use common::{json_of, rpay, setup_test_db};

#[test]
fn test_init_reports_created_tables_once() {
    let db_path = setup_test_db("init_tables");

    let first = json_of(rpay().args(["--db", &db_path, "--test", "init"]));
    let created = first["init"]["created_tables"].as_array().unwrap();
    assert_eq!(created.len(), 6);
    assert_eq!(first["has_error"], false);

    let second = json_of(rpay().args(["--db", &db_path, "--test", "init"]));
    assert!(second["init"]["created_tables"].as_array().unwrap().is_empty());
}

#[test]
fn test_employee_duplicate_name_rejected() {
    let db_path = setup_test_db("employee_dup");
    rpay().args(["--db", &db_path, "--test", "init"]).assert().success();

    let ok = json_of(rpay().args(["--db", &db_path, "employee", "add", "--name", "Ravi Kumar"]));
    assert_eq!(ok["employee_id"], 1);

    let dup = json_of(rpay().args(["--db", &db_path, "employee", "add", "--name", "Ravi Kumar"]));
    assert_eq!(dup["has_error"], true);
    assert_eq!(dup["kind"], "duplicate_name");

    rpay()
        .args(["--db", &db_path, "employee", "add", "--name", "Ravi Kumar"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("already exists"));

    let list = json_of(rpay().args(["--db", &db_path, "employee", "list"]));
    assert_eq!(list["employees"].as_array().unwrap().len(), 1);
}

#[test]
fn test_employee_update_and_delete() {
    let db_path = setup_test_db("employee_update");
    rpay().args(["--db", &db_path, "--test", "init"]).assert().success();

    for name in ["Ravi", "Suresh"] {
        rpay()
            .args(["--db", &db_path, "employee", "add", "--name", name])
            .assert()
            .success();
    }

    // renaming onto another employee's name
    let clash = json_of(rpay().args(["--db", &db_path, "employee", "update", "2", "--name", "Ravi"]));
    assert_eq!(clash["kind"], "duplicate_name");

    // keeping its own name is fine
    rpay()
        .args([
            "--db", &db_path, "employee", "update", "1", "--name", "Ravi", "--designation", "Welder",
        ])
        .assert()
        .success();

    let got = json_of(rpay().args(["--db", &db_path, "employee", "get", "1"]));
    assert_eq!(got["employee"]["designation"], "Welder");

    rpay().args(["--db", &db_path, "employee", "del", "2"]).assert().success();

    let missing = json_of(rpay().args(["--db", &db_path, "employee", "del", "2"]));
    assert_eq!(missing["kind"], "not_found");
}

#[test]
fn test_company_bank_lists_round_trip() {
    let db_path = setup_test_db("company_bank");
    rpay().args(["--db", &db_path, "--test", "init"]).assert().success();

    rpay()
        .args([
            "--db",
            &db_path,
            "company",
            "add",
            "--name",
            "Acme",
            "--bank-name",
            "SBI",
            "--bank-name",
            "HDFC",
            "--account-no",
            "111",
            "--account-no",
            "222",
            "--established",
            "2001-06-15",
        ])
        .assert()
        .success();

    let list = json_of(rpay().args(["--db", &db_path, "company", "list"]));
    let acme = &list["companies"][0];
    assert_eq!(acme["bank_name"], serde_json::json!(["SBI", "HDFC"]));
    assert_eq!(acme["account_no"], serde_json::json!(["111", "222"]));
    assert_eq!(acme["bank_branch"], serde_json::json!([]));
    assert_eq!(acme["date_of_establishment"], "2001-06-15");

    let names = json_of(rpay().args(["--db", &db_path, "company", "names"]));
    assert_eq!(names["company_names"], serde_json::json!(["Acme"]));
}

#[test]
fn test_company_duplicate_and_bad_date() {
    let db_path = setup_test_db("company_dup");
    rpay().args(["--db", &db_path, "--test", "init"]).assert().success();
    rpay()
        .args(["--db", &db_path, "company", "add", "--name", "Acme"])
        .assert()
        .success();

    let dup = json_of(rpay().args(["--db", &db_path, "company", "add", "--name", "Acme"]));
    assert_eq!(dup["kind"], "duplicate_name");

    let bad = json_of(rpay().args([
        "--db", &db_path, "company", "add", "--name", "Beta", "--established", "15/06/2001",
    ]));
    assert_eq!(bad["kind"], "invalid_input");
}

#[test]
fn test_work_requires_known_bus_type() {
    let db_path = setup_test_db("work_bus_type");
    rpay().args(["--db", &db_path, "--test", "init"]).assert().success();

    let unknown = json_of(rpay().args([
        "--db", &db_path, "work", "add", "--name", "Seat fitting", "--bus-type", "Sleeper",
    ]));
    assert_eq!(unknown["kind"], "unknown_reference");

    rpay()
        .args(["--db", &db_path, "bus-type", "add", "--name", "Sleeper"])
        .assert()
        .success();
    rpay()
        .args([
            "--db", &db_path, "work", "add", "--name", "Seat fitting", "--bus-type", "Sleeper", "--cost", "10",
        ])
        .assert()
        .success();

    let dup = json_of(rpay().args([
        "--db", &db_path, "work", "add", "--name", "Seat fitting", "--bus-type", "Sleeper",
    ]));
    assert_eq!(dup["kind"], "duplicate_name");

    let brief = json_of(rpay().args(["--db", &db_path, "work", "list", "--brief"]));
    assert_eq!(brief["works"][0]["cost"], 10);
    assert!(brief["works"][0].get("description").is_none());
}

#[test]
fn test_bus_type_rename_and_delete() {
    let db_path = setup_test_db("bus_type_rename");
    rpay().args(["--db", &db_path, "--test", "init"]).assert().success();

    for name in ["Sleeper", "Seater"] {
        rpay()
            .args(["--db", &db_path, "bus-type", "add", "--name", name])
            .assert()
            .success();
    }

    let clash = json_of(rpay().args(["--db", &db_path, "bus-type", "update", "2", "--name", "Sleeper"]));
    assert_eq!(clash["kind"], "duplicate_name");

    rpay()
        .args(["--db", &db_path, "bus-type", "update", "2", "--name", "Semi sleeper"])
        .assert()
        .success();

    rpay()
        .args(["--db", &db_path, "bus-type", "list"])
        .assert()
        .success()
        .stdout(contains("Semi sleeper"));

    let missing = json_of(rpay().args(["--db", &db_path, "bus-type", "del", "9"]));
    assert_eq!(missing["kind"], "not_found");
}

#[test]
fn test_log_records_mutations() {
    let db_path = setup_test_db("log_print");
    rpay().args(["--db", &db_path, "--test", "init"]).assert().success();
    rpay()
        .args(["--db", &db_path, "employee", "add", "--name", "Ravi"])
        .assert()
        .success();

    let log = json_of(rpay().args(["--db", &db_path, "log", "--print"]));
    let ops: Vec<&str> = log["log"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["operation"].as_str().unwrap())
        .collect();
    assert_eq!(ops, vec!["init", "add"]);

    // audit rows are stamped in UTC, not the machine's local zone
    for entry in log["log"].as_array().unwrap() {
        assert!(entry["date"].as_str().unwrap().ends_with("+00:00"));
    }
}
