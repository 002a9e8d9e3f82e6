use predicates::str::contains;
use std::fs;

mod common;
use common::{init_db_with_data, json_of, rpay, rpay_with_home, salary_args, setup_test_db};

#[test]
fn test_salary_add_computes_work_done() {
    let db_path = setup_test_db("salary_work_done");
    init_db_with_data(&db_path);

    let added = json_of(rpay().args(salary_args(&db_path, "1", "salary", "10,20", "2,3")));
    assert_eq!(added["has_error"], false);
    assert_eq!(added["salary_entry_id"], 1);

    let got = json_of(rpay().args(["--db", &db_path, "salary", "get", "1"]));
    let entry = &got["salary_entry"];
    assert_eq!(entry["work_done"], 80);
    assert_eq!(entry["work_ids"], serde_json::json!([1, 2]));
    assert_eq!(entry["costs"], serde_json::json!([10, 20]));
    assert_eq!(entry["quantities"], serde_json::json!([2, 3]));
    assert_eq!(entry["record_date"], "2024-03-01");
    assert_eq!(entry["created_at"].as_str().unwrap().len(), 19);
}

#[test]
fn test_advance_with_work_is_rejected() {
    let db_path = setup_test_db("salary_advance");
    init_db_with_data(&db_path);

    let rejected = json_of(rpay().args(salary_args(&db_path, "1", "advance", "10", "1")));
    assert_eq!(rejected["has_error"], true);
    assert_eq!(rejected["kind"], "invalid_advance_entry");

    rpay()
        .args(salary_args(&db_path, "1", "advance", "10", "1"))
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Advance payment not allowed"));

    // nothing was written
    let list = json_of(rpay().args(["--db", &db_path, "salary", "list"]));
    assert!(list["salary_entries"].as_array().unwrap().is_empty());

    // an advance with no work goes through
    rpay()
        .args(salary_args(&db_path, "1", "advance", "0", "0"))
        .assert()
        .success();
}

#[test]
fn test_payment_type_match_is_exact() {
    let db_path = setup_test_db("salary_type_case");
    init_db_with_data(&db_path);

    rpay()
        .args(salary_args(&db_path, "1", "Advance", "10", "1"))
        .assert()
        .success();
}

#[test]
fn test_unknown_references_are_rejected() {
    let db_path = setup_test_db("salary_unknown_refs");
    init_db_with_data(&db_path);

    let mut args = salary_args(&db_path, "99", "salary", "10", "1");
    let bad_employee = json_of(rpay().args(&args));
    assert_eq!(bad_employee["kind"], "unknown_reference");
    assert!(bad_employee["error"].as_str().unwrap().contains("Employee"));

    // company is checked before employee
    let pos = args.iter().position(|a| *a == "Acme").unwrap();
    args[pos] = "Nobody Ltd";
    let bad_company = json_of(rpay().args(&args));
    assert_eq!(bad_company["kind"], "unknown_reference");
    assert!(bad_company["error"].as_str().unwrap().contains("Company"));
}

#[test]
fn test_mismatched_vectors_are_rejected() {
    let db_path = setup_test_db("salary_mismatch");
    init_db_with_data(&db_path);

    let out = json_of(rpay().args(salary_args(&db_path, "1", "salary", "10,20", "1")));
    assert_eq!(out["kind"], "mismatched_vector_length");
}

#[test]
fn test_delete_missing_entry_succeeds() {
    let db_path = setup_test_db("salary_delete");
    init_db_with_data(&db_path);

    let out = json_of(rpay().args(["--db", &db_path, "salary", "del", "999", "--employee", "1"]));
    assert_eq!(out["has_error"], false);
    assert_eq!(out["rows_affected"], 0);

    rpay()
        .args(salary_args(&db_path, "1", "salary", "10", "1"))
        .assert()
        .success();

    // wrong employee leaves the row alone
    let wrong = json_of(rpay().args(["--db", &db_path, "salary", "del", "1", "--employee", "2"]));
    assert_eq!(wrong["rows_affected"], 0);

    let right = json_of(rpay().args(["--db", &db_path, "salary", "del", "1", "--employee", "1"]));
    assert_eq!(right["rows_affected"], 1);
}

#[test]
fn test_update_unknown_entry_is_not_found() {
    let db_path = setup_test_db("salary_update_missing");
    init_db_with_data(&db_path);

    let mut args = salary_args(&db_path, "1", "salary", "10", "1");
    args[3] = "update";
    args.insert(4, "42");

    let out = json_of(rpay().args(&args));
    assert_eq!(out["kind"], "not_found");
}

#[test]
fn test_update_recomputes_and_skips_advance_rule_by_default() {
    let db_path = setup_test_db("salary_update");
    init_db_with_data(&db_path);

    rpay()
        .args(salary_args(&db_path, "1", "advance", "0", "0"))
        .assert()
        .success();

    let mut args = salary_args(&db_path, "2", "advance", "10,20", "1,1");
    args[3] = "update";
    args.insert(4, "1");

    let out = json_of(rpay().args(&args));
    assert_eq!(out["has_error"], false);
    assert_eq!(out["work_done"], 30);

    let got = json_of(rpay().args(["--db", &db_path, "salary", "get", "1"]));
    assert_eq!(got["salary_entry"]["employee_id"], 2);
    assert_eq!(got["salary_entry"]["work_done"], 30);
}

#[test]
fn test_update_honours_advance_toggle_from_config() {
    let db_path = setup_test_db("salary_update_toggle");
    init_db_with_data(&db_path);

    let home = std::env::temp_dir().join("rpayroll_toggle_home");
    let conf_dir = home.join(".rpayroll");
    fs::create_dir_all(&conf_dir).unwrap();
    fs::write(
        conf_dir.join("rpayroll.conf"),
        format!("database: {}\nadvance_check_on_update: true\n", db_path),
    )
    .unwrap();

    rpay()
        .args(salary_args(&db_path, "1", "advance", "0", "0"))
        .assert()
        .success();

    let mut args = salary_args(&db_path, "1", "advance", "10", "1");
    args[3] = "update";
    args.insert(4, "1");

    let out = json_of(rpay_with_home(&home).args(&args));
    assert_eq!(out["kind"], "invalid_advance_entry");
}

#[test]
fn test_list_filters_and_work_names() {
    let db_path = setup_test_db("salary_list");
    init_db_with_data(&db_path);

    rpay()
        .args(salary_args(&db_path, "1", "salary", "10,20", "1,1"))
        .assert()
        .success();
    rpay()
        .args(salary_args(&db_path, "2", "salary", "10", "5"))
        .assert()
        .success();

    let all = json_of(rpay().args(["--db", &db_path, "salary", "list"]));
    let entries = all["salary_entries"].as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["work_names"], serde_json::json!(["Seat fitting", "Roof panel"]));
    assert_eq!(entries[0]["bus_types"], serde_json::json!(["Sleeper", "Sleeper"]));

    let by_emp = json_of(rpay().args(["--db", &db_path, "salary", "list", "--employee", "2"]));
    assert_eq!(by_emp["salary_entries"].as_array().unwrap().len(), 1);

    let both = json_of(rpay().args([
        "--db", &db_path, "salary", "list", "--employee", "2", "--company", "Acme",
    ]));
    assert_eq!(both["salary_entries"][0]["work_done"], 50);

    let other = json_of(rpay().args(["--db", &db_path, "salary", "list", "--company", "Beta"]));
    assert!(other["salary_entries"].as_array().unwrap().is_empty());
}

#[test]
fn test_summary_for_company() {
    let db_path = setup_test_db("salary_summary");
    init_db_with_data(&db_path);

    let empty = json_of(rpay().args(["--db", &db_path, "summary", "--company", "Acme"]));
    assert!(empty["summary"].is_null());
    assert_eq!(empty["has_error"], false);

    rpay()
        .args(["--db", &db_path, "summary", "--company", "Acme"])
        .assert()
        .success()
        .stderr(contains("No data"));

    rpay()
        .args(salary_args(&db_path, "1", "salary", "10", "2"))
        .assert()
        .success();
    rpay()
        .args(salary_args(&db_path, "2", "salary", "10", "4"))
        .assert()
        .success();

    let summary = json_of(rpay().args(["--db", &db_path, "summary", "--company", "Acme"]));
    let s = &summary["summary"];
    assert_eq!(s["total_entries"], 2);
    assert_eq!(s["total_payment"], 1000);
    assert_eq!(s["average_payment"], 500.0);
    assert_eq!(s["total_work_done"], 60);
    assert_eq!(s["max_work_done"], 40);
    assert_eq!(s["min_work_done"], 20);
    assert_eq!(s["average_work_done"], 30.0);
}
