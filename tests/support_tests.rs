use rpayroll::config::check::{fill_missing_keys, missing_keys};
use rpayroll::utils::formatting::amount;
use rpayroll::utils::table::Table;
use rpayroll::utils::time::{created_at_stamp, parse_utc_offset};
use std::env;
use std::fs;

mod common;
use common::{json_of, rpay_with_home};

#[test]
fn utc_offsets_parse() {
    assert_eq!(parse_utc_offset("+05:30").unwrap().local_minus_utc(), 19800);
    assert_eq!(parse_utc_offset("-0300").unwrap().local_minus_utc(), -10800);
    assert_eq!(parse_utc_offset("Z").unwrap().local_minus_utc(), 0);
    assert!(parse_utc_offset("05:30").is_none());
    assert!(parse_utc_offset("+ab:cd").is_none());
    assert_eq!(parse_utc_offset("UTC").unwrap().local_minus_utc(), 0);
}

#[test]
fn created_at_has_zero_seconds() {
    let stamp = created_at_stamp(&parse_utc_offset("+05:30").unwrap());
    assert_eq!(stamp.len(), 19);
    assert!(stamp.ends_with(":00"));
}

#[test]
fn config_check_fills_missing_keys() {
    let path = env::temp_dir().join("rpayroll_check_test.conf");
    fs::write(&path, "database: /tmp/x.sqlite\nutc_offset: \"+01:00\"\n").unwrap();

    let added = fill_missing_keys(&path).unwrap();
    assert_eq!(
        added,
        vec!["advance_check_on_insert", "advance_check_on_update", "separator_char"]
    );

    let yaml: serde_yaml::Value = serde_yaml::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let map = yaml.as_mapping().unwrap();
    assert!(missing_keys(map).is_empty());
    assert_eq!(map.get("utc_offset").unwrap().as_str(), Some("+01:00"));

    // second pass leaves the file alone
    assert!(fill_missing_keys(&path).unwrap().is_empty());
}

#[test]
fn amounts_get_thousands_separators() {
    assert_eq!(amount(0), "0");
    assert_eq!(amount(999), "999");
    assert_eq!(amount(1000), "1,000");
    assert_eq!(amount(-1234567), "-1,234,567");
}

#[test]
fn table_aligns_on_display_width() {
    let mut t = Table::new(&["ID", "NAME"]);
    t.add_row(vec!["1".into(), "Ravi".into()]);
    t.add_row(vec!["10".into(), "Zoë".into()]);

    let rendered = t.render('=');
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines[0], "ID | NAME");
    assert_eq!(lines[1], "=========");
    assert_eq!(lines[2], "1  | Ravi");
    assert_eq!(lines[3], "10 | Zoë");
}

#[test]
fn config_check_repairs_file_without_database_key() {
    let home = env::temp_dir().join("rpayroll_check_home");
    let conf_dir = home.join(".rpayroll");
    fs::create_dir_all(&conf_dir).unwrap();
    let conf = conf_dir.join("rpayroll.conf");
    fs::write(&conf, "utc_offset: \"+01:00\"\n").unwrap();

    let report = json_of(rpay_with_home(&home).args(["config", "--check"]));
    assert_eq!(report["has_error"], false);
    let added: Vec<&str> = report["added_keys"]
        .as_array()
        .unwrap()
        .iter()
        .map(|k| k.as_str().unwrap())
        .collect();
    assert!(added.contains(&"database"));

    let yaml: serde_yaml::Value = serde_yaml::from_str(&fs::read_to_string(&conf).unwrap()).unwrap();
    let map = yaml.as_mapping().unwrap();
    assert!(missing_keys(map).is_empty());
    assert_eq!(map.get("utc_offset").unwrap().as_str(), Some("+01:00"));

    // the repaired file loads for every other command too
    rpay_with_home(&home).args(["config", "--print"]).assert().success();
}
