mod common;
use common::{records_with_week, setup_records, trt};
use predicates::str::contains;
use std::fs;

#[test]
fn test_init_creates_empty_store() {
    let records = setup_records("init_store");

    trt("init_store")
        .args(["--records", &records, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    assert_eq!(fs::read_to_string(&records).expect("read store").trim(), "[]");
}

#[test]
fn test_add_then_show_exact_day() {
    let records = setup_records("add_show");

    trt("add_show")
        .args([
            "--records", &records, "add", "2020.03.09.", "--from", "09:00", "--to", "17:20",
            "--break", "00:20",
        ])
        .assert()
        .success()
        .stdout(contains("+00:00"))
        .stdout(contains("08:20"));

    trt("add_show")
        .args(["--records", &records, "show", "2020-03-09"])
        .assert()
        .success()
        .stdout(contains("17:20"))
        .stdout(contains("Monday"))
        .stdout(contains("+00:00"));
}

#[test]
fn test_add_replaces_same_date() {
    let records = setup_records("add_replace");
    common::add("add_replace", &records, "2020.03.10.", "09:00", "17:00", "00:00");
    common::add("add_replace", &records, "2020.03.10.", "09:30", "17:10", "00:00");

    let content = fs::read_to_string(&records).expect("read store");
    assert_eq!(content.matches("2020.03.10.").count(), 1);
    assert!(content.contains("09:30"));

    trt("add_replace")
        .args(["--records", &records, "show", "2020.03.10."])
        .assert()
        .success()
        .stdout(contains("-00:20"));
}

#[test]
fn test_add_rejects_reversed_times() {
    let records = setup_records("add_reversed");

    trt("add_reversed")
        .args([
            "--records", &records, "add", "2020.03.10.", "--from", "17:00", "--to", "09:00",
        ])
        .assert()
        .failure()
        .stderr(contains("precedes arrival"));

    let content = fs::read_to_string(&records).unwrap_or_default();
    assert!(!content.contains("2020.03.10."));
}

#[test]
fn test_add_rejects_malformed_time() {
    let records = setup_records("add_malformed");

    trt("add_malformed")
        .args([
            "--records", &records, "add", "2020.03.10.", "--from", "9:00", "--to", "17:00",
        ])
        .assert()
        .failure()
        .stderr(contains("❌"))
        .stderr(contains("Error: Invalid time format"));
}

#[test]
fn test_show_day_without_record() {
    let records = setup_records("show_empty");

    trt("show_empty")
        .args(["--records", &records, "show", "2020.03.08."])
        .assert()
        .success()
        .stdout(contains("No working time recorded"));
}

#[test]
fn test_list_week() {
    let records = records_with_week("list_week");

    trt("list_week")
        .args([
            "--records", &records, "list", "--from", "2020.03.02.", "--to", "2020.03.08.",
        ])
        .assert()
        .success()
        .stdout(contains("2020.03.02."))
        .stdout(contains("2020.03.08."))
        .stdout(contains("+00:30"))
        .stdout(contains("-06:00"))
        .stdout(contains("--:--"));
}

#[test]
fn test_list_rejects_reversed_range() {
    let records = setup_records("list_reversed");

    trt("list_reversed")
        .args([
            "--records", &records, "list", "--from", "2020.03.08.", "--to", "2020.03.02.",
        ])
        .assert()
        .failure()
        .stderr(contains("precedes start date"));
}

#[test]
fn test_list_flags_bad_stored_record() {
    let records = setup_records("list_flagged");
    fs::write(
        &records,
        r#"[{"date":"2020.03.02.","from":"17:00","to":"09:00","break":"00:00"},
            {"date":"2020.03.03.","from":"08:00","to":"16:00"}]"#,
    )
    .expect("write store");

    trt("list_flagged")
        .args([
            "--records", &records, "list", "--from", "2020.03.02.", "--to", "2020.03.03.",
        ])
        .assert()
        .success()
        .stdout(contains("2020.03.02. ignored"))
        .stdout(contains("+00:00"));
}

#[test]
fn test_user_update_in_test_mode() {
    trt("user_update")
        .args(["--test", "user", "--name", "Jane Doe", "--department", "R&D"])
        .assert()
        .success()
        .stdout(contains("Jane Doe"))
        .stdout(contains("R&D"));
}

#[test]
fn test_config_print_shows_sections() {
    trt("config_print")
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("records_file"))
        .stdout(contains("time_elements"));
}
