mod common;
use common::{records_with_week, setup_records, temp_out, trt};
use predicates::str::contains;
use std::fs;

fn json_stdout(name: &str, args: &[&str]) -> serde_json::Value {
    let out = trt(name).args(args).output().expect("run timereport");
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    serde_json::from_slice(&out.stdout).expect("stdout is JSON")
}

#[test]
fn test_metrics_week_json() {
    let records = records_with_week("metrics_week");
    let m = json_stdout(
        "metrics_week",
        &[
            "--records", &records, "metrics", "--from", "2020.03.02.", "--to", "2020.03.08.",
            "--json",
        ],
    );

    assert_eq!(m["all_days"], 7);
    assert_eq!(m["weekend_days"], 2);
    assert_eq!(m["week_days"], 5);
    assert_eq!(m["worked_days"], 4);
    assert_eq!(m["missing_days"], 1);
    assert_eq!(m["required_minutes"], 2400);
    assert_eq!(m["break_minutes"], 60);
    assert_eq!(m["overtime_plus_minutes"], 30);
    assert_eq!(m["overtime_minus_minutes"], -380);
    assert_eq!(m["overtime_overall_minutes"], -350);
}

#[test]
fn test_metrics_table() {
    let records = records_with_week("metrics_table");

    trt("metrics_table")
        .args([
            "--records", &records, "metrics", "--from", "2020.03.02.", "--to", "2020.03.08.",
        ])
        .assert()
        .success()
        .stdout(contains("Required working hours"))
        .stdout(contains("40:00"))
        .stdout(contains("-05:50"));
}

#[test]
fn test_metrics_range_limit() {
    let records = setup_records("metrics_limit");

    trt("metrics_limit")
        .args([
            "--records", &records, "metrics", "--from", "2020.03.01.", "--to", "2020.03.31.",
        ])
        .assert()
        .success();

    trt("metrics_limit")
        .args([
            "--records", &records, "metrics", "--from", "2020.03.01.", "--to", "2020.04.01.",
        ])
        .assert()
        .failure()
        .stderr(contains("Too many dates: 32 requested, maximum is 31"));
}

#[test]
fn test_metrics_month_period_is_within_limit() {
    let records = setup_records("metrics_period");

    trt("metrics_period")
        .args(["--records", &records, "metrics", "--period", "2020-02"])
        .assert()
        .success()
        .stdout(contains("29"));
}

#[test]
fn test_chart_json_plan() {
    let records = records_with_week("chart_json");
    let plan = json_stdout(
        "chart_json",
        &[
            "--records", &records, "chart", "--from", "2020.03.02.", "--to", "2020.03.08.",
            "--json",
        ],
    );

    assert_eq!(plan["window"]["start_offset"], 300);
    assert_eq!(plan["window"]["stop_offset"], 1200);
    assert_eq!(plan["lanes"].as_array().map(|l| l.len()), Some(7));
    assert_eq!(plan["lanes"][0]["y"], 2);
    assert_eq!(plan["lanes"][1]["y"], 5);
    assert_eq!(plan["overtime"]["label"], "-05:50");
    assert_eq!(plan["overtime"]["role"], "overtime_minus");

    let prims = plan["primitives"].as_array().expect("primitives");
    let bands = prims.iter().filter(|p| p["kind"] == "band").count();
    assert_eq!(bands, 2);
    assert!(prims
        .iter()
        .any(|p| p["kind"] == "text" && p["text"] == "+00:30" && p["field"] == "plus_time"));
}

#[test]
fn test_chart_terminal_render() {
    let records = records_with_week("chart_term");

    trt("chart_term")
        .args([
            "--records", &records, "chart", "--from", "2020.03.02.", "--to", "2020.03.04.",
            "--no-color",
        ])
        .assert()
        .success()
        .stdout(contains("Dates"))
        .stdout(contains("05:00"))
        .stdout(contains("2020.03.03."))
        .stdout(contains("█"))
        .stdout(contains("Overtime"));
}

#[test]
fn test_chart_rejects_too_many_dates() {
    let records = setup_records("chart_limit");

    trt("chart_limit")
        .args([
            "--records", &records, "chart", "--from", "2020.01.01.", "--to", "2020.03.01.",
        ])
        .assert()
        .failure()
        .stderr(contains("Too many dates"));
}

#[test]
fn test_axis_print_lists_ticks() {
    trt("axis_print")
        .args(["axis", "--rebuild", "--print"])
        .assert()
        .success()
        .stdout(contains("Axis cache rewritten"))
        .stdout(contains("05:00"))
        .stdout(contains("18:20"));
}

#[test]
fn test_export_long_range_with_sentinels() {
    let records = records_with_week("export_long");
    let out = temp_out("export_long", "json");

    trt("export_long")
        .args([
            "--records", &records, "export", "--from", "2020.03.01.", "--to", "2020.04.30.",
            "--file", &out,
        ])
        .assert()
        .success()
        .stdout(contains("61 day(s)"));

    let rows: Vec<serde_json::Value> =
        serde_json::from_str(&fs::read_to_string(&out).expect("read export")).expect("json");
    assert_eq!(rows.len(), 61);
    assert_eq!(rows[0]["date"], "2020.03.01.");
    assert_eq!(rows[0]["arriving"], "00:00");
    assert_eq!(rows[1]["arriving"], "08:00");
    assert_eq!(rows[1]["break"], "00:30");
}

#[test]
fn test_export_existing_file_needs_force() {
    let records = records_with_week("export_force");
    let out = temp_out("export_force", "json");
    fs::write(&out, "keep").expect("seed file");

    trt("export_force")
        .args([
            "--records", &records, "export", "--from", "2020.03.02.", "--to", "2020.03.03.",
            "--file", &out,
        ])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("not overwritten"));
    assert_eq!(fs::read_to_string(&out).expect("read"), "keep");

    trt("export_force")
        .args([
            "--records", &records, "export", "--from", "2020.03.02.", "--to", "2020.03.03.",
            "--file", &out, "--force",
        ])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).expect("read").contains("2020.03.03."));
}
