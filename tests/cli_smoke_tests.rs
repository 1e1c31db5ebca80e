use assert_cmd::Command;
use assert_fs::prelude::*;
use predicates::prelude::*;

const SNAPSHOT: &str = r#"[
  {"id": "s-1", "name": "Spring Launch", "category": "influencer",
   "start_date": "2024-03-05", "end_date": "2024-03-08",
   "budget": 10000, "reach": 1200000, "tags": ["instagram"]},
  {"id": "s-2", "name": "Newsletter", "category": "email",
   "start_date": "2024-03-05", "budget": 25000, "reach": 40000},
  {"id": "s-3", "name": "Summer teaser"},
  {"id": "bad", "name": "Reversed", "start_date": "2024-03-10", "end_date": "2024-03-01"}
]"#;

struct Workspace {
    temp: assert_fs::TempDir,
}

impl Workspace {
    fn new() -> Self {
        let temp = assert_fs::TempDir::new().unwrap();
        temp.child("items.json").write_str(SNAPSHOT).unwrap();
        Self { temp }
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("campaign_calendar_cli").unwrap();
        cmd.env("NO_COLOR", "1")
            .env("CAMPAIGN_CALENDAR_HOME", self.temp.path())
            .arg("--plain")
            .arg("--snapshot")
            .arg(self.temp.child("items.json").path());
        cmd
    }
}

#[test]
fn version_prints_build_summary() {
    Command::cargo_bin("campaign_calendar_cli")
        .unwrap()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("campaign_calendar"));
}

#[test]
fn grid_lists_month_and_problem_items() {
    let ws = Workspace::new();
    ws.cmd()
        .args(["grid", "--year", "2024", "--month", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== March 2024 ==="))
        .stdout(predicate::str::contains("5 [2]"))
        .stdout(predicate::str::contains("Unscheduled (1):"))
        .stdout(predicate::str::contains("WARNING: skipped record bad"))
        .stdout(predicate::str::contains("3 item(s) loaded"));
}

#[test]
fn monday_grid_starts_with_monday_header() {
    let ws = Workspace::new();
    ws.cmd()
        .args(["grid", "--year", "2024", "--month", "3", "--week-start", "monday"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"(?m)^\s+Mon\s+Tue").unwrap());
}

#[test]
fn totals_sum_the_start_month() {
    let ws = Workspace::new();
    ws.cmd()
        .args(["totals", "--year", "2024", "--month", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$350.00"))
        .stdout(predicate::str::contains("2 item(s) starting this month, 1 unscheduled"));
}

#[test]
fn filter_warns_on_unparseable_threshold() {
    let ws = Workspace::new();
    ws.cmd()
        .args(["--quiet", "filter", "--min-reach", "lots"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 item(s)"))
        .stdout(predicate::str::contains("could not read threshold `lots`"))
        .stdout(predicate::str::contains("loaded").not());
}

#[test]
fn filter_by_reach() {
    let ws = Workspace::new();
    ws.cmd()
        .args(["filter", "--min-reach", "1M"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Spring Launch"))
        .stdout(predicate::str::contains("Newsletter").not())
        .stdout(predicate::str::contains("1 item(s)"));
}

#[test]
fn missing_snapshot_fails() {
    let temp = assert_fs::TempDir::new().unwrap();
    Command::cargo_bin("campaign_calendar_cli")
        .unwrap()
        .env("NO_COLOR", "1")
        .env("CAMPAIGN_CALENDAR_HOME", temp.path())
        .args(["--plain", "totals", "--year", "2024", "--month", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no snapshot file given"));
}

#[test]
fn out_of_range_month_fails() {
    let ws = Workspace::new();
    ws.cmd()
        .args(["totals", "--year", "2024", "--month", "13"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("month 13 is out of range"));
}

#[test]
fn out_of_range_year_fails_without_panicking() {
    let ws = Workspace::new();
    ws.cmd()
        .args(["grid", "--year", "262142", "--month", "12"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("year 262142 is outside the supported range"));
}
