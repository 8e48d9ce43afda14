mod common;

use common::{attendance_fixture, hd};
use predicates::prelude::*;

#[test]
fn attendance_aggregates_duplicates_into_one_row() {
    let fixture = attendance_fixture("agg_dupes");

    hd().args(["attendance", &fixture])
        .assert()
        .success()
        // Amit's two rows collapse: earliest in 08:45, latest out 17:30.
        .stdout(predicate::str::contains("08:45:00"))
        .stdout(predicate::str::contains("17:30:00"))
        .stdout(predicate::str::contains("08:45:00").count(1));
}

#[test]
fn attendance_drops_hubs_outside_the_allow_list() {
    let fixture = attendance_fixture("agg_allowlist");

    hd().args(["attendance", &fixture])
        .assert()
        .success()
        .stdout(predicate::str::contains("Somewhere Else").not())
        .stdout(predicate::str::contains("Zed").not())
        .stdout(predicate::str::contains("2 worker-day record(s)"));
}

#[test]
fn attendance_computes_working_time() {
    let fixture = attendance_fixture("agg_hours");

    hd().args(["attendance", &fixture])
        .assert()
        .success()
        // Amit 08:45 -> 17:30 and Ravi 10:00 -> 18:00.
        .stdout(predicate::str::contains("08:45"))
        .stdout(predicate::str::contains("08:00"));
}

#[test]
fn attendance_filter_narrows_output() {
    let fixture = attendance_fixture("agg_filter");

    hd().args(["attendance", &fixture, "--filter", "ravi"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ravi"))
        .stdout(predicate::str::contains("Amit").not())
        .stdout(predicate::str::contains("1 worker-day record(s)"));
}

#[test]
fn attendance_rejects_unknown_extensions() {
    hd().args(["attendance", "/tmp/not_a_sheet.pdf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported file format"));
}

#[test]
fn attendance_warns_on_no_matches() {
    let fixture = attendance_fixture("agg_nomatch");

    hd().args(["attendance", &fixture, "--filter", "nobody-here"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No records matched"));
}
