mod common;

use common::{hd, orders_fixture};
use predicates::prelude::*;

#[test]
fn report_classifies_orders_per_store() {
    let fixture = orders_fixture("report_classify");

    hd().args(["report", &fixture, "--date", "2025-11-25", "--time", "11"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Report for 25-11-2025"))
        .stdout(predicate::str::contains("Kalyan Nagar_mnow"))
        // All eight configured stores appear even with no orders.
        .stdout(predicate::str::contains("Brookfield_mnow"))
        .stdout(predicate::str::contains("Total"));
}

#[test]
fn report_scales_projections_to_the_hour() {
    let fixture = orders_fixture("report_scale");

    // Tuesday 2025-11-25, 11-12 bucket = 28.46%.
    // Kalyan Nagar full day 457 -> projected 130 -> buffer 149.
    hd().args(["report", &fixture, "--date", "2025-11-25", "--time", "11"])
        .assert()
        .success()
        .stdout(predicate::str::contains("till 11-12"))
        .stdout(predicate::str::contains("457"))
        .stdout(predicate::str::contains("130"))
        .stdout(predicate::str::contains("149"));
}

#[test]
fn report_lists_deep_pain_orders_on_request() {
    let fixture = orders_fixture("report_deep");

    hd().args([
        "report",
        &fixture,
        "--date",
        "2025-11-25",
        "--time",
        "11",
        "--deep-pain",
    ])
    .assert()
    .success()
    // O-2 is delivered, breached yes, 20 min. O-5 breached only 10 min.
    .stdout(predicate::str::contains("O-2"))
    .stdout(predicate::str::contains("O-5").not());
}

#[test]
fn report_without_deep_pain_flag_hides_details() {
    let fixture = orders_fixture("report_nodeep");

    hd().args(["report", &fixture, "--date", "2025-11-25", "--time", "11"])
        .assert()
        .success()
        .stdout(predicate::str::contains("O-2").not());
}

#[test]
fn report_rejects_bad_date() {
    let fixture = orders_fixture("report_baddate");

    hd().args(["report", &fixture, "--date", "25-11-2025"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date format"));
}

#[test]
fn projection_shows_scaled_volumes_without_a_sheet() {
    hd().args(["projection", "--date", "2025-11-25", "--time", "11"])
        .assert()
        .success()
        .stdout(predicate::str::contains("11-12"))
        .stdout(predicate::str::contains("457"))
        .stdout(predicate::str::contains("130"))
        .stdout(predicate::str::contains("3553"));
}

#[test]
fn projection_falls_back_to_latest_earlier_date() {
    hd().args(["projection", "--date", "2025-12-01", "--time", "11"])
        .assert()
        .success()
        .stdout(predicate::str::contains("using 11/30/2025"));
}
