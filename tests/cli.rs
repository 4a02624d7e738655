use assert_cmd::Command;
use predicates::prelude::*;

/// Each test gets its own HOME so settings and the database are isolated.
fn kirana(home: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("kirana").unwrap();
    cmd.env("HOME", home.path());
    cmd
}

fn init(home: &tempfile::TempDir) {
    let data_dir = home.path().join("shop");
    kirana(home)
        .args(["init", "--data-dir", data_dir.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized kirana"));
}

#[test]
fn test_catalog_lists_products() {
    let home = tempfile::tempdir().unwrap();
    kirana(&home)
        .arg("catalog")
        .assert()
        .success()
        .stdout(predicate::str::contains("apple"))
        .stdout(predicate::str::contains("carrot"))
        .stdout(predicate::str::contains("milk"));
}

#[test]
fn test_sell_renders_taxed_bill() {
    let home = tempfile::tempdir().unwrap();
    init(&home);
    kirana(&home)
        .args(["sell", "--date", "2024-01-01", "apple=3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("₹300.00"))
        .stdout(predicate::str::contains("₹27.00"))
        .stdout(predicate::str::contains("₹354.00"))
        .stdout(predicate::str::contains("Bill ID:"));
}

#[test]
fn test_sell_unknown_product_fails() {
    let home = tempfile::tempdir().unwrap();
    init(&home);
    kirana(&home)
        .args(["sell", "--date", "2024-01-01", "kiwi=2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown product: kiwi"));
}

#[test]
fn test_sell_all_zero_quantities_bills_nothing() {
    let home = tempfile::tempdir().unwrap();
    init(&home);
    kirana(&home)
        .args(["sell", "--date", "2024-01-01", "apple=0", "milk=0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions for 2024-01-01."));
}

#[test]
fn test_sell_rejects_bad_date() {
    let home = tempfile::tempdir().unwrap();
    init(&home);
    kirana(&home)
        .args(["sell", "--date", "01/01/2024", "apple=1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid date"));
}

#[test]
fn test_report_summary_aggregates_bills() {
    let home = tempfile::tempdir().unwrap();
    init(&home);
    kirana(&home)
        .args(["sell", "--date", "2024-01-01", "apple=3"])
        .assert()
        .success();
    kirana(&home)
        .args(["sell", "--date", "2024-01-02", "milk=2", "carrot=5"])
        .assert()
        .success();

    kirana(&home)
        .args(["report", "summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Sales:         10"))
        .stdout(predicate::str::contains("₹498.00"))
        .stdout(predicate::str::contains("Products Sold:       3"))
        .stdout(predicate::str::contains("Sales over Time"));
}

#[test]
fn test_report_summary_without_data() {
    let home = tempfile::tempdir().unwrap();
    init(&home);
    kirana(&home)
        .args(["report", "summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No sales data to visualize."));
}

#[test]
fn test_report_product_drilldown() {
    let home = tempfile::tempdir().unwrap();
    init(&home);
    kirana(&home)
        .args(["sell", "--date", "2024-01-01", "apple=3", "milk=1"])
        .assert()
        .success();

    kirana(&home)
        .args(["report", "product", "apple"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Report for apple"))
        .stdout(predicate::str::contains("Total Sales Count:   3"))
        .stdout(predicate::str::contains("₹300.00"));
}

#[test]
fn test_report_product_never_billed() {
    let home = tempfile::tempdir().unwrap();
    init(&home);
    kirana(&home)
        .args(["report", "product", "butter"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No sales recorded for butter."));
}
