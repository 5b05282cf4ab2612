use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};
use tempfile::TempDir;

const BIN_NAME: &str = "spendcard";

fn spendcard(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("SPENDCARD_DATA_DIR", dir.path());
    cmd.env_remove("SPENDCARD_LOG");
    cmd
}

#[test]
fn cards_search_by_last_four() {
    let dir = TempDir::new().unwrap();
    spendcard(&dir)
        .args(["cards", "--search", "1234"])
        .assert()
        .success()
        .stdout(contains("Marketing ••1234").and(contains("Operations").not()));
}

#[test]
fn cards_use_configured_currency_and_dates() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{"currency_symbol": "$", "date_format": "%Y-%m-%d"}"#,
    )
    .unwrap();
    spendcard(&dir)
        .args(["cards", "--search", "1234", "--details"])
        .assert()
        .success()
        .stdout(contains("$5,000 per month").and(contains("€").not()));
}

#[test]
fn cards_json_is_parseable() {
    let dir = TempDir::new().unwrap();
    let output = spendcard(&dir)
        .args(["cards", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(value["count"].as_u64().unwrap() > 0);
}

#[test]
fn cards_csv_is_rejected() {
    let dir = TempDir::new().unwrap();
    spendcard(&dir)
        .args(["cards", "--format", "csv"])
        .assert()
        .failure()
        .stderr(contains("only available for transactions"));
}

#[test]
fn transactions_needs_review_filter() {
    let dir = TempDir::new().unwrap();
    spendcard(&dir)
        .args(["transactions", "--filter", "needs-review", "--format", "csv"])
        .assert()
        .success()
        .stdout(contains("merchant"));
}

#[test]
fn transactions_reject_unknown_filter() {
    let dir = TempDir::new().unwrap();
    spendcard(&dir)
        .args(["transactions", "--filter", "bogus"])
        .assert()
        .failure();
}

#[test]
fn dashboard_summary() {
    let dir = TempDir::new().unwrap();
    spendcard(&dir)
        .arg("dashboard")
        .assert()
        .success()
        .stdout(contains("Credit").and(contains("Accounts")));
}

#[test]
fn requests_empty_log() {
    let dir = TempDir::new().unwrap();
    spendcard(&dir)
        .arg("requests")
        .assert()
        .success()
        .stdout(contains("No card requests yet."));
}

#[test]
fn config_shows_data_dir() {
    let dir = TempDir::new().unwrap();
    spendcard(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(contains(dir.path().to_string_lossy().to_string()));
}
