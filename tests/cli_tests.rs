use invscan::config::Config;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;
use std::path::Path;

mod common;
use common::{Backend, UNREACHABLE, inv, inv_in, temp_home};

fn saved_config(home: &Path) -> Config {
    let conf = fs::read_to_string(home.join(".invscan").join("invscan.conf")).expect("config file");
    serde_yaml::from_str(&conf).expect("valid config yaml")
}

#[test]
fn test_help_lists_commands() {
    inv()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("scan"))
        .stdout(contains("lookup"))
        .stdout(contains("--server"));
}

#[test]
fn test_init_test_mode_writes_nothing() {
    let home = temp_home();

    inv_in(&home)
        .args(["--test", "--server", "http://h:1/", "init"])
        .assert()
        .success()
        .stdout(contains("http://h:1"))
        .stdout(contains("http://h:1/").not());

    assert!(!home.path().join(".invscan").join("invscan.conf").exists());
}

#[test]
fn test_init_creates_config_file() {
    let home = temp_home();

    inv_in(&home)
        .args(["--server", "http://10.0.0.7:5000", "init"])
        .assert()
        .success();

    let cfg = saved_config(home.path());
    assert_eq!(cfg.server_url, "http://10.0.0.7:5000");
    assert_eq!(cfg.default_amount, "1");
    assert_eq!(cfg.request_timeout_secs, 10);
}

#[test]
fn test_config_print_shows_defaults() {
    let home = temp_home();

    inv_in(&home)
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("server_url:"))
        .stdout(contains("bell: true"));
}

#[test]
fn test_set_server_is_saved_normalized_and_checked() {
    let home = temp_home();
    let backend = Backend::start();

    inv_in(&home)
        .args(["config", "--set-server", &format!("  {}/ ", backend.base_url)])
        .assert()
        .success()
        .stdout(contains("Server: OK"));

    assert_eq!(saved_config(home.path()).server_url, backend.base_url);

    // the saved URL is used without --server
    inv_in(&home).arg("health").assert().success();
}

#[test]
fn test_set_server_rejects_empty_url() {
    let home = temp_home();

    inv_in(&home)
        .args(["config", "--set-server", "   "])
        .assert()
        .failure()
        .stderr(contains("Invalid server URL"));

    assert!(!home.path().join(".invscan").join("invscan.conf").exists());
}

#[test]
fn test_health_off_exits_with_error() {
    let home = temp_home();

    inv_in(&home)
        .args(["--server", UNREACHABLE, "health"])
        .assert()
        .failure()
        .stdout(contains("Server: OFF"));
}

#[test]
fn test_lookup_prints_product() {
    let home = temp_home();
    let backend = Backend::start();

    inv_in(&home)
        .args(["--server", &backend.base_url, "lookup", "123"])
        .assert()
        .success()
        .stdout(contains("Blue Widget"))
        .stdout(contains("BW-1"));

    inv_in(&home)
        .args(["--server", &backend.base_url, "lookup", "000"])
        .assert()
        .failure()
        .stderr(contains("No product found for 000"));
}

#[test]
fn test_add_reports_quantity_after() {
    let home = temp_home();
    let backend = Backend::start();

    inv_in(&home)
        .args(["--server", &backend.base_url, "add", "123"])
        .assert()
        .success()
        .stdout(contains("Added 1"))
        .stdout(contains("Qty after:").and(contains("5")));

    inv_in(&home)
        .args([
            "--server",
            &backend.base_url,
            "remove",
            "456",
            "--amount",
            "2",
            "--note",
            "cycle count",
        ])
        .assert()
        .success()
        .stdout(contains("Removed 2"));

    let sent = backend.adjustments();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0]["delta"], 1);
    assert_eq!(sent[1]["delta"], -2);
    assert_eq!(sent[1]["note"], "cycle count");
}

#[test]
fn test_add_rejects_bad_amount_without_network() {
    let home = temp_home();
    let backend = Backend::start();

    for bad in ["0", "abc"] {
        inv_in(&home)
            .args(["--server", &backend.base_url, "add", "123", "--amount", bad])
            .assert()
            .failure()
            .stderr(contains("Enter a positive amount"));
    }
    assert!(backend.adjustments().is_empty());
}

#[test]
fn test_add_shows_server_error() {
    let home = temp_home();
    let backend = Backend::start();

    inv_in(&home)
        .args(["--server", &backend.base_url, "add", "missing"])
        .assert()
        .failure()
        .stderr(contains("Unknown barcode"));
}

#[test]
fn test_scan_session_from_stdin() {
    let home = temp_home();
    let backend = Backend::start();

    inv_in(&home)
        .args(["--server", &backend.base_url, "scan", "--no-bell"])
        .write_stdin("{\"type\":\"ean13\",\"data\":\"123\"}\n123\n:+\n:quit\n")
        .assert()
        .success()
        .stdout(contains("Server: OK"))
        .stdout(contains("Scanned: 123"))
        .stdout(contains("ean13"))
        .stdout(contains("Success: Added 1"))
        .stdout(contains("1 scan(s) accepted, 1 update(s) applied"));

    assert_eq!(backend.adjustments().len(), 1);
}

#[test]
fn test_scan_session_treats_signed_label_as_scan() {
    let home = temp_home();
    let backend = Backend::start();

    inv_in(&home)
        .args(["--server", &backend.base_url, "scan", "--no-bell"])
        .write_stdin("-100\n")
        .assert()
        .success()
        .stdout(contains("Scanned: -100"))
        .stdout(contains("1 scan(s) accepted, 0 update(s) applied"));

    assert!(backend.adjustments().is_empty());
}
