//! End-to-end tests for the gastos binary
//!
//! Each test gets its own data directory through GASTOS_DIR.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn gastos(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("gastos").unwrap();
    cmd.env("GASTOS_DIR", dir.path())
        .env("NO_COLOR", "1")
        .env_remove("GASTOS_PASSWORD")
        .env_remove("GASTOS_LOG")
        .env_remove("GASTOS_STRICT_CATEGORIES");
    cmd
}

fn register_and_login(dir: &TempDir, user: &str, password: &str) {
    gastos(dir)
        .args(["register", user, "--password", password])
        .assert()
        .success();
    gastos(dir)
        .args(["login", user, "--password", password])
        .assert()
        .success();
}

#[test]
fn test_alice_scenario() {
    let dir = TempDir::new().unwrap();

    gastos(&dir)
        .args(["register", "alice", "--password", "pw1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("registered"));

    gastos(&dir)
        .args(["register", "alice", "--password", "pw2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    gastos(&dir)
        .args(["login", "alice", "--password", "pw2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid username or password"));

    gastos(&dir)
        .args(["login", "alice", "--password", "pw1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome, alice"));

    gastos(&dir)
        .args(["add", "coffee", "3.50", "--category", "Comida"])
        .assert()
        .success();

    gastos(&dir)
        .arg("total")
        .assert()
        .success()
        .stdout(predicate::str::contains("$3.50"));

    gastos(&dir)
        .args(["remove", "0", "--force"])
        .assert()
        .success();

    gastos(&dir)
        .arg("total")
        .assert()
        .success()
        .stdout(predicate::str::contains("$0.00"));

    let output = gastos(&dir).args(["list", "--json"]).output().unwrap();
    assert!(output.status.success());
    let entries: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(entries, serde_json::json!([]));
}

#[test]
fn test_ledger_commands_require_login() {
    let dir = TempDir::new().unwrap();

    gastos(&dir)
        .args(["add", "coffee", "3.50"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not logged in"));

    gastos(&dir)
        .arg("whoami")
        .assert()
        .failure();
}

#[test]
fn test_logout_ends_session() {
    let dir = TempDir::new().unwrap();
    register_and_login(&dir, "alice", "pw1");

    gastos(&dir)
        .arg("whoami")
        .assert()
        .success()
        .stdout("alice\n");

    gastos(&dir).arg("logout").assert().success();

    gastos(&dir)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not logged in"));
}

#[test]
fn test_invalid_amounts_are_rejected() {
    let dir = TempDir::new().unwrap();
    register_and_login(&dir, "alice", "pw1");

    for amount in ["0", "abc", "0.00"] {
        gastos(&dir)
            .args(["add", "nada", amount])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid amount"));
    }

    gastos(&dir)
        .arg("total")
        .assert()
        .success()
        .stdout(predicate::str::contains("$0.00"));
}

#[test]
fn test_list_filter_and_categories() {
    let dir = TempDir::new().unwrap();
    register_and_login(&dir, "alice", "pw1");

    for (desc, amount, category) in [
        ("pan", "1.25", "Comida"),
        ("cine", "8", "Otros"),
        ("leche", "2.00", "Comida"),
    ] {
        gastos(&dir)
            .args(["add", desc, amount, "--category", category])
            .assert()
            .success();
    }

    let output = gastos(&dir).args(["categories", "--json"]).output().unwrap();
    let categories: Vec<String> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(categories, ["Comida", "Otros"]);

    let output = gastos(&dir)
        .args(["list", "--category", "Comida", "--json"])
        .output()
        .unwrap();
    let entries: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(entries.as_array().unwrap().len(), 2);
    assert_eq!(entries[1]["index"], 2);
    assert_eq!(entries[1]["descripcion"], "leche");

    gastos(&dir)
        .args(["total", "--category", "Comida"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$3.25"));

    gastos(&dir)
        .arg("total")
        .assert()
        .success()
        .stdout(predicate::str::contains("$11.25"));
}

#[test]
fn test_remove_out_of_range_is_a_noop() {
    let dir = TempDir::new().unwrap();
    register_and_login(&dir, "alice", "pw1");
    gastos(&dir).args(["add", "pan", "1"]).assert().success();

    gastos(&dir)
        .args(["remove", "5", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expense at index 5"));

    gastos(&dir)
        .arg("total")
        .assert()
        .success()
        .stdout(predicate::str::contains("$1.00"));
}

#[test]
fn test_remove_without_terminal_needs_force() {
    let dir = TempDir::new().unwrap();
    register_and_login(&dir, "alice", "pw1");
    gastos(&dir).args(["add", "pan", "1"]).assert().success();

    gastos(&dir)
        .args(["remove", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));
}

#[test]
fn test_password_from_stdin() {
    let dir = TempDir::new().unwrap();

    gastos(&dir)
        .args(["register", "bob"])
        .write_stdin("s3cret\n")
        .assert()
        .success();

    gastos(&dir)
        .args(["login", "bob"])
        .write_stdin("s3cret\n")
        .assert()
        .success();

    gastos(&dir)
        .args(["login", "bob", "--password", "S3CRET"])
        .assert()
        .failure();
}

#[test]
fn test_export_csv() {
    let dir = TempDir::new().unwrap();
    register_and_login(&dir, "alice", "pw1");
    gastos(&dir)
        .args(["add", "coffee", "3.50", "--category", "Comida"])
        .assert()
        .success();

    gastos(&dir)
        .args(["export", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("fecha,descripcion,categoria,monto"))
        .stdout(predicate::str::contains(",coffee,Comida,3.5"));

    let out = dir.path().join("export.json");
    gastos(&dir)
        .args(["export", "--format", "json", "--output"])
        .arg(&out)
        .assert()
        .success();
    let exported: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(exported[0]["monto"], 3.5);
}

#[test]
fn test_stats_json() {
    let dir = TempDir::new().unwrap();
    register_and_login(&dir, "alice", "pw1");
    gastos(&dir).args(["add", "pan", "1.50", "-c", "Comida"]).assert().success();
    gastos(&dir).args(["add", "bus", "2", "-c", "Transporte"]).assert().success();

    let output = gastos(&dir).args(["stats", "--json"]).output().unwrap();
    let stats: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(stats["username"], "alice");
    assert_eq!(stats["count"], 2);
    assert_eq!(stats["total"], 3.5);
    assert_eq!(stats["categories"], serde_json::json!(["Comida", "Transporte"]));
}

#[test]
fn test_oversized_amount_is_rejected_and_ledger_stays_usable() {
    let dir = TempDir::new().unwrap();
    register_and_login(&dir, "alice", "pw1");
    gastos(&dir).args(["add", "pan", "1"]).assert().success();

    for amount in ["79228162514264337593543950335", "0.12345678901234567891"] {
        gastos(&dir)
            .args(["add", "x", amount])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid amount"))
            .stderr(predicate::str::contains("GASTOS_LOG").not());
    }

    gastos(&dir)
        .arg("total")
        .assert()
        .success()
        .stdout(predicate::str::contains("$1.00"));
}

#[test]
fn test_storage_failures_point_at_debug_logging() {
    let dir = TempDir::new().unwrap();
    register_and_login(&dir, "alice", "pw1");

    let ledgers = dir.path().join("ledgers");
    std::fs::create_dir_all(&ledgers).unwrap();
    std::fs::write(ledgers.join(gastos_core::adapters::storage_key("alice")), "{broken").unwrap();

    gastos(&dir)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Corrupt store"))
        .stderr(predicate::str::contains("GASTOS_LOG=debug"));
}

#[test]
fn test_config_changes_are_saved() {
    let dir = TempDir::new().unwrap();

    let output = gastos(&dir)
        .args(["config", "--currency", "€", "--add-category", "Casa", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let settings: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(settings["currencySymbol"], "€");
    assert_eq!(settings["categories"][5], "Casa");

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(dir.path().join("settings.json")).unwrap()).unwrap();
    assert_eq!(raw["app"]["currencySymbol"], "€");

    register_and_login(&dir, "alice", "pw1");
    gastos(&dir).args(["add", "alquiler", "500"]).assert().success();
    gastos(&dir)
        .args(["list", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"categoria\": \"Casa\""));
    gastos(&dir)
        .arg("total")
        .assert()
        .success()
        .stdout(predicate::str::contains("€500.00"));

    gastos(&dir).args(["config", "--strict", "true"]).assert().success();
    gastos(&dir)
        .args(["add", "taxi", "5", "-c", "Taxi"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown category"));
}

#[test]
fn test_stats_shows_ledger_location() {
    let dir = TempDir::new().unwrap();
    register_and_login(&dir, "alice", "pw1");
    gastos(&dir).args(["add", "pan", "1.50"]).assert().success();

    gastos(&dir)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains(gastos_core::adapters::storage_key("alice")));
}
