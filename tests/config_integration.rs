use std::fs;
use std::time::Duration;

use quickloan_aa::config::AppConfig;
use quickloan_aa::QuickLoanError;
use tempfile::TempDir;

#[test]
fn test_config_round_trip_through_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("quickloan.toml");

    let mut config = AppConfig::default();
    config.tick_rate = "250ms".to_string();
    config.loan.amount = 350_000;
    config.loan.tenure = 24;
    config.save_to(&path).unwrap();

    let loaded = AppConfig::load_from(&path).unwrap();
    assert_eq!(loaded, config);
    assert_eq!(loaded.tick_rate().unwrap(), Duration::from_millis(250));
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let loaded = AppConfig::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(loaded, AppConfig::default());
}

#[test]
fn test_invalid_limits_are_rejected_on_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("quickloan.toml");
    fs::write(
        &path,
        r#"
[limits]
min_amount = 10000
amount_step = 5000
min_tenure = 40
max_tenure = 36
tenure_step = 1
"#,
    )
    .unwrap();

    match AppConfig::load_from(&path) {
        Err(QuickLoanError::ConfigError(msg)) => assert!(msg.to_lowercase().contains("tenure")),
        other => panic!("expected config error, got {:?}", other),
    }
}

#[test]
fn test_malformed_toml_is_a_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("quickloan.toml");
    fs::write(&path, "tick_rate = [").unwrap();
    assert!(matches!(
        AppConfig::load_from(&path),
        Err(QuickLoanError::ConfigError(_))
    ));
}

#[test]
fn test_bad_tick_rate_is_refused_on_save() {
    let dir = TempDir::new().unwrap();
    let mut config = AppConfig::default();
    config.tick_rate = "soon".to_string();
    assert!(config.save_to(&dir.path().join("quickloan.toml")).is_err());
}
