use barnacle::core::config::{BarnacleConfig, CONFIG_FILE_NAME};
use barnacle::core::table::{TableFormatter, TableStyle, truncate};
use barnacle::core::time;
use barnacle::{RegistryError, RegistryManager};
use std::fs;
use tempfile::tempdir;

#[test]
fn config_defaults_when_file_missing() {
    let tmp = tempdir().expect("tempdir");
    let config = BarnacleConfig::load_from_dir(tmp.path()).expect("defaults");
    assert!(config.tracking.enabled);
    assert_eq!(config.table, TableStyle::default());
}

#[test]
fn config_file_overrides_defaults() {
    let tmp = tempdir().expect("tempdir");
    fs::write(
        tmp.path().join(CONFIG_FILE_NAME),
        r#"
[tracking]
enabled = false

[table]
padding = 2
col_sep = "!"
border_char = "="
"#,
    )
    .expect("write config");

    let config = BarnacleConfig::load_from_dir(tmp.path()).expect("parse");
    assert!(!config.tracking.enabled);
    assert_eq!(config.table.padding, 2);
    assert_eq!(config.table.col_sep, "!");
    assert_eq!(config.table.border_char, '=');

    let manager = RegistryManager::new(&config);
    assert!(!manager.is_tracking_enabled());
}

#[test]
fn malformed_config_is_a_hard_error() {
    let tmp = tempdir().expect("tempdir");
    fs::write(tmp.path().join(CONFIG_FILE_NAME), "[tracking\nenabled = who")
        .expect("write config");

    let err = BarnacleConfig::load_from_dir(tmp.path()).unwrap_err();
    assert!(matches!(err, RegistryError::ConfigError(_)));
}

#[test]
fn formatter_honors_custom_style() {
    let style = TableStyle {
        padding: 2,
        col_sep: "!".to_string(),
        border_char: '=',
    };
    let formatter = TableFormatter::new(style);
    let table = formatter.format(
        &["NAME"],
        &[vec!["build".to_string()], vec!["x".to_string()]],
    );

    assert!(table.starts_with('='));
    assert!(table.contains("!  build  !"));
    // short cells are padded out to the widest cell in the column
    assert!(table.contains("!  x      !"));
}

#[test]
fn formatter_ignores_extra_cells_beyond_headers() {
    let formatter = TableFormatter::default();
    let table = formatter.format(
        &["A", "B"],
        &[vec!["1".to_string(), "2".to_string(), "orphan".to_string()]],
    );
    assert!(!table.contains("orphan"));
}

#[test]
fn truncate_only_touches_long_values() {
    assert_eq!(truncate("command-with-a-long-name", 10), "command...");
    assert_eq!(truncate("short", 10), "short");
}

#[test]
fn epoch_timestamps_are_parseable() {
    let ts = time::now_epoch_z();
    assert!(ts.ends_with('Z'));
    let secs: u64 = ts.trim_end_matches('Z').parse().expect("numeric epoch");
    assert!(secs >= time::now_epoch_secs().saturating_sub(5));
}
