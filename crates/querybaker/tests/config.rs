//! Loading configuration from TOML files.

use querybaker::prelude::*;
use std::fs;
use std::path::PathBuf;

fn scratch_file(name: &str, contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("querybaker-config-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn load_from_file_drives_ddl() {
    let path = scratch_file(
        "postgres.toml",
        r#"
dialect = "postgres"

[trace]
enabled = false
"#,
    );
    let config = Config::load(&path).unwrap();
    assert_eq!(config.dialect, Dialect::Postgres);
    assert!(!config.trace.enabled);

    let t = Table::new("notes").with_columns([
        Column::new("id", DataType::Integer, 1).primary_key().auto_increment(),
        Column::new("body", DataType::LongVarchar, 1),
    ]);
    assert_eq!(
        t.build_with(&config),
        "CREATE TABLE notes (id INTEGER PRIMARY KEY GENERATED ALWAYS AS IDENTITY, body TEXT);"
    );
}

#[test]
fn missing_file_is_config_error() {
    let err = Config::load("/nonexistent/querybaker.toml").unwrap_err();
    assert!(matches!(err, QbError::Config(_)));
}

#[test]
fn malformed_file_is_config_error() {
    let path = scratch_file("broken.toml", "dialect = [");
    let err = Config::load(&path).unwrap_err();
    assert!(matches!(err, QbError::Config(_)));
}

#[test]
fn defaults_to_derby() {
    let config = Config::default();
    assert_eq!(config.dialect, Dialect::Derby);
    assert_eq!(config.trace.max_sql_length, Some(200));

    let t = Table::new("t").with_columns([Column::new("a", DataType::Integer, 1)]);
    assert_eq!(t.build_with(&config), t.build());
}
