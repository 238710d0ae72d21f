use paw_kernel::config::{ConfigError, load_config};
use paw_kernel::domain::config::{ApiConfig, CatalogSeed};
use std::fs;
use tempfile::tempdir;

#[test]
fn loads_toml_base_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("server.toml");
    fs::write(
        &path,
        r#"
[server]
port = 8088

[registration]
max_approximate_age = 25

[catalog]
seed = "empty"
"#,
    )?;

    let cfg: ApiConfig = load_config(Some(&path))?;
    assert_eq!(cfg.server.port, 8088);
    assert_eq!(cfg.registration.max_approximate_age, 25);
    assert_eq!(cfg.registration.session_ttl_seconds, 3600);
    assert_eq!(cfg.catalog.seed, CatalogSeed::Empty);
    Ok(())
}

#[test]
fn missing_base_file_is_an_error() {
    let dir = tempdir().unwrap();
    let err = load_config::<ApiConfig>(Some(dir.path().join("absent.toml"))).unwrap_err();

    assert!(matches!(err, ConfigError::Config { .. }));
    assert!(err.to_string().starts_with("Config error (Failed to build config)"));
}
