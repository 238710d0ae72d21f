use paw_domain::config::{
    ApiConfig, CatalogSeed, LoggingConfig, RegistrationConfig, ServerConfig,
};
use serde_json::json;
use std::path::PathBuf;

#[test]
fn config_defaults_are_sane() {
    let server = ServerConfig::default();
    assert_eq!(server.port, 4583);
    assert!(server.ssl.is_none());

    let logging = LoggingConfig::default();
    assert_eq!(logging.level, "info");
    assert!(logging.directory.is_none());
    assert!(!logging.json);

    let registration = RegistrationConfig::default();
    assert_eq!(registration.session_ttl_seconds, 3600);
    assert_eq!(registration.session_capacity, 10_000);
    assert_eq!(registration.max_approximate_age, 20);

    assert_eq!(ApiConfig::default().catalog.seed, CatalogSeed::Builtin);
}

#[test]
fn api_config_deserializes_partial_sections() {
    let raw = json!({
        "server": { "address": "::", "port": 8080 },
        "registration": { "session_ttl_seconds": 60 },
        "catalog": { "seed": "seeds/catalog.json" }
    });

    let cfg: ApiConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.server.port, 8080);
    assert_eq!(cfg.registration.session_ttl_seconds, 60);
    assert_eq!(cfg.registration.max_approximate_age, 20);
    assert_eq!(cfg.logging.level, "info");
    assert_eq!(cfg.catalog.seed, CatalogSeed::File(PathBuf::from("seeds/catalog.json")));
}

#[test]
fn catalog_seed_keywords() {
    assert_eq!(CatalogSeed::from("Builtin".to_owned()), CatalogSeed::Builtin);
    assert_eq!(CatalogSeed::from("empty".to_owned()), CatalogSeed::Empty);
}

#[test]
fn config_clones_are_copy_on_write() {
    let original = ApiConfig::default();
    let mut changed = original.clone();
    changed.server.port = 9000;

    assert_eq!(original.server.port, 4583);
    assert_eq!(changed.server.port, 9000);
}
