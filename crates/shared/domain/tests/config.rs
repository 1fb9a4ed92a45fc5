use jview_domain::config::{LoggingConfig, NamingConfig, RegistryConfig, ViewerConfig};
use jview_domain::record::FlatRecord;
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let naming = NamingConfig::default();
    assert_eq!(naming.factory, "jview.naming.LocalContextFactory");
    assert_eq!(naming.loader, "embed");
    assert!(naming.root.is_empty());

    let logging = LoggingConfig::default();
    assert_eq!(logging.level, "info");
    assert!(logging.path.is_none());
    assert!(!logging.json);

    assert!(RegistryConfig::default().seed.is_none());
}

#[test]
fn viewer_config_deserializes() {
    let raw = json!({
        "naming": { "factory": "custom.Factory", "loader": "system", "root": "java:comp" },
        "registry": { "seed": "/tmp/seed.toml" },
        "logging": { "level": "debug", "json": true }
    });

    let cfg: ViewerConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.naming.factory, "custom.Factory");
    assert_eq!(cfg.naming.loader, "system");
    assert_eq!(cfg.naming.root, "java:comp");
    assert_eq!(cfg.registry.seed, Some(std::path::PathBuf::from("/tmp/seed.toml")));
    assert_eq!(cfg.logging.level, "debug");
    assert!(cfg.logging.json);
}

#[test]
fn partial_config_keeps_defaults() {
    let cfg: ViewerConfig =
        serde_json::from_value(json!({ "naming": { "root": "/a" } })).expect("config deserialize");

    assert_eq!(cfg.naming.root, "/a");
    assert_eq!(cfg.naming.loader, "embed");
    assert_eq!(cfg.logging.level, "info");
}

#[test]
fn config_mutation_does_not_leak_into_clones() {
    let original = ViewerConfig::default();
    let mut changed = original.clone();
    changed.naming.root = "/changed".to_owned();

    assert!(original.naming.root.is_empty());
    assert_eq!(changed.naming.root, "/changed");
}

#[test]
fn flat_record_serializes_null_values() {
    let record = FlatRecord::new("/a/n", "n", None);
    let value = serde_json::to_value(&record).expect("serialize record");

    assert_eq!(value, json!({ "path": "/a/n", "name": "n", "value": null }));
}
