use super::*;
use std::collections::HashMap;
use tempfile::tempdir;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.storage.file_path, PathBuf::from("file.json"));
    assert_eq!(config.log_level, "warn");
}

#[test]
fn test_load_yaml() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("hbnb.yaml");
    std::fs::write(
        &path,
        r#"
storage:
  file_path: "data/objects.json"
log_level: debug
"#,
    )
    .unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.storage.file_path, PathBuf::from("data/objects.json"));
    assert_eq!(config.log_level, "debug");
}

#[test]
fn test_load_fills_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("hbnb.yaml");
    std::fs::write(&path, "log_level: info\n").unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.storage, StorageConfig::default());
    assert_eq!(config.log_level, "info");
}

#[test]
fn test_load_rejects_unknown_fields() {
    let yaml = "storage:\n  path: file.json\n";
    assert!(serde_yaml::from_str::<Config>(yaml).is_err());
}

#[test]
fn test_load_missing_file_fails_with_context() {
    let dir = tempdir().unwrap();
    let err = Config::load(&dir.path().join("missing.yaml")).unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}

#[test]
fn test_load_rejects_empty_file_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("hbnb.yaml");
    std::fs::write(&path, "storage:\n  file_path: \"\"\n").unwrap();
    assert!(Config::load(&path).is_err());
}

#[test]
fn test_env_overrides_file_path() {
    let env: HashMap<&str, &str> = [(FILE_PATH_ENV, "/tmp/env.json")].into_iter().collect();
    let mut config = Config::default();
    config.apply_env(|key| env.get(key).map(|v| v.to_string()));
    assert_eq!(config.storage.file_path, PathBuf::from("/tmp/env.json"));
}

#[test]
fn test_empty_env_value_is_ignored() {
    let mut config = Config::default();
    config.apply_env(|_| Some(String::new()));
    assert_eq!(config.storage.file_path, PathBuf::from("file.json"));
}

#[test]
fn test_resolve_flag_wins_over_config_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("hbnb.yaml");
    std::fs::write(&path, "storage:\n  file_path: from-config.json\n").unwrap();

    let config = Config::resolve(Some(&path), Some(PathBuf::from("from-flag.json"))).unwrap();
    assert_eq!(config.storage.file_path, PathBuf::from("from-flag.json"));
}
