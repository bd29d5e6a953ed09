use std::fs;

use signup_loop::config::{AvatarConfig, Config, ConfigError};
use tempfile::TempDir;

/// Test that Config::default() produces the documented values.
#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.avatar.base_url, "https://www.gravatar.com");
    assert_eq!(config.avatar.size, 256);
    assert_eq!(config.avatar.fallback, "404");
    assert_eq!(config.avatar.timeout_seconds, 10);
    assert_eq!(config.avatar.connect_timeout_seconds, 5);
    assert_eq!(config.logging.filter, "info");
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("signup-loop/config.toml"));
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[avatar]
base_url = "http://127.0.0.1:9000"
size = 64

[logging]
filter = "signup_loop=debug"
"#,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();

    assert_eq!(config.avatar.base_url, "http://127.0.0.1:9000");
    assert_eq!(config.avatar.size, 64);
    assert_eq!(config.avatar.fallback, "404");
    assert_eq!(config.avatar.timeout_seconds, 10);
    assert_eq!(config.logging.filter, "signup_loop=debug");
}

#[test]
fn test_empty_file_is_default() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "").unwrap();

    assert_eq!(Config::load_from(&path).unwrap(), Config::default());
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[avatar\nsize = ").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }), "got {:?}", err);
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn test_wrong_type_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[avatar]\nsize = \"big\"\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_directory_is_read_error() {
    let dir = TempDir::new().unwrap();

    let err = Config::load_from(dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ReadError { .. }), "got {:?}", err);
}

#[test]
fn test_loaded_file_is_validated() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[avatar]\nsize = 0\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

fn with_avatar(avatar: AvatarConfig) -> Config {
    Config {
        avatar,
        ..Config::default()
    }
}

#[test]
fn test_validation_rejects_non_http_base_url() {
    let config = with_avatar(AvatarConfig {
        base_url: "ftp://gravatar.com".into(),
        ..AvatarConfig::default()
    });
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("ftp://gravatar.com"));
}

#[test]
fn test_validation_rejects_oversized_avatar() {
    let config = with_avatar(AvatarConfig {
        size: 4096,
        ..AvatarConfig::default()
    });
    assert!(config.validate().is_err());

    let config = with_avatar(AvatarConfig {
        size: 2048,
        ..AvatarConfig::default()
    });
    assert!(config.validate().is_ok());
}

#[test]
fn test_validation_rejects_zero_timeouts() {
    let config = with_avatar(AvatarConfig {
        timeout_seconds: 0,
        ..AvatarConfig::default()
    });
    assert!(config.validate().is_err());

    let config = with_avatar(AvatarConfig {
        connect_timeout_seconds: 0,
        ..AvatarConfig::default()
    });
    assert!(config.validate().is_err());
}

#[test]
fn test_serialized_config_loads_back() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    let config = Config {
        avatar: AvatarConfig {
            base_url: "http://localhost:8080".into(),
            size: 128,
            fallback: "identicon".into(),
            timeout_seconds: 3,
            connect_timeout_seconds: 1,
        },
        ..Config::default()
    };
    fs::write(&path, toml::to_string(&config).unwrap()).unwrap();

    assert_eq!(Config::load_from(&path).unwrap(), config);
}
