use proppath::config::Config;
use proppath::resolver::{Flavor, DEFAULT_MAX_INDEX};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_config_defaults() {
    let config = Config::default();

    assert_eq!(config.flavor, Flavor::Standard);
    assert_eq!(config.max_index, DEFAULT_MAX_INDEX);
    assert_eq!(config.log_level, "warn");
}

#[test]
fn test_custom_config() {
    let config = Config {
        flavor: Flavor::Strict,
        max_index: 500,
        log_level: "debug".to_string(),
    };

    let resolver = config.resolver();
    assert_eq!(resolver.flavor(), Flavor::Strict);
    assert_eq!(resolver.index_of("a[500]"), Ok(Some(500)));
    assert!(resolver.index_of("a[501]").is_err());
}

#[test]
fn test_config_serialization() {
    let config = Config {
        flavor: Flavor::Strict,
        ..Config::default()
    };

    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("flavor = \"strict\""));

    let parsed: Config = toml::from_str(&toml_str).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_empty_toml_gives_defaults() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "flavor = \"strict\"").unwrap();
    writeln!(temp_file, "max_index = 42").unwrap();

    let config = Config::load_from(temp_file.path()).unwrap();
    assert_eq!(config.flavor, Flavor::Strict);
    assert_eq!(config.max_index, 42);
    assert_eq!(config.log_level, "warn");
}

#[test]
fn test_load_from_invalid_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "max_index = \"many\"").unwrap();

    let result = Config::load_from(temp_file.path());
    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("Invalid config file"));
}

#[test]
fn test_load_from_missing_file() {
    let result = Config::load_from("/nonexistent/proppath/config.toml");
    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("Failed to read config file"));
}

#[test]
fn test_config_path() {
    if let Some(path) = Config::config_path() {
        assert!(path.ends_with(".config/proppath/config.toml"));
    }
}

#[test]
fn test_load_or_default_rejects_invalid_flavor() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "flavor = \"stirct\"").unwrap();

    let result = Config::load_or_default(temp_file.path());
    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("Invalid config file"));
}

#[test]
fn test_load_or_default_missing_file() {
    let config = Config::load_or_default("/nonexistent/proppath/config.toml").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_or_default_reads_existing_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "flavor = \"strict\"").unwrap();

    let config = Config::load_or_default(temp_file.path()).unwrap();
    assert_eq!(config.flavor, Flavor::Strict);
}
