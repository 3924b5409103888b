use render::config::{ENV_PRETTY_JSON, ENV_XML_DECLARATION, ENV_XML_ROOT};
use render::{ConfigError, RenderConfig};
use serial_test::serial;
use std::io::Write;
use tempfile::NamedTempFile;

fn clear_env() {
    std::env::remove_var(ENV_PRETTY_JSON);
    std::env::remove_var(ENV_XML_ROOT);
    std::env::remove_var(ENV_XML_DECLARATION);
}

#[test]
#[serial]
fn given_no_env_when_loading_then_defaults_apply() {
    clear_env();

    let config = RenderConfig::from_env().expect("defaults should load");
    assert_eq!(config, RenderConfig::default());
}

#[test]
#[serial]
fn given_env_overrides_when_loading_then_values_are_used() {
    clear_env();
    std::env::set_var(ENV_PRETTY_JSON, "true");
    std::env::set_var(ENV_XML_ROOT, "envelope");
    std::env::set_var(ENV_XML_DECLARATION, "1");

    let config = RenderConfig::from_env().expect("overrides should load");
    clear_env();

    assert!(config.pretty_json);
    assert_eq!(config.xml_root, "envelope");
    assert!(config.xml_declaration);
}

#[test]
#[serial]
fn given_bad_boolean_when_loading_then_reports_key() {
    clear_env();
    std::env::set_var(ENV_PRETTY_JSON, "sometimes");

    let result = RenderConfig::from_env();
    clear_env();

    match result {
        Err(ConfigError::InvalidValue { key, value }) => {
            assert_eq!(key, ENV_PRETTY_JSON);
            assert_eq!(value, "sometimes");
        }
        other => panic!("expected InvalidValue, got {other:?}"),
    }
}

#[test]
#[serial]
fn given_bad_root_in_env_when_loading_then_rejected() {
    clear_env();
    std::env::set_var(ENV_XML_ROOT, "not a name");

    let result = RenderConfig::from_env();
    clear_env();

    assert!(matches!(result, Err(ConfigError::InvalidXmlRoot { .. })));
}

#[test]
fn given_partial_file_when_loading_then_missing_keys_default() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{ "pretty_json": true }}"#).unwrap();

    let config = RenderConfig::from_file(file.path()).expect("file should load");

    assert!(config.pretty_json);
    assert_eq!(config.xml_root, "response");
    assert!(!config.xml_declaration);
}

#[test]
fn given_malformed_file_when_loading_then_reports_parse_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "pretty_json = true").unwrap();

    let result = RenderConfig::from_file(file.path());
    assert!(matches!(result, Err(ConfigError::JsonParsingFailed { .. })));
}

#[test]
fn given_missing_file_when_loading_then_reports_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let result = RenderConfig::from_file(&dir.path().join("render.json"));

    assert!(matches!(result, Err(ConfigError::ConfigFileNotFound { .. })));
}
