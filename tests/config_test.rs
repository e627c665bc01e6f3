// tests/config_test.rs
use serial_test::serial;
use std::io::Write;
use std::path::PathBuf;
use tagsync::config::{load_config, Config};
use tempfile::NamedTempFile;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.repository.url, None);
    assert_eq!(config.repository.path, None);
    assert_eq!(config.repository.remote, "origin");
}

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[repository]
url = "https://github.com/nvm-sh/nvm.git"
path = "/home/pi/.nvm"
remote = "upstream"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(
        config.repository.url,
        Some("https://github.com/nvm-sh/nvm.git".to_string())
    );
    assert_eq!(config.repository.path, Some(PathBuf::from("/home/pi/.nvm")));
    assert_eq!(config.repository.remote, "upstream");
}

#[test]
fn test_partial_file_uses_defaults() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[repository]
url = "https://github.com/nvm-sh/nvm.git"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.repository.remote, "origin");
    assert_eq!(config.repository.path, None);
}

#[test]
fn test_invalid_toml_is_an_error() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"[repository\nurl = ").unwrap();
    temp_file.flush().unwrap();

    assert!(load_config(Some(temp_file.path().to_str().unwrap())).is_err());
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    assert!(load_config(Some("/nonexistent/tagsync.toml")).is_err());
}

#[test]
#[serial]
fn test_load_without_file_falls_back_to_defaults() {
    // Depends on the current directory not holding a tagsync.toml
    let config = load_config(None).unwrap();
    assert_eq!(config.repository.remote, "origin");
}
