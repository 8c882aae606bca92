use edutracker::config::{AppConfig, LogFormat};
use serial_test::serial;
use std::env;
use std::fs;
use std::io::Write;

// Helper to clear environment variables that might interfere with tests
fn clear_env_vars() {
    unsafe {
        env::remove_var("EDUTRACKER_SERVER__PORT");
        env::remove_var("EDUTRACKER_STUDENT__NAME");
        env::remove_var("EDUTRACKER_LOG__FORMAT");
        env::remove_var("EDUTRACKER_SERVER__REQUEST_TIMEOUT_SECS");
        env::remove_var("EDUTRACKER_SERVER__TIMEOUT_DISABLED");
        env::remove_var("CONFIG_FILE");
        env::remove_var("PORT");
    }
}

#[test]
#[serial]
fn test_default_config() {
    clear_env_vars();

    let config = AppConfig::load_from_args(["edutracker"]).expect("defaults should load");

    assert_eq!(config, AppConfig::default());
    assert_eq!(config.bind_address(), "127.0.0.1:3000");
    assert_eq!(config.student.name, "John");
}

#[test]
#[serial]
fn test_env_override() {
    clear_env_vars();
    unsafe {
        env::set_var("EDUTRACKER_SERVER__PORT", "9090");
        env::set_var("EDUTRACKER_STUDENT__NAME", "Priya");
        env::set_var("EDUTRACKER_LOG__FORMAT", "json");
    }

    let config = AppConfig::load_from_args(["edutracker"]).expect("Failed to load config");
    assert_eq!(config.server.port, 9090);
    assert_eq!(config.student.name, "Priya");
    assert_eq!(config.log.format, LogFormat::Json);

    clear_env_vars();
}

#[test]
#[serial]
fn test_file_load() {
    clear_env_vars();

    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .expect("Failed to create temp config");
    writeln!(
        file,
        "server:\n  port: 7070\n  timeout_disabled: true\nstudent:\n  initials: AB\n"
    )
    .unwrap();

    let path = file.path().to_str().unwrap().to_string();
    let config =
        AppConfig::load_from_args(["edutracker", "--config", &path]).expect("file should load");

    assert_eq!(config.server.port, 7070);
    assert!(config.server.timeout_disabled);
    assert_eq!(config.student.initials, "AB");
    // Untouched keys keep their defaults
    assert_eq!(config.student.name, "John");
}

#[test]
#[serial]
fn test_missing_explicit_file_is_an_error() {
    clear_env_vars();

    let result = AppConfig::load_from_args(["edutracker", "--config", "does/not/exist.yaml"]);
    assert!(result.is_err());
}

#[test]
#[serial]
fn test_cli_beats_env() {
    clear_env_vars();
    unsafe {
        env::set_var("EDUTRACKER_SERVER__PORT", "9090");
    }

    let config = AppConfig::load_from_args(["edutracker", "--port", "8181", "--host", "0.0.0.0"])
        .expect("Failed to load config");
    assert_eq!(config.bind_address(), "0.0.0.0:8181");

    clear_env_vars();
}

#[test]
#[serial]
fn test_cwd_config_fallback() {
    clear_env_vars();

    let file_path = "config.yaml";
    fs::write(file_path, "server:\n  port: 6060\n").expect("Failed to write config");

    let config = AppConfig::load_from_args(["edutracker"]);

    fs::remove_file(file_path).unwrap();

    assert_eq!(config.expect("cwd config should load").server.port, 6060);
}

#[test]
#[serial]
fn test_bad_log_format_is_rejected() {
    clear_env_vars();
    unsafe {
        env::set_var("EDUTRACKER_LOG__FORMAT", "xml");
    }

    let result = AppConfig::load_from_args(["edutracker"]);
    assert!(result.is_err());

    clear_env_vars();
}

#[test]
#[serial]
fn test_zero_timeout_is_rejected_unless_disabled() {
    clear_env_vars();
    unsafe {
        env::set_var("EDUTRACKER_SERVER__REQUEST_TIMEOUT_SECS", "0");
    }

    let result = AppConfig::load_from_args(["edutracker"]);
    assert!(result.is_err());

    unsafe {
        env::set_var("EDUTRACKER_SERVER__TIMEOUT_DISABLED", "true");
    }
    let config = AppConfig::load_from_args(["edutracker"]).expect("disabled timeout may be 0");
    assert_eq!(config.server.request_timeout(), None);

    clear_env_vars();
}
