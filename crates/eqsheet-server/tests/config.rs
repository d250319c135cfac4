use std::collections::HashMap;
use std::path::PathBuf;

use eqsheet_server::config::{DEFAULT_ADDR, LogFormat, ServerConfig};

fn config_from(pairs: &[(&str, &str)]) -> eyre::Result<ServerConfig> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    ServerConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn defaults_apply_when_nothing_is_set() {
    let config = config_from(&[]).unwrap();
    assert_eq!(config.addr, DEFAULT_ADDR);
    assert_eq!(config.work_dir, PathBuf::from("eqsheet-runs"));
    assert_eq!(config.pdflatex.to_string(), "pdflatex");
    assert_eq!(config.pandoc.to_string(), "pandoc");
    assert_eq!(config.max_upload_bytes, 10 * 1024 * 1024);
    assert_eq!(config.keep_runs, Some(50));
    assert_eq!(config.log_format, LogFormat::Text);
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let config = config_from(&[("EQSHEET_ADDR", "  "), ("EQSHEET_PANDOC", "")]).unwrap();
    assert_eq!(config.addr, DEFAULT_ADDR);
    assert_eq!(config.pandoc.to_string(), "pandoc");
}

#[test]
fn overrides_are_honoured() {
    let config = config_from(&[
        ("EQSHEET_ADDR", "0.0.0.0:9000"),
        ("EQSHEET_WORK_DIR", "/tmp/runs"),
        ("EQSHEET_PDFLATEX", "/opt/texlive/bin/pdflatex"),
        ("EQSHEET_MAX_UPLOAD_MB", "3"),
        ("EQSHEET_KEEP_RUNS", "0"),
        ("EQSHEET_LOG_FORMAT", "json"),
    ])
    .unwrap();

    assert_eq!(config.addr, "0.0.0.0:9000");
    assert_eq!(config.work_dir, PathBuf::from("/tmp/runs"));
    assert_eq!(config.pdflatex.program, "/opt/texlive/bin/pdflatex");
    assert_eq!(config.max_upload_bytes, 3 * 1024 * 1024);
    assert_eq!(config.keep_runs, None);
    assert_eq!(config.log_format, LogFormat::Json);
}

#[test]
fn invalid_values_are_errors() {
    assert!(config_from(&[("EQSHEET_MAX_UPLOAD_MB", "ten")]).is_err());
    assert!(config_from(&[("EQSHEET_LOG_FORMAT", "xml")]).is_err());
    assert!(config_from(&[("EQSHEET_KEEP_RUNS", "-1")]).is_err());
}
