use std::path::PathBuf;

use eqsheet_export::tool::ToolCommand;

pub const DEFAULT_ADDR: &str = "127.0.0.1:8501";
pub const DEFAULT_WORK_DIR: &str = "eqsheet-runs";
pub const DEFAULT_MAX_UPLOAD_MB: usize = 10;
pub const DEFAULT_KEEP_RUNS: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Server settings, read from `EQSHEET_*` environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: String,
    /// Root under which each run gets its own directory.
    pub work_dir: PathBuf,
    pub pdflatex: ToolCommand,
    pub pandoc: ToolCommand,
    pub max_upload_bytes: usize,
    /// Run directories kept on disk; `None` (set with `0`) keeps all.
    pub keep_runs: Option<usize>,
    pub log_format: LogFormat,
}

impl ServerConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup. Unset or blank keys fall back
    /// to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let tool = |key: &str, default: &str| -> eyre::Result<ToolCommand> {
            let raw = get(key).unwrap_or_else(|| default.to_string());
            raw.parse()
                .map_err(|e| eyre::eyre!("invalid {key} ({raw:?}): {e}"))
        };

        let max_upload_mb = match get("EQSHEET_MAX_UPLOAD_MB") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .map_err(|e| eyre::eyre!("invalid EQSHEET_MAX_UPLOAD_MB ({raw:?}): {e}"))?,
            None => DEFAULT_MAX_UPLOAD_MB,
        };

        let keep_runs = match get("EQSHEET_KEEP_RUNS") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .map_err(|e| eyre::eyre!("invalid EQSHEET_KEEP_RUNS ({raw:?}): {e}"))?,
            None => DEFAULT_KEEP_RUNS,
        };

        let log_format = match get("EQSHEET_LOG_FORMAT").as_deref() {
            Some("json") => LogFormat::Json,
            Some("text") | None => LogFormat::Text,
            Some(other) => {
                return Err(eyre::eyre!(
                    "invalid EQSHEET_LOG_FORMAT ({other:?}): expected \"text\" or \"json\""
                ));
            }
        };

        Ok(Self {
            addr: get("EQSHEET_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string()),
            work_dir: PathBuf::from(
                get("EQSHEET_WORK_DIR").unwrap_or_else(|| DEFAULT_WORK_DIR.to_string()),
            ),
            pdflatex: tool("EQSHEET_PDFLATEX", "pdflatex")?,
            pandoc: tool("EQSHEET_PANDOC", "pandoc")?,
            max_upload_bytes: max_upload_mb * 1024 * 1024,
            keep_runs: (keep_runs > 0).then_some(keep_runs),
            log_format,
        })
    }
}
