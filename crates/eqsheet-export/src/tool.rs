use std::fmt;
use std::path::Path;
use std::process::{Command, Stdio};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use eqsheet_core::models::artifact::{ArtifactKind, RenderedArtifact};
use eqsheet_core::paths;

use crate::error::ExportError;

/// Lines of tool output kept in a failure message.
const OUTPUT_TAIL_LINES: usize = 20;

/// An external program plus the arguments placed before the ones eqsheet
/// adds, e.g. `pdflatex` or `xvfb-run pandoc`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolCommand {
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl ToolCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for ToolCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Whitespace-separated: the first word is the program.
impl FromStr for ToolCommand {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let program = words.next().ok_or(ExportError::EmptyToolCommand)?;
        Ok(ToolCommand::new(program).with_args(words))
    }
}

/// Run `tool` with `args` inside `dir` and wait for it to exit.
///
/// Stdin is closed so interactive prompts fail instead of blocking.
/// A non-zero exit is an error carrying the tail of the tool's output.
pub fn run(tool: &ToolCommand, args: &[&str], dir: &Path) -> Result<(), ExportError> {
    let mut cmd = Command::new(&tool.program);
    cmd.args(&tool.args)
        .args(args)
        .current_dir(dir)
        .stdin(Stdio::null());

    debug!("external command: {:?}", cmd);

    let output = cmd.output().map_err(|source| ExportError::ToolLaunch {
        tool: tool.to_string(),
        source,
    })?;

    if !output.status.success() {
        let status = output
            .status
            .code()
            .map(|c| format!("exit code {c}"))
            .unwrap_or_else(|| "a signal".to_string());
        let mut detail = tail(&String::from_utf8_lossy(&output.stderr));
        if detail.is_empty() {
            detail = tail(&String::from_utf8_lossy(&output.stdout));
        }
        return Err(ExportError::ToolFailed {
            tool: tool.to_string(),
            status,
            detail,
        });
    }

    info!(tool = %tool.program, dir = %dir.display(), "external tool finished");
    Ok(())
}

/// Read back the artifact a tool was expected to write into `dir`.
pub fn read_artifact(dir: &Path, kind: ArtifactKind) -> Result<RenderedArtifact, ExportError> {
    let path = paths::artifact(dir, kind);
    if !path.is_file() {
        return Err(ExportError::MissingOutput { path });
    }
    let bytes = std::fs::read(&path)?;
    Ok(RenderedArtifact { kind, path, bytes })
}

fn tail(text: &str) -> String {
    let lines: Vec<&str> = text.trim_end().lines().collect();
    let start = lines.len().saturating_sub(OUTPUT_TAIL_LINES);
    lines[start..].join("\n")
}
