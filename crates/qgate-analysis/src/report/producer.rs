//! Report producers — the external analyzer as an injected capability.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use qgate_core::config::report_config::REPORT_PLACEHOLDER;
use qgate_core::errors::ProducerError;

/// Maximum number of stderr bytes kept in a `CommandFailed` error.
const STDERR_TAIL_BYTES: usize = 2048;

/// Something that can write a fresh analysis report to a path.
pub trait ReportProducer: Send + Sync {
    fn name(&self) -> &str;
    fn produce(&self, report_path: &Path) -> Result<(), ProducerError>;
}

/// Runs the analyzer as a child process and waits for it.
#[derive(Debug, Clone)]
pub struct CommandProducer {
    program: String,
    args: Vec<String>,
    working_dir: Option<PathBuf>,
}

impl CommandProducer {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
            working_dir: None,
        }
    }

    /// Build from an argv list; `None` when the list is empty.
    pub fn from_argv(argv: &[String]) -> Option<Self> {
        let (program, args) = argv.split_first()?;
        Some(Self::new(program.clone(), args.to_vec()))
    }

    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Arguments with `{report}` replaced by `report_path`.
    pub fn expanded_args(&self, report_path: &Path) -> Vec<String> {
        let report = report_path.display().to_string();
        self.args
            .iter()
            .map(|a| a.replace(REPORT_PLACEHOLDER, &report))
            .collect()
    }
}

impl ReportProducer for CommandProducer {
    fn name(&self) -> &str {
        &self.program
    }

    fn produce(&self, report_path: &Path) -> Result<(), ProducerError> {
        // Relative paths would otherwise resolve against `working_dir`.
        let report_path = match self.working_dir {
            Some(_) if report_path.is_relative() => {
                std::path::absolute(report_path).unwrap_or_else(|_| report_path.to_path_buf())
            }
            _ => report_path.to_path_buf(),
        };
        let args = self.expanded_args(&report_path);
        let mut cmd = Command::new(&self.program);
        cmd.args(&args).stdin(Stdio::null());
        if let Some(ref dir) = self.working_dir {
            cmd.current_dir(dir);
        }

        tracing::info!(program = %self.program, args = ?args, "running report producer");
        let output = cmd.output().map_err(|e| ProducerError::Spawn {
            program: self.program.clone(),
            source: e,
        })?;

        if !output.stdout.is_empty() {
            tracing::debug!(
                stdout = %String::from_utf8_lossy(&output.stdout),
                "report producer output"
            );
        }

        if !output.status.success() {
            return Err(ProducerError::CommandFailed {
                program: self.program.clone(),
                status: output.status.to_string(),
                stderr: stderr_tail(&output.stderr),
            });
        }
        Ok(())
    }
}

fn stderr_tail(stderr: &[u8]) -> String {
    let text = String::from_utf8_lossy(stderr);
    let trimmed = text.trim();
    if trimmed.len() <= STDERR_TAIL_BYTES {
        return trimmed.to_string();
    }
    let mut start = trimmed.len() - STDERR_TAIL_BYTES;
    while !trimmed.is_char_boundary(start) {
        start += 1;
    }
    format!("...{}", &trimmed[start..])
}

/// Adapts a closure into a `ReportProducer`.
pub struct FnProducer<F> {
    name: String,
    f: F,
}

impl<F> FnProducer<F>
where
    F: Fn(&Path) -> Result<(), ProducerError> + Send + Sync,
{
    pub fn new(name: impl Into<String>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }
}

impl<F> ReportProducer for FnProducer<F>
where
    F: Fn(&Path) -> Result<(), ProducerError> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn produce(&self, report_path: &Path) -> Result<(), ProducerError> {
        (self.f)(report_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_report_placeholder() {
        let producer = CommandProducer::from_argv(&[
            "analyzer".to_string(),
            "--out={report}".to_string(),
            "src".to_string(),
        ])
        .unwrap();
        assert_eq!(
            producer.expanded_args(Path::new("out/r.json")),
            vec!["--out=out/r.json".to_string(), "src".to_string()]
        );
    }

    #[test]
    fn empty_argv_has_no_producer() {
        assert!(CommandProducer::from_argv(&[]).is_none());
    }

    #[test]
    fn stderr_tail_keeps_the_end() {
        let long = "x".repeat(STDERR_TAIL_BYTES) + "END";
        let tail = stderr_tail(long.as_bytes());
        assert!(tail.starts_with("..."));
        assert!(tail.ends_with("END"));
    }
}
