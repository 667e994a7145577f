use std::io::{IsTerminal, Write};
use std::path::{Path, PathBuf};

use clap::Args;
use qgate_core::config::{CliOverrides, QgateConfig};
use qgate_core::errors::PipelineError;

#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Project root: where qgate.toml is looked up and relative report paths resolve
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Config file (default: <ROOT>/qgate.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Analysis report path (overrides config and QGATE_REPORT_PATH)
    #[arg(short, long)]
    pub report: Option<String>,

    /// Verbose (-v debug, -vv trace); QGATE_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl CommonArgs {
    /// Resolve configuration for this invocation.
    pub fn load_config(&self, mut overrides: CliOverrides) -> Result<QgateConfig, PipelineError> {
        if overrides.report_path.is_none() {
            overrides.report_path = self.report.clone();
        }
        Ok(QgateConfig::load(
            &self.root,
            self.config.as_deref(),
            Some(&overrides),
        )?)
    }
}

/// Write `text` to `output`, or to stdout when `None`.
pub fn emit(text: &str, output: Option<&Path>) -> Result<(), PipelineError> {
    match output {
        Some(path) => std::fs::write(path, text).map_err(|e| PipelineError::Output {
            path: path.display().to_string(),
            source: e,
        }),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(text.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(|e| PipelineError::Output {
                    path: "<stdout>".to_string(),
                    source: e,
                })
        }
    }
}

/// ANSI colors only for an interactive stdout without `NO_COLOR`.
pub fn stdout_wants_color(output: Option<&Path>, no_color: bool) -> bool {
    !no_color
        && output.is_none()
        && std::env::var_os("NO_COLOR").is_none()
        && std::io::stdout().is_terminal()
}
