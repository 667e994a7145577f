use std::path::PathBuf;

use clap::Args;
use qgate_core::config::qgate_config::PROJECT_CONFIG_FILE;
use qgate_core::config::{default_gates, QgateConfig};
use qgate_core::errors::{ConfigError, PipelineError};

#[derive(Args, Debug, Clone)]
pub struct InitArgs {
    /// Directory to initialize (default: current directory)
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Overwrite an existing qgate.toml
    #[arg(short, long)]
    pub force: bool,

    /// Verbose
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

const HEADER: &str = "\
# qgate configuration
#
# [report]
# path          report location, relative to this directory
# producer      argv run when the report is missing; \"{report}\" expands to the path
#               e.g. producer = [\"npx\", \"code-quality-analyzer\", \"--out\", \"{report}\"]
# auto_generate set to false to fail instead of running the producer
#
# [quality_gates]
# fail_on       \"critical\" (advisory failures only warn) or \"any\"
# gates         omit `dimension` to check the overall score

";

pub fn run(args: InitArgs) -> Result<u8, PipelineError> {
    let path = args.root.join(PROJECT_CONFIG_FILE);
    if path.exists() && !args.force {
        return Err(ConfigError::AlreadyExists {
            path: path.display().to_string(),
        }
        .into());
    }

    let mut config = QgateConfig::default();
    config.report.path = Some(config.report.effective_path().to_string());
    config.quality_gates.fail_on = Some(config.fail_on().to_string());
    config.quality_gates.gates = Some(default_gates());

    let body = format!("{HEADER}{}", config.to_toml()?);
    std::fs::write(&path, body).map_err(|e| ConfigError::WriteFailed {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    tracing::info!(path = %path.display(), "wrote default configuration");
    println!("Initialized qgate in {}", args.root.display());
    println!("Created: {}", path.display());
    Ok(0)
}
