use std::path::PathBuf;

use clap::Args;
use qgate_analysis::enforcement::gates::GateEvaluator;
use qgate_analysis::enforcement::reporters::create_reporter;
use qgate_analysis::report::ReportSource;
use qgate_core::config::CliOverrides;
use qgate_core::errors::PipelineError;

use super::common::{emit, stdout_wants_color, CommonArgs};

#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Output format
    #[arg(short, long, default_value = "console", value_parser = ["console", "json", "junit"])]
    pub format: String,

    /// Output file (default stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Which gate failures block the run
    #[arg(long, value_parser = ["critical", "any"])]
    pub fail_on: Option<String>,

    /// Fail instead of running the report producer when the report is missing
    #[arg(long)]
    pub no_generate: bool,

    /// Run the report producer even if a report exists (overrides `auto_generate = false`)
    #[arg(long, conflicts_with = "no_generate")]
    pub regenerate: bool,

    /// Disable ANSI colors in console output
    #[arg(long)]
    pub no_color: bool,
}

/// Evaluate all gates. Returns the process exit code for the verdict.
pub fn run(args: CheckArgs) -> Result<u8, PipelineError> {
    let overrides = CliOverrides {
        fail_on: args.fail_on.clone(),
        auto_generate: if args.no_generate {
            Some(false)
        } else {
            args.regenerate.then_some(true)
        },
        ..Default::default()
    };
    let config = args.common.load_config(overrides)?;

    let evaluator = GateEvaluator::from_config(&config)?;
    let source = ReportSource::from_config(&config, &args.common.root).regenerate(args.regenerate);
    tracing::debug!(source = ?source, gates = evaluator.gates().len(), "starting gate check");

    let evaluation = evaluator.run(&source)?;

    let use_color = stdout_wants_color(args.output.as_deref(), args.no_color);
    let reporter =
        create_reporter(&args.format, use_color).ok_or_else(|| PipelineError::Render {
            format: args.format.clone(),
            message: "unknown output format".to_string(),
        })?;
    let text = reporter
        .generate(&evaluation)
        .map_err(|message| PipelineError::Render {
            format: args.format.clone(),
            message,
        })?;
    emit(&text, args.output.as_deref())?;

    Ok(evaluation.exit_code())
}
