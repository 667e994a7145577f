use clap::Args;
use qgate_analysis::report::{aggregate, ReportAggregates, ReportSource};
use qgate_core::config::CliOverrides;
use qgate_core::errors::PipelineError;

use super::common::{emit, CommonArgs};

#[derive(Args, Debug, Clone)]
pub struct AggregatesArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,

    /// Fail instead of running the report producer when the report is missing
    #[arg(long)]
    pub no_generate: bool,
}

pub fn run(args: AggregatesArgs) -> Result<u8, PipelineError> {
    let overrides = CliOverrides {
        auto_generate: args.no_generate.then_some(false),
        ..Default::default()
    };
    let config = args.common.load_config(overrides)?;
    let obtained = ReportSource::from_config(&config, &args.common.root).obtain()?;
    let aggregates = aggregate(&obtained.report)?;

    let text = if args.json {
        let mut s = serde_json::to_string_pretty(&aggregates).map_err(|e| {
            PipelineError::Render {
                format: "json".to_string(),
                message: e.to_string(),
            }
        })?;
        s.push('\n');
        s
    } else {
        render_table(&aggregates)
    };
    emit(&text, None)?;
    Ok(0)
}

fn render_table(aggregates: &ReportAggregates) -> String {
    let width = aggregates
        .dimensions
        .keys()
        .map(|k| k.chars().count())
        .max()
        .unwrap_or(0)
        .max("Dimension".len());

    let mut out = String::new();
    out.push_str(&format!("Files analyzed: {}\n", aggregates.file_count));
    out.push_str(&format!("Overall score:  {:.1}\n\n", aggregates.overall));
    out.push_str(&format!("{:<width$}  {:>6}  {:>5}\n", "Dimension", "Mean", "Files"));
    for (name, agg) in &aggregates.dimensions {
        out.push_str(&format!("{:<width$}  {:>6.1}  {:>5}\n", name, agg.mean, agg.files));
    }
    out
}
