use clap::Args;
use qgate_analysis::enforcement::gates::GateEvaluator;
use qgate_core::config::CliOverrides;
use qgate_core::errors::PipelineError;

use super::common::{emit, CommonArgs};

#[derive(Args, Debug, Clone)]
pub struct GatesArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Print JSON instead of a list
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: GatesArgs) -> Result<u8, PipelineError> {
    let config = args.common.load_config(CliOverrides::default())?;
    let evaluator = GateEvaluator::from_config(&config)?;

    let text = if args.json {
        let value = serde_json::json!({
            "fail_on": evaluator.fail_on(),
            "report": config.report.resolve_path(&args.common.root),
            "gates": evaluator.gates(),
        });
        let mut s = serde_json::to_string_pretty(&value).map_err(|e| PipelineError::Render {
            format: "json".to_string(),
            message: e.to_string(),
        })?;
        s.push('\n');
        s
    } else {
        let mut out = format!(
            "Report:  {}\nFail on: {}\n\n",
            config.report.resolve_path(&args.common.root).display(),
            evaluator.fail_on()
        );
        for gate in evaluator.gates() {
            let target = gate.dimension.as_deref().unwrap_or("overall");
            let kind = if gate.critical { "critical" } else { "advisory" };
            out.push_str(&format!(
                "  {} [{}] >= {} ({})\n",
                gate.name, target, gate.threshold, kind
            ));
        }
        out
    };
    emit(&text, None)?;
    Ok(0)
}
