use anyhow::Result;
use serde::Serialize;
use twilight_analysis::utils::{histogram, HistogramBin};
use twilight_sim::simulation::{BaselineDistribution, Simulation, SimulationConfig};

use crate::args::{OutputArgs, SimArgs};
use crate::printing::{format_baseline_summary, format_histogram, format_parameters};
use crate::utils::{progress_bar, resolve_config, write_output};

#[derive(Serialize)]
struct BaselineOutput<'a> {
    config: &'a SimulationConfig,
    baseline: &'a BaselineDistribution,
    histogram: Vec<HistogramBin>,
}

pub fn run_baseline(
    sim_args: &SimArgs,
    output: &OutputArgs,
    bins: usize,
    progress: bool,
) -> Result<()> {
    let config = resolve_config(sim_args)?;
    let mut sim = Simulation::new(config)?;

    let pb = progress_bar(sim.config().baseline_pairs, progress);
    let baseline = sim.baseline_distribution_with_progress(|| pb.inc(1));
    pb.finish_and_clear();

    let content = match output.format.as_str() {
        "pretty" => {
            let mut content = format_parameters(sim.config());
            content.push_str("\n📊 Baseline Distribution\n");
            content.push_str(&format_baseline_summary(&baseline));
            content.push('\n');
            content.push_str(&format_histogram(&baseline.distances, bins));
            content
        }
        "json" => {
            let values: Vec<f64> = baseline.distances.iter().map(|&d| d as f64).collect();
            let out = BaselineOutput {
                config: sim.config(),
                baseline: &baseline,
                histogram: histogram(&values, bins),
            };
            format!("{}\n", serde_json::to_string_pretty(&out)?)
        }
        "csv" => {
            let mut csv = String::from("pair,distance\n");
            for (i, d) in baseline.distances.iter().enumerate() {
                csv.push_str(&format!("{i},{d}\n"));
            }
            csv
        }
        other => anyhow::bail!("Unknown format '{other}'. Use: pretty, json, or csv"),
    };

    write_output(&content, output.output.as_ref())
}
