use anyhow::Result;
use serde::Serialize;
use twilight_sim::simulation::{DivergenceTrace, Simulation, SimulationConfig, TwilightReport};

use crate::args::{OutputArgs, SimArgs};
use crate::printing::{
    format_baseline_summary, format_parameters, format_trace_table, format_twilight,
};
use crate::utils::{progress_bar, resolve_config, write_output};

#[derive(Serialize)]
struct TwilightOutput<'a> {
    config: &'a SimulationConfig,
    self_divergence: &'a DivergenceTrace,
    report: &'a TwilightReport,
}

/// Runs, in order on one RNG: self-divergence, lineage divergence, baseline.
pub fn run_twilight(sim_args: &SimArgs, output: &OutputArgs, progress: bool) -> Result<()> {
    let config = resolve_config(sim_args)?;
    let mut sim = Simulation::new(config)?;

    let self_trace = sim.self_divergence();
    let pb = progress_bar(sim.config().baseline_pairs, progress);
    let report = sim.twilight_zone_with_progress(|| pb.inc(1));
    pb.finish_and_clear();

    let max_mutations = sim.config().max_mutations;
    let content = match output.format.as_str() {
        "pretty" => {
            let mut content = format_parameters(sim.config());
            content.push_str("\n🧬 a) Self-divergence and b) lineage divergence\n");
            content.push_str(&format_trace_table(&self_trace, &report.lineage));
            content.push_str("\n📊 c) Baseline distribution\n");
            content.push_str(&format_baseline_summary(&report.baseline));
            content.push_str("\n🌗 d) Twilight zone\n");
            content.push_str(&format_twilight(&report, max_mutations));
            content
        }
        "json" => {
            let out = TwilightOutput {
                config: sim.config(),
                self_divergence: &self_trace,
                report: &report,
            };
            format!("{}\n", serde_json::to_string_pretty(&out)?)
        }
        "csv" => {
            let mut csv =
                String::from("mutations,self_distance,lineage_distance,baseline_mean,baseline_std\n");
            for (m, lineage_d) in report.lineage.iter() {
                let self_d = self_trace.get(m).unwrap_or_default();
                csv.push_str(&format!(
                    "{m},{self_d},{lineage_d},{:.6},{:.6}\n",
                    report.baseline.mean, report.baseline.std_dev
                ));
            }
            csv
        }
        other => anyhow::bail!("Unknown format '{other}'. Use: pretty, json, or csv"),
    };

    write_output(&content, output.output.as_ref())
}
