use anyhow::Result;
use serde::Serialize;
use twilight_sim::simulation::{DivergenceTrace, Simulation, SimulationConfig};

use crate::args::{OutputArgs, SimArgs};
use crate::printing::{format_parameters, format_trace_table};
use crate::utils::{resolve_config, write_output};

#[derive(Serialize)]
struct DivergeOutput<'a> {
    config: &'a SimulationConfig,
    self_divergence: &'a DivergenceTrace,
    lineage_divergence: &'a DivergenceTrace,
}

pub fn run_diverge(sim_args: &SimArgs, output: &OutputArgs) -> Result<()> {
    let config = resolve_config(sim_args)?;
    let mut sim = Simulation::new(config)?;

    let self_trace = sim.self_divergence();
    let lineage = sim.lineage_divergence();

    let content = match output.format.as_str() {
        "pretty" => {
            let mut content = format_parameters(sim.config());
            content.push_str("\n🧬 Divergence Traces\n");
            content.push_str(&format_trace_table(&self_trace, &lineage));
            content
        }
        "json" => {
            let out = DivergeOutput {
                config: sim.config(),
                self_divergence: &self_trace,
                lineage_divergence: &lineage,
            };
            format!("{}\n", serde_json::to_string_pretty(&out)?)
        }
        "csv" => {
            let mut csv = String::from("mutations,self_distance,lineage_distance\n");
            for (m, d) in self_trace.iter() {
                let lineage_d = lineage.get(m).unwrap_or_default();
                csv.push_str(&format!("{m},{d},{lineage_d}\n"));
            }
            csv
        }
        other => anyhow::bail!("Unknown format '{other}'. Use: pretty, json, or csv"),
    };

    write_output(&content, output.output.as_ref())
}
