use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use twilight_sim::simulation::{SimulationBuilder, SimulationConfig};

use crate::args::SimArgs;

/// Merge command-line flags over the configuration file (if any) over the
/// defaults, and validate the result.
pub fn resolve_config(args: &SimArgs) -> Result<SimulationConfig> {
    let base = match &args.config {
        Some(path) => SimulationConfig::from_json_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => SimulationConfig::default(),
    };

    let mut builder = SimulationBuilder::from_config(base);
    if let Some(symbols) = &args.alphabet {
        builder = builder.alphabet_symbols(symbols.as_str());
    }
    if let Some(length) = args.length {
        builder = builder.sequence_length(length);
    }
    if let Some(mutations) = args.mutations {
        builder = builder.max_mutations(mutations);
    }
    if let Some(pairs) = args.pairs {
        builder = builder.baseline_pairs(pairs);
    }
    if let Some(seed) = args.seed {
        builder = builder.seed(seed);
    }

    builder
        .build_config()
        .context("Invalid simulation parameters")
}

/// Write `content` to `output`, or print it when no path is given.
pub fn write_output(content: &str, output: Option<&PathBuf>) -> Result<()> {
    if let Some(path) = output {
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        eprintln!("✓ Output written to: {}", path.display());
    } else {
        print!("{content}");
    }
    Ok(())
}

pub fn progress_bar(len: usize, enabled: bool) -> ProgressBar {
    if !enabled {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {per_sec}",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );
    pb
}
