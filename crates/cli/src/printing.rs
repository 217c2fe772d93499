use twilight_analysis::utils::histogram;
use twilight_sim::simulation::{BaselineDistribution, DivergenceTrace, SimulationConfig, TwilightReport};

use crate::defaults;

pub fn format_parameters(config: &SimulationConfig) -> String {
    let mut out = String::new();
    out.push_str("\n📋 Simulation Configuration\n");
    out.push_str(&format!(
        "  • Alphabet: {} ({} symbols) [-a, --alphabet]\n",
        config.alphabet,
        config.alphabet.len()
    ));
    out.push_str(&format!(
        "  • Sequence Length: {} [-L, --length]\n",
        config.sequence_length
    ));
    out.push_str(&format!(
        "  • Max Mutations: {} [-m, --mutations]\n",
        config.max_mutations
    ));
    out.push_str(&format!(
        "  • Baseline Pairs: {} [-k, --pairs]\n",
        config.baseline_pairs
    ));
    match config.seed {
        Some(seed) => out.push_str(&format!("  • Random Seed: {seed} [-s, --seed]\n")),
        None => out.push_str("  • Random Seed: Random [-s, --seed]\n"),
    }
    out
}

/// Rows every `stride` steps, always including the last one.
fn sampled_steps(max: usize, stride: usize) -> Vec<usize> {
    let stride = stride.max(1);
    let mut steps: Vec<usize> = (0..=max).step_by(stride).collect();
    if steps.last() != Some(&max) {
        steps.push(max);
    }
    steps
}

fn cell(value: Option<usize>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

/// Side-by-side table of the self and lineage traces.
pub fn format_trace_table(self_trace: &DivergenceTrace, lineage: &DivergenceTrace) -> String {
    let max = self_trace.max_mutations().max(lineage.max_mutations());
    let mut out = String::new();
    out.push_str(&format!("{:>8}  {:>14}  {:>17}\n", "M", "self distance", "lineage distance"));
    out.push_str(&format!("{}\n", "-".repeat(43)));
    for m in sampled_steps(max, defaults::TRACE_STRIDE) {
        out.push_str(&format!(
            "{:>8}  {:>14}  {:>17}\n",
            m,
            cell(self_trace.get(m)),
            cell(lineage.get(m))
        ));
    }
    out
}

pub fn format_baseline_summary(baseline: &BaselineDistribution) -> String {
    let mut out = String::new();
    out.push_str(&format!("  • Pairs: {}\n", baseline.len()));
    out.push_str(&format!("  • Mean Distance: {:.3}\n", baseline.mean));
    out.push_str(&format!("  • Std. Deviation: {:.3}\n", baseline.std_dev));
    if let (Some(min), Some(max)) = (baseline.min(), baseline.max()) {
        out.push_str(&format!("  • Range: {min}..={max}\n"));
    }
    out
}

/// Text histogram with bars scaled to the fullest bin.
pub fn format_histogram(values: &[usize], bins: usize) -> String {
    let values: Vec<f64> = values.iter().map(|&v| v as f64).collect();
    let bins = histogram(&values, bins);
    let peak = bins.iter().map(|b| b.count).max().unwrap_or(0).max(1);

    let mut out = String::new();
    for bin in &bins {
        let bar = bin.count * defaults::HISTOGRAM_WIDTH / peak;
        out.push_str(&format!(
            "  {:>8.1} – {:<8.1} │{} {}\n",
            bin.lower,
            bin.upper,
            "█".repeat(bar),
            bin.count
        ));
    }
    out
}

pub fn format_twilight(report: &TwilightReport, max_mutations: usize) -> String {
    match report.twilight_m {
        Some(m) => format!(
            "  • Twilight zone reached at M = {m} (lineage distance {} ≥ baseline mean {:.3})\n",
            report.lineage.get(m).unwrap_or_default(),
            report.threshold()
        ),
        None => format!(
            "  • Twilight zone not reached within {max_mutations} mutations (baseline mean {:.3})\n",
            report.threshold()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sampled_steps() {
        assert_eq!(sampled_steps(25, 10), vec![0, 10, 20, 25]);
        assert_eq!(sampled_steps(20, 10), vec![0, 10, 20]);
        assert_eq!(sampled_steps(0, 10), vec![0]);
        assert_eq!(sampled_steps(3, 0), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_format_histogram() {
        let text = format_histogram(&[1, 1, 1, 5], 2);
        assert_eq!(text.lines().count(), 2);
        assert!(text.lines().next().unwrap().ends_with(" 3"));
    }

    #[test]
    fn test_format_twilight_not_reached() {
        let report = TwilightReport::new(
            DivergenceTrace::new(vec![0, 1]),
            BaselineDistribution::from_distances(vec![10]),
        );
        assert!(format_twilight(&report, 1).contains("not reached within 1"));
    }
}
