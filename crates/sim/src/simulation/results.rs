//! Outputs of the divergence experiments.

use serde::{Deserialize, Serialize};

/// Edit distance recorded after each mutation step.
///
/// Index `M` holds the distance after `M` steps; index 0 is always 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DivergenceTrace {
    distances: Vec<usize>,
}

impl DivergenceTrace {
    pub fn new(distances: Vec<usize>) -> Self {
        Self { distances }
    }

    /// Distance after `m` mutation steps.
    #[inline]
    pub fn get(&self, m: usize) -> Option<usize> {
        self.distances.get(m).copied()
    }

    /// Largest mutation count recorded.
    pub fn max_mutations(&self) -> usize {
        self.distances.len().saturating_sub(1)
    }

    pub fn distances(&self) -> &[usize] {
        &self.distances
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Smallest `M` whose distance is at least `threshold`.
    pub fn first_reaching(&self, threshold: f64) -> Option<usize> {
        self.distances.iter().position(|&d| d as f64 >= threshold)
    }

    /// Iterate over `(M, distance)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.distances.iter().copied().enumerate()
    }
}

/// Edit distances between independently generated random pairs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaselineDistribution {
    pub distances: Vec<usize>,
    pub mean: f64,
    /// Population standard deviation
    pub std_dev: f64,
}

impl BaselineDistribution {
    /// Summarise a set of sampled distances. An empty sample has mean and
    /// standard deviation 0.
    pub fn from_distances(distances: Vec<usize>) -> Self {
        let n = distances.len();
        if n == 0 {
            return Self {
                distances,
                mean: 0.0,
                std_dev: 0.0,
            };
        }
        let mean = distances.iter().map(|&d| d as f64).sum::<f64>() / n as f64;
        let variance = distances
            .iter()
            .map(|&d| {
                let diff = d as f64 - mean;
                diff * diff
            })
            .sum::<f64>()
            / n as f64;
        Self {
            distances,
            mean,
            std_dev: variance.sqrt(),
        }
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    pub fn min(&self) -> Option<usize> {
        self.distances.iter().copied().min()
    }

    pub fn max(&self) -> Option<usize> {
        self.distances.iter().copied().max()
    }
}

/// Result of the twilight-zone analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TwilightReport {
    /// Distance between two lineages descending from a common origin
    pub lineage: DivergenceTrace,
    pub baseline: BaselineDistribution,
    /// First M with lineage distance >= baseline mean, if any
    pub twilight_m: Option<usize>,
}

impl TwilightReport {
    pub fn new(lineage: DivergenceTrace, baseline: BaselineDistribution) -> Self {
        let twilight_m = lineage.first_reaching(baseline.mean);
        Self {
            lineage,
            baseline,
            twilight_m,
        }
    }

    /// The threshold the lineage distance is compared against.
    pub fn threshold(&self) -> f64 {
        self.baseline.mean
    }
}
