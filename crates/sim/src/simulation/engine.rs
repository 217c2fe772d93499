//! Simulation engine for the divergence experiments.
//!
//! A `Simulation` owns its configuration and a single seeded RNG. Every
//! experiment draws from that RNG in a fixed order, so two simulations
//! built from the same seeded configuration produce identical results.

use crate::base::Sequence;
use crate::errors::ConfigError;
use crate::evolution::mutation::{mutate_in_place, MutationKind};
use crate::evolution::generate_random_sequence;
use crate::simulation::{BaselineDistribution, DivergenceTrace, SimulationConfig, TwilightReport};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use rayon::prelude::*;

/// Main simulation engine.
#[derive(Debug, Clone)]
pub struct Simulation {
    /// Simulation configuration
    config: SimulationConfig,
    /// Random number generator (using Xoshiro256++ for better performance)
    rng: Xoshiro256PlusPlus,
}

impl Simulation {
    /// Create a simulation from a validated configuration.
    ///
    /// Without a seed the RNG is initialised from OS entropy.
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let rng = if let Some(seed) = config.seed {
            Xoshiro256PlusPlus::seed_from_u64(seed)
        } else {
            Xoshiro256PlusPlus::from_seed(rand::rng().random())
        };

        log::debug!(
            "Created simulation: alphabet={}, length={}, max_mutations={}, pairs={}, seed={:?}",
            config.alphabet,
            config.sequence_length,
            config.max_mutations,
            config.baseline_pairs,
            config.seed
        );

        Ok(Self { config, rng })
    }

    /// Get simulation configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Generate a fresh random sequence of the configured length.
    pub fn random_sequence(&mut self) -> Sequence {
        generate_random_sequence(
            self.config.sequence_length,
            &self.config.alphabet,
            &mut self.rng,
        )
    }

    /// Mutate a random origin step by step and trace its distance to the
    /// origin.
    pub fn self_divergence(&mut self) -> DivergenceTrace {
        let origin = self.random_sequence();
        let max = self.config.max_mutations;
        log::info!("Self-divergence: {max} mutation steps from a length-{} origin", origin.len());

        let mut current = origin.clone();
        let mut distances = Vec::with_capacity(max + 1);
        distances.push(0);
        for m in 1..=max {
            self.mutate(&mut current);
            let d = current.distance_to(&origin);
            log::trace!("M={m} distance={d}");
            distances.push(d);
        }

        DivergenceTrace::new(distances)
    }

    /// Evolve two lineages from a common random origin and trace the
    /// distance between them. Each step mutates lineage A, then lineage B.
    pub fn lineage_divergence(&mut self) -> DivergenceTrace {
        let origin = self.random_sequence();
        let max = self.config.max_mutations;
        log::info!("Lineage divergence: {max} mutation steps per lineage");

        let mut lineage_a = origin.clone();
        let mut lineage_b = origin;
        let mut distances = Vec::with_capacity(max + 1);
        distances.push(0);
        for m in 1..=max {
            self.mutate(&mut lineage_a);
            self.mutate(&mut lineage_b);
            let d = lineage_a.distance_to(&lineage_b);
            log::trace!("M={m} distance={d}");
            distances.push(d);
        }

        DivergenceTrace::new(distances)
    }

    /// Sample the distance between independent random pairs.
    pub fn baseline_distribution(&mut self) -> BaselineDistribution {
        self.baseline_distribution_with_progress(|| {})
    }

    /// Like [`baseline_distribution`](Self::baseline_distribution), calling
    /// `on_pair` after each pair is measured.
    ///
    /// Pairs run in parallel. Each pair gets its own RNG seeded from the
    /// simulation RNG, so the result does not depend on the thread count.
    pub fn baseline_distribution_with_progress<F>(&mut self, on_pair: F) -> BaselineDistribution
    where
        F: Fn() + Sync + Send,
    {
        let pairs = self.config.baseline_pairs;
        log::info!(
            "Baseline: {pairs} random pairs of length {}",
            self.config.sequence_length
        );

        // Generate seeds for each pair
        let seeds: Vec<u64> = (0..pairs).map(|_| self.rng.random()).collect();

        let length = self.config.sequence_length;
        let alphabet = &self.config.alphabet;
        let distances: Vec<usize> = seeds
            .par_iter()
            .map(|&seed| {
                let mut local_rng = Xoshiro256PlusPlus::seed_from_u64(seed);
                let a = generate_random_sequence(length, alphabet, &mut local_rng);
                let b = generate_random_sequence(length, alphabet, &mut local_rng);
                let d = a.distance_to(&b);
                on_pair();
                d
            })
            .collect();

        let baseline = BaselineDistribution::from_distances(distances);
        log::info!(
            "Baseline mean={:.3} std_dev={:.3}",
            baseline.mean,
            baseline.std_dev
        );
        baseline
    }

    /// Lineage divergence followed by the baseline; reports the first
    /// mutation count at which the lineages are as far apart as unrelated
    /// sequences are on average.
    pub fn twilight_zone(&mut self) -> TwilightReport {
        self.twilight_zone_with_progress(|| {})
    }

    pub fn twilight_zone_with_progress<F>(&mut self, on_pair: F) -> TwilightReport
    where
        F: Fn() + Sync + Send,
    {
        let lineage = self.lineage_divergence();
        let baseline = self.baseline_distribution_with_progress(on_pair);
        let report = TwilightReport::new(lineage, baseline);
        match report.twilight_m {
            Some(m) => log::info!("Twilight zone reached at M={m}"),
            None => log::info!(
                "Twilight zone not reached within {} mutations",
                self.config.max_mutations
            ),
        }
        report
    }

    fn mutate(&mut self, sequence: &mut Sequence) {
        let kind = MutationKind::random(&mut self.rng);
        mutate_in_place(kind, sequence, &self.config.alphabet, &mut self.rng);
    }
}
