//! Integration tests for complete simulation workflows.

use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use twilight::analysis::{histogram, mean, median, pairwise_distances, std_dev};
use twilight::prelude::*;
use twilight::sim::evolution::shuffle_sequence;
use twilight::sim::io::{read_fasta, write_fasta};

#[test]
fn test_complete_twilight_workflow() {
    let mut sim = SimulationBuilder::new()
        .alphabet(Alphabet::extended())
        .sequence_length(50)
        .max_mutations(150)
        .baseline_pairs(300)
        .seed(12345)
        .build()
        .unwrap();

    let self_trace = sim.self_divergence();
    assert_eq!(self_trace.len(), 151);
    assert_eq!(self_trace.get(0), Some(0));
    for (m, d) in self_trace.iter() {
        assert!(d <= m, "distance {d} exceeds mutation count {m}");
    }

    let report = sim.twilight_zone();
    assert_eq!(report.lineage.len(), 151);
    assert_eq!(report.baseline.len(), 300);
    assert!(report.baseline.distances.iter().all(|&d| d <= 50));

    assert_eq!(
        report.lineage.first_reaching(report.threshold()),
        report.twilight_m
    );
    if let Some(m) = report.twilight_m {
        assert!(m > 0);
        assert!(report.lineage.get(m).unwrap() as f64 >= report.threshold());
    }
}

#[test]
fn test_baseline_statistics_match_analysis() {
    let mut sim = SimulationBuilder::new()
        .sequence_length(30)
        .baseline_pairs(100)
        .seed(5)
        .build()
        .unwrap();

    let baseline = sim.baseline_distribution();
    let values: Vec<f64> = baseline.distances.iter().map(|&d| d as f64).collect();

    assert!((baseline.mean - mean(&values)).abs() < 1e-9);
    assert!((baseline.std_dev - std_dev(&values)).abs() < 1e-9);
    assert!(baseline.min().unwrap() as f64 <= baseline.mean);
    assert!(baseline.max().unwrap() as f64 >= baseline.mean);

    let mut sorted = values.clone();
    let med = median(&mut sorted);
    assert!(med >= baseline.min().unwrap() as f64);

    let bins = histogram(&values, 10);
    let total: usize = bins.iter().map(|b| b.count).sum();
    assert_eq!(total, 100);
}

#[test]
fn test_mutated_family_distances() {
    let alphabet = Alphabet::dna();
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(3);
    let origin = generate_random_sequence(40, &alphabet, &mut rng);

    let family: Vec<Sequence> = (0..5)
        .map(|steps| mutate_n(&origin, &alphabet, steps, &mut rng))
        .collect();

    let distances = pairwise_distances(&family);
    assert_eq!(distances.len(), 10);
    // family[0] is the unmutated origin
    assert_eq!(family[0], origin);
    for (steps, member) in family.iter().enumerate() {
        assert!(member.distance_to(&origin) <= steps);
    }
}

#[test]
fn test_shuffle_fasta_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shuffled.fasta");

    let mut rng = Xoshiro256PlusPlus::seed_from_u64(8);
    let original = generate_random_sequence(150, &Alphabet::dna(), &mut rng);
    let shuffled = shuffle_sequence(&original, &mut rng);

    let record = FastaRecord::new("shuffled", shuffled.clone());
    let mut file = std::fs::File::create(&path).unwrap();
    write_fasta(&mut file, &record, 60).unwrap();
    drop(file);

    let records = read_fasta(&path).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, "shuffled");
    assert_eq!(records[0].sequence, shuffled);

    let mut a = original.as_slice().to_vec();
    let mut b = records[0].sequence.as_slice().to_vec();
    a.sort_unstable();
    b.sort_unstable();
    assert_eq!(a, b);
}

#[test]
fn test_config_json_drives_simulation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");

    let config = SimulationConfig {
        alphabet: Alphabet::dna(),
        sequence_length: 25,
        max_mutations: 10,
        baseline_pairs: 20,
        seed: Some(77),
    };
    config.to_json_file(&path).unwrap();

    let loaded = SimulationConfig::from_json_file(&path).unwrap();
    assert_eq!(loaded, config);

    let mut from_file = Simulation::new(loaded).unwrap();
    let mut direct = Simulation::new(config).unwrap();
    assert_eq!(from_file.lineage_divergence(), direct.lineage_divergence());
}
