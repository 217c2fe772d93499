use anyhow::{Context, Result};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use std::fs::File;
use std::io::{BufWriter, Write};
use twilight_sim::evolution::shuffle_sequence;
use twilight_sim::io::{read_single_fasta, write_fasta, FastaRecord};

use crate::args::ShuffleArgs;

pub fn shuffle_fasta(args: &ShuffleArgs) -> Result<()> {
    let record = read_single_fasta(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;

    let mut rng = if let Some(seed) = args.seed {
        Xoshiro256PlusPlus::seed_from_u64(seed)
    } else {
        Xoshiro256PlusPlus::from_seed(rand::rng().random())
    };

    let shuffled = FastaRecord {
        sequence: shuffle_sequence(&record.sequence, &mut rng),
        ..record
    };

    let file = File::create(&args.output)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;
    let mut writer = BufWriter::new(file);
    write_fasta(&mut writer, &shuffled, args.width)?;
    writer.flush()?;

    println!(
        "✓ Shuffled {} ({} bp) written to: {}",
        shuffled.id,
        shuffled.sequence.len(),
        args.output.display()
    );
    Ok(())
}
