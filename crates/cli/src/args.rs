use clap::Args;
use std::path::PathBuf;

use crate::defaults;

/// Simulation parameters. Flags override values from `--config`, which
/// override the built-in defaults.
#[derive(Args, Debug, Clone, Default)]
pub struct SimArgs {
    /// JSON configuration file (see `twilight config`)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Sequence length [default: 200]
    #[arg(short = 'L', long)]
    pub length: Option<usize>,

    /// Alphabet symbols [default: ACGTBD]
    #[arg(short, long)]
    pub alphabet: Option<String>,

    /// Maximum number of mutation steps [default: 300]
    #[arg(short, long)]
    pub mutations: Option<usize>,

    /// Number of random pairs in the baseline [default: 10000]
    #[arg(short = 'k', long)]
    pub pairs: Option<usize>,

    /// Random seed for reproducible runs
    #[arg(short, long)]
    pub seed: Option<u64>,
}

#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Output format (pretty, json, csv)
    #[arg(short, long, default_value = defaults::OUTPUT_FORMAT)]
    pub format: String,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct PalindromeArgs {
    /// Input FASTA file with a single record
    #[arg(short, long)]
    pub input: PathBuf,

    /// Number of palindromes to report
    #[arg(long, default_value_t = defaults::PALINDROME_TOP)]
    pub top: usize,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug)]
pub struct OrfArgs {
    /// Input FASTA file with a single record
    #[arg(short, long)]
    pub input: PathBuf,

    /// Minimum ORF length in nucleotides, stop codon included
    #[arg(long, default_value_t = twilight_analysis::DEFAULT_MIN_ORF_LENGTH)]
    pub min_length: usize,

    /// Number of ORFs to show at each end of the GC ranking
    #[arg(long, default_value_t = defaults::ORF_TOP)]
    pub top: usize,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug)]
pub struct ShuffleArgs {
    /// Input FASTA file with a single record
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output FASTA file
    #[arg(short, long)]
    pub output: PathBuf,

    /// Sequence line width
    #[arg(short, long, default_value_t = defaults::FASTA_WIDTH)]
    pub width: usize,

    /// Random seed for a reproducible shuffle
    #[arg(short, long)]
    pub seed: Option<u64>,
}
