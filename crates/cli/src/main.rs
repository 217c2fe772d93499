mod args;
mod commands;
pub mod defaults;
mod printing;
mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use args::{OrfArgs, OutputArgs, PalindromeArgs, ShuffleArgs, SimArgs};
use commands::{baseline, config, diverge, orfs, palindromes, shuffle, twilight};

/// Twilight: a sequence divergence simulator.
///
/// Simulates random insertions, deletions and substitutions on sequences and
/// measures with the edit distance how quickly related sequences become
/// indistinguishable from unrelated ones. Also includes small scanners for
/// real genomes (complementary palindromes, ORFs, shuffling).
#[derive(Parser, Debug)]
#[command(name = "twilight")]
#[command(author, version, about = "Simulates sequence divergence under random mutation", long_about = None)]
struct Cli {
    /// Number of threads to use for parallel processing
    ///
    /// If not specified, defaults to the number of logical CPUs.
    #[arg(short = 't', long, global = true)]
    threads: Option<usize>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    ///
    /// RUST_LOG takes precedence when set.
    #[arg(short = 'v', long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write the default simulation configuration as JSON.
    ///
    /// Edit the file and pass it back with --config.
    Config {
        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Trace self-divergence and lineage divergence against mutation count.
    Diverge {
        #[command(flatten)]
        sim: SimArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Sample the edit distance between unrelated random sequences.
    Baseline {
        #[command(flatten)]
        sim: SimArgs,

        #[command(flatten)]
        output: OutputArgs,

        /// Number of histogram bins in pretty output
        #[arg(long, default_value_t = defaults::HISTOGRAM_BINS)]
        bins: usize,

        /// Hide the progress bar
        #[arg(long)]
        no_progress: bool,
    },

    /// Full experiment: divergence traces, baseline and the twilight zone.
    Twilight {
        #[command(flatten)]
        sim: SimArgs,

        #[command(flatten)]
        output: OutputArgs,

        /// Hide the progress bar
        #[arg(long)]
        no_progress: bool,
    },

    /// Find the longest reverse-complement palindromes in a FASTA sequence.
    Palindromes(PalindromeArgs),

    /// Find open reading frames and rank them by GC content.
    Orfs(OrfArgs),

    /// Shuffle a FASTA sequence, keeping its composition.
    Shuffle(ShuffleArgs),
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
        log::debug!("Using {threads} worker threads");
    }

    match cli.command {
        Commands::Config { output } => {
            config::write_default_config(output.as_ref())?;
        }
        Commands::Diverge { sim, output } => {
            diverge::run_diverge(&sim, &output)?;
        }
        Commands::Baseline {
            sim,
            output,
            bins,
            no_progress,
        } => {
            baseline::run_baseline(&sim, &output, bins, !no_progress)?;
        }
        Commands::Twilight {
            sim,
            output,
            no_progress,
        } => {
            twilight::run_twilight(&sim, &output, !no_progress)?;
        }
        Commands::Palindromes(args) => {
            palindromes::find_palindromes(&args)?;
        }
        Commands::Orfs(args) => {
            orfs::find_orfs(&args)?;
        }
        Commands::Shuffle(args) => {
            shuffle::shuffle_fasta(&args)?;
        }
    }

    Ok(())
}
