//! tfgen CLI - Command line interface for splittable Threefish streams.
//!
//! This tool seeds a generator, walks it down the split tree and prints
//! the resulting words, or evaluates the raw block cipher.

mod job;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use tfgen_common::Seed;
use tfgen_crypto::{encrypt_block32, encrypt_block64};

use crate::job::{Fork, Job, DEFAULT_COUNT};

#[derive(Debug, Parser)]
#[command(name = "tfgen")]
#[command(about = "tfgen - Splittable Threefish-256 random streams")]
#[command(version)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print words from a seeded generator.
    Words {
        /// Seed words, comma-separated (decimal or 0x-prefixed hex).
        #[arg(short, long, required_unless_present = "job")]
        seed: Option<Seed>,

        /// Words to discard before forking.
        #[arg(long, default_value_t = 0)]
        skip: usize,

        /// Words to print.
        #[arg(short = 'n', long, default_value_t = DEFAULT_COUNT)]
        count: usize,

        /// Fork step, repeatable: "parent", "child", "level" or "batch:WIDTH:INDEX".
        #[arg(short, long = "fork")]
        forks: Vec<Fork>,

        /// Read seed, skip, count and forks from a JSON job file instead.
        #[arg(short, long, conflicts_with_all = ["seed", "skip", "count", "forks"])]
        job: Option<PathBuf>,

        /// Print a JSON report instead of one word per line.
        #[arg(long)]
        json: bool,
    },

    /// Encrypt one Threefish-256 block.
    Encrypt {
        /// Key words, comma-separated.
        #[arg(short, long)]
        key: Seed,

        /// Plaintext block words, comma-separated.
        #[arg(short, long)]
        block: Seed,

        /// Print eight 32-bit words instead of four 64-bit words.
        #[arg(long)]
        words32: bool,
    },
}

/// JSON output of the `words` command.
#[derive(Serialize)]
struct Report<'a> {
    job: &'a Job,
    words: Vec<u32>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging; stdout carries the words
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Words {
            seed,
            skip,
            count,
            forks,
            job,
            json,
        } => {
            let job = match (job, seed) {
                (Some(path), _) => Job::load(&path)?,
                (None, Some(seed)) => Job {
                    seed,
                    skip,
                    count,
                    forks,
                },
                (None, None) => anyhow::bail!("Either --seed or --job is required"),
            };
            cmd_words(&job, json)
        }

        Commands::Encrypt {
            key,
            block,
            words32,
        } => cmd_encrypt(&key, &block, words32),
    }
}

/// Run a job and print its words.
fn cmd_words(job: &Job, json: bool) -> Result<()> {
    info!(
        "Sampling {} words from seed {} after {} fork(s)",
        job.count,
        job.seed,
        job.forks.len()
    );

    let words = job.run().context("Failed to run job")?;

    if json {
        let report = Report { job, words };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for word in words {
            println!("{:#010x}", word);
        }
    }

    Ok(())
}

/// Encrypt a single block and print the result.
fn cmd_encrypt(key: &Seed, block: &Seed, words32: bool) -> Result<()> {
    for line in encrypt_lines(key, block, words32) {
        println!("{}", line);
    }

    Ok(())
}

fn encrypt_lines(key: &Seed, block: &Seed, words32: bool) -> Vec<String> {
    if words32 {
        encrypt_block32(key.words(), block.words())
            .iter()
            .map(|word| format!("{:#010x}", word))
            .collect()
    } else {
        encrypt_block64(key.words(), block.words())
            .iter()
            .map(|word| format!("{:#018x}", word))
            .collect()
    }
}
