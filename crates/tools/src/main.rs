use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use wander_core::{ReplayResult, journal_file, replay_to_end};

/// Replay a recorded input journal headlessly and print the final state
/// digest, for determinism checks and bug reports.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the journal JSON file to replay
    #[arg(short, long)]
    journal: PathBuf,

    /// Also print the full event log of the replayed run
    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let journal = journal_file::load(&args.journal)
        .with_context(|| format!("failed to read journal file: {}", args.journal.display()))?;

    let result: ReplayResult = replay_to_end(&journal)
        .map_err(|error| anyhow::anyhow!("replay failed during execution: {error:?}"))?;

    println!("Replay complete.");
    println!("Seed: {}", journal.seed);
    println!("Turns: {}", result.turns);
    println!("Tiles explored: {}", result.tiles_explored);
    println!("Rejected moves: {}", result.rejected_moves);
    println!("Snapshot hash: 0x{:016x}", result.final_snapshot_hash);

    if args.verbose {
        for event in &result.log {
            println!("{event:?}");
        }
    }

    Ok(())
}
