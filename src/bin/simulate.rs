//! Simulate duplicate games and print score statistics.
use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use scradle::logging::init_logger;
use scradle::simulate::{random_seeds, simulate_games, Summary};
use scradle::Dawg;
use std::time::Instant;

/// Play duplicate scrabble games, always playing the best move.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of games to simulate
    #[arg(default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..))]
    games: u32,

    /// Dictionary with one word per line
    #[arg(short, long, default_value = "wordlists/ods8_complete.txt")]
    dictionary: String,

    /// Seed for the game seeds, random if not given
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of threads, all cores if not given
    #[arg(short, long)]
    threads: Option<usize>,

    /// Log every move
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.debug);

    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("Could not configure the thread pool")?;
    }
    info!("Using {} threads", rayon::current_num_threads());

    let dawg = Dawg::from_file(&args.dictionary)
        .with_context(|| format!("Failed to load dictionary {}", args.dictionary))?;
    info!("{}", dawg);

    let seeds = random_seeds(args.games as usize, args.seed);
    info!("Simulating {} games", seeds.len());
    let now = Instant::now();
    let stats = simulate_games(&dawg, &seeds)?;
    let elapsed = now.elapsed();

    for (i, game) in stats.iter().enumerate() {
        println!("Game {:3}: {}", i + 1, game);
    }
    println!();
    println!("{}", Summary::new(&stats));
    println!(
        "Total time: {:.2} s, {:.3} s per game",
        elapsed.as_secs_f32(),
        elapsed.as_secs_f32() / stats.len() as f32
    );
    Ok(())
}
