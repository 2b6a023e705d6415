//! Run many duplicate games, in parallel when the `rayon` feature is enabled.
use crate::dawg::Dawg;
use crate::game::DuplicateGame;
use crate::Error;
use rand::{rngs::StdRng, Rng, SeedableRng};
#[cfg(feature = "rayon")]
use rayon::prelude::*;
#[cfg(feature = "serde")]
use serde::Serialize;
use std::fmt;
use std::time::{Duration, Instant};

/// The result of one duplicate game
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct GameStats {
    pub seed: u64,
    pub total_score: u32,
    pub move_count: usize,
    pub bingo_count: usize,
    pub duration: Duration,
}

impl fmt::Display for GameStats {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "seed {:>20} score {:4} moves {:3} bingos {:2} ({:.3} s)",
            self.seed,
            self.total_score,
            self.move_count,
            self.bingo_count,
            self.duration.as_secs_f32()
        )
    }
}

/// Largest seed drawn by [`random_seeds`]
const MAX_SEED: u64 = 1_000_000;

/// `n` game seeds in `1..=1_000_000`. With `seed` the list is reproducible.
pub fn random_seeds(n: usize, seed: Option<u64>) -> Vec<u64> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    (0..n).map(|_| rng.gen_range(1..=MAX_SEED)).collect()
}

/// Play a duplicate game with `seed`
pub fn play_game(dawg: &Dawg, seed: u64) -> Result<GameStats, Error> {
    let now = Instant::now();
    let mut game = DuplicateGame::new(dawg, seed);
    let state = game.play_game()?;
    Ok(GameStats {
        seed,
        total_score: state.total_score(),
        move_count: state.move_count(),
        bingo_count: state.bingo_count(),
        duration: now.elapsed(),
    })
}

/// Play a duplicate game for every seed. The results are in the order of `seeds`.
#[cfg(not(feature = "rayon"))]
pub fn simulate_games(dawg: &Dawg, seeds: &[u64]) -> Result<Vec<GameStats>, Error> {
    seeds
        .iter()
        .map(|&seed| play_game(dawg, seed))
        .collect::<Result<Vec<_>, Error>>()
}

/// Play a duplicate game for every seed. The results are in the order of `seeds`.
#[cfg(feature = "rayon")]
pub fn simulate_games(dawg: &Dawg, seeds: &[u64]) -> Result<Vec<GameStats>, Error> {
    seeds
        .par_iter()
        .map(|&seed| play_game(dawg, seed))
        .collect::<Result<Vec<_>, Error>>()
}

/// Totals over a number of games
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Summary {
    pub games: usize,
    pub min_score: u32,
    pub max_score: u32,
    pub median_score: u32,
    pub mean_score: f64,
    pub mean_moves: f64,
    pub total_bingos: usize,
    pub duration: Duration,
}

impl Summary {
    pub fn new(stats: &[GameStats]) -> Summary {
        if stats.is_empty() {
            return Summary::default();
        }
        let games = stats.len();
        let mut scores: Vec<u32> = stats.iter().map(|s| s.total_score).collect();
        scores.sort_unstable();
        let total_score: u64 = stats.iter().map(|s| s.total_score as u64).sum();
        let total_moves: usize = stats.iter().map(|s| s.move_count).sum();
        Summary {
            games,
            min_score: scores[0],
            max_score: scores[games - 1],
            median_score: scores[games / 2],
            mean_score: total_score as f64 / games as f64,
            mean_moves: total_moves as f64 / games as f64,
            total_bingos: stats.iter().map(|s| s.bingo_count).sum(),
            duration: stats.iter().map(|s| s.duration).sum(),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Games: {}", self.games)?;
        writeln!(
            f,
            "Score: mean {:.1}, median {}, min {}, max {}",
            self.mean_score, self.median_score, self.min_score, self.max_score
        )?;
        writeln!(f, "Moves per game: {:.1}", self.mean_moves)?;
        write!(f, "Bingos: {}", self.total_bingos)
    }
}
