use rand::seq::SliceRandom;
use rand::Rng;

use crate::dataset::Game;

/// Number of legs in a slip.
pub const SLIP_SIZE: usize = 5;

/// Sampling attempts before giving up on the current pool.
pub const MAX_ATTEMPTS: usize = 100;

/// Inclusive range the summed odds of a slip must land in.
pub const MIN_TOTAL_ODDS: f64 = 3.0;
pub const MAX_TOTAL_ODDS: f64 = 4.5;

/// Pick a slip of [`SLIP_SIZE`] distinct tips whose odds sum to
/// [`MIN_TOTAL_ODDS`]..=[`MAX_TOTAL_ODDS`].
///
/// Monte-Carlo search: each attempt draws a uniform sample without
/// replacement and the first sample inside the window wins. A pool of 200
/// tips has ~2.5 billion 5-subsets, so exhaustive search is off the table;
/// the attempt cap trades completeness for bounded latency. The success
/// guarantee is therefore probabilistic only: `None` can come back even
/// when a valid combination exists, and that is expected behaviour.
///
/// Pools smaller than [`SLIP_SIZE`] always yield `None`.
pub fn pick_slip<R: Rng + ?Sized>(rng: &mut R, pool: &[Game]) -> Option<Vec<Game>> {
    if pool.len() < SLIP_SIZE {
        return None;
    }

    for _ in 0..MAX_ATTEMPTS {
        let slip: Vec<Game> = pool.choose_multiple(rng, SLIP_SIZE).cloned().collect();
        let total: f64 = slip.iter().map(|g| g.bet_odds).sum();
        if (MIN_TOTAL_ODDS..=MAX_TOTAL_ODDS).contains(&total) {
            return Some(slip);
        }
    }

    None
}
