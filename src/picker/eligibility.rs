use crate::dataset::Game;

/// Bet choices the picker will consider: home win, away win, both teams to
/// score. Everything else the scraper emits is ignored.
const ALLOWED_CHOICES: [&str; 3] = ["1", "2", "btts yes"];

/// Inclusive odds range a single tip must fall in.
pub const MIN_ODDS: f64 = 1.10;
pub const MAX_ODDS: f64 = 1.90;

/// The pool keeps only the first this-many eligible tips, in source order.
pub const POOL_CAP: usize = 200;

/// Whether a single tip qualifies for the selection pool.
pub fn is_eligible(game: &Game) -> bool {
    let choice = game.bet_choice.trim().to_lowercase();
    ALLOWED_CHOICES.contains(&choice.as_str())
        && (MIN_ODDS..=MAX_ODDS).contains(&game.bet_odds)
}

/// Filter the fetched tips down to the selection pool.
///
/// Pure: input order is preserved and nothing beyond the choice/odds
/// predicate is consulted. The result is truncated to [`POOL_CAP`] entries.
pub fn eligible_games(games: &[Game]) -> Vec<Game> {
    games
        .iter()
        .filter(|g| is_eligible(g))
        .take(POOL_CAP)
        .cloned()
        .collect()
}
