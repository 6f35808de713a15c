use anyhow::Result;
use async_trait::async_trait;

use super::models::Game;

/// Trait every upstream tip source must implement.
#[async_trait]
pub trait GameSource: Send + Sync {
    /// Return every tip currently published by the source.
    async fn fetch_games(&self) -> Result<Vec<Game>>;

    /// Human-readable name for logging.
    fn name(&self) -> &str;
}
