use axum::{
    extract::State,
    http::StatusCode,
    response::Html,
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::{debug, error, info};

use crate::dataset::GameSource;
use crate::picker::{eligible_games, pick_slip};

pub mod page;

/// Message rendered when the picker comes up empty-handed.
const NO_SLIP_MESSAGE: &str =
    "No games found matching the criteria. Try adjusting the odds filters.";

#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn GameSource>,
}

/// Build the Axum router for the picks page.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(state))
}

/// GET /: fetch, filter, pick, render.
///
/// Upstream failures become a JSON error body; an empty pick is a normal
/// outcome and renders the fallback page.
async fn index_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, (StatusCode, Json<serde_json::Value>)> {
    let games = state.source.fetch_games().await.map_err(|e| {
        error!("Fetch from {} failed: {:#}", state.source.name(), e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "error": e.to_string() })),
        )
    })?;
    debug!(
        "Fetched {} tips, first records: {:?}",
        games.len(),
        &games[..games.len().min(5)]
    );

    let pool = eligible_games(&games);
    info!("{} of {} tips eligible", pool.len(), games.len());

    let html = match pick_slip(&mut rand::thread_rng(), &pool) {
        Some(slip) => {
            let total: f64 = slip.iter().map(|g| g.bet_odds).sum();
            info!("Slip picked: {} legs, total odds {:.2}", slip.len(), total);
            page::render_slip(&slip)
        }
        None => {
            info!("No qualifying slip within the attempt cap");
            page::render_fallback(Some(NO_SLIP_MESSAGE))
        }
    };
    Ok(Html(html))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{DatasetError, Game};
    use anyhow::Result;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    struct FixedSource(Vec<Game>);

    #[async_trait]
    impl GameSource for FixedSource {
        fn name(&self) -> &str {
            "fixed"
        }

        async fn fetch_games(&self) -> Result<Vec<Game>> {
            Ok(self.0.clone())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl GameSource for FailingSource {
        fn name(&self) -> &str {
            "failing"
        }

        async fn fetch_games(&self) -> Result<Vec<Game>> {
            Err(DatasetError::Malformed.into())
        }
    }

    fn eligible_game(odds: f64) -> Game {
        Game {
            bet_choice: "1".to_string(),
            bet_odds: odds,
            event_name: Some("Foo vs Bar".to_string()),
            display_odds: Some(format!("{:.2}", odds)),
        }
    }

    async fn get_index(state: AppState) -> (StatusCode, String) {
        let app = router(state);
        let resp = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_upstream_failure_becomes_json_error() {
        let state = AppState {
            source: Arc::new(FailingSource),
        };
        let (status, body) = get_index(state).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert!(parsed["error"].as_str().unwrap().contains("JSON array"));
    }

    #[tokio::test]
    async fn test_empty_dataset_renders_fallback() {
        let state = AppState {
            source: Arc::new(FixedSource(Vec::new())),
        };
        let (status, body) = get_index(state).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(NO_SLIP_MESSAGE));
    }

    #[tokio::test]
    async fn test_unpickable_pool_renders_fallback() {
        // Five eligible tips always sum to at least 5.5, outside the slip
        // window, so the picker must fall through to the message page.
        let games = (0..5).map(|_| eligible_game(1.5)).collect();
        let state = AppState {
            source: Arc::new(FixedSource(games)),
        };
        let (status, body) = get_index(state).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(NO_SLIP_MESSAGE));
        assert!(!body.contains("<div class=\"game\">"));
    }
}
