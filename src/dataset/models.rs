use serde_json::Value;

/// One betting tip from the upstream dataset.
///
/// The scraper is loose about field naming, so the presentation fields try
/// both spellings in a fixed order: `Event_name` before `event_name`, and
/// `Bet_odds` before `bet_odds`.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    /// Raw `Bet_choice` text; empty when the key is missing or not a string.
    pub bet_choice: String,
    /// Parsed `Bet_odds`; missing/unparseable values become 0.0 so they fall
    /// out of the eligibility range instead of failing the request.
    pub bet_odds: f64,
    /// Match label for the rendered page.
    pub event_name: Option<String>,
    /// Odds exactly as the dataset spells them, for display.
    pub display_odds: Option<String>,
}

impl Game {
    pub fn from_item(item: &Value) -> Game {
        Game {
            bet_choice: item["Bet_choice"].as_str().unwrap_or("").to_string(),
            bet_odds: parse_odds(item),
            event_name: first_text(item, &["Event_name", "event_name"]),
            display_odds: first_text(item, &["Bet_odds", "bet_odds"]),
        }
    }
}

/// Convert the raw dataset body into games.
///
/// Returns `None` when the body is not a JSON array of objects.
pub fn games_from_value(raw: &Value) -> Option<Vec<Game>> {
    let items = raw.as_array()?;
    items
        .iter()
        .map(|item| item.as_object().map(|_| Game::from_item(item)))
        .collect()
}

fn parse_odds(item: &Value) -> f64 {
    match &item["Bet_odds"] {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

/// First of `keys` whose value renders as non-empty text.
fn first_text(item: &Value, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| match &item[*key] {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}
