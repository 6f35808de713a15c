use crate::dataset::Game;

/// Shown when a slip leg has no usable event name.
pub const EVENT_PLACEHOLDER: &str = "Event Not Available";

/// Fallback body when the caller supplies no message of its own.
pub const DEFAULT_FALLBACK: &str = "No games found matching the criteria.";

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>OSO Bet Predictions</title>
<style>
  body { font-family: Arial, sans-serif; margin: 20px; padding: 20px; background-color: #f4f4f9; color: #333; }
  h1 { color: #0056b3; }
  .game { border: 1px solid #ddd; border-radius: 5px; padding: 10px; margin-bottom: 10px; background: #fff; }
</style>
</head>
<body>
<h1>OSO Bet Predictions</h1>
"#;

const PAGE_FOOT: &str = "</body>\n</html>\n";

/// Human-readable label for a raw bet choice. Unknown choices pass through
/// verbatim.
pub fn choice_label(raw: &str) -> &str {
    if raw == "1" {
        "Home Win"
    } else if raw == "2" {
        "Away Win"
    } else if raw.eq_ignore_ascii_case("btts yes") {
        "BTTS Yes"
    } else {
        raw
    }
}

/// Render the selected slip as the predictions page.
pub fn render_slip(slip: &[Game]) -> String {
    let mut out = String::from(PAGE_HEAD);
    for game in slip {
        let event = game.event_name.as_deref().unwrap_or(EVENT_PLACEHOLDER);
        let odds = game.display_odds.as_deref().unwrap_or("N/A");
        out.push_str("<div class=\"game\">\n");
        out.push_str(&format!(
            "  <p><strong>Match:</strong> {}</p>\n",
            escape(event)
        ));
        out.push_str(&format!(
            "  <p><strong>Bet Choice:</strong> {}</p>\n",
            escape(choice_label(&game.bet_choice))
        ));
        out.push_str(&format!("  <p><strong>Odds:</strong> {}</p>\n", escape(odds)));
        out.push_str("</div>\n");
    }
    out.push_str(PAGE_FOOT);
    out
}

/// Render the no-slip page with `message`, or [`DEFAULT_FALLBACK`] when none
/// is supplied.
pub fn render_fallback(message: Option<&str>) -> String {
    let message = message.unwrap_or(DEFAULT_FALLBACK);
    format!("{}<p>{}</p>\n{}", PAGE_HEAD, escape(message), PAGE_FOOT)
}

/// Minimal HTML escaping for text interpolated from the upstream dataset.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(choice: &str) -> Game {
        Game {
            bet_choice: choice.to_string(),
            bet_odds: 1.5,
            event_name: Some("Foo vs Bar".to_string()),
            display_odds: Some("1.50".to_string()),
        }
    }

    #[test]
    fn test_choice_labels() {
        assert_eq!(choice_label("1"), "Home Win");
        assert_eq!(choice_label("2"), "Away Win");
        assert_eq!(choice_label("btts yes"), "BTTS Yes");
        assert_eq!(choice_label("BTTS Yes"), "BTTS Yes");
        assert_eq!(choice_label("over 2.5"), "over 2.5");
    }

    #[test]
    fn test_render_slip_shows_all_legs() {
        let slip = vec![game("1"), game("2"), game("btts yes")];
        let html = render_slip(&slip);
        assert_eq!(html.matches("<div class=\"game\">").count(), 3);
        assert!(html.contains("Home Win"));
        assert!(html.contains("Away Win"));
        assert!(html.contains("BTTS Yes"));
        assert!(html.contains("Foo vs Bar"));
        assert!(html.contains("1.50"));
    }

    #[test]
    fn test_render_slip_placeholders() {
        let mut g = game("1");
        g.event_name = None;
        g.display_odds = None;
        let html = render_slip(&[g]);
        assert!(html.contains(EVENT_PLACEHOLDER));
        assert!(html.contains("N/A"));
    }

    #[test]
    fn test_render_fallback_default_and_custom() {
        assert!(render_fallback(None).contains(DEFAULT_FALLBACK));
        let html = render_fallback(Some("Dataset is empty today."));
        assert!(html.contains("Dataset is empty today."));
        assert!(!html.contains(DEFAULT_FALLBACK));
    }

    #[test]
    fn test_upstream_text_is_escaped() {
        let mut g = game("<script>alert(1)</script>");
        g.event_name = Some("A <b>vs</b> B".to_string());
        let html = render_slip(&[g]);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("A &lt;b&gt;vs&lt;/b&gt; B"));
    }
}
