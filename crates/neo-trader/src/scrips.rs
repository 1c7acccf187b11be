//! Scrip search result rendering.

use neo_broker::ScripMatch;

/// Render search matches as an aligned text table.
pub fn render(matches: &[ScripMatch]) -> String {
    if matches.is_empty() {
        return "No matches found.".to_string();
    }

    let mut out = String::new();
    out.push_str(&format!("{:<20} {:>12}\n", "Trading Symbol", "Token"));
    for m in matches {
        out.push_str(&format!(
            "{:<20} {:>12}\n",
            m.trading_symbol, m.instrument_token
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_matches() {
        let matches = vec![
            ScripMatch {
                trading_symbol: "RELIANCE-EQ".to_string(),
                instrument_token: "2885".to_string(),
            },
            ScripMatch {
                trading_symbol: "RELIANCEPP-EQ".to_string(),
                instrument_token: "11184".to_string(),
            },
        ];
        let out = render(&matches);
        assert!(out.contains("RELIANCE-EQ"));
        assert!(out.contains("2885"));
        assert!(out.contains("RELIANCEPP-EQ"));
        assert!(out.contains("11184"));
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render(&[]), "No matches found.");
    }
}
