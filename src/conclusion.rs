//! Best-effort "expert conclusion" synthesis over loosely-typed upstream payloads.
//!
//! Upstream shapes differ per provider and per sport, so every field is looked
//! up through an ordered list of JSON pointers, tried against an ordered list
//! of candidate roots. The first hit wins; nothing here can fail.

use serde_json::Value;

use crate::sports::Sport;

/// Top-level keys whose first element is searched after the payload itself.
const RESULT_ARRAYS: &[&str] = &["response", "summaries", "games", "sport_events"];

const HOME_TEAM_PATHS: &[&str] = &[
    "/teams/0/name",
    "/match/teams/0/name",
    "/fixture/teams/0/name",
    "/teams/home/name",
    "/homeTeam/name",
    "/home/name",
    "/competitors/0/name",
];

const AWAY_TEAM_PATHS: &[&str] = &[
    "/teams/1/name",
    "/match/teams/1/name",
    "/fixture/teams/1/name",
    "/teams/away/name",
    "/awayTeam/name",
    "/away/name",
    "/competitors/1/name",
];

const EDGE_PATHS: &[&str] = &["/modelEdge", "/probabilities/favorite", "/summary"];

const DEFAULT_HOME: &str = "Home";
const DEFAULT_AWAY: &str = "Away";
const NO_EDGE: &str = "The match appears closely contested";

/// Fields recovered from a payload, with fallbacks already applied to team names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matchup {
    pub home: String,
    pub away: String,
    pub edge: Option<String>,
}

/// Candidate roots, in search order.
fn roots(payload: &Value) -> Vec<&Value> {
    let mut out = vec![payload];
    let first = RESULT_ARRAYS
        .iter()
        .filter_map(|key| payload.get(*key).and_then(Value::as_array))
        .find_map(|items| items.first());
    if let Some(first) = first {
        out.push(first);
        if let Some(event) = first.get("sport_event") {
            out.push(event);
        }
    }
    out
}

fn first_match<'a, T>(
    roots: &[&'a Value],
    paths: &[&str],
    extract: impl Fn(&'a Value) -> Option<T>,
) -> Option<T> {
    roots
        .iter()
        .flat_map(|&root| paths.iter().filter_map(move |p| root.pointer(p)))
        .find_map(extract)
}

fn team_name(v: &Value) -> Option<String> {
    v.as_str()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn edge_signal(v: &Value) -> Option<String> {
    match v {
        Value::Null | Value::Bool(false) => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

pub fn extract_matchup(payload: &Value) -> Matchup {
    let roots = roots(payload);
    Matchup {
        home: first_match(&roots, HOME_TEAM_PATHS, team_name)
            .unwrap_or_else(|| DEFAULT_HOME.to_string()),
        away: first_match(&roots, AWAY_TEAM_PATHS, team_name)
            .unwrap_or_else(|| DEFAULT_AWAY.to_string()),
        edge: first_match(&roots, EDGE_PATHS, edge_signal),
    }
}

/// Build the one-line conclusion shown under each sport's predictions.
pub fn expert_conclusion(sport: Sport, payload: &Value) -> String {
    let m = extract_matchup(payload);
    let base_line = match &m.edge {
        Some(edge) => format!("Edge to {}", edge),
        None => NO_EDGE.to_string(),
    };
    format!(
        "Expert analysis for {}: {} vs {}. {}. Consider recent form, injuries, and venue \
         effects; late team news may shift momentum. Predictions are guidance, not guarantees.",
        sport, m.home, m.away, base_line
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_team_array_inside_response() {
        let payload = json!({
            "response": [{"teams": [{"name": "A"}, {"name": "B"}], "modelEdge": "A"}]
        });
        let text = expert_conclusion(Sport::Football, &payload);
        assert!(text.starts_with("Expert analysis for football: A vs B. Edge to A."));
    }

    #[test]
    fn test_missing_fields_fall_back() {
        let m = extract_matchup(&json!({"response": [{"id": 1}]}));
        assert_eq!(m.home, "Home");
        assert_eq!(m.away, "Away");
        assert_eq!(m.edge, None);
        let text = expert_conclusion(Sport::Rugby, &json!({}));
        assert!(text.contains("Home vs Away"));
        assert!(text.contains("The match appears closely contested."));
    }

    #[test]
    fn test_non_object_payloads_do_not_panic() {
        for payload in [json!(null), json!(42), json!("text"), json!([1, 2]), json!({"response": "x"})] {
            let m = extract_matchup(&payload);
            assert_eq!((m.home.as_str(), m.away.as_str()), ("Home", "Away"));
        }
    }

    #[test]
    fn test_api_sports_home_away_object() {
        let payload = json!({
            "response": [{"teams": {"home": {"name": "Arsenal"}, "away": {"name": "Chelsea"}}}]
        });
        let m = extract_matchup(&payload);
        assert_eq!(m.home, "Arsenal");
        assert_eq!(m.away, "Chelsea");
    }

    #[test]
    fn test_nested_match_and_flat_fields() {
        let m = extract_matchup(&json!({"match": {"teams": [{"name": "X"}, {"name": "Y"}]}}));
        assert_eq!((m.home.as_str(), m.away.as_str()), ("X", "Y"));

        let m = extract_matchup(&json!({"homeTeam": {"name": "Lakers"}, "away": {"name": "Celtics"}}));
        assert_eq!((m.home.as_str(), m.away.as_str()), ("Lakers", "Celtics"));
    }

    #[test]
    fn test_sportradar_competitors() {
        let payload = json!({
            "summaries": [{"sport_event": {"competitors": [
                {"name": "Leinster", "qualifier": "home"},
                {"name": "Munster", "qualifier": "away"}
            ]}}]
        });
        let m = extract_matchup(&payload);
        assert_eq!((m.home.as_str(), m.away.as_str()), ("Leinster", "Munster"));
    }

    #[test]
    fn test_blank_names_are_skipped() {
        let m = extract_matchup(&json!({"teams": [{"name": " "}, {"name": ""}], "home": {"name": "H"}}));
        assert_eq!(m.home, "H");
        assert_eq!(m.away, "Away");
    }

    #[test]
    fn test_edge_fallbacks_and_rendering() {
        let m = extract_matchup(&json!({"modelEdge": "", "probabilities": {"favorite": "B"}}));
        assert_eq!(m.edge.as_deref(), Some("B"));

        let m = extract_matchup(&json!({"summary": {"home": 0.6}}));
        assert_eq!(m.edge.as_deref(), Some(r#"{"home":0.6}"#));

        let m = extract_matchup(&json!({"modelEdge": false, "summary": null}));
        assert_eq!(m.edge, None);

        let m = extract_matchup(&json!({"modelEdge": 0, "probabilities": {"favorite": 0.0}}));
        assert_eq!(m.edge, None);
        let text = expert_conclusion(Sport::Basketball, &json!({"modelEdge": 0}));
        assert!(text.contains("The match appears closely contested."));
        assert!(!text.contains("Edge to 0"));
    }
}
