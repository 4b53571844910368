use chrono::{Datelike, NaiveDate};

use super::provider::{iso_date, trim_base, UpstreamProvider, UpstreamRequest};
use super::Sport;

/// Sportradar trial feeds. The key travels in the `x-api-key` header so it
/// never shows up in logged URLs.
pub struct Sportradar {
    base_url: String,
}

impl Sportradar {
    pub fn new(base_url: &str) -> Self {
        Sportradar {
            base_url: trim_base(base_url).to_string(),
        }
    }
}

impl UpstreamProvider for Sportradar {
    fn name(&self) -> &str {
        "Sportradar"
    }

    fn build_request(
        &self,
        sport: Sport,
        date: NaiveDate,
        _today: NaiveDate,
        api_key: &str,
    ) -> Option<UpstreamRequest> {
        let d = iso_date(date);
        let (y, m, dd) = (date.year(), date.month(), date.day());
        let path = match sport {
            Sport::Football => format!("/soccer/trial/v4/en/schedules/{}/summaries.json", d),
            Sport::Rugby => format!("/rugby-union/trial/v3/en/schedules/{}/summaries.json", d),
            Sport::Tennis => format!("/tennis/trial/v3/en/schedules/{}/summaries.json", d),
            Sport::Basketball => {
                format!("/nba/trial/v8/en/games/{}/{:02}/{:02}/schedule.json", y, m, dd)
            }
            Sport::IceHockey => {
                format!("/nhl/trial/v7/en/games/{}/{:02}/{:02}/schedule.json", y, m, dd)
            }
            Sport::Snooker => return None,
        };
        Some(UpstreamRequest {
            url: format!("{}{}", self.base_url, path),
            headers: vec![
                ("accept", "application/json".to_string()),
                ("x-api-key", api_key.to_string()),
            ],
        })
    }

    fn result_keys(&self) -> &'static [&'static str] {
        &["summaries", "games", "sport_events"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 5).unwrap()
    }

    #[test]
    fn test_summary_feeds() {
        let p = Sportradar::new("https://api.sportradar.com/");
        let req = p.build_request(Sport::Football, date(), date(), "key").unwrap();
        assert_eq!(
            req.url,
            "https://api.sportradar.com/soccer/trial/v4/en/schedules/2025-01-05/summaries.json"
        );
        assert!(req.headers.contains(&("x-api-key", "key".to_string())));
        assert!(!req.url.contains("key="));

        let req = p.build_request(Sport::Tennis, date(), date(), "key").unwrap();
        assert!(req.url.ends_with("/tennis/trial/v3/en/schedules/2025-01-05/summaries.json"));
    }

    #[test]
    fn test_daily_schedules_zero_pad() {
        let p = Sportradar::new("https://api.sportradar.com");
        let req = p.build_request(Sport::Basketball, date(), date(), "k").unwrap();
        assert_eq!(
            req.url,
            "https://api.sportradar.com/nba/trial/v8/en/games/2025/01/05/schedule.json"
        );
        let req = p.build_request(Sport::IceHockey, date(), date(), "k").unwrap();
        assert!(req.url.ends_with("/nhl/trial/v7/en/games/2025/01/05/schedule.json"));
    }

    #[test]
    fn test_snooker_unmapped() {
        let p = Sportradar::new("https://api.sportradar.com");
        assert!(p.build_request(Sport::Snooker, date(), date(), "k").is_none());
        assert_eq!(
            p.unavailable_message(Sport::Snooker),
            "No snooker data available from Sportradar."
        );
    }

    #[test]
    fn test_result_count_sums_known_arrays() {
        let p = Sportradar::new("https://api.sportradar.com");
        assert_eq!(p.result_count(&json!({"summaries": [{}], "games": [{}, {}]})), 3);
        assert_eq!(p.result_count(&json!({"date": "2025-01-05", "games": []})), 0);
    }
}
