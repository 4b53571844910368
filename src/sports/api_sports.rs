use chrono::NaiveDate;

use super::provider::{iso_date, trim_base, UpstreamProvider, UpstreamRequest};
use super::Sport;

/// API-Sports (api-sports.io). Every sport lives on its own host.
/// Docs: <https://api-sports.io/documentation>
pub struct ApiSports {
    /// Single host replacing all per-sport hosts, for tests and proxies
    base_override: Option<String>,
}

impl ApiSports {
    pub fn new(base_override: Option<&str>) -> Self {
        ApiSports {
            base_override: base_override.map(|b| trim_base(b).to_string()),
        }
    }

    fn host(&self, sport: Sport) -> &str {
        if let Some(base) = &self.base_override {
            return base;
        }
        match sport {
            Sport::Football => "https://v3.football.api-sports.io",
            Sport::Rugby => "https://v1.rugby.api-sports.io",
            Sport::Basketball => "https://v1.basketball.api-sports.io",
            Sport::IceHockey => "https://v1.hockey.api-sports.io",
            Sport::Tennis => "https://v1.tennis.api-sports.io",
            Sport::Snooker => "https://v1.snooker.api-sports.io",
        }
    }
}

impl UpstreamProvider for ApiSports {
    fn name(&self) -> &str {
        "API-Sports"
    }

    fn build_request(
        &self,
        sport: Sport,
        date: NaiveDate,
        today: NaiveDate,
        api_key: &str,
    ) -> Option<UpstreamRequest> {
        let host = self.host(sport);
        let url = match sport {
            // Live fixtures for today; a specific date otherwise
            Sport::Football if date == today => format!("{}/fixtures?live=all", host),
            Sport::Football => format!("{}/fixtures?date={}", host, iso_date(date)),
            Sport::Basketball | Sport::Rugby | Sport::IceHockey | Sport::Snooker => {
                format!("{}/games?date={}", host, iso_date(date))
            }
            // Tennis needs a season or tournament id, not just a date
            Sport::Tennis => return None,
        };
        Some(UpstreamRequest {
            url,
            headers: vec![
                ("accept", "application/json".to_string()),
                ("x-apisports-key", api_key.to_string()),
            ],
        })
    }

    fn result_keys(&self) -> &'static [&'static str] {
        &["response"]
    }

    fn unavailable_message(&self, sport: Sport) -> String {
        match sport {
            Sport::Tennis => {
                "No tennis games available until a season or tournament is specified.".to_string()
            }
            _ => format!("No {} data available from {}.", sport, self.name()),
        }
    }
}
