use chrono::NaiveDate;
use serde_json::Value;

use super::Sport;

/// A fully composed outbound request: URL plus headers, in send order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamRequest {
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
}

/// Trait that every upstream sports-data provider must implement.
///
/// Implementations only compose requests and interpret payload shapes; the
/// network call itself lives in [`super::UpstreamClient`].
pub trait UpstreamProvider: Send + Sync {
    /// Human-readable name for logging and error payloads.
    fn name(&self) -> &str;

    /// Compose the request for `sport` on `date`. Returns `None` when the
    /// provider has no endpoint for that sport.
    fn build_request(
        &self,
        sport: Sport,
        date: NaiveDate,
        today: NaiveDate,
        api_key: &str,
    ) -> Option<UpstreamRequest>;

    /// Top-level payload keys that hold result arrays.
    fn result_keys(&self) -> &'static [&'static str];

    /// Number of fixtures/matches in an upstream payload.
    fn result_count(&self, payload: &Value) -> usize {
        self.result_keys()
            .iter()
            .filter_map(|key| payload.get(*key).and_then(Value::as_array))
            .map(Vec::len)
            .sum()
    }

    /// Conclusion text returned when `build_request` yields nothing.
    fn unavailable_message(&self, sport: Sport) -> String {
        format!("No {} data available from {}.", sport, self.name())
    }
}

pub(crate) fn trim_base(base: &str) -> &str {
    base.trim_end_matches('/')
}

pub(crate) fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
