use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::sports::Sport;

/// Envelope returned by `/api/predictions-by-sport`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedPrediction {
    pub sport: Sport,
    pub fetched_at: DateTime<Utc>,
    /// Upstream payload, passed through untouched
    pub data: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expert_conclusion: Option<String>,
}

impl NormalizedPrediction {
    pub fn new(sport: Sport, data: serde_json::Value) -> Self {
        NormalizedPrediction {
            sport,
            fetched_at: Utc::now(),
            data,
            expert_conclusion: None,
        }
    }

    pub fn with_conclusion(mut self, text: impl Into<String>) -> Self {
        self.expert_conclusion = Some(text.into());
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    /// Seconds since the server started
    pub uptime: f64,
    /// Unix epoch milliseconds
    pub timestamp: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SupportedSports {
    pub sports: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubscriptionPlan {
    pub name: &'static str,
    pub duration: &'static str,
    /// Decimal string, e.g. "9.99"
    pub price: &'static str,
    pub features: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionCatalog {
    pub plans: Vec<SubscriptionPlan>,
    pub updated_at: DateTime<Utc>,
}

impl SubscriptionCatalog {
    pub fn current() -> Self {
        SubscriptionCatalog {
            plans: vec![
                SubscriptionPlan {
                    name: "Free",
                    duration: "7 days",
                    price: "0",
                    features: vec![
                        "Basic predictions",
                        "Limited refresh frequency",
                        "No priority updates",
                    ],
                },
                SubscriptionPlan {
                    name: "Pro",
                    duration: "30 days",
                    price: "9.99",
                    features: vec![
                        "All sports",
                        "AI expert conclusions",
                        "Priority updates",
                        "Faster refresh",
                    ],
                },
                SubscriptionPlan {
                    name: "Premium",
                    duration: "90 days",
                    price: "24.99",
                    features: vec![
                        "All sports",
                        "AI expert conclusions",
                        "Priority updates",
                        "Early features access",
                    ],
                },
            ],
            updated_at: Utc::now(),
        }
    }
}

/// Hardcoded record served by the legacy `/api/predictions` route.
#[derive(Debug, Clone, Serialize)]
pub struct LegacyPrediction {
    pub id: u32,
    pub sport: Sport,
    #[serde(rename = "match")]
    pub fixture: &'static str,
    pub prediction: &'static str,
    /// 0.0–1.0
    pub confidence: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct LegacyPredictions {
    pub predictions: Vec<LegacyPrediction>,
}

impl LegacyPredictions {
    pub fn sample() -> Self {
        LegacyPredictions {
            predictions: vec![
                LegacyPrediction {
                    id: 1,
                    sport: Sport::Football,
                    fixture: "Team A vs Team B",
                    prediction: "Team A to win",
                    confidence: 0.72,
                },
                LegacyPrediction {
                    id: 2,
                    sport: Sport::Basketball,
                    fixture: "Team C vs Team D",
                    prediction: "Over 210.5 points",
                    confidence: 0.64,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_prediction_field_names() {
        let p = NormalizedPrediction::new(Sport::Snooker, json!({"response": []}));
        let v = serde_json::to_value(&p).unwrap();
        assert_eq!(v["sport"], "snooker");
        assert!(v["fetchedAt"].is_string());
        assert!(v.get("expertConclusion").is_none());

        let v = serde_json::to_value(p.with_conclusion("hi")).unwrap();
        assert_eq!(v["expertConclusion"], "hi");
    }

    #[test]
    fn test_subscription_tiers() {
        let v = serde_json::to_value(SubscriptionCatalog::current()).unwrap();
        let names: Vec<&str> = v["plans"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Free", "Pro", "Premium"]);
        assert_eq!(v["plans"][2]["price"], "24.99");
        assert!(v["updatedAt"].is_string());
    }

    #[test]
    fn test_legacy_uses_match_key() {
        let v = serde_json::to_value(LegacyPredictions::sample()).unwrap();
        assert_eq!(v["predictions"].as_array().unwrap().len(), 2);
        assert_eq!(v["predictions"][0]["match"], "Team A vs Team B");
    }
}
