use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::header,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::{NaiveDate, Utc};
use serde_json::json;
use std::sync::Arc;
use std::time::Instant;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::conclusion::expert_conclusion;
use crate::config::Config;
use crate::error::PredictionError;
use crate::models::{
    HealthReport, LegacyPredictions, NormalizedPrediction, SubscriptionCatalog, SupportedSports,
};
use crate::sports::{Sport, UnknownSport, UpstreamClient, UpstreamProvider, UpstreamResponse};

const LANDING_TEXT: &str = "Backend is live. Try /health, /api/supported-sports, or /api/predictions-by-sport?sport=football";

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub provider: Arc<dyn UpstreamProvider>,
    pub upstream: UpstreamClient,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let provider: Arc<dyn UpstreamProvider> = Arc::from(config.build_provider());
        let upstream = UpstreamClient::new(config.upstream_timeout())?;
        Ok(AppState {
            config: Arc::new(config),
            provider,
            upstream,
            started_at: Instant::now(),
        })
    }
}

/// Build the Axum router for the public API.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route("/api/supported-sports", get(supported_sports_handler))
        .route("/api/subscriptions", get(subscriptions_handler))
        .route("/api/predictions", get(legacy_predictions_handler))
        .route("/api/predictions-by-sport", get(predictions_by_sport_handler))
        .fallback(fallback_handler)
        .layer(CatchPanicLayer::new())
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(state))
}

async fn index_handler() -> &'static str {
    LANDING_TEXT
}

/// GET /health
async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthReport> {
    Json(HealthReport {
        status: "ok",
        uptime: state.started_at.elapsed().as_secs_f64(),
        timestamp: Utc::now().timestamp_millis(),
    })
}

/// GET /api/supported-sports
async fn supported_sports_handler() -> Json<SupportedSports> {
    Json(SupportedSports {
        sports: Sport::names(),
    })
}

/// GET /api/subscriptions
async fn subscriptions_handler() -> Json<SubscriptionCatalog> {
    Json(SubscriptionCatalog::current())
}

/// GET /api/predictions (legacy hardcoded sample)
async fn legacy_predictions_handler() -> Json<LegacyPredictions> {
    Json(LegacyPredictions::sample())
}

async fn fallback_handler() -> impl IntoResponse {
    Json(json!({ "message": "Backend is running" }))
}

/// Parameters of `/api/predictions-by-sport`, read from raw query pairs so
/// that repeated keys still produce the JSON error shapes.
#[derive(Debug, Default)]
pub struct PredictionsQuery {
    sport: Option<String>,
    /// YYYY-MM-DD; defaults to today (UTC)
    date: Option<String>,
}

impl PredictionsQuery {
    fn from_pairs(pairs: Vec<(String, String)>) -> Result<Self, PredictionError> {
        let values = |key: &str| -> Vec<String> {
            pairs
                .iter()
                .filter(|(k, _)| k == key)
                .map(|(_, v)| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .collect()
        };
        let sports = values("sport");
        let dates = values("date");
        if sports.len() > 1 {
            return Err(PredictionError::UnsupportedSport(
                sports.join(",").to_lowercase(),
            ));
        }
        if dates.len() > 1 {
            return Err(PredictionError::InvalidDate(dates.join(",")));
        }
        Ok(PredictionsQuery {
            sport: sports.into_iter().next(),
            date: dates.into_iter().next(),
        })
    }
}

/// GET /api/predictions-by-sport?sport=football&date=2025-03-08
async fn predictions_by_sport_handler(
    State(state): State<Arc<AppState>>,
    pairs: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Response, PredictionError> {
    let query = match pairs {
        Ok(Query(pairs)) => PredictionsQuery::from_pairs(pairs)?,
        Err(rejection) => {
            warn!("Unreadable predictions query: {}", rejection);
            PredictionsQuery::default()
        }
    };

    let sport: Sport = query
        .sport
        .as_deref()
        .ok_or(PredictionError::MissingSport)?
        .parse()
        .map_err(|UnknownSport(s)| PredictionError::UnsupportedSport(s))?;

    let today = Utc::now().date_naive();
    let date = match query.date.as_deref() {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|_| PredictionError::InvalidDate(raw.to_string()))?,
        None => today,
    };

    let api_key = state
        .config
        .api_key()
        .ok_or(PredictionError::MissingApiKey {
            var: state.config.api_key_var(),
        })?;

    let provider = state.provider.as_ref();
    let Some(request) = provider.build_request(sport, date, today, api_key) else {
        info!("{} has no feed for {}", provider.name(), sport);
        let body = NormalizedPrediction::new(sport, json!({}))
            .with_conclusion(provider.unavailable_message(sport));
        return Ok(Json(body).into_response());
    };

    let outcome = state
        .upstream
        .fetch(&request)
        .await
        .map_err(|cause| PredictionError::Unexpected {
            provider: provider.name().to_string(),
            cause,
        })?;

    let payload = match outcome {
        UpstreamResponse::Success(payload) => payload,
        UpstreamResponse::Failed {
            status,
            status_text,
            body,
        } => {
            return Err(PredictionError::Upstream {
                provider: provider.name().to_string(),
                status,
                status_text,
                body,
            })
        }
    };

    if provider.result_count(&payload) == 0 {
        let when = if date == today {
            "today".to_string()
        } else {
            format!("on {}", date.format("%Y-%m-%d"))
        };
        let body = NormalizedPrediction::new(sport, payload)
            .with_conclusion(format!("No {} games scheduled {}.", sport, when));
        return Ok(Json(body).into_response());
    }

    let conclusion = expert_conclusion(sport, &payload);
    let body = NormalizedPrediction::new(sport, payload).with_conclusion(conclusion);
    Ok((
        [(header::CACHE_CONTROL, "public, max-age=30")],
        Json(body),
    )
        .into_response())
}
