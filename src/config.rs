use clap::{Parser, ValueEnum};
use std::fmt;
use std::time::Duration;

use crate::sports::{ApiSports, RapidApi, Sportradar, UpstreamProvider};

/// Which third-party feed backs `/api/predictions-by-sport`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    ApiSports,
    Sportradar,
    Rapidapi,
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ProviderKind::ApiSports => "API-Sports",
            ProviderKind::Sportradar => "Sportradar",
            ProviderKind::Rapidapi => "RapidAPI",
        };
        f.write_str(s)
    }
}

/// Sports predictions backend
#[derive(Parser, Debug, Clone)]
#[command(name = "predictions-backend", version, about)]
pub struct Config {
    /// HTTP listen port (binds 0.0.0.0)
    #[arg(long, env = "PORT", default_value = "4000")]
    pub port: u16,

    /// Upstream sports-data provider
    #[arg(long, env = "SPORTS_PROVIDER", value_enum, default_value = "api-sports")]
    pub provider: ProviderKind,

    /// API-Sports key
    #[arg(long, env = "API_SPORTS_KEY")]
    pub api_sports_key: Option<String>,

    /// Overrides every per-sport API-Sports host with a single base URL
    #[arg(long, env = "API_SPORTS_BASE_URL")]
    pub api_sports_base_url: Option<String>,

    /// Sportradar API key
    #[arg(long, env = "SPORTRADAR_API_KEY")]
    pub sportradar_api_key: Option<String>,

    /// Sportradar base URL
    #[arg(
        long,
        env = "SPORTRADAR_BASE_URL",
        default_value = "https://api.sportradar.com"
    )]
    pub sportradar_base_url: String,

    /// RapidAPI key
    #[arg(long, env = "X_RAPIDAPI_KEY")]
    pub rapidapi_key: Option<String>,

    /// Overrides every RapidAPI host with a single base URL
    #[arg(long, env = "RAPIDAPI_BASE_URL")]
    pub rapidapi_base_url: Option<String>,

    /// Timeout for a single upstream request, in seconds
    #[arg(long, env = "UPSTREAM_TIMEOUT_SECS", default_value = "10")]
    pub upstream_timeout_secs: u64,
}

impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.upstream_timeout_secs == 0 {
            anyhow::bail!("upstream_timeout_secs must be greater than zero");
        }
        check_base_url("SPORTRADAR_BASE_URL", &self.sportradar_base_url)?;
        if let Some(base) = &self.api_sports_base_url {
            check_base_url("API_SPORTS_BASE_URL", base)?;
        }
        if let Some(base) = &self.rapidapi_base_url {
            check_base_url("RAPIDAPI_BASE_URL", base)?;
        }
        Ok(())
    }

    /// Name of the environment variable holding the selected provider's key.
    pub fn api_key_var(&self) -> &'static str {
        match self.provider {
            ProviderKind::ApiSports => "API_SPORTS_KEY",
            ProviderKind::Sportradar => "SPORTRADAR_API_KEY",
            ProviderKind::Rapidapi => "X_RAPIDAPI_KEY",
        }
    }

    /// The selected provider's key. Blank values count as unset.
    pub fn api_key(&self) -> Option<&str> {
        let key = match self.provider {
            ProviderKind::ApiSports => self.api_sports_key.as_deref(),
            ProviderKind::Sportradar => self.sportradar_api_key.as_deref(),
            ProviderKind::Rapidapi => self.rapidapi_key.as_deref(),
        };
        key.map(str::trim).filter(|k| !k.is_empty())
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_secs)
    }

    /// Build the URL composer for the selected provider.
    pub fn build_provider(&self) -> Box<dyn UpstreamProvider> {
        match self.provider {
            ProviderKind::ApiSports => Box::new(ApiSports::new(self.api_sports_base_url.as_deref())),
            ProviderKind::Sportradar => Box::new(Sportradar::new(&self.sportradar_base_url)),
            ProviderKind::Rapidapi => Box::new(RapidApi::new(self.rapidapi_base_url.as_deref())),
        }
    }
}

fn check_base_url(var: &str, raw: &str) -> anyhow::Result<()> {
    let parsed = url::Url::parse(raw)
        .map_err(|e| anyhow::anyhow!("{} is not a valid URL ({}): {}", var, raw, e))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        anyhow::bail!("{} must use http or https, got '{}'", var, parsed.scheme());
    }
    Ok(())
}

#[cfg(test)]
pub(crate) fn test_config(provider: ProviderKind, base_url: &str, key: Option<&str>) -> Config {
    Config {
        port: 0,
        provider,
        api_sports_key: key.map(str::to_string),
        api_sports_base_url: Some(base_url.to_string()),
        sportradar_api_key: key.map(str::to_string),
        sportradar_base_url: base_url.to_string(),
        rapidapi_key: key.map(str::to_string),
        rapidapi_base_url: Some(base_url.to_string()),
        upstream_timeout_secs: 5,
    }
}
