pub mod api_sports;
pub mod client;
pub mod provider;
pub mod rapidapi;
pub mod sport;
pub mod sportradar;

pub use api_sports::ApiSports;
pub use client::{UpstreamClient, UpstreamResponse};
pub use provider::UpstreamProvider;
pub use rapidapi::RapidApi;
pub use sport::{Sport, UnknownSport};
pub use sportradar::Sportradar;
