//! MCP server exposing National Weather Service alerts and forecasts as tools.

pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod formatters;
pub mod models;
pub mod operations;
pub mod service;

pub use client::NwsClient;
pub use config::WeatherConfig;
pub use error::FetchError;
pub use service::Weather;
