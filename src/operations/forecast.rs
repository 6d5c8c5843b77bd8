//! Coordinate → forecast resolution.
//!
//! The NWS API does not serve forecasts by coordinate directly: a point lookup
//! returns the URL of the gridpoint forecast, which is then fetched on its own.
//! Each stage below either hands its output to the next one or stops the
//! pipeline with a [`ForecastFailure`] describing where it broke.

use crate::client::NwsClient;
use crate::formatters::{format_collection, format_coordinates};
use crate::models::{ForecastPeriod, ForecastResponse, PointsResponse};

/// Terminal outcomes of a forecast lookup, one per stage
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ForecastFailure {
    #[error("Failed to retrieve grid point data for coordinates: {0}")]
    GridPoint(String),
    #[error("Failed to get forecast URL from grid point data")]
    MissingForecastUrl,
    #[error("Failed to retrieve forecast data")]
    Forecast,
    #[error("No forecast periods found")]
    NoPeriods,
}

/// Forecast for a coordinate, rendered as text
pub async fn get_forecast(client: &NwsClient, latitude: f64, longitude: f64) -> String {
    match resolve_forecast(client, latitude, longitude).await {
        Ok(text) => text,
        Err(failure) => failure.to_string(),
    }
}

async fn resolve_forecast(
    client: &NwsClient,
    latitude: f64,
    longitude: f64,
) -> Result<String, ForecastFailure> {
    tracing::info!(
        "Getting forecast for coordinates: {}, {}",
        latitude,
        longitude
    );

    let points = resolve_grid_point(client, latitude, longitude).await?;
    let forecast_url = forecast_url(points)?;
    let forecast = fetch_forecast(client, &forecast_url).await?;
    let periods = forecast_periods(forecast)?;

    Ok(format_collection(
        &periods,
        &format!(
            "Weather forecast for {}:",
            format_coordinates(latitude, longitude)
        ),
    ))
}

async fn resolve_grid_point(
    client: &NwsClient,
    latitude: f64,
    longitude: f64,
) -> Result<PointsResponse, ForecastFailure> {
    client
        .fetch::<PointsResponse>(&client.points_url(latitude, longitude))
        .await
        .map_err(|_| ForecastFailure::GridPoint(format_coordinates(latitude, longitude)))
}

fn forecast_url(points: PointsResponse) -> Result<String, ForecastFailure> {
    points
        .properties
        .forecast
        .filter(|url| !url.is_empty())
        .ok_or(ForecastFailure::MissingForecastUrl)
}

async fn fetch_forecast(
    client: &NwsClient,
    url: &str,
) -> Result<ForecastResponse, ForecastFailure> {
    tracing::debug!(url, "Fetching gridpoint forecast");
    client
        .fetch::<ForecastResponse>(url)
        .await
        .map_err(|_| ForecastFailure::Forecast)
}

fn forecast_periods(forecast: ForecastResponse) -> Result<Vec<ForecastPeriod>, ForecastFailure> {
    let periods = forecast.properties.periods;
    if periods.is_empty() {
        return Err(ForecastFailure::NoPeriods);
    }
    Ok(periods)
}
