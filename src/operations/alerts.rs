use crate::client::NwsClient;
use crate::formatters::format_collection;
use crate::models::AlertsResponse;

/// Terminal outcomes of an alerts lookup that are reported as plain text
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AlertsFailure {
    #[error("Failed to retrieve alerts data")]
    Fetch,
    #[error("No active alerts for {0}")]
    NoAlerts(String),
}

/// Active alerts for a two-letter region code, rendered as text
pub async fn get_alerts(client: &NwsClient, state: &str) -> String {
    match fetch_alerts(client, state).await {
        Ok(text) => text,
        Err(failure) => failure.to_string(),
    }
}

async fn fetch_alerts(client: &NwsClient, state: &str) -> Result<String, AlertsFailure> {
    let state = state.to_uppercase();
    tracing::info!("Getting alerts for state: {}", state);

    let alerts = client
        .fetch::<AlertsResponse>(&client.alerts_url(&state))
        .await
        .map_err(|_| AlertsFailure::Fetch)?;

    if alerts.features.is_empty() {
        return Err(AlertsFailure::NoAlerts(state));
    }

    Ok(format_collection(
        alerts.features.iter().map(|feature| &feature.properties),
        &format!("Active alerts for {}:", state),
    ))
}
