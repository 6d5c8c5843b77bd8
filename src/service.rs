use anyhow::Result;
use rmcp::{
    handler::server::{tool::ToolRouter, wrapper::Parameters, ServerHandler},
    model::{
        CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
    },
    tool, tool_handler, tool_router, ErrorData as McpError,
};

use crate::client::NwsClient;
use crate::config::WeatherConfig;
use crate::models::{GetAlertsRequest, GetForecastRequest};
use crate::operations::{get_alerts, get_forecast};

/// Weather tool server: binds the alerts and forecast operations to MCP tools
#[derive(Clone)]
pub struct Weather {
    client: NwsClient,
    tool_router: ToolRouter<Self>,
}

impl Weather {
    /// Creates a new Weather service instance
    pub fn new(config: &WeatherConfig) -> Result<Self> {
        Ok(Self {
            client: NwsClient::new(config)?,
            tool_router: Self::tool_router(),
        })
    }
}

#[tool_handler]
impl ServerHandler for Weather {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "nws-weather".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some(
                "Weather alerts and forecasts from the National Weather Service API. \
                Use get-alerts with a two-letter US state code, or get-forecast with \
                the latitude and longitude of a US location."
                    .to_string(),
            ),
        }
    }
}

#[tool_router]
impl Weather {
    /// Gets active weather alerts for a US state
    #[tool(
        name = "get-alerts",
        description = "Get weather alerts for a state. Provide a two-letter state code (e.g. CA, NY)."
    )]
    pub async fn get_alerts(
        &self,
        Parameters(request): Parameters<GetAlertsRequest>,
    ) -> Result<CallToolResult, McpError> {
        if request.state.chars().count() != 2 {
            return Err(McpError::invalid_params(
                "state must be a two-letter state code",
                None,
            ));
        }

        let text = get_alerts(&self.client, &request.state).await;

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Gets the weather forecast for a coordinate
    #[tool(
        name = "get-forecast",
        description = "Get weather forecast for a location. Provide the latitude and longitude of a US location."
    )]
    pub async fn get_forecast(
        &self,
        Parameters(request): Parameters<GetForecastRequest>,
    ) -> Result<CallToolResult, McpError> {
        let text = get_forecast(&self.client, request.latitude, request.longitude).await;

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn server_for(mock_server: &MockServer) -> Weather {
        Weather::new(&WeatherConfig::with_api_base(mock_server.uri())).unwrap()
    }

    fn envelope(result: &CallToolResult) -> Value {
        serde_json::to_value(result).unwrap()
    }

    #[test]
    fn test_registered_tools() {
        let weather = Weather::new(&WeatherConfig::default()).unwrap();
        let tools = weather.tool_router.list_all();

        let mut names: Vec<&str> = tools.iter().map(|tool| tool.name.as_ref()).collect();
        names.sort_unstable();
        assert_eq!(names, ["get-alerts", "get-forecast"]);

        let alerts = tools.iter().find(|tool| tool.name == "get-alerts").unwrap();
        let state = &alerts.input_schema["properties"]["state"];
        assert_eq!(state["type"], "string");
        assert_eq!(state["minLength"], 2);
        assert_eq!(state["maxLength"], 2);

        let forecast = tools.iter().find(|tool| tool.name == "get-forecast").unwrap();
        assert_eq!(forecast.input_schema["properties"]["latitude"]["type"], "number");
        assert_eq!(forecast.input_schema["properties"]["longitude"]["type"], "number");
    }

    #[tokio::test]
    async fn test_failure_is_text_envelope() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&mock_server)
            .await;

        let result = server_for(&mock_server)
            .get_alerts(Parameters(GetAlertsRequest {
                state: "ny".to_string(),
            }))
            .await
            .unwrap();

        let value = envelope(&result);
        assert_eq!(value["content"][0]["type"], "text");
        assert_eq!(value["content"][0]["text"], "Failed to retrieve alerts data");
        assert_eq!(value["content"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_alerts_success_envelope() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/alerts"))
            .and(query_param("area", "NY"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "features": [{ "properties": { "event": "Wind Advisory" } }]
            })))
            .mount(&mock_server)
            .await;

        let result = server_for(&mock_server)
            .get_alerts(Parameters(GetAlertsRequest {
                state: "ny".to_string(),
            }))
            .await
            .unwrap();

        let text = envelope(&result)["content"][0]["text"].as_str().unwrap().to_string();
        assert!(text.starts_with("Active alerts for NY:\n\nEvent: Wind Advisory\n"));
    }

    #[tokio::test]
    async fn test_invalid_state_rejected_before_fetch() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let weather = server_for(&mock_server);
        for state in ["", "C", "CAL"] {
            let result = weather
                .get_alerts(Parameters(GetAlertsRequest {
                    state: state.to_string(),
                }))
                .await;
            assert!(result.is_err(), "{state:?} should be rejected");
        }
    }

    #[tokio::test]
    async fn test_forecast_envelope() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/points/38.9000,-77.0000"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let result = server_for(&mock_server)
            .get_forecast(Parameters(GetForecastRequest {
                latitude: 38.9,
                longitude: -77.0,
            }))
            .await
            .unwrap();

        assert_eq!(
            envelope(&result)["content"][0]["text"],
            "Failed to retrieve grid point data for coordinates: 38.9,-77.0"
        );
    }
}
