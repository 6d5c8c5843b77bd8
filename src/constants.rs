/// User agent string for HTTP requests
pub const USER_AGENT: &str = "nws-weather-mcp/0.1.0";

/// National Weather Service API base URL
pub const NWS_API_BASE: &str = "https://api.weather.gov";

/// Environment variable overriding [`NWS_API_BASE`]
pub const NWS_API_BASE_ENV: &str = "NWS_API_BASE";

/// Environment variable overriding [`USER_AGENT`]
pub const USER_AGENT_ENV: &str = "NWS_USER_AGENT";

/// Fallback for missing alert fields and forecast period labels
pub const UNKNOWN: &str = "Unknown";

/// Fallback for a missing temperature unit
pub const DEFAULT_TEMPERATURE_UNIT: &str = "F";

/// Fallback for a missing short forecast
pub const NO_FORECAST: &str = "No forecast available";

/// Line terminating every formatted record
pub const RECORD_SEPARATOR: &str = "---";
