use crate::constants::{NWS_API_BASE, NWS_API_BASE_ENV, USER_AGENT, USER_AGENT_ENV};

/// Process-wide settings, read once at startup and never mutated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherConfig {
    pub api_base: String,
    pub user_agent: String,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_base: NWS_API_BASE.to_string(),
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl WeatherConfig {
    /// Builds a config pointing at a different API host, keeping the default user agent
    pub fn with_api_base(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
            ..Self::default()
        }
    }

    /// Reads overrides from the environment, falling back to the built-in defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            api_base: non_empty(NWS_API_BASE_ENV)
                .map(|base| base.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base),
            user_agent: non_empty(USER_AGENT_ENV).unwrap_or(defaults.user_agent),
        }
    }
}
