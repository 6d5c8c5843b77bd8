use crate::constants::{DEFAULT_TEMPERATURE_UNIT, NO_FORECAST, RECORD_SEPARATOR, UNKNOWN};
use crate::models::{AlertProperties, ForecastPeriod};

/// A record rendered as a fixed number of lines, whatever fields are present
pub trait Record {
    fn lines(&self) -> Vec<String>;
}

/// Empty strings are treated the same as absent values
fn or_fallback<'a>(value: &'a Option<String>, fallback: &'a str) -> &'a str {
    value.as_deref().filter(|v| !v.is_empty()).unwrap_or(fallback)
}

impl Record for AlertProperties {
    fn lines(&self) -> Vec<String> {
        vec![
            format!("Event: {}", or_fallback(&self.event, UNKNOWN)),
            format!("Area: {}", or_fallback(&self.area_desc, UNKNOWN)),
            format!("Severity: {}", or_fallback(&self.severity, UNKNOWN)),
            format!("Status: {}", or_fallback(&self.status, UNKNOWN)),
            format!("Headline: {}", or_fallback(&self.headline, UNKNOWN)),
        ]
    }
}

impl Record for ForecastPeriod {
    fn lines(&self) -> Vec<String> {
        let temperature = self
            .temperature
            .map(|t| t.to_string())
            .unwrap_or_else(|| UNKNOWN.to_string());

        vec![
            format!("{}:", or_fallback(&self.name, UNKNOWN)),
            format!(
                "Temperature: {}\u{00b0}{}",
                temperature,
                or_fallback(&self.temperature_unit, DEFAULT_TEMPERATURE_UNIT)
            ),
            format!(
                "Wind: {} {}",
                or_fallback(&self.wind_speed, UNKNOWN),
                or_fallback(&self.wind_direction, "")
            ),
            or_fallback(&self.short_forecast, NO_FORECAST).to_string(),
        ]
    }
}

/// Formats a single record followed by its separator line
pub fn format_record<R: Record>(record: &R) -> String {
    let mut lines = record.lines();
    lines.push(RECORD_SEPARATOR.to_string());
    lines.join("\n")
}

/// Formats records under a header. Empty collections are the caller's concern.
pub fn format_collection<'a, R, I>(records: I, header: &str) -> String
where
    R: Record + 'a,
    I: IntoIterator<Item = &'a R>,
{
    let blocks: Vec<String> = records.into_iter().map(format_record).collect();
    format!("{}\n\n{}", header, blocks.join("\n"))
}

/// Renders a coordinate pair as `lat,lon`, always keeping a fractional part
pub fn format_coordinates(latitude: f64, longitude: f64) -> String {
    format!("{:?},{:?}", latitude, longitude)
}
