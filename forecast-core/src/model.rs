use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer, Serialize, de::DeserializeOwned};

/// Latitude/longitude exactly as the caller typed them.
///
/// The values are passed through to the provider untouched; malformed input
/// is rejected upstream, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coordinates {
    pub latitude: String,
    pub longitude: String,
}

impl Coordinates {
    pub fn new(latitude: impl Into<String>, longitude: impl Into<String>) -> Self {
        Self { latitude: latitude.into(), longitude: longitude.into() }
    }
}

/// Response of `/points/{lat},{lon}`. Only the forecast URL is kept.
#[derive(Debug, Clone, Deserialize)]
pub struct PointsResponse {
    pub properties: PointsProperties,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PointsProperties {
    pub forecast: String,
}

/// Response of the forecast endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastPayload {
    pub properties: ForecastProperties,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastProperties {
    pub periods: Vec<Period>,
    #[serde(default, deserialize_with = "lenient")]
    pub generated_at: Option<DateTime<FixedOffset>>,
    #[serde(default, deserialize_with = "lenient")]
    pub update_time: Option<DateTime<FixedOffset>>,
}

/// One forecast entry, e.g. "Today" or "Tonight".
///
/// `name`, `temperature`, `temperatureUnit` and `shortForecast` are required.
/// The rest are informational: a malformed value decodes as `None`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Period {
    #[serde(default, deserialize_with = "lenient")]
    pub number: Option<u32>,
    pub name: String,
    #[serde(default, deserialize_with = "lenient")]
    pub start_time: Option<DateTime<FixedOffset>>,
    #[serde(default, deserialize_with = "lenient")]
    pub end_time: Option<DateTime<FixedOffset>>,
    #[serde(default, deserialize_with = "lenient")]
    pub is_daytime: Option<bool>,
    pub temperature: i32,
    pub temperature_unit: String,
    pub short_forecast: String,
    #[serde(default, deserialize_with = "lenient")]
    pub detailed_forecast: Option<String>,
}

/// Decode an optional field, treating a value of the wrong shape as absent.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feeling {
    Cold,
    Moderate,
    Hot,
}

impl Feeling {
    pub fn as_str(&self) -> &'static str {
        match self {
            Feeling::Cold => "cold",
            Feeling::Moderate => "moderate",
            Feeling::Hot => "hot",
        }
    }
}

impl std::fmt::Display for Feeling {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Day,
    Night,
}

impl TimeOfDay {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeOfDay::Day => "day",
            TimeOfDay::Night => "night",
        }
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one lookup: what the current period looks like and how it feels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedForecast {
    pub short_description: String,
    pub feeling: Feeling,
    pub time_of_day: TimeOfDay,
}
