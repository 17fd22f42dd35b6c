//! Error types for the forecast pipeline.
//!
//! [`WeatherError`] describes what went wrong inside a single stage;
//! [`PipelineError`] records which stage it was.

use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WeatherError {
    /// The HTTP client could not be configured, e.g. an invalid User-Agent.
    #[error("Failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    /// The provider could not be reached (DNS, connect, timeout, body read).
    #[error("Request to weather provider failed")]
    UpstreamRequest(#[from] reqwest::Error),

    #[error("Weather provider returned status {status}: {body}")]
    UpstreamStatus { status: StatusCode, body: String },

    #[error("Failed to decode {what} JSON")]
    Decode {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("No forecast periods available")]
    NoPeriodsAvailable,

    #[error("Unsupported temperature unit for USA: {0}")]
    UnsupportedUnit(String),

    #[error("Failed to classify temperature for period '{period}'")]
    Classification {
        period: String,
        #[source]
        source: Box<WeatherError>,
    },
}

/// Stage of the pipeline an error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Resolving,
    Fetching,
    Extracting,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Resolving => "resolving",
            Stage::Fetching => "fetching",
            Stage::Extracting => "extracting",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Failed to resolve forecast endpoint")]
    ResolutionFailed(#[source] WeatherError),

    #[error("Failed to fetch forecast")]
    FetchFailed(#[source] WeatherError),

    #[error("Failed to extract forecast data")]
    ExtractionFailed(#[source] WeatherError),

    #[error("Forecast lookup did not finish within {0:?}")]
    DeadlineExceeded(Duration),
}

impl PipelineError {
    /// Stage that failed, or `None` when the caller's deadline ran out.
    pub fn stage(&self) -> Option<Stage> {
        match self {
            Self::ResolutionFailed(_) => Some(Stage::Resolving),
            Self::FetchFailed(_) => Some(Stage::Fetching),
            Self::ExtractionFailed(_) => Some(Stage::Extracting),
            Self::DeadlineExceeded(_) => None,
        }
    }

    /// The stage-local error, if any.
    pub fn cause(&self) -> Option<&WeatherError> {
        match self {
            Self::ResolutionFailed(e) | Self::FetchFailed(e) | Self::ExtractionFailed(e) => Some(e),
            Self::DeadlineExceeded(_) => None,
        }
    }

    /// Generic notice for end users. Every failure reads the same.
    pub fn user_message(&self) -> &'static str {
        "Unable to retrieve the forecast for these coordinates. Please try again later."
    }
}
