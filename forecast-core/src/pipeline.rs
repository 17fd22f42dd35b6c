use std::time::Duration;

use crate::{
    config::Config,
    error::{PipelineError, Stage, WeatherError},
    extract::{decode_forecast, extract},
    model::{ClassifiedForecast, Coordinates},
    resolver::resolve,
    upstream::Upstream,
};

/// Points lookup, forecast fetch, extraction; in that order, every call.
///
/// Nothing is cached and nothing is retried: the first failing stage ends
/// the lookup.
#[derive(Debug, Clone)]
pub struct ForecastPipeline {
    upstream: Upstream,
}

impl ForecastPipeline {
    pub fn new(config: &Config) -> Result<Self, WeatherError> {
        Ok(Self { upstream: Upstream::new(config)? })
    }

    pub async fn fetch_forecast(
        &self,
        coords: &Coordinates,
    ) -> Result<ClassifiedForecast, PipelineError> {
        let (lat, lon) = (coords.latitude.as_str(), coords.longitude.as_str());
        tracing::info!(latitude = lat, longitude = lon, "Looking up forecast");

        let forecast_url = resolve(&self.upstream, lat, lon).await.map_err(|e| {
            tracing::debug!(stage = %Stage::Resolving, error = ?e, "Forecast lookup failed");
            PipelineError::ResolutionFailed(e)
        })?;

        let body = self.upstream.get_text(&forecast_url).await.map_err(|e| {
            tracing::debug!(
                stage = %Stage::Fetching,
                url = %forecast_url,
                error = ?e,
                "Forecast lookup failed"
            );
            PipelineError::FetchFailed(e)
        })?;

        decode_forecast(&body).and_then(|payload| extract(&payload)).map_err(|e| {
            tracing::debug!(stage = %Stage::Extracting, error = ?e, "Forecast lookup failed");
            PipelineError::ExtractionFailed(e)
        })
    }

    /// Like [`fetch_forecast`](Self::fetch_forecast), but gives up once
    /// `deadline` has passed. Any in-flight request is dropped.
    pub async fn fetch_forecast_within(
        &self,
        coords: &Coordinates,
        deadline: Duration,
    ) -> Result<ClassifiedForecast, PipelineError> {
        tokio::time::timeout(deadline, self.fetch_forecast(coords)).await.unwrap_or_else(|_| {
            tracing::debug!(?deadline, "Forecast lookup timed out");
            Err(PipelineError::DeadlineExceeded(deadline))
        })
    }
}
