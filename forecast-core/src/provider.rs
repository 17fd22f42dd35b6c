use async_trait::async_trait;
use std::fmt::Debug;

use crate::{
    Config,
    error::{PipelineError, WeatherError},
    model::{ClassifiedForecast, Coordinates},
    pipeline::ForecastPipeline,
};

#[async_trait]
pub trait ForecastProvider: Send + Sync + Debug {
    async fn forecast(&self, coords: &Coordinates) -> Result<ClassifiedForecast, PipelineError>;
}

#[async_trait]
impl ForecastProvider for ForecastPipeline {
    async fn forecast(&self, coords: &Coordinates) -> Result<ClassifiedForecast, PipelineError> {
        self.fetch_forecast(coords).await
    }
}

/// Construct the provider described by `config`.
pub fn provider_from_config(config: &Config) -> Result<Box<dyn ForecastProvider>, WeatherError> {
    Ok(Box::new(ForecastPipeline::new(config)?))
}
