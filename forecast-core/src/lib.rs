//! Core library for the `forecast` CLI.
//!
//! Given a latitude/longitude this crate:
//! - resolves the NWS forecast endpoint for those coordinates (`/points`)
//! - fetches the forecast and picks the current period
//! - classifies the period's temperature as cold, moderate or hot
//!
//! It is used by `forecast-cli`, but can also be reused by other binaries or services.

pub mod classify;
pub mod config;
pub mod error;
pub mod extract;
pub mod model;
pub mod pipeline;
pub mod provider;
pub mod resolver;
pub mod upstream;

pub use classify::classify;
pub use config::Config;
pub use error::{PipelineError, Stage, WeatherError};
pub use extract::{decode_forecast, extract};
pub use model::{ClassifiedForecast, Coordinates, Feeling, ForecastPayload, Period, TimeOfDay};
pub use pipeline::ForecastPipeline;
pub use provider::{ForecastProvider, provider_from_config};
pub use resolver::resolve;
