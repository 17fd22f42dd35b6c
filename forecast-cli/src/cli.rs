use std::{process::ExitCode, time::Duration};

use anyhow::Context;
use clap::{Parser, Subcommand};
use forecast_core::{ClassifiedForecast, Config, Coordinates, ForecastPipeline};
use inquire::{CustomType, Text};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "forecast", version, about = "Current NWS forecast for a coordinate")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Set the provider URL, user agent and request timeout.
    Configure,

    /// Print where the config file lives.
    ConfigPath,

    /// Show the current forecast for a coordinate.
    Show {
        /// Latitude, e.g. 39.7456
        #[arg(allow_hyphen_values = true)]
        latitude: String,

        /// Longitude, e.g. -97.0892
        #[arg(allow_hyphen_values = true)]
        longitude: String,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,

        /// Give up after this many seconds.
        #[arg(long)]
        deadline_secs: Option<u64>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        match self.command {
            Command::Configure => {
                configure()?;
                Ok(ExitCode::SUCCESS)
            }
            Command::ConfigPath => {
                println!("{}", Config::config_file_path()?.display());
                Ok(ExitCode::SUCCESS)
            }
            Command::Show { latitude, longitude, json, deadline_secs } => {
                let config = Config::load()?;
                let coords = Coordinates::new(latitude, longitude);
                show(&config, &coords, json, deadline_secs.map(Duration::from_secs)).await
            }
        }
    }
}

/// Look up and print the forecast. A failed lookup prints the generic
/// notice and yields a failure exit code rather than an error.
async fn show(
    config: &Config,
    coords: &Coordinates,
    json: bool,
    deadline: Option<Duration>,
) -> anyhow::Result<ExitCode> {
    let pipeline = ForecastPipeline::new(config)
        .context("Failed to set up HTTP client for the weather provider")?;

    let result = match deadline {
        Some(deadline) => pipeline.fetch_forecast_within(coords, deadline).await,
        None => pipeline.fetch_forecast(coords).await,
    };

    match result {
        Ok(forecast) => {
            print_forecast(&forecast, json)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            eprintln!("{}", err.user_message());
            tracing::info!(
                error = %format!("{:#}", anyhow::Error::new(err)),
                "Forecast lookup failed"
            );
            Ok(ExitCode::FAILURE)
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    config.base_url = Text::new("Provider base URL:")
        .with_default(&config.base_url)
        .prompt()
        .context("Failed to read base URL")?;

    config.user_agent = Text::new("User-Agent (app name and contact):")
        .with_default(&config.user_agent)
        .prompt()
        .context("Failed to read user agent")?;

    config.timeout_secs = CustomType::<u64>::new("Request timeout in seconds:")
        .with_default(config.timeout_secs)
        .with_error_message("Please enter a whole number of seconds")
        .prompt()
        .context("Failed to read timeout")?;

    config.save()?;
    println!("Saved configuration to {}", Config::config_file_path()?.display());

    Ok(())
}

fn print_forecast(forecast: &ClassifiedForecast, json: bool) -> anyhow::Result<()> {
    if json {
        let out =
            serde_json::to_string_pretty(forecast).context("Failed to serialize forecast")?;
        println!("{out}");
    } else {
        println!("Forecast: {}", forecast.short_description);
        println!("It feels {} ({})", forecast.feeling, forecast.time_of_day);
    }

    Ok(())
}
