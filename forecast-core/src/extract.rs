use crate::{
    classify::classify,
    error::WeatherError,
    model::{ClassifiedForecast, ForecastPayload, TimeOfDay},
};

/// Name the NWS gives the first period once the day is over.
const NIGHT_PERIOD_NAME: &str = "Tonight";

/// Decode a forecast endpoint body.
pub fn decode_forecast(body: &str) -> Result<ForecastPayload, WeatherError> {
    serde_json::from_str(body).map_err(|source| WeatherError::Decode { what: "forecast", source })
}

/// Classify the current (first) period of a forecast.
///
/// Day/night is decided by the period name alone: only an exact "Tonight"
/// counts as night. `isDaytime` and the period timestamps are not consulted.
pub fn extract(payload: &ForecastPayload) -> Result<ClassifiedForecast, WeatherError> {
    let props = &payload.properties;
    tracing::debug!(
        periods = props.periods.len(),
        generated_at = ?props.generated_at,
        updated = ?props.update_time,
        "Decoded forecast payload"
    );

    let current = props.periods.first().ok_or(WeatherError::NoPeriodsAvailable)?;

    let time_of_day =
        if current.name == NIGHT_PERIOD_NAME { TimeOfDay::Night } else { TimeOfDay::Day };
    tracing::info!(period = %current.name, %time_of_day, "Selected current forecast period");

    let feeling = classify(current.temperature, &current.temperature_unit).map_err(|e| {
        WeatherError::Classification { period: current.name.clone(), source: Box::new(e) }
    })?;

    tracing::info!(short_forecast = %current.short_forecast, %feeling, "Extracted forecast");

    Ok(ClassifiedForecast {
        short_description: current.short_forecast.clone(),
        feeling,
        time_of_day,
    })
}
