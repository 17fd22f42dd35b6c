use crate::{error::WeatherError, model::Feeling};

/// Unit code the NWS uses for Fahrenheit temperatures.
pub const FAHRENHEIT: &str = "F";

/// Map a temperature to how it feels.
///
/// Only Fahrenheit is supported: at or below freezing is cold, up to 70
/// inclusive is moderate, anything warmer is hot.
pub fn classify(temperature: i32, unit: &str) -> Result<Feeling, WeatherError> {
    if unit != FAHRENHEIT {
        return Err(WeatherError::UnsupportedUnit(unit.to_string()));
    }

    let feeling = match temperature {
        ..=32 => Feeling::Cold,
        33..=70 => Feeling::Moderate,
        _ => Feeling::Hot,
    };

    Ok(feeling)
}
