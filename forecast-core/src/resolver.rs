use crate::{error::WeatherError, model::PointsResponse, upstream::Upstream};

/// Look up the forecast endpoint for a pair of coordinates.
///
/// The returned URL is taken from `properties.forecast` as-is; it is not
/// checked for well-formedness or reachability.
pub async fn resolve(
    upstream: &Upstream,
    latitude: &str,
    longitude: &str,
) -> Result<String, WeatherError> {
    let url = upstream.points_url(latitude, longitude);
    let body = upstream.get_text(&url).await?;
    let forecast_url = decode_points(&body)?;

    tracing::debug!(%forecast_url, "Resolved forecast endpoint");
    Ok(forecast_url)
}

pub fn decode_points(body: &str) -> Result<String, WeatherError> {
    let parsed: PointsResponse = serde_json::from_str(body)
        .map_err(|source| WeatherError::Decode { what: "points", source })?;

    Ok(parsed.properties.forecast)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_extracts_forecast_url() {
        let body = r#"{
            "id": "https://api.weather.gov/points/39.7456,-97.0892",
            "properties": {
                "gridId": "TOP",
                "forecast": "https://api.weather.gov/gridpoints/TOP/32,81/forecast",
                "forecastHourly": "https://api.weather.gov/gridpoints/TOP/32,81/forecast/hourly"
            }
        }"#;

        assert_eq!(
            decode_points(body).unwrap(),
            "https://api.weather.gov/gridpoints/TOP/32,81/forecast"
        );
    }

    #[test]
    fn decode_does_not_validate_url() {
        let body = r#"{"properties":{"forecast":"not a url"}}"#;
        assert_eq!(decode_points(body).unwrap(), "not a url");
    }

    #[test]
    fn decode_missing_forecast_fails() {
        let err = decode_points(r#"{"properties":{}}"#).unwrap_err();
        assert!(matches!(err, WeatherError::Decode { what: "points", .. }));
    }

    #[test]
    fn decode_garbage_fails() {
        let err = decode_points("<html>Service Unavailable</html>").unwrap_err();
        assert!(matches!(err, WeatherError::Decode { .. }));
    }
}
