use reqwest::{Client, header};

use crate::{config::Config, error::WeatherError};

/// HTTP client for the weather provider.
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct Upstream {
    base_url: String,
    http: Client,
}

impl Upstream {
    pub fn new(config: &Config) -> Result<Self, WeatherError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(header::ACCEPT, header::HeaderValue::from_static("application/geo+json"));

        let http = Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .timeout(config.timeout())
            .build()
            .map_err(WeatherError::Client)?;

        Ok(Self { base_url: config.base_url.trim_end_matches('/').to_string(), http })
    }

    /// `{base}/points/{lat},{lon}`; coordinates are inserted as given.
    pub fn points_url(&self, latitude: &str, longitude: &str) -> String {
        format!("{}/points/{},{}", self.base_url, latitude, longitude)
    }

    /// GET `url` and return the body of a successful response.
    pub async fn get_text(&self, url: &str) -> Result<String, WeatherError> {
        tracing::debug!(%url, "GET");

        let res = self.http.get(url).send().await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(WeatherError::UpstreamStatus { status, body: truncate_body(&body) });
        }

        Ok(body)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
