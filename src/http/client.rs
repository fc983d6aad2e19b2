use reqwest;
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;

/// Custom error type for HTTP requests.
#[derive(Error, Debug)]
pub enum RequestError {
    #[error("HTTP error: {0} ({1}). Response body: {2}")]
    HttpError(reqwest::Url, u16, String),
    #[error("Error deserializing JSON: {0}")]
    JsonError(String),
    #[error("API error {code}: {msg}")]
    ApiError { code: String, msg: String },
    #[error("Other error: {0}")]
    Other(String),
}

/// Builds the HTTP client a gateway holds for its whole lifetime.
pub fn build(timeout_secs: u64) -> Result<reqwest::Client, RequestError> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .map_err(|e| RequestError::Other(e.to_string()))
}

/// Makes a GET request to the specified url with optional query parameters.
pub async fn get<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,                    // Absolute API url.
    params: &[(&str, String)],    // Optional query parameters.
) -> Result<T, RequestError> {
    // Construct the URL.
    let url = if !params.is_empty() {
        reqwest::Url::parse_with_params(url, params)
            .map_err(|e| RequestError::Other(e.to_string()))?
    } else {
        reqwest::Url::parse(url).map_err(|e| RequestError::Other(e.to_string()))?
    };

    log::debug!("GET {}", url);

    let response = client
        .get(url.as_str())
        .send()
        .await
        .map_err(|e| RequestError::Other(e.to_string()))?;

    // Get the response status code.
    let status = response.status();

    // Handle non-success status codes.
    if !status.is_success() {
        let body = response
            .text()
            .await
            .map_err(|e| RequestError::Other(e.to_string()))?;
        return Err(RequestError::HttpError(url, status.as_u16(), body));
    }

    // Deserialize the JSON response.
    response
        .json()
        .await
        .map_err(|e| RequestError::JsonError(e.to_string()))
}
