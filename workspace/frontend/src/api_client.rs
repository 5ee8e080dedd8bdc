pub mod forecast;

use common::FetchError;
use gloo_net::http::Request;

use crate::settings;

/// Common GET request handler. Query parameters are URL-encoded by the
/// request builder.
pub async fn get<T>(endpoint: &str, query: &[(&str, String)]) -> Result<T, FetchError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let url = settings::get_settings().api_url(endpoint);
    log::debug!("GET request to: {}", url);

    let response = Request::get(&url)
        .query(query.iter().map(|(key, value)| (*key, value.as_str())))
        .send()
        .await
        .map_err(|e| {
            let error_msg = format!("Request failed: {}", e);
            log::error!("GET {} - {}", endpoint, error_msg);
            FetchError::Network(error_msg)
        })?;

    if !response.ok() {
        log::warn!("GET {} - Non-OK response: {}", endpoint, response.status());
        return Err(FetchError::NotFound);
    }

    log::trace!("GET {} - Response received, parsing JSON", endpoint);
    let payload = response.json::<T>().await.map_err(|e| {
        let error_msg = format!("Failed to parse response: {}", e);
        log::error!("GET {} - {}", endpoint, error_msg);
        FetchError::Network(error_msg)
    })?;

    log::info!("GET {} - Success", endpoint);
    Ok(payload)
}
