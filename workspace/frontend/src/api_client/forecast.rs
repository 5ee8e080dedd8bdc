use common::{FetchError, ForecastBundle, ForecastQuery};

use crate::api_client;

/// Fetch current conditions plus the hourly/daily forecast for a city.
/// Callers validate the query first; this only moves it over the wire.
pub async fn fetch_forecast(query: &ForecastQuery) -> Result<ForecastBundle, FetchError> {
    log::trace!("Fetching {}-day forecast for '{}'", query.days, query.city);
    let result: Result<ForecastBundle, FetchError> =
        api_client::get("/forecast", &query.to_query_pairs()).await;
    match &result {
        Ok(bundle) => log::info!(
            "Fetched forecast for {} ({} daily entries)",
            bundle.weather_response.city,
            bundle.day_temp.len()
        ),
        Err(e) => log::error!("Failed to fetch forecast for '{}': {}", query.city, e),
    }
    result
}
