use thiserror::Error;

/// User-entered search parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastQuery {
    pub city: String,
    /// Number of forecast days requested.
    pub days: i32,
}

impl Default for ForecastQuery {
    fn default() -> Self {
        Self {
            city: String::new(),
            days: 1,
        }
    }
}

/// Rejected search input. Messages are shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("Please enter a city name")]
    EmptyCity,
    #[error("Please enter valid number of days")]
    InvalidDayCount,
}

impl ForecastQuery {
    /// Checked before any network call. The 10-day upper bound is left
    /// to the input widget; only the lower bound is a hard rule here.
    pub fn validate(&self) -> Result<(), QueryError> {
        if self.city.trim().is_empty() {
            return Err(QueryError::EmptyCity);
        }
        if self.days <= 0 {
            return Err(QueryError::InvalidDayCount);
        }
        Ok(())
    }

    /// Query-string pairs for the forecast endpoint. Values are raw
    /// here; the HTTP request builder URL-encodes them.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("city", self.city.clone()),
            ("days", self.days.to_string()),
        ]
    }
}
