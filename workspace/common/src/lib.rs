//! Client-side core for the Skycast frontend.
//! The wire structs mirror the forecast service's response payload so the
//! frontend can deserialize it without duplicating shapes; the rest is
//! validation and view-state logic kept free of browser dependencies so
//! it can be tested on the host.

mod background;
mod fetch;
mod forecast;
mod query;

pub use background::Background;
pub use fetch::{FetchError, FetchState, ViewState};
pub use forecast::{CurrentConditions, DailySlot, ForecastBundle, HourlySlot};
pub use query::{ForecastQuery, QueryError};
