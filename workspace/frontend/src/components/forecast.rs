mod current_card;
mod daily_list;
mod hourly_strip;
mod view;
mod welcome;

pub use view::ForecastView;
