use common::{Background, FetchState, ForecastBundle, ForecastQuery, ViewState};
use gloo_timers::callback::Timeout;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::current_card::CurrentCard;
use super::daily_list::DailyList;
use super::hourly_strip::HourlyStrip;
use super::welcome::WelcomeBanner;
use crate::api_client::forecast::fetch_forecast;
use crate::components::common::error::ErrorDisplay;
use crate::components::common::loading::LoadingSpinner;
use crate::settings;

#[function_component(ForecastView)]
pub fn forecast_view() -> Html {
    let city = use_state(String::new);
    let days = use_state(|| 1_i32);
    let show_welcome = use_state(|| true);
    let fetch = use_state(FetchState::<ForecastBundle>::default);

    // One-shot welcome banner. The timer handle is returned from the
    // effect, so tearing the view down before it fires drops (and
    // cancels) it instead of writing into a dead component.
    {
        let show_welcome = show_welcome.clone();
        use_effect_with((), move |_| {
            let duration = settings::get_settings().welcome_duration_ms;
            log::debug!("Welcome banner up for {}ms", duration);
            let timer = Timeout::new(duration, move || show_welcome.set(false));
            move || drop(timer)
        });
    }

    let on_city_input = {
        let city = city.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            city.set(input.value());
        })
    };

    let on_days_input = {
        let days = days.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            // An emptied number input carries no parseable count.
            days.set(input.value().parse().unwrap_or(0));
        })
    };

    let on_search = {
        let city = city.clone();
        let days = days.clone();
        let fetch = fetch.clone();

        Callback::from(move |_: MouseEvent| {
            let query = ForecastQuery {
                city: (*city).clone(),
                days: *days,
            };

            // Rejected input never reaches the network.
            if let Err(err) = query.validate() {
                log::debug!("Rejected search input: {}", err);
                fetch.set(FetchState::Error(err.to_string()));
                return;
            }

            // One write replaces the previous result and error both.
            fetch.set(FetchState::Loading);

            // Overlapping searches are not serialized: whichever
            // response resolves last owns the displayed state.
            let fetch = fetch.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match fetch_forecast(&query).await {
                    Ok(bundle) => fetch.set(FetchState::Success(bundle)),
                    Err(e) => fetch.set(FetchState::Error(e.to_string())),
                }
            });
        })
    };

    let background =
        Background::for_condition(fetch.data().map(|b| b.weather_response.condition.as_str()));

    let body = match ViewState::derive(*show_welcome, &fetch) {
        ViewState::Welcome => {
            return html! {
                <div class={classes!("weather-container", background.css_class())}>
                    <WelcomeBanner />
                </div>
            };
        }
        ViewState::Idle => html! {},
        ViewState::Loading => html! {
            <LoadingSpinner text="Loading weather..." />
        },
        ViewState::Error(message) => html! {
            <ErrorDisplay message={message.to_string()} />
        },
        ViewState::Loaded(bundle) => html! {
            <div class="weather-card">
                <CurrentCard current={bundle.weather_response.clone()} />
                <HourlyStrip hours={bundle.hourly_temp.clone().unwrap_or_default()} />
                <DailyList requested_days={*days} entries={bundle.day_temp.clone()} />
            </div>
        },
    };

    html! {
        <div class={classes!("weather-container", background.css_class())}>
            <div class="weather-content">
                <div class="search-bar">
                    <input
                        type="text"
                        placeholder="Enter city"
                        value={(*city).clone()}
                        oninput={on_city_input}
                    />
                    <input
                        type="number"
                        min="1"
                        max="10"
                        placeholder="Days"
                        value={days.to_string()}
                        oninput={on_days_input}
                    />
                    <button onclick={on_search}>{"Search"}</button>
                </div>
                { body }
            </div>
        </div>
    }
}
