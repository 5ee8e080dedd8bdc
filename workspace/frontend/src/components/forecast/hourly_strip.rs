use common::HourlySlot;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HourlyStripProps {
    /// Empty when the service supplied no hourly data; the section
    /// header still renders.
    pub hours: Vec<HourlySlot>,
}

#[function_component(HourlyStrip)]
pub fn hourly_strip(props: &HourlyStripProps) -> Html {
    html! {
        <div class="hourly-forecast">
            <h3>{"Hourly forecast"}</h3>
            <div class="hourly-scroll">
                { for props.hours.iter().map(|hour| html! {
                    <div class="hour-card">
                        <p>{&hour.time}</p>
                        <p>{format!("{}°C", hour.temp)}</p>
                        <span>{&hour.condition}</span>
                    </div>
                })}
            </div>
        </div>
    }
}
