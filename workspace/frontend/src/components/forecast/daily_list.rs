use common::DailySlot;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DailyListProps {
    /// The count the user asked for; the heading shows it even if the
    /// service returned fewer entries.
    pub requested_days: i32,
    pub entries: Vec<DailySlot>,
}

#[function_component(DailyList)]
pub fn daily_list(props: &DailyListProps) -> Html {
    html! {
        <div class="daily-forecast">
            <h3>{format!("{}-Day Forecast", props.requested_days)}</h3>
            { for props.entries.iter().map(|day| html! {
                <div class="day-card">
                    <p>{&day.date}</p>
                    <p>{format!("{}°C", day.avg_temp)}</p>
                    <p>{format!("⬆ {}°C | ⬇ {}°C", day.max_temp, day.min_temp)}</p>
                </div>
            })}
        </div>
    }
}
