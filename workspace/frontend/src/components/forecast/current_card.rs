use common::CurrentConditions;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CurrentCardProps {
    pub current: CurrentConditions,
}

#[function_component(CurrentCard)]
pub fn current_card(props: &CurrentCardProps) -> Html {
    let current = &props.current;

    html! {
        <div class="current-weather">
            <h2>{format!("{}, {}", current.city, current.country)}</h2>
            <h1>{format!("{}°C", current.temperature)}</h1>
            <p>{&current.condition}</p>
            <p class="feels">{format!("Feels like {}°C", current.temperature)}</p>
        </div>
    }
}
