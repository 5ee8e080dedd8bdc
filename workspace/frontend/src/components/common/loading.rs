use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    #[prop_or_default]
    pub text: Option<String>,
}

#[function_component(LoadingSpinner)]
pub fn loading_spinner(props: &LoadingProps) -> Html {
    html! {
        <div class="loading-indicator">
            <span class="loading-spinner"></span>
            {if let Some(text) = &props.text {
                html! { <p>{text}</p> }
            } else {
                html! {}
            }}
        </div>
    }
}
