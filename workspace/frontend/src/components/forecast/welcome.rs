use yew::prelude::*;

/// Fixed greeting shown for a short window after mount.
#[function_component(WelcomeBanner)]
pub fn welcome_banner() -> Html {
    html! {
        <div class="welcome-screen">
            <h1>{"🌤️ Welcome to Skycast!"}</h1>
            <p>{"Get instant forecasts for your city"}</p>
        </div>
    }
}
