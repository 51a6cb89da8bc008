use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::{EarningsForm, EarningsSummary};
use hooks::use_earnings_form;
use services::api::ApiClient;

#[function_component(App)]
fn app() -> Html {
    let form = use_earnings_form(ApiClient::new());
    let state = (*form.state).clone();

    html! {
        <div class="calculator">
            <h1>{"Earnings Calculator"}</h1>
            <EarningsForm
                earnings_input={state.earnings_input.clone()}
                is_submitting={state.is_submitting}
                on_input={form.on_input.clone()}
                on_calculate={form.on_calculate.clone()}
            />
            {if let Some(error) = state.error_message.as_ref() {
                html! { <p class="form-message error">{error.clone()}</p> }
            } else { html! {} }}
            {if let Some(view) = state.view.clone() {
                html! { <EarningsSummary {view} /> }
            } else { html! {} }}
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
