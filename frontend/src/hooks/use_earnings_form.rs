use shared::form::EarningsFormState;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;

const COMPONENT: &str = "EarningsForm";

pub struct EarningsFormHandle {
    pub state: UseStateHandle<EarningsFormState>,
    pub on_input: Callback<String>,
    pub on_calculate: Callback<()>,
}

/// Hook that owns the earnings form state and talks to the backend
#[hook]
pub fn use_earnings_form(api_client: ApiClient) -> EarningsFormHandle {
    let state = use_state(EarningsFormState::new);

    let on_input = {
        let state = state.clone();
        Callback::from(move |value: String| {
            state.set((*state).clone().edit_input(&value));
        })
    };

    let on_calculate = {
        let state = state.clone();
        Callback::from(move |_: ()| {
            let (submitting, total_earnings) = (*state).clone().begin_submit();
            state.set(submitting.clone());

            let Some(total_earnings) = total_earnings else {
                Logger::warn_with_component(COMPONENT, "Rejected input before submit");
                return;
            };

            let state = state.clone();
            let api_client = api_client.clone();
            spawn_local(async move {
                match api_client.calculate_earnings(total_earnings).await {
                    Ok(response) => {
                        Logger::info_with_component(
                            COMPONENT,
                            &format!("Calculated final earnings {:.2}", response.final_earnings),
                        );
                        state.set(submitting.apply_response(&response));
                    }
                    Err(e) => {
                        Logger::error_with_component(COMPONENT, &format!("Calculation failed: {}", e));
                        state.set(submitting.apply_error(e));
                    }
                }
            });
        })
    };

    EarningsFormHandle {
        state,
        on_input,
        on_calculate,
    }
}
