use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct EarningsFormProps {
    pub earnings_input: String,
    pub is_submitting: bool,

    // Event handlers
    pub on_input: Callback<String>,
    pub on_calculate: Callback<()>,
}

#[function_component(EarningsForm)]
pub fn earnings_form(props: &EarningsFormProps) -> Html {
    let oninput = {
        let on_input = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_input.emit(input.value());
        })
    };

    let onsubmit = {
        let on_calculate = props.on_calculate.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_calculate.emit(());
        })
    };

    html! {
        <form class="earnings-form" {onsubmit}>
            <input
                type="text"
                placeholder="Enter total earnings"
                value={props.earnings_input.clone()}
                {oninput}
                disabled={props.is_submitting}
            />
            <button type="submit" disabled={props.is_submitting}>
                {if props.is_submitting { "Calculating..." } else { "Calculate" }}
            </button>
        </form>
    }
}
