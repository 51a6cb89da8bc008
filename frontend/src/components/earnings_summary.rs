use shared::form::{format_amount, EarningsView};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct EarningsSummaryProps {
    pub view: EarningsView,
}

#[function_component(EarningsSummary)]
pub fn earnings_summary(props: &EarningsSummaryProps) -> Html {
    let view = &props.view;

    html! {
        <div class="earnings-summary">
            <p>{view.final_earnings_label()}</p>
            <p>{view.message.clone()}</p>
            {if let Some(breakdown) = view.breakdown.as_ref() {
                html! {
                    <div class="earnings-breakdown">
                        <p>{format!("Wages: {}", format_amount(breakdown.wages))}</p>
                        <p>{format!("Dividends: {}", format_amount(breakdown.dividends))}</p>
                    </div>
                }
            } else { html! {} }}
        </div>
    }
}
