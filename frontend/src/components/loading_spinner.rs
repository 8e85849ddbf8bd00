use yew::prelude::*;

use crate::{hooks::use_portfolio, i18n};

#[derive(Clone, PartialEq)]
pub enum SpinnerSize {
    Small,
    Medium,
    Large,
}

impl SpinnerSize {
    fn dimension(&self) -> u32 {
        match self {
            SpinnerSize::Small => 24,
            SpinnerSize::Medium => 40,
            SpinnerSize::Large => 56,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LoadingSpinnerProps {
    #[prop_or(SpinnerSize::Medium)]
    pub size: SpinnerSize,
    #[prop_or(false)]
    pub fullscreen: bool,
}

#[function_component(LoadingSpinner)]
pub fn loading_spinner(props: &LoadingSpinnerProps) -> Html {
    let portfolio = use_portfolio();
    let labels = i18n::labels(portfolio.language);
    let spinner_style = format!("--spinner-size:{}px;", props.size.dimension());

    let spinner = html! {
        <div
            class={classes!("spinner", "flex", "items-center", "justify-center")}
            role="status"
            aria-live="polite"
            aria-busy="true"
        >
            <div style={spinner_style} class={classes!("spinner-ring")} />
            <span class={classes!("sr-only")}>{ labels.loading }</span>
        </div>
    };

    if props.fullscreen {
        html! {
            <div class={classes!("spinner-overlay", "fixed", "inset-0", "flex", "items-center", "justify-center")}>
                { spinner }
            </div>
        }
    } else {
        html! { spinner }
    }
}
