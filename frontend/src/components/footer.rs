use yew::prelude::*;

use crate::{hooks::use_portfolio, i18n};

#[function_component(Footer)]
pub fn footer() -> Html {
    let portfolio = use_portfolio();
    let labels = i18n::labels(portfolio.language);

    html! {
        <footer class={classes!("site-footer", "flex", "items-center", "justify-center")}>
            <p class={classes!("copyright")}>{ labels.copyright }</p>
        </footer>
    }
}
