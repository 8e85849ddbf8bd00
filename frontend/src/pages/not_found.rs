use yew::prelude::*;
use yew_router::prelude::*;

use crate::{hooks::use_portfolio, i18n, router::Route};

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    let portfolio = use_portfolio();
    let labels = i18n::labels(portfolio.language);

    html! {
        <main class={classes!("not-found", "flex", "flex-col", "items-center", "justify-center")}>
            <h2 class={classes!("section-title")}>{ "404" }</h2>
            <p>{ labels.not_found_title }</p>
            <Link<Route> to={Route::Home} classes={classes!("about-link")}>
                { labels.not_found_back }
            </Link<Route>>
        </main>
    }
}
