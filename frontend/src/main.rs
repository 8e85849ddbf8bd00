//! Yew frontend for the bilingual portfolio site.

mod api;
mod components;
mod config;
/// Reusable hooks for theme, language and scroll behaviour.
pub mod hooks;
mod i18n;
mod pages;
mod portfolio_context;
mod preferences;
mod router;

use yew::prelude::*;

use crate::portfolio_context::PortfolioProvider;

#[function_component(App)]
fn app() -> Html {
    html! {
        <PortfolioProvider>
            <router::AppRouter />
        </PortfolioProvider>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
