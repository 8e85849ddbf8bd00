use portfolio_shared::prefs::Language;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    components::theme_toggle::ThemeToggle,
    hooks::use_portfolio,
    i18n,
    portfolio_context::PortfolioAction,
    router::Route,
};

fn nav_routes(labels: &'static i18n::Labels) -> [(Route, &'static str); 4] {
    [
        (Route::Home, labels.nav_home),
        (Route::About, labels.nav_about),
        (Route::Projects, labels.nav_projects),
        (Route::Contact, labels.nav_contact),
    ]
}

#[function_component(Header)]
pub fn header() -> Html {
    let portfolio = use_portfolio();
    let labels = i18n::labels(portfolio.language);
    let current_route = use_route::<Route>();
    let mobile_menu_open = use_state(|| false);
    let language_menu_open = use_state(|| false);

    let toggle_mobile_menu = {
        let mobile_menu_open = mobile_menu_open.clone();
        Callback::from(move |_| mobile_menu_open.set(!*mobile_menu_open))
    };

    let close_mobile_menu = {
        let mobile_menu_open = mobile_menu_open.clone();
        Callback::from(move |_| mobile_menu_open.set(false))
    };

    let toggle_language_menu = {
        let language_menu_open = language_menu_open.clone();
        Callback::from(move |_| language_menu_open.set(!*language_menu_open))
    };

    let select_language = {
        let portfolio = portfolio.clone();
        let language_menu_open = language_menu_open.clone();
        Callback::from(move |language: Language| {
            portfolio.dispatch(PortfolioAction::SetLanguage(language));
            language_menu_open.set(false);
        })
    };

    let language_item = |language: Language, name: &'static str| {
        let select_language = select_language.clone();
        let active = portfolio.language == language;
        let onclick = Callback::from(move |_| select_language.emit(language));
        html! {
            <button type="button" class={classes!("language-item")} {onclick}>
                { name }
                { if active { " ✓" } else { "" } }
            </button>
        }
    };

    let nav_link = |route: Route, label: &'static str, on_click: Option<Callback<MouseEvent>>| {
        let active = current_route.as_ref() == Some(&route);
        let link = html! {
            <Link<Route>
                to={route}
                classes={classes!("nav-link", active.then_some("nav-link--active"))}
            >
                { label }
            </Link<Route>>
        };
        match on_click {
            Some(onclick) => html! { <span {onclick}>{ link }</span> },
            None => link,
        }
    };

    html! {
        <header class={classes!("site-header", "fixed", "top-0", "left-0", "right-0")}>
            <div class={classes!("header-inner", "flex", "items-center", "justify-between")}>
                <button
                    type="button"
                    class={classes!("mobile-menu-button")}
                    aria-label={
                        if *mobile_menu_open { labels.close_menu_aria } else { labels.open_menu_aria }
                    }
                    onclick={toggle_mobile_menu}
                >
                    <span aria-hidden="true">{ if *mobile_menu_open { "✕" } else { "☰" } }</span>
                </button>

                <nav class={classes!("main-nav", "flex", "items-center", "gap-6")}>
                    { for nav_routes(labels)
                        .into_iter()
                        .map(|(route, label)| nav_link(route, label, None)) }
                </nav>

                <div class={classes!("header-actions", "flex", "items-center", "gap-2")}>
                    <div class={classes!("language-menu")}>
                        <button
                            type="button"
                            class={classes!("language-menu-button")}
                            aria-label={labels.language_menu_aria}
                            aria-expanded={(*language_menu_open).to_string()}
                            onclick={toggle_language_menu}
                        >
                            { portfolio.language.as_str().to_uppercase() }
                        </button>
                        if *language_menu_open {
                            <div class={classes!("language-menu-items")}>
                                { language_item(Language::En, "English") }
                                { language_item(Language::Mk, "Македонски") }
                            </div>
                        }
                    </div>
                    <ThemeToggle />
                </div>
            </div>

            if *mobile_menu_open {
                <nav class={classes!("mobile-nav", "flex", "flex-col", "gap-2")}>
                    { for nav_routes(labels)
                        .into_iter()
                        .map(|(route, label)| nav_link(route, label, Some(close_mobile_menu.clone()))) }
                </nav>
            }
        </header>
    }
}
