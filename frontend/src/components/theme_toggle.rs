use portfolio_shared::prefs::Theme;
use yew::prelude::*;

use crate::{
    hooks::{use_portfolio, use_theme},
    i18n,
};

#[derive(Properties, PartialEq)]
pub struct ThemeToggleProps {
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ThemeToggle)]
pub fn theme_toggle(props: &ThemeToggleProps) -> Html {
    let portfolio = use_portfolio();
    let labels = i18n::labels(portfolio.language);
    let (theme, set_theme) = use_theme();

    let onclick = {
        let set_theme = set_theme.clone();
        Callback::from(move |_| set_theme.emit(theme.toggled()))
    };

    let label = match theme {
        Theme::Dark => labels.switch_to_light,
        Theme::Light => labels.switch_to_dark,
    };

    let icon = match theme {
        Theme::Dark => "☀",
        Theme::Light => "☾",
    };

    html! {
        <button
            type="button"
            class={classes!("theme-toggle", props.class.clone())}
            {onclick}
            aria-label={label}
            title={label}
            aria-pressed={(theme == Theme::Dark).to_string()}
        >
            <span aria-hidden="true">{ icon }</span>
            <span class={classes!("sr-only")}>{ label }</span>
        </button>
    }
}
