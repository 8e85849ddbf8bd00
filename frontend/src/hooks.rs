use portfolio_shared::prefs::Theme;
use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::prelude::*;
use yew_router::prelude::use_location;

use crate::{portfolio_context::PortfolioContext, preferences};

/// Read the session content context.
///
/// Panics when called outside [`crate::portfolio_context::PortfolioProvider`];
/// the provider wraps the whole app, so this only trips on a wiring bug.
#[hook]
pub fn use_portfolio() -> PortfolioContext {
    use_context::<PortfolioContext>().expect("PortfolioProvider must wrap the app")
}

/// Active theme plus a setter that persists and applies the choice.
///
/// The initial value comes from storage (or the OS dark-mode signal) and
/// is mirrored onto the root element before first paint of the consumer,
/// so a persisted `dark` renders dark without a click.
#[hook]
pub fn use_theme() -> (Theme, Callback<Theme>) {
    let theme = use_state(preferences::load_theme);

    {
        let active = *theme;
        use_effect_with(active, move |next| {
            preferences::apply_theme(*next);
            || ()
        });
    }

    let set_theme = {
        let theme = theme.clone();
        Callback::from(move |next: Theme| {
            preferences::store_theme(next);
            theme.set(next);
        })
    };

    (*theme, set_theme)
}

/// Automatically scroll the viewport to the top whenever the current route
/// changes.
#[hook]
pub fn use_scroll_to_top() {
    let location = use_location();

    use_effect_with(location, move |location| {
        if location.is_some() {
            scroll_window_to_top();
        }

        || ()
    });
}

fn scroll_window_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_left(0.0);
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}
