use std::rc::Rc;

use portfolio_shared::{prefs::Language, PortfolioDocument};
use web_sys::console;
use yew::prelude::*;

use crate::{api, preferences};

/// Session-wide content state shared by every page.
///
/// The document is fetched once when the provider mounts and is immutable
/// afterwards; pages re-read it (never re-fetch) on language changes.
#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioState {
    /// Fetched content, absent until the fetch resolves.
    pub document: Option<Rc<PortfolioDocument>>,
    /// Currently selected language.
    pub language: Language,
    /// True from mount until the fetch settles, success or failure.
    pub loading: bool,
    /// Why the fetch failed, when it did.
    pub error: Option<String>,
}

impl PortfolioState {
    fn initial(language: Language) -> Self {
        Self {
            document: None,
            language,
            loading: true,
            error: None,
        }
    }
}

/// State transitions of the content session.
pub enum PortfolioAction {
    /// The one-time fetch resolved with a valid document.
    DocumentLoaded(PortfolioDocument),
    /// The one-time fetch failed; the reason is surfaced to the user.
    LoadFailed(String),
    /// Switch the displayed language and persist the choice.
    SetLanguage(Language),
}

impl Reducible for PortfolioState {
    type Action = PortfolioAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            PortfolioAction::DocumentLoaded(document) => {
                next.document = Some(Rc::new(document));
                next.loading = false;
                next.error = None;
            },
            PortfolioAction::LoadFailed(reason) => {
                next.loading = false;
                next.error = Some(reason);
            },
            PortfolioAction::SetLanguage(language) => {
                // In-memory update plus storage write-through; no re-fetch.
                preferences::store_language(language);
                next.language = language;
            },
        }
        Rc::new(next)
    }
}

/// Handle pages use to read state and dispatch actions.
pub type PortfolioContext = UseReducerHandle<PortfolioState>;

#[derive(Properties, PartialEq)]
pub struct PortfolioProviderProps {
    pub children: Html,
}

#[function_component(PortfolioProvider)]
pub fn portfolio_provider(props: &PortfolioProviderProps) -> Html {
    let state = use_reducer(|| PortfolioState::initial(preferences::load_language()));

    {
        let state = state.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match api::fetch_portfolio_document().await {
                    Ok(document) => state.dispatch(PortfolioAction::DocumentLoaded(document)),
                    Err(reason) => {
                        console::error_1(
                            &format!("Failed to fetch portfolio document: {}", reason).into(),
                        );
                        state.dispatch(PortfolioAction::LoadFailed(reason));
                    },
                }
            });
            || ()
        });
    }

    html! {
        <ContextProvider<PortfolioContext> context={state}>
            {props.children.clone()}
        </ContextProvider<PortfolioContext>>
    }
}
