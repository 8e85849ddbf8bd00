pub mod about;
pub mod contact;
pub mod home;
pub mod not_found;
pub mod projects;

use std::rc::Rc;

use portfolio_shared::PortfolioDocument;
use yew::prelude::*;

use crate::{
    components::{
        loading_spinner::{LoadingSpinner, SpinnerSize},
        status_banner::{BannerKind, StatusBanner},
    },
    i18n,
    portfolio_context::PortfolioContext,
};

/// Gate shared by every page.
///
/// Until the one-time fetch resolves the page defers to a spinner; a
/// failed fetch renders a persistent error banner instead of spinning
/// forever.
pub(crate) fn ready_document(
    portfolio: &PortfolioContext,
) -> Result<Rc<PortfolioDocument>, Html> {
    let labels = i18n::labels(portfolio.language);

    if let Some(reason) = portfolio.error.clone() {
        return Err(html! {
            <div class={classes!("page-status", "flex", "items-center", "justify-center")}>
                <StatusBanner
                    kind={BannerKind::Error}
                    title={labels.load_failed_title.to_string()}
                    message={reason}
                    auto_dismiss={false}
                />
            </div>
        });
    }

    match portfolio.document.clone() {
        Some(document) if !portfolio.loading => Ok(document),
        _ => Err(html! { <LoadingSpinner size={SpinnerSize::Large} fullscreen=true /> }),
    }
}
