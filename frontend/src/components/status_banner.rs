use yew::prelude::*;
use yew::use_effect_with;
use yew_hooks::prelude::use_timeout;

/// Visual flavor of a [`StatusBanner`].
#[derive(Clone, PartialEq)]
pub enum BannerKind {
    Success,
    Error,
}

#[derive(Properties, PartialEq)]
pub struct StatusBannerProps {
    pub kind: BannerKind,
    /// Optional heading above the message.
    #[prop_or_default]
    pub title: String,
    pub message: String,
    #[prop_or_default]
    pub on_close: Option<Callback<()>>,
    /// Auto-hide after a few seconds. Off for persistent errors such as a
    /// failed content fetch.
    #[prop_or(true)]
    pub auto_dismiss: bool,
}

#[function_component(StatusBanner)]
pub fn status_banner(props: &StatusBannerProps) -> Html {
    let is_open = use_state(|| true);

    let dismiss = {
        let is_open = is_open.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_| {
            if !*is_open {
                return;
            }
            is_open.set(false);
            if let Some(cb) = on_close.as_ref() {
                cb.emit(());
            }
        })
    };

    let auto_timeout = {
        let dismiss = dismiss.clone();
        use_timeout(move || dismiss.emit(()), if props.auto_dismiss { 4000 } else { 0 })
    };

    {
        let is_open = is_open.clone();
        use_effect_with(props.message.clone(), move |_| {
            is_open.set(true);
        });
    }

    {
        let auto_timeout = auto_timeout.clone();
        use_effect_with(
            (*is_open, props.auto_dismiss, props.message.clone()),
            move |(visible, auto_dismiss, _message)| {
                if *auto_dismiss && *visible {
                    auto_timeout.reset();
                } else {
                    auto_timeout.cancel();
                }
            },
        );
    }

    if props.message.trim().is_empty() || !*is_open {
        return Html::default();
    }

    let kind_class = match props.kind {
        BannerKind::Success => "status-banner--success",
        BannerKind::Error => "status-banner--error",
    };

    let close_button = {
        let dismiss = dismiss.clone();
        Callback::from(move |_| dismiss.emit(()))
    };

    html! {
        <div
            class={classes!("status-banner", kind_class, "flex", "items-start", "gap-3")}
            role="alert"
            aria-live="assertive"
        >
            <div class={classes!("flex-1")}>
                if !props.title.is_empty() {
                    <p class={classes!("status-banner-title", "font-semibold")}>{ props.title.clone() }</p>
                }
                <p>{ props.message.clone() }</p>
            </div>
            <button
                type="button"
                class={classes!("status-banner-close")}
                aria-label="Close"
                onclick={close_button}
            >
                {"×"}
            </button>
        </div>
    }
}
