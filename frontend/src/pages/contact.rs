use portfolio_shared::{validation::ContactForm, ContactLink};
use web_sys::{console, HtmlInputElement, HtmlTextAreaElement};
use yew::events::{InputEvent, SubmitEvent};
use yew::prelude::*;

use crate::{
    api,
    components::{
        loading_spinner::{LoadingSpinner, SpinnerSize},
        status_banner::{BannerKind, StatusBanner},
    },
    hooks::{use_portfolio, use_scroll_to_top},
    i18n, pages,
};

fn link_href(link: &ContactLink) -> (String, bool) {
    // E-mail entries carry a bare address; everything else is a URL that
    // opens in a new tab.
    let is_email = link.link_name.contains("Email");
    if is_email {
        (format!("mailto:{}", link.url), true)
    } else {
        (link.url.clone(), false)
    }
}

#[function_component(ContactPage)]
pub fn contact_page() -> Html {
    let portfolio = use_portfolio();
    use_scroll_to_top();

    let form = use_state(ContactForm::default);
    let submitting = use_state(|| false);
    let feedback = use_state(|| Option::<(BannerKind, String)>::None);

    let document = match pages::ready_document(&portfolio) {
        Ok(document) => document,
        Err(waiting) => return waiting,
    };
    let labels = i18n::labels(portfolio.language);
    let contact = &document.for_language(portfolio.language).contact;

    let on_name_input = {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                form.set(ContactForm {
                    name: target.value(),
                    ..(*form).clone()
                });
            }
        })
    };

    let on_phone_input = {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                form.set(ContactForm {
                    phone: target.value(),
                    ..(*form).clone()
                });
            }
        })
    };

    let on_email_input = {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                form.set(ContactForm {
                    email: target.value(),
                    ..(*form).clone()
                });
            }
        })
    };

    let on_message_input = {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlTextAreaElement>() {
                form.set(ContactForm {
                    message: target.value(),
                    ..(*form).clone()
                });
            }
        })
    };

    let onsubmit = {
        let form = form.clone();
        let submitting = submitting.clone();
        let feedback = feedback.clone();
        let sent_message = labels.message_sent.to_string();
        let failed_message = labels.submission_failed.to_string();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *submitting {
                return;
            }

            // Validation short-circuits on the first failing field; no
            // delivery attempt happens on failure.
            let payload = match form.submission() {
                Ok(payload) => payload,
                Err(reason) => {
                    feedback.set(Some((BannerKind::Error, reason.to_string())));
                    return;
                },
            };

            submitting.set(true);
            let form = form.clone();
            let submitting = submitting.clone();
            let feedback = feedback.clone();
            let sent_message = sent_message.clone();
            let failed_message = failed_message.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api::send_contact_message(&payload).await {
                    Ok(()) => {
                        form.set(ContactForm::default());
                        feedback.set(Some((BannerKind::Success, sent_message)));
                    },
                    Err(reason) => {
                        console::error_1(
                            &format!("Contact delivery failed: {}", reason).into(),
                        );
                        // Keep the input for correction and resubmission.
                        feedback.set(Some((BannerKind::Error, failed_message)));
                    },
                }
                // Always clear the flag, success or failure.
                submitting.set(false);
            });
        })
    };

    let clear_feedback = {
        let feedback = feedback.clone();
        Callback::from(move |_| feedback.set(None))
    };

    html! {
        <main class={classes!("contact-section")}>
            <h2 class={classes!("section-title", "text-center")}>{ labels.contact_title }</h2>

            if let Some((kind, message)) = (*feedback).clone() {
                <StatusBanner {kind} {message} on_close={clear_feedback.clone()} />
            }

            <div class={classes!("contact-grid")}>
                <form class={classes!("contact-form", "flex", "flex-col", "gap-4")} {onsubmit}>
                    <label for="name">{ &contact.name_label }</label>
                    <input
                        id="name"
                        name="name"
                        placeholder={contact.name_input.clone()}
                        value={form.name.clone()}
                        oninput={on_name_input}
                        required=true
                    />

                    <label for="phone">{ &contact.phone_label }</label>
                    <input
                        id="phone"
                        name="phone"
                        type="tel"
                        placeholder={contact.phone_input.clone()}
                        value={form.phone.clone()}
                        oninput={on_phone_input}
                    />

                    <label for="email">{ &contact.email_label }</label>
                    <input
                        id="email"
                        name="email"
                        type="email"
                        placeholder={contact.email_input.clone()}
                        value={form.email.clone()}
                        oninput={on_email_input}
                        required=true
                    />

                    <label for="message">{ &contact.message_label }</label>
                    <textarea
                        id="message"
                        name="message"
                        rows="5"
                        placeholder={contact.message_input.clone()}
                        value={form.message.clone()}
                        oninput={on_message_input}
                        required=true
                    />

                    <button type="submit" class={classes!("submit-button")} disabled={*submitting}>
                        if *submitting {
                            <span class={classes!("flex", "items-center", "gap-2")}>
                                <LoadingSpinner size={SpinnerSize::Small} />
                                { labels.sending }
                            </span>
                        } else {
                            { contact.button_text.as_str() }
                        }
                    </button>
                </form>

                <div class={classes!("contact-side", "flex", "flex-col", "gap-6")}>
                    <div class={classes!("contact-card")}>
                        <h3>{ labels.connect_title }</h3>
                        <ul class={classes!("contact-links")}>
                            { for contact.contact_links.iter().map(|link| {
                                let (href, is_email) = link_href(link);
                                html! {
                                    <li key={link.link_name.clone()}>
                                        <a
                                            {href}
                                            target={(!is_email).then_some("_blank")}
                                            rel={(!is_email).then_some("noopener noreferrer")}
                                        >
                                            { &link.link_name }
                                        </a>
                                    </li>
                                }
                            }) }
                        </ul>
                    </div>

                    <div class={classes!("contact-card")}>
                        <p class={classes!("contact-blurb")}>{ labels.contact_blurb }</p>
                    </div>
                </div>
            </div>
        </main>
    }
}
