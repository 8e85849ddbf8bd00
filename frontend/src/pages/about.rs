use yew::prelude::*;

use crate::{
    hooks::{use_portfolio, use_scroll_to_top},
    i18n, pages,
};

#[function_component(AboutPage)]
pub fn about_page() -> Html {
    let portfolio = use_portfolio();
    use_scroll_to_top();

    let document = match pages::ready_document(&portfolio) {
        Ok(document) => document,
        Err(waiting) => return waiting,
    };
    let labels = i18n::labels(portfolio.language);
    let about = &document.for_language(portfolio.language).about;

    html! {
        <main class={classes!("about-section")}>
            <h2 class={classes!("section-title", "text-center")}>{ labels.about_title }</h2>

            <div class={classes!("about-grid")}>
                <div class={classes!("about-card")}>
                    <p class={classes!("about-text")}>{ &about.about_text }</p>
                </div>

                <div class={classes!("about-side", "flex", "flex-col", "gap-6")}>
                    <div class={classes!("about-card")}>
                        <h3>{ labels.technologies_title }</h3>
                        <div class={classes!("tech-chips", "flex", "flex-wrap", "gap-2")}>
                            { for about.tech.iter().map(|tech| html! {
                                <span key={tech.id.clone()} class={classes!("tech-chip")}>
                                    { &tech.name_tech }
                                </span>
                            }) }
                        </div>
                    </div>

                    <div class={classes!("about-card")}>
                        <h3>{ labels.education_title }</h3>
                        <ul class={classes!("education-list")}>
                            { for about.edu.iter().map(|entry| html! {
                                <li key={entry.id.clone()} class={classes!("education-entry")}>
                                    <h4>{ &entry.title }</h4>
                                    <p>{ &entry.institute }</p>
                                </li>
                            }) }
                        </ul>
                    </div>
                </div>
            </div>

            <div class={classes!("about-links", "flex", "justify-center", "gap-3")}>
                <a
                    href={about.git_hub_link.clone()}
                    target="_blank"
                    rel="noopener noreferrer"
                    class={classes!("about-link")}
                >
                    { labels.github_profile }
                </a>
                <a href={about.cv_download_link.clone()} download="" class={classes!("about-link")}>
                    { labels.download_cv }
                </a>
            </div>
        </main>
    }
}
