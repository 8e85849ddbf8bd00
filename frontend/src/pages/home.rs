use yew::prelude::*;

use crate::{
    hooks::{use_portfolio, use_scroll_to_top},
    pages,
};

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let portfolio = use_portfolio();
    use_scroll_to_top();

    let document = match pages::ready_document(&portfolio) {
        Ok(document) => document,
        Err(waiting) => return waiting,
    };
    let home = &document.for_language(portfolio.language).home;

    html! {
        <main class={classes!("hero", "flex", "items-center", "justify-center")}>
            <div class={classes!("hero-inner", "flex", "flex-col", "items-center", "text-center")}>
                <div class={classes!("hero-avatar")}>
                    <img
                        src={home.pfp_img.clone()}
                        alt={format!("{} {}", home.name, home.last_name)}
                        loading="lazy"
                    />
                </div>
                <h1 class={classes!("hero-name")}>
                    { format!("{} {}", home.name, home.last_name) }
                </h1>
                <p class={classes!("hero-status")}>{ &home.status }</p>
                <p class={classes!("hero-slogan")}>{ &home.slogan }</p>
            </div>
        </main>
    }
}
