use portfolio_shared::Project;
use yew::prelude::*;

use crate::{
    components::project_card::ProjectCard,
    hooks::{use_portfolio, use_scroll_to_top},
    i18n, pages,
};

#[function_component(ProjectsPage)]
pub fn projects_page() -> Html {
    let portfolio = use_portfolio();
    use_scroll_to_top();

    // `None` means the `All` filter.
    let selected_tag = use_state(|| Option::<String>::None);
    let selected_project = use_state(|| Option::<Project>::None);

    let document = match pages::ready_document(&portfolio) {
        Ok(document) => document,
        Err(waiting) => return waiting,
    };
    let labels = i18n::labels(portfolio.language);
    let projects = &document.for_language(portfolio.language).projects;

    let select_all = {
        let selected_tag = selected_tag.clone();
        Callback::from(move |_| selected_tag.set(None))
    };

    let tag_button = |tag: &str| {
        let selected_tag = selected_tag.clone();
        let tag_owned = tag.to_string();
        let active = selected_tag.as_deref() == Some(tag);
        let onclick = Callback::from(move |_| selected_tag.set(Some(tag_owned.clone())));
        html! {
            <button
                type="button"
                class={classes!("tag-filter", active.then_some("tag-filter--active"))}
                {onclick}
            >
                { tag }
            </button>
        }
    };

    let on_select_project = {
        let selected_project = selected_project.clone();
        Callback::from(move |project: Project| selected_project.set(Some(project)))
    };

    let close_dialog = {
        let selected_project = selected_project.clone();
        Callback::from(move |_| selected_project.set(None))
    };

    let visible = projects.filter_by_tag(selected_tag.as_deref());

    html! {
        <main class={classes!("projects-section")}>
            <h2 class={classes!("section-title", "text-center")}>{ &projects.title }</h2>

            <div class={classes!("tag-filters", "flex", "flex-wrap", "justify-center", "gap-2")}>
                <button
                    type="button"
                    class={classes!("tag-filter", selected_tag.is_none().then_some("tag-filter--active"))}
                    onclick={select_all}
                >
                    { labels.filter_all }
                </button>
                { for projects.tag_names().into_iter().map(tag_button) }
            </div>

            <div class={classes!("projects-grid")}>
                { for visible.into_iter().map(|project| html! {
                    <ProjectCard
                        key={project.id.clone()}
                        project={project.clone()}
                        on_select={on_select_project.clone()}
                    />
                }) }
            </div>

            if let Some(project) = (*selected_project).clone() {
                <div class={classes!("project-dialog-backdrop", "fixed", "inset-0")} onclick={close_dialog.clone()}>
                    <div
                        class={classes!("project-dialog")}
                        role="dialog"
                        aria-label={project.title.clone()}
                        onclick={Callback::from(|event: MouseEvent| event.stop_propagation())}
                    >
                        <button
                            type="button"
                            class={classes!("project-dialog-close")}
                            aria-label={labels.close_dialog_aria}
                            onclick={close_dialog.clone()}
                        >
                            {"×"}
                        </button>
                        <div class={classes!("project-dialog-cover")}>
                            <img src={project.src.clone()} alt={project.title.clone()} />
                        </div>
                        <h3 class={classes!("project-dialog-title")}>{ &project.title }</h3>
                        <div class={classes!("project-dialog-tags", "flex", "flex-wrap", "gap-2")}>
                            { for project.tags.iter().map(|tag| html! {
                                <span class={classes!("tag-badge")}>{ tag }</span>
                            }) }
                        </div>
                        <p class={classes!("project-dialog-content")}>{ &project.content }</p>
                        <a
                            href={project.cta_link.clone()}
                            target="_blank"
                            rel="noopener noreferrer"
                            class={classes!("project-dialog-link")}
                        >
                            { labels.visit_project }
                        </a>
                    </div>
                </div>
            }
        </main>
    }
}
