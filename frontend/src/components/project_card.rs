use portfolio_shared::Project;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ProjectCardProps {
    pub project: Project,
    /// Fired with the project when the card is clicked.
    pub on_select: Callback<Project>,
}

#[function_component(ProjectCard)]
pub fn project_card(props: &ProjectCardProps) -> Html {
    let onclick = {
        let project = props.project.clone();
        let on_select = props.on_select.clone();
        Callback::from(move |_| on_select.emit(project.clone()))
    };

    let project = &props.project;

    html! {
        <article class={classes!("project-card")} {onclick}>
            <div class={classes!("project-card-cover")}>
                <img src={project.src.clone()} alt={project.title.clone()} loading="lazy" />
            </div>
            <div class={classes!("project-card-body")}>
                <h3 class={classes!("project-card-title")}>{ &project.title }</h3>
                <p class={classes!("project-card-description")}>{ &project.description }</p>
                <div class={classes!("project-card-tags", "flex", "flex-wrap", "gap-1")}>
                    { for project.tags.iter().map(|tag| html! {
                        <span class={classes!("tag-badge")}>{ tag }</span>
                    }) }
                </div>
            </div>
        </article>
    }
}
