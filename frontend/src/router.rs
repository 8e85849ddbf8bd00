use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    components::{footer::Footer, header::Header},
    pages,
};

#[derive(Routable, Clone, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,

    #[at("/about")]
    About,

    #[at("/projects")]
    Projects,

    #[at("/contact")]
    Contact,

    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <pages::home::HomePage /> },
        Route::About => html! { <pages::about::AboutPage /> },
        Route::Projects => html! { <pages::projects::ProjectsPage /> },
        Route::Contact => html! { <pages::contact::ContactPage /> },
        Route::NotFound => html! { <pages::not_found::NotFoundPage /> },
    }
}

#[function_component(AppRouter)]
pub fn app_router() -> Html {
    html! {
        <BrowserRouter>
            <div class={classes!("app-shell", "flex", "flex-col")}>
                <Header />
                <div class={classes!("app-content", "flex-1")}>
                    <Switch<Route> render={switch} />
                </div>
                <Footer />
            </div>
        </BrowserRouter>
    }
}
