//! Main application component with routing.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::BoardPage;

/// Application routes.
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Board,
    /// Legacy static entry point, kept so old bookmarks still land on the board.
    #[at("/static/index.html")]
    StaticIndex,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Route switch function.
fn switch(routes: Route) -> Html {
    match routes {
        Route::Board | Route::StaticIndex => html! { <BoardPage /> },
        Route::NotFound => html! {
            <div class="card">
                <h1>{"404 - Page Not Found"}</h1>
                <p>{"The page you're looking for doesn't exist."}</p>
                <Link<Route> to={Route::Board}>{"Back to activities"}</Link<Route>>
            </div>
        },
    }
}

/// Main application component.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <header>
                <h1>{"Mergington High School"}</h1>
                <h2>{"Extracurricular Activities"}</h2>
            </header>
            <main>
                <Switch<Route> render={switch} />
            </main>
            <footer>
                <p>{"Mergington High School"}</p>
            </footer>
        </BrowserRouter>
    }
}
