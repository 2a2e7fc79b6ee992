use yew::prelude::*;
use yew_router::prelude::Link;

use crate::router::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <main class="flex min-h-screen flex-col items-center justify-center text-center">
            <h2 class="mb-4 text-2xl font-bold">{"404 - Page not found"}</h2>
            <p>{"The article you are looking for does not exist."}</p>
            <Link<Route> to={Route::Home} classes={classes!("mt-4", "inline-block")}>
                { "← Back to home" }
            </Link<Route>>
        </main>
    }
}
