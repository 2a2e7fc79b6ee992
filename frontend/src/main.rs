//! Browser frontend of the Folio article catalog.

mod api;
mod components;
mod config;
mod hooks;
mod pages;
mod router;

use yew::prelude::*;

use crate::{
    api::ApiHandle,
    hooks::{FeedContext, FeedState},
};

#[function_component(App)]
fn app() -> Html {
    let api = use_memo((), |_| ApiHandle::from_config());
    let feed = use_reducer(FeedState::default);

    html! {
        <ContextProvider<ApiHandle> context={(*api).clone()}>
            <ContextProvider<FeedContext> context={feed}>
                <router::AppRouter />
            </ContextProvider<FeedContext>>
        </ContextProvider<ApiHandle>>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
