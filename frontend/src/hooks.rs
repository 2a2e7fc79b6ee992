use std::rc::Rc;

use folio_shared::{query::QueryParams, ArticleMutated, MutationFeed};
use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::prelude::*;
use yew_router::prelude::use_location;

/// Reducer wrapper so the mutation feed can live in a Yew context.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedState(pub MutationFeed);

impl Reducible for FeedState {
    type Action = ArticleMutated;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut feed = self.0.clone();
        feed.record(action);
        Rc::new(Self(feed))
    }
}

pub type FeedContext = UseReducerHandle<FeedState>;

/// Current mutation feed, and a callback that records new events.
///
/// Outside a provider the feed never advances and events are dropped.
#[hook]
pub fn use_mutation_feed() -> (MutationFeed, Callback<ArticleMutated>) {
    match use_context::<FeedContext>() {
        Some(handle) => {
            let feed = handle.0.clone();
            let dispatch = Callback::from(move |event| handle.dispatch(event));
            (feed, dispatch)
        },
        None => (MutationFeed::default(), Callback::noop()),
    }
}

/// Query string of the current location.
#[hook]
pub fn use_query_params() -> QueryParams {
    let location = use_location();
    location
        .as_ref()
        .map(|loc| QueryParams::parse(loc.query_str()))
        .unwrap_or_default()
}

/// Automatically scroll the viewport to the top whenever the current route
/// changes.
#[hook]
pub fn use_scroll_to_top() {
    let location = use_location();

    use_effect_with(location, move |location| {
        if location.is_some() {
            scroll_window_to_top();
        }

        || ()
    });
}

fn scroll_window_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_left(0.0);
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}
