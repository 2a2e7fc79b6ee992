use folio_shared::{
    query::{QueryParams, SEARCH_PARAM},
    search::SearchControl,
};
use web_sys::HtmlInputElement;
use yew::{events::InputEvent, prelude::*};
use yew_router::prelude::*;

use crate::{hooks::use_query_params, router::Route};

fn navigate_home(navigator: &Navigator, params: &QueryParams) {
    let result = if params.is_empty() {
        navigator.push(&Route::Home);
        Ok(())
    } else {
        navigator.push_with_query(&Route::Home, &params.pairs())
    };
    if let Err(e) = result {
        web_sys::console::error_1(&format!("Failed to update search query: {:?}", e).into());
    }
}

/// Search box that writes the term into the URL instead of fetching.
#[function_component(SearchBar)]
pub fn search_bar() -> Html {
    let navigator = use_navigator();
    let params = use_query_params();
    let control = use_state(|| SearchControl::from_params(&params));

    {
        let control = control.clone();
        let params = params.clone();
        use_effect_with(params.get(SEARCH_PARAM).map(str::to_string), move |_| {
            let next = SearchControl::from_params(&params);
            if *control != next {
                control.set(next);
            }
            || ()
        });
    }

    let on_input = {
        let control = control.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                let mut next = (*control).clone();
                next.set_input(target.value());
                control.set(next);
            }
        })
    };

    let on_submit = {
        let control = control.clone();
        let params = params.clone();
        let navigator = navigator.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if let Some(nav) = navigator.as_ref() {
                navigate_home(nav, &control.submit(&params));
            }
        })
    };

    let on_clear = {
        let control = control.clone();
        let params = params.clone();
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*control).clone();
            let query = next.clear(&params);
            control.set(next);
            if let Some(nav) = navigator.as_ref() {
                navigate_home(nav, &query);
            }
        })
    };

    html! {
        <form onsubmit={on_submit} class="search-bar mx-auto mb-8 w-full max-w-2xl">
            <div class="relative">
                <input
                    type="text"
                    value={control.input().to_string()}
                    oninput={on_input}
                    placeholder="Search articles by title, content, or author..."
                    class="w-full rounded-lg border px-12 py-3 text-lg"
                />
                <i class="fas fa-search absolute left-4 top-1/2 -translate-y-1/2" aria-hidden="true"></i>
                {
                    if control.can_clear() {
                        html! {
                            <button
                                type="button"
                                onclick={on_clear}
                                class="absolute right-4 top-1/2 -translate-y-1/2"
                                aria-label="Clear search"
                            >
                                <i class="fas fa-times" aria-hidden="true"></i>
                            </button>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        </form>
    }
}
