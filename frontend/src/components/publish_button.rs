use folio_shared::publish::PublishToggle;
use yew::prelude::*;

use crate::{
    api::use_api,
    components::loading_spinner::{LoadingSpinner, SpinnerSize},
    hooks::use_mutation_feed,
};

#[derive(Properties, PartialEq)]
pub struct PublishButtonProps {
    pub article_id: u64,
    /// Publish flag from the hosting view's latest fetch.
    pub published: bool,
}

#[function_component(PublishButton)]
pub fn publish_button(props: &PublishButtonProps) -> Html {
    let api = use_api();
    let (_, announce) = use_mutation_feed();
    let toggle = use_state(|| PublishToggle::new(props.article_id, props.published));

    {
        let toggle = toggle.clone();
        use_effect_with((props.article_id, props.published), move |(id, published)| {
            if toggle.article_id() != *id {
                toggle.set(PublishToggle::new(*id, *published));
            } else {
                let mut next = (*toggle).clone();
                next.sync(*published);
                if next != *toggle {
                    toggle.set(next);
                }
            }
            || ()
        });
    }

    let on_click = {
        let toggle = toggle.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*toggle).clone();
            let Some(patch) = next.activate() else {
                return;
            };
            toggle.set(next.clone());

            let api = api.clone();
            let toggle = toggle.clone();
            let announce = announce.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = api.update_article(next.article_id(), &patch).await;
                if let Err(e) = &outcome {
                    web_sys::console::error_1(&format!("Error updating article: {}", e).into());
                }
                let event = next.resolve(outcome);
                toggle.set(next);
                if let Some(event) = event {
                    announce.emit(event);
                }
            });
        })
    };

    let button_classes = if toggle.published() {
        classes!("publish-button", "unpublish")
    } else {
        classes!("publish-button", "publish")
    };

    html! {
        <div class="publish-toggle mb-6">
            <button
                type="button"
                class={classes!(button_classes, "rounded-lg", "px-6", "py-3", "font-semibold")}
                onclick={on_click}
                disabled={toggle.is_submitting()}
            >
                {
                    if toggle.is_submitting() {
                        html! {
                            <LoadingSpinner
                                size={SpinnerSize::Small}
                                label={AttrValue::Static(toggle.button_label())}
                            />
                        }
                    } else {
                        html! { <>{ toggle.button_label() }</> }
                    }
                }
            </button>
            {
                if let Some(message) = toggle.error() {
                    html! { <p class="publish-error mt-2 text-sm">{ message }</p> }
                } else {
                    html! {}
                }
            }
            <p class={classes!("mt-2", "text-sm", toggle.published().then_some("font-medium"))}>
                { toggle.status_label() }
            </p>
        </div>
    }
}
