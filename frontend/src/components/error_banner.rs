use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub message: String,
    #[prop_or(AttrValue::Static("Error"))]
    pub title: AttrValue,
    /// Extra line, e.g. where the service is expected to run.
    #[prop_or_default]
    pub hint: Option<Html>,
}

/// Inline error panel. It stays until the next fetch replaces it.
#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    if props.message.trim().is_empty() {
        return Html::default();
    }

    let wrapper_classes = classes!(
        "error-banner",
        "flex",
        "items-start",
        "gap-3",
        "rounded-lg",
        "border",
        "px-5",
        "py-4",
        "mb-6",
        "text-sm",
        "w-full"
    );

    html! {
        <div class={wrapper_classes} role="alert" aria-live="assertive">
            <span class="text-2xl" aria-hidden="true">{"⚠️"}</span>
            <div class="flex-1 space-y-1">
                <p class="font-semibold text-base">{ props.title.clone() }</p>
                <p>{ props.message.clone() }</p>
                {
                    if let Some(hint) = props.hint.clone() {
                        html! { <p class="mt-2">{ hint }</p> }
                    } else {
                        html! {}
                    }
                }
            </div>
        </div>
    }
}
