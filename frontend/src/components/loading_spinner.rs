use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub enum SpinnerSize {
    Small,
    Medium,
}

impl SpinnerSize {
    fn dimension(&self) -> u32 {
        match self {
            SpinnerSize::Small => 16,
            SpinnerSize::Medium => 40,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LoadingSpinnerProps {
    #[prop_or(SpinnerSize::Medium)]
    pub size: SpinnerSize,
    #[prop_or_default]
    pub label: Option<AttrValue>,
}

#[function_component(LoadingSpinner)]
pub fn loading_spinner(props: &LoadingSpinnerProps) -> Html {
    let spinner_style = format!("--spinner-size:{}px;", props.size.dimension());
    let label = props.label.clone().unwrap_or_else(|| AttrValue::from("Loading..."));

    html! {
        <span
            class={classes!("inline-flex", "items-center", "justify-center", "gap-2")}
            role="status"
            aria-live="polite"
            aria-busy="true"
        >
            <span
                style={spinner_style}
                class={classes!(
                    "inline-block",
                    "w-[var(--spinner-size)]",
                    "h-[var(--spinner-size)]",
                    "rounded-full",
                    "border-2",
                    "border-current",
                    "border-t-transparent",
                    "animate-spin"
                )}
            />
            {
                if props.size == SpinnerSize::Small {
                    html! { <span>{ label.as_str() }</span> }
                } else {
                    html! { <span class={classes!("sr-only")}>{ label.as_str() }</span> }
                }
            }
        </span>
    }
}
