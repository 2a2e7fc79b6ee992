use folio_shared::{
    view::{ArticleDetailView, DetailOutcome},
    FetchSequence,
};
use yew::prelude::*;
use yew_router::prelude::{Link, Redirect};

use crate::{
    api::use_api,
    components::{
        error_banner::ErrorBanner,
        loading_spinner::LoadingSpinner,
        publish_button::PublishButton,
        raw_html::RawHtml,
    },
    hooks::{use_mutation_feed, use_scroll_to_top},
    router::Route,
};

#[derive(Properties, Clone, PartialEq)]
pub struct ArticleDetailProps {
    #[prop_or_default]
    pub id: String,
}

#[function_component(ArticleDetailPage)]
pub fn article_detail_page(props: &ArticleDetailProps) -> Html {
    use_scroll_to_top();
    let api = use_api();
    let (feed, _) = use_mutation_feed();
    let outcome = use_state(|| None::<DetailOutcome>);
    let latest = use_memo((), |_| FetchSequence::default());

    let mounted_at = *use_state(|| feed.revision());
    let refresh = use_state(|| mounted_at);

    // Only mutations of this article made while it is shown trigger a re-fetch.
    {
        let refresh = refresh.clone();
        let id = props.id.parse::<u64>().ok();
        use_effect_with(feed.revision(), move |revision| {
            if id.is_some_and(|id| feed.concerns_since(id, mounted_at)) {
                refresh.set(*revision);
            }
            || ()
        });
    }

    {
        let outcome = outcome.clone();
        use_effect_with(props.id.clone(), move |_| {
            outcome.set(None);
            || ()
        });
    }

    {
        let outcome = outcome.clone();
        let api = api.clone();
        let latest = latest.clone();
        use_effect_with((props.id.clone(), *refresh), move |(id, _)| {
            let id = id.clone();
            let ticket = latest.begin();
            wasm_bindgen_futures::spawn_local(async move {
                let result = ArticleDetailView::load_param(&api, &id).await;
                if !ticket.is_current() {
                    return;
                }
                if let DetailOutcome::Failed(message) = &result {
                    web_sys::console::error_1(
                        &format!("Failed to fetch article: {}", message).into(),
                    );
                }
                outcome.set(Some(result));
            });
            move || latest.invalidate()
        });
    }

    let back_link = html! {
        <Link<Route> to={Route::Home} classes={classes!("back-link", "mb-6", "inline-flex", "items-center")}>
            { "← Back to articles" }
        </Link<Route>>
    };

    match (*outcome).clone() {
        None => html! {
            <main class="flex min-h-screen items-center justify-center">
                <LoadingSpinner />
            </main>
        },
        Some(DetailOutcome::NotFound) => html! { <Redirect<Route> to={Route::NotFound} /> },
        Some(DetailOutcome::Failed(message)) => html! {
            <main class="container mx-auto max-w-4xl px-4 py-8">
                { back_link }
                <ErrorBanner message={message} />
            </main>
        },
        Some(DetailOutcome::Loaded(article)) => html! {
            <main class="container mx-auto max-w-4xl px-4 py-8">
                { back_link }
                <article class="article-detail overflow-hidden rounded-lg shadow-lg">
                    {
                        if let Some(image) = article.image.as_ref() {
                            html! {
                                <div class="featured-image relative h-96 w-full">
                                    <img src={image.clone()} alt={article.title.clone()} />
                                </div>
                            }
                        } else {
                            html! {}
                        }
                    }
                    <div class="p-8">
                        <PublishButton article_id={article.id} published={article.published} />
                        <div class="mb-4">
                            <h1 class="mb-2 text-4xl font-bold">{ &article.title }</h1>
                            <div class="post-meta flex items-center gap-4 text-sm">
                                <span>{ format!("By {}", article.author) }</span>
                                <span>{ "•" }</span>
                                <time datetime={article.publish_date.clone()}>
                                    { &article.date_label }
                                </time>
                            </div>
                        </div>
                        {
                            if article.tags.is_empty() {
                                html! {}
                            } else {
                                html! {
                                    <ul class="post-tags mb-6 flex flex-wrap gap-2">
                                        { for article.tags.iter().map(|tag| html! {
                                            <li class="tag-pill">{ tag }</li>
                                        }) }
                                    </ul>
                                }
                            }
                        }
                        <RawHtml
                            html={AttrValue::from(article.body_html.clone())}
                            class={classes!("article-content", "prose", "max-w-none")}
                        />
                    </div>
                </article>
            </main>
        },
    }
}
