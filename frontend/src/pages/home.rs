use folio_shared::{
    query::ListFilter,
    view::{ArticleListView, ListOutcome},
    FetchSequence,
};
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    api::use_api,
    components::{
        article_card::ArticleCard,
        error_banner::ErrorBanner,
        loading_spinner::LoadingSpinner,
        search_bar::SearchBar,
    },
    hooks::{use_mutation_feed, use_query_params},
    router::Route,
};

type QueryPairs = Vec<(String, String)>;

fn filter_link(filter: &ListFilter, published: bool, label: &'static str) -> Html {
    let params = filter.params_for(published);
    let query = (!params.is_empty()).then(|| params.pairs().to_vec());
    let classes = if filter.published == published {
        classes!("filter-link", "active")
    } else {
        classes!("filter-link")
    };

    html! {
        <Link<Route, QueryPairs>
            to={Route::Home}
            query={query}
            classes={classes!(classes, "rounded-lg", "px-6", "py-3", "font-semibold")}
        >
            { label }
        </Link<Route, QueryPairs>>
    }
}

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let api = use_api();
    let (feed, _) = use_mutation_feed();
    let params = use_query_params();
    let filter = ListFilter::from_params(&params);
    let outcome = use_state(|| None::<ListOutcome>);
    let latest = use_memo((), |_| FetchSequence::default());

    {
        let outcome = outcome.clone();
        let api = api.clone();
        let latest = latest.clone();
        use_effect_with((filter.clone(), feed.revision()), move |(filter, _)| {
            let filter = filter.clone();
            let ticket = latest.begin();
            outcome.set(None);
            wasm_bindgen_futures::spawn_local(async move {
                let result = ArticleListView::load(&api, &filter).await;
                if !ticket.is_current() {
                    return;
                }
                if let ListOutcome::Failed(message) = &result {
                    web_sys::console::error_1(
                        &format!("Failed to fetch articles: {}", message).into(),
                    );
                }
                outcome.set(Some(result));
            });
            move || latest.invalidate()
        });
    }

    let content = match (*outcome).clone() {
        None => html! {
            <div class="flex justify-center py-12"><LoadingSpinner /></div>
        },
        Some(ListOutcome::Failed(message)) => {
            let hint = html! {
                <>
                    { "Make sure the article service is running at " }
                    <code>{ api.config().api_base.clone() }</code>
                </>
            };
            html! {
                <ErrorBanner title="Error loading articles" message={message} hint={hint} />
            }
        },
        Some(ListOutcome::Empty(empty)) => html! {
            <div class="empty-state py-12 text-center">
                <p class="text-lg">{ empty.headline }</p>
                <p class="mt-2 text-sm">{ empty.hint }</p>
            </div>
        },
        Some(ListOutcome::Articles(articles)) => html! {
            <div class="article-grid grid grid-cols-1 gap-6 md:grid-cols-2 lg:grid-cols-3">
                { for articles.into_iter().map(|article| html! {
                    <ArticleCard key={article.id} article={article.clone()} />
                }) }
            </div>
        },
    };

    html! {
        <main class="container mx-auto px-4 py-8">
            <header class="mb-12 text-center">
                <h1 class="mb-4 text-5xl font-bold">{ "Welcome to Folio" }</h1>
                <p class="mb-6 text-xl">{ "Discover and read amazing articles" }</p>
                <nav class="mb-6 flex justify-center gap-4">
                    { filter_link(&filter, true, "Published Articles") }
                    { filter_link(&filter, false, "Unpublished Articles") }
                </nav>
            </header>
            <SearchBar />
            { content }
        </main>
    }
}
