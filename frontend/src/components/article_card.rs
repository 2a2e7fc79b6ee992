use folio_shared::view::ArticleSummary;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::router::Route;

#[derive(Properties, PartialEq, Clone)]
pub struct ArticleCardProps {
    pub article: ArticleSummary,
}

#[function_component(ArticleCard)]
pub fn article_card(props: &ArticleCardProps) -> Html {
    let article = &props.article;
    let detail_route = Route::ArticleDetail {
        id: article.id.to_string(),
    };

    html! {
        <Link<Route> to={detail_route} classes={classes!("article-card-link", "h-full")}>
            <article class="article-card flex h-full flex-col overflow-hidden rounded-lg shadow-md">
                {
                    if let Some(image) = article.image.as_ref() {
                        html! {
                            <div class="featured-image relative h-48 w-full">
                                <img src={image.clone()} alt={article.title.clone()} loading="lazy" />
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
                <div class="flex flex-1 flex-col p-6">
                    <h2 class="article-title mb-2 text-xl font-bold line-clamp-2">
                        { &article.title }
                    </h2>
                    <p class="article-excerpt mb-4 flex-1 text-sm line-clamp-3">
                        { &article.excerpt }
                    </p>
                    <div class="post-meta mt-auto flex items-center justify-between text-sm">
                        <span class="post-meta-item">{ &article.author }</span>
                        <time class="post-meta-item" datetime={article.publish_date.clone()}>
                            { &article.date_label }
                        </time>
                    </div>
                    {
                        if article.tags.is_empty() {
                            html! {}
                        } else {
                            html! {
                                <ul class="post-tags mt-4 flex flex-wrap gap-2">
                                    { for article.tags.iter().map(|tag| html! {
                                        <li class="tag-pill">{ tag }</li>
                                    }) }
                                    {
                                        if let Some(more) = article.more_tags.as_ref() {
                                            html! { <li class="tag-more">{ more }</li> }
                                        } else {
                                            html! {}
                                        }
                                    }
                                </ul>
                            }
                        }
                    }
                </div>
            </article>
        </Link<Route>>
    }
}
