//! View models for the article list and detail pages.
//!
//! Each loader performs exactly one fetch and folds the result, including
//! failures, into an outcome the frontend can render directly.

use chrono::{DateTime, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    api::{ApiClient, Transport},
    config::{ApiConfig, BodyTrust},
    error::ApiError,
    models::Article,
    query::ListFilter,
};

/// Characters of plain text kept in a card excerpt.
pub const EXCERPT_CHARS: usize = 150;
/// Tags shown on a card before the rest collapse into a count.
pub const CARD_TAGS: usize = 3;
/// Message when the service answered a detail request with no body.
pub const ARTICLE_MISSING: &str = "Article not found";

static MARKUP_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid tag regex"));

/// Plain-text excerpt of `body`: markup stripped, capped at
/// [`EXCERPT_CHARS`] characters, followed by `...`.
pub fn excerpt(body: &str) -> String {
    let text = MARKUP_TAG.replace_all(body, "");
    let mut out: String = text.chars().take(EXCERPT_CHARS).collect();
    out.push_str("...");
    out
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .ok()
        .or_else(|| NaiveDate::parse_from_str(raw.get(..10)?, "%Y-%m-%d").ok())
}

/// `Jan 15, 2024`; unparseable input is shown as-is.
pub fn format_short_date(raw: &str) -> String {
    parse_date(raw).map_or_else(|| raw.to_string(), |d| d.format("%b %-d, %Y").to_string())
}

/// `January 15, 2024`; unparseable input is shown as-is.
pub fn format_long_date(raw: &str) -> String {
    parse_date(raw).map_or_else(|| raw.to_string(), |d| d.format("%B %-d, %Y").to_string())
}

/// Markup to inject for an article body under the configured trust model.
///
/// With [`BodyTrust::Trusted`] the body is returned untouched: the content
/// service is assumed to produce safe HTML. Any deployment that accepts
/// bodies from untrusted authors must use [`BodyTrust::Sanitized`].
pub fn render_body(body: &str, trust: BodyTrust) -> String {
    match trust {
        BodyTrust::Trusted => body.to_string(),
        BodyTrust::Sanitized => ammonia::clean(body),
    }
}

/// One card in the article grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleSummary {
    /// Article id, for the detail link.
    pub id: u64,
    /// Headline.
    pub title: String,
    /// Plain-text teaser.
    pub excerpt: String,
    /// Author display name.
    pub author: String,
    /// Raw publish date, for the `datetime` attribute.
    pub publish_date: String,
    /// Short formatted publish date.
    pub date_label: String,
    /// Resolved cover image.
    pub image: Option<String>,
    /// First [`CARD_TAGS`] tags.
    pub tags: Vec<String>,
    /// `+N more` when tags were cut.
    pub more_tags: Option<String>,
}

impl ArticleSummary {
    /// Card projection of `article`.
    pub fn from_article(article: &Article, config: &ApiConfig) -> Self {
        let hidden = article.tags.len().saturating_sub(CARD_TAGS);
        Self {
            id: article.id,
            title: article.title.clone(),
            excerpt: excerpt(&article.body),
            author: article.author_username.clone(),
            publish_date: article.publish_date.clone(),
            date_label: format_short_date(&article.publish_date),
            image: article.image_src(config),
            tags: article.tags.iter().take(CARD_TAGS).cloned().collect(),
            more_tags: (hidden > 0).then(|| format!("+{hidden} more")),
        }
    }
}

/// Copy shown when a list query matched nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Main line.
    pub headline: String,
    /// Suggestion underneath.
    pub hint: String,
}

impl EmptyState {
    /// Message for `filter`; wording depends on search and publish state.
    pub fn for_filter(filter: &ListFilter) -> Self {
        let kind = if filter.published { "published" } else { "unpublished" };
        match &filter.search {
            Some(term) => Self {
                headline: format!("No {kind} articles found matching \"{term}\"."),
                hint: "Try a different search term or clear the search.".to_string(),
            },
            None => Self {
                headline: format!("No {kind} articles found."),
                hint: if filter.published {
                    "Create some articles in the admin panel.".to_string()
                } else {
                    "All articles are currently published.".to_string()
                },
            },
        }
    }
}

/// Renderable result of loading the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListOutcome {
    /// At least one article, in server order.
    Articles(Vec<ArticleSummary>),
    /// The query succeeded but matched nothing.
    Empty(EmptyState),
    /// The request failed; carries the message to show.
    Failed(String),
}

/// Article list page.
pub struct ArticleListView;

impl ArticleListView {
    /// Fold a list result into an outcome.
    pub fn outcome(
        filter: &ListFilter,
        result: Result<Vec<Article>, ApiError>,
        config: &ApiConfig,
    ) -> ListOutcome {
        match result {
            Ok(articles) if articles.is_empty() => ListOutcome::Empty(EmptyState::for_filter(filter)),
            Ok(articles) => ListOutcome::Articles(
                articles
                    .iter()
                    .map(|article| ArticleSummary::from_article(article, config))
                    .collect(),
            ),
            Err(err) => ListOutcome::Failed(err.to_string()),
        }
    }

    /// Fetch the first page for `filter`.
    pub async fn load<T: Transport>(client: &ApiClient<T>, filter: &ListFilter) -> ListOutcome {
        let result = client
            .list_articles(1, Some(filter.published), filter.search.as_deref())
            .await
            .map(|page| page.results);
        Self::outcome(filter, result, client.config())
    }
}

/// Everything the detail page shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleDetail {
    /// Article id.
    pub id: u64,
    /// Headline.
    pub title: String,
    /// Author display name.
    pub author: String,
    /// Raw publish date, for the `datetime` attribute.
    pub publish_date: String,
    /// Long formatted publish date.
    pub date_label: String,
    /// All tags, untruncated.
    pub tags: Vec<String>,
    /// Resolved cover image.
    pub image: Option<String>,
    /// Body markup, already passed through the trust policy.
    pub body_html: String,
    /// Publish flag at fetch time.
    pub published: bool,
}

impl ArticleDetail {
    /// Detail projection of `article`.
    pub fn from_article(article: &Article, config: &ApiConfig) -> Self {
        Self {
            id: article.id,
            title: article.title.clone(),
            author: article.author_username.clone(),
            publish_date: article.publish_date.clone(),
            date_label: format_long_date(&article.publish_date),
            tags: article.tags.clone(),
            image: article.image_src(config),
            body_html: render_body(&article.body, config.body_trust),
            published: article.published,
        }
    }
}

/// Renderable result of loading one article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailOutcome {
    /// The article exists.
    Loaded(Box<ArticleDetail>),
    /// The service reported 404; render the not-found page and nothing else.
    NotFound,
    /// Any other failure; carries the message to show.
    Failed(String),
}

/// Article detail page.
pub struct ArticleDetailView;

impl ArticleDetailView {
    /// Fold a fetch result into an outcome.
    pub fn outcome(result: Result<Option<Article>, ApiError>, config: &ApiConfig) -> DetailOutcome {
        match result {
            Ok(Some(article)) => {
                DetailOutcome::Loaded(Box::new(ArticleDetail::from_article(&article, config)))
            },
            Ok(None) => DetailOutcome::Failed(ARTICLE_MISSING.to_string()),
            Err(err) if err.is_not_found() => DetailOutcome::NotFound,
            Err(err) => DetailOutcome::Failed(err.to_string()),
        }
    }

    /// Fetch article `id`.
    pub async fn load<T: Transport>(client: &ApiClient<T>, id: u64) -> DetailOutcome {
        Self::outcome(client.get_article(id).await, client.config())
    }

    /// Fetch using the raw path segment; a non-numeric id is not found.
    pub async fn load_param<T: Transport>(client: &ApiClient<T>, raw_id: &str) -> DetailOutcome {
        match raw_id.trim().parse::<u64>() {
            Ok(id) => Self::load(client, id).await,
            Err(_) => DetailOutcome::NotFound,
        }
    }
}
