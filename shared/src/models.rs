//! Wire models of the article service.

use serde::{Deserialize, Serialize};

use crate::{config::ApiConfig, image::resolve_image_url};

/// One article as served by the content service.
///
/// This is a read projection of server state; the only field the frontend
/// ever writes back is [`Article::published`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    /// Positive identifier assigned by the service.
    pub id: u64,
    /// Headline.
    pub title: String,
    /// Rich-content body; may contain inline markup.
    pub body: String,
    /// Server-relative media path, e.g. `/media/articles/cover.jpg`.
    #[serde(default)]
    pub image: Option<String>,
    /// Absolute image override. Wins over [`Article::image`] when both are set.
    #[serde(rename = "imageUrl", default)]
    pub image_url: Option<String>,
    /// Numeric author reference.
    pub author: u64,
    /// Denormalized display name of the author.
    #[serde(default)]
    pub author_username: String,
    /// Publish timestamp as sent by the service; parsed for display only.
    pub publish_date: String,
    /// Whether the article is publicly visible.
    pub published: bool,
    /// Tags in display order.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Informational creation timestamp.
    #[serde(default)]
    pub created_at: String,
    /// Informational last-update timestamp.
    #[serde(default)]
    pub updated_at: String,
}

impl Article {
    /// The single image URL to render for this article, if any.
    pub fn image_src(&self, config: &ApiConfig) -> Option<String> {
        resolve_image_url(
            self.image.as_deref(),
            self.image_url.as_deref(),
            &config.backend_base(),
        )
    }
}

/// Partial article used as the body of create/update requests.
///
/// Unset fields are left out of the JSON entirely so the service only sees
/// what the caller meant to change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArticlePatch {
    /// New headline.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New body markup.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// New absolute image URL.
    #[serde(rename = "imageUrl", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Author reference (required by the service on create).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<u64>,
    /// Publish timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publish_date: Option<String>,
    /// Publish flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,
    /// Replacement tag list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl ArticlePatch {
    /// Patch that only flips the publish flag.
    pub fn publish(published: bool) -> Self {
        Self {
            published: Some(published),
            ..Self::default()
        }
    }
}

/// One page of the article listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArticleListResponse {
    /// Total matching articles on the server, across all pages.
    pub count: u64,
    /// Cursor URL of the next page.
    #[serde(default)]
    pub next: Option<String>,
    /// Cursor URL of the previous page.
    #[serde(default)]
    pub previous: Option<String>,
    /// Articles on this page, in server order.
    #[serde(default)]
    pub results: Vec<Article>,
}

/// Body of `GET /health/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    /// `"ok"` when the service is up.
    pub status: String,
}

#[cfg(test)]
pub(crate) fn sample_article(id: u64) -> Article {
    Article {
        id,
        title: format!("Article {id}"),
        body: "<p>Hello <strong>world</strong></p>".to_string(),
        image: None,
        image_url: None,
        author: 1,
        author_username: "ada".to_string(),
        publish_date: "2024-01-15T10:30:00Z".to_string(),
        published: true,
        tags: vec![],
        created_at: "2024-01-15T10:30:00Z".to_string(),
        updated_at: "2024-01-15T10:30:00Z".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{Article, ArticleListResponse, ArticlePatch};

    #[test]
    fn article_reads_service_field_names() {
        let raw = r#"{
            "id": 7,
            "title": "Hello",
            "body": "<p>Body</p>",
            "image": null,
            "imageUrl": "https://cdn.example.com/a.png",
            "author": 3,
            "author_username": "grace",
            "publish_date": "2024-03-01T08:00:00Z",
            "published": false,
            "tags": ["rust", "wasm"],
            "created_at": "2024-03-01T08:00:00Z",
            "updated_at": "2024-03-02T08:00:00Z"
        }"#;
        let article: Article = serde_json::from_str(raw).expect("parse article");
        assert_eq!(article.id, 7);
        assert_eq!(article.image_url.as_deref(), Some("https://cdn.example.com/a.png"));
        assert_eq!(article.author_username, "grace");
        assert_eq!(article.tags, vec!["rust".to_string(), "wasm".to_string()]);
        assert!(!article.published);
    }

    #[test]
    fn publish_patch_only_serializes_flag() {
        let body = serde_json::to_value(ArticlePatch::publish(true)).expect("serialize patch");
        assert_eq!(body, serde_json::json!({ "published": true }));
    }

    #[test]
    fn list_response_tolerates_missing_cursors() {
        let page: ArticleListResponse =
            serde_json::from_str(r#"{"count": 0, "results": []}"#).expect("parse page");
        assert_eq!(page.count, 0);
        assert!(page.next.is_none());
        assert!(page.previous.is_none());
    }
}
