//! Client for the external article service.
//!
//! [`ApiClient`] owns the request/response contract: URL layout, JSON
//! headers, status classification and lenient body decoding. The actual
//! network hop is delegated to a [`Transport`] so the same client runs on
//! top of browser `fetch` in the frontend and `reqwest` in native code.

use async_trait::async_trait;
use serde::{de::DeserializeOwned, de::IgnoredAny, Serialize};

use crate::{
    config::ApiConfig,
    error::ApiError,
    models::{Article, ArticleListResponse, ArticlePatch, HealthStatus},
};

/// Content type sent with every request and expected on JSON responses.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// HTTP verbs the article service understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Read.
    Get,
    /// Create.
    Post,
    /// Full update.
    Put,
    /// Remove.
    Delete,
}

impl Method {
    /// Upper-case verb as written on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// A fully built request, ready for a [`Transport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    /// Verb.
    pub method: Method,
    /// Absolute URL including the query string.
    pub url: String,
    /// JSON-encoded body, if any.
    pub body: Option<String>,
}

impl ApiRequest {
    /// Body-less request.
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            body: None,
        }
    }

    /// Request carrying `payload` encoded as JSON.
    pub fn json<B: Serialize>(
        method: Method,
        url: impl Into<String>,
        payload: &B,
    ) -> Result<Self, ApiError> {
        let body =
            serde_json::to_string(payload).map_err(|e| ApiError::Serialize(e.to_string()))?;
        Ok(Self {
            method,
            url: url.into(),
            body: Some(body),
        })
    }
}

/// What a [`Transport`] hands back: status, content type and body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Value of the `Content-Type` header, if present.
    pub content_type: Option<String>,
    /// Body text; empty for no-content responses.
    pub body: String,
}

impl RawResponse {
    /// Any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Whether the response declares a JSON body.
    pub fn is_json(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|value| value.to_ascii_lowercase().contains(JSON_CONTENT_TYPE))
    }
}

/// One network round trip. Implementations must not retry.
#[async_trait(?Send)]
pub trait Transport {
    /// Send `request` and collect the whole response.
    ///
    /// Only failures to obtain a response are errors here; non-success
    /// statuses are returned as ordinary [`RawResponse`]s.
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse, ApiError>;
}

/// Turn a raw response into the typed result.
///
/// Non-success statuses become [`ApiError::Status`]. A success without a
/// JSON content type yields `Ok(None)` rather than a parse failure.
pub fn decode_response<R: DeserializeOwned>(response: RawResponse) -> Result<Option<R>, ApiError> {
    if !response.is_success() {
        tracing::warn!(status = response.status, "article service returned an error status");
        return Err(ApiError::from_status(response.status, &response.body));
    }

    if !response.is_json() {
        return Ok(None);
    }

    serde_json::from_str(&response.body)
        .map(Some)
        .map_err(|e| ApiError::Parse(e.to_string()))
}

/// Typed client for the article service.
#[derive(Debug, Clone)]
pub struct ApiClient<T> {
    config: ApiConfig,
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    /// Client bound to `config`, sending through `transport`.
    pub fn new(config: ApiConfig, transport: T) -> Self {
        Self {
            config,
            transport,
        }
    }

    /// Configuration this client was built with.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Execute `request` and decode the response.
    pub async fn send<R: DeserializeOwned>(
        &self,
        request: ApiRequest,
    ) -> Result<Option<R>, ApiError> {
        tracing::debug!(method = request.method.as_str(), url = %request.url, "calling article service");
        let response = self.transport.execute(request).await?;
        decode_response(response)
    }

    /// URL of the article listing for the given page and filters.
    pub fn list_url(&self, page: u32, published: Option<bool>, search: Option<&str>) -> String {
        let published = published.unwrap_or(self.config.default_published);
        let mut url = format!(
            "{}?page={}&published={}",
            self.config.api_url("/articles/"),
            page,
            published
        );
        if let Some(term) = search.filter(|term| !term.is_empty()) {
            url.push_str(&format!("&search={}", urlencoding::encode(term)));
        }
        if let Some(page_size) = self.config.page_size {
            url.push_str(&format!("&page_size={page_size}"));
        }
        url
    }

    fn article_url(&self, id: u64) -> String {
        self.config.api_url(&format!("/articles/{id}/"))
    }

    /// `GET /articles/` for one page. An empty success body is an empty page.
    pub async fn list_articles(
        &self,
        page: u32,
        published: Option<bool>,
        search: Option<&str>,
    ) -> Result<ArticleListResponse, ApiError> {
        let request = ApiRequest::new(Method::Get, self.list_url(page, published, search));
        Ok(self.send(request).await?.unwrap_or_default())
    }

    /// `GET /articles/{id}/`.
    pub async fn get_article(&self, id: u64) -> Result<Option<Article>, ApiError> {
        self.send(ApiRequest::new(Method::Get, self.article_url(id))).await
    }

    /// `POST /articles/` with the given fields.
    pub async fn create_article(&self, fields: &ArticlePatch) -> Result<Option<Article>, ApiError> {
        let request = ApiRequest::json(Method::Post, self.config.api_url("/articles/"), fields)?;
        self.send(request).await
    }

    /// `PUT /articles/{id}/` with the given fields.
    pub async fn update_article(
        &self,
        id: u64,
        fields: &ArticlePatch,
    ) -> Result<Option<Article>, ApiError> {
        let request = ApiRequest::json(Method::Put, self.article_url(id), fields)?;
        self.send(request).await
    }

    /// `DELETE /articles/{id}/`. Any success body is ignored.
    pub async fn delete_article(&self, id: u64) -> Result<(), ApiError> {
        self.send::<IgnoredAny>(ApiRequest::new(Method::Delete, self.article_url(id)))
            .await?;
        Ok(())
    }

    /// `GET /health/`.
    pub async fn health_check(&self) -> Result<Option<HealthStatus>, ApiError> {
        self.send(ApiRequest::new(Method::Get, self.config.api_url("/health/")))
            .await
    }
}

#[cfg(test)]
impl<T> ApiClient<T> {
    pub(crate) fn transport_for_tests(&self) -> &T {
        &self.transport
    }
}

/// [`Transport`] backed by `reqwest`, for native builds and tests.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

#[cfg(not(target_arch = "wasm32"))]
impl ReqwestTransport {
    /// Transport with a default `reqwest` client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Transport reusing an existing client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            client,
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self
            .client
            .request(method, &request.url)
            .header(reqwest::header::CONTENT_TYPE, JSON_CONTENT_TYPE);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(RawResponse {
            status,
            content_type,
            body,
        })
    }
}

#[cfg(test)]
pub(crate) mod mock {
    use std::{cell::RefCell, collections::VecDeque};

    use async_trait::async_trait;

    use super::{ApiRequest, RawResponse, Transport, JSON_CONTENT_TYPE};
    use crate::error::ApiError;

    /// Replays queued responses and records every request it sees.
    #[derive(Default)]
    pub(crate) struct MockTransport {
        responses: RefCell<VecDeque<Result<RawResponse, ApiError>>>,
        pub(crate) requests: RefCell<Vec<ApiRequest>>,
    }

    impl MockTransport {
        pub(crate) fn push(&self, response: Result<RawResponse, ApiError>) {
            self.responses.borrow_mut().push_back(response);
        }

        pub(crate) fn push_json(&self, status: u16, body: serde_json::Value) {
            self.push(Ok(RawResponse {
                status,
                content_type: Some(format!("{JSON_CONTENT_TYPE}; charset=utf-8")),
                body: body.to_string(),
            }));
        }

        pub(crate) fn push_text(&self, status: u16, body: &str) {
            self.push(Ok(RawResponse {
                status,
                content_type: Some("text/html".to_string()),
                body: body.to_string(),
            }));
        }

        pub(crate) fn last_request(&self) -> ApiRequest {
            self.requests
                .borrow()
                .last()
                .cloned()
                .expect("at least one request")
        }
    }

    #[async_trait(?Send)]
    impl Transport for MockTransport {
        async fn execute(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
            self.requests.borrow_mut().push(request);
            self.responses
                .borrow_mut()
                .pop_front()
                .expect("a queued response")
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{mock::MockTransport, ApiClient, Method, RawResponse};
    use crate::{
        config::ApiConfig,
        error::ApiError,
        models::{sample_article, ArticlePatch},
    };

    fn client() -> ApiClient<MockTransport> {
        ApiClient::new(ApiConfig::new("http://api.test/api"), MockTransport::default())
    }

    #[tokio::test]
    async fn list_defaults_to_published_first_page() {
        let client = client();
        client.transport.push_json(200, json!({ "count": 0, "next": null, "previous": null, "results": [] }));

        let page = client.list_articles(1, None, None).await.expect("list");

        assert!(page.results.is_empty());
        let request = client.transport.last_request();
        assert_eq!(request.method, Method::Get);
        assert_eq!(request.url, "http://api.test/api/articles/?page=1&published=true");
        assert_eq!(request.body, None);
    }

    #[tokio::test]
    async fn list_encodes_filter_and_search() {
        let client = ApiClient::new(
            ApiConfig::new("http://api.test/api").with_page_size(12),
            MockTransport::default(),
        );
        client.transport.push_json(200, json!({ "count": 0, "results": [] }));

        client
            .list_articles(2, Some(false), Some("rust & wasm"))
            .await
            .expect("list");

        assert_eq!(
            client.transport.last_request().url,
            "http://api.test/api/articles/?page=2&published=false&search=rust%20%26%20wasm&page_size=12"
        );
    }

    #[tokio::test]
    async fn not_found_keeps_status() {
        let client = client();
        client.transport.push_text(404, "");

        let err = client.get_article(99).await.expect_err("404 must fail");

        assert_eq!(err.status(), Some(404));
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "API Error: Not Found");
    }

    #[tokio::test]
    async fn server_error_is_not_not_found() {
        let client = client();
        client.transport.push_text(500, "boom");

        let err = client.get_article(1).await.expect_err("500 must fail");

        assert_eq!(err.status(), Some(500));
        assert!(!err.is_not_found());
        assert_eq!(err.to_string(), "boom");
    }

    #[tokio::test]
    async fn success_without_json_is_empty() {
        let client = client();
        client.transport.push(Ok(RawResponse {
            status: 204,
            content_type: None,
            body: String::new(),
        }));
        client.transport.push_text(200, "<html>ok</html>");

        client.delete_article(3).await.expect("delete");
        let article = client.get_article(3).await.expect("no parse failure");

        assert_eq!(article, None);
        let requests = client.transport.requests.borrow();
        assert_eq!(requests[0].method, Method::Delete);
        assert_eq!(requests[0].url, "http://api.test/api/articles/3/");
        assert_eq!(requests[0].body, None);
    }

    #[tokio::test]
    async fn malformed_json_is_parse_error() {
        let client = client();
        client.transport.push(Ok(RawResponse {
            status: 200,
            content_type: Some("application/json".to_string()),
            body: "{not json".to_string(),
        }));

        let err = client.get_article(1).await.expect_err("bad json");

        assert!(matches!(err, ApiError::Parse(_)));
        assert_eq!(err.status(), None);
    }

    #[tokio::test]
    async fn update_sends_json_patch() {
        let client = client();
        let mut confirmed = sample_article(5);
        confirmed.published = true;
        client
            .transport
            .push_json(200, serde_json::to_value(&confirmed).expect("encode"));

        let article = client
            .update_article(5, &ArticlePatch::publish(true))
            .await
            .expect("update")
            .expect("article body");

        assert!(article.published);
        let request = client.transport.last_request();
        assert_eq!(request.method, Method::Put);
        assert_eq!(request.url, "http://api.test/api/articles/5/");
        assert_eq!(request.body.as_deref(), Some(r#"{"published":true}"#));
    }

    #[tokio::test]
    async fn create_posts_to_collection() {
        let client = client();
        client
            .transport
            .push_json(201, serde_json::to_value(sample_article(8)).expect("encode"));

        let fields = ArticlePatch {
            title: Some("Fresh".to_string()),
            body: Some("<p>New</p>".to_string()),
            author: Some(1),
            ..ArticlePatch::default()
        };
        let created = client.create_article(&fields).await.expect("create");

        assert_eq!(created.map(|a| a.id), Some(8));
        let request = client.transport.last_request();
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.url, "http://api.test/api/articles/");
    }

    #[tokio::test]
    async fn network_failure_passes_through() {
        let client = client();
        client
            .transport
            .push(Err(ApiError::Network("connection refused".to_string())));

        let err = client.health_check().await.expect_err("offline");

        assert_eq!(err, ApiError::Network("connection refused".to_string()));
        assert_eq!(client.transport.last_request().url, "http://api.test/api/health/");
    }
}
