//! Wire-level tests of the native client against a mock HTTP server.

use folio_shared::{
    view::{ArticleDetailView, DetailOutcome},
    ApiClient, ApiConfig, ArticlePatch, ReqwestTransport,
};
use serde_json::json;
use wiremock::{
    matchers::{body_json, header, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

fn article_json(id: u64, published: bool) -> serde_json::Value {
    json!({
        "id": id,
        "title": "Hello",
        "body": "<p>Body</p>",
        "image": "/media/articles/a.png",
        "imageUrl": null,
        "author": 1,
        "author_username": "ada",
        "publish_date": "2024-01-15T10:30:00Z",
        "published": published,
        "tags": ["a", "b", "c", "d"],
        "created_at": "2024-01-15T10:30:00Z",
        "updated_at": "2024-01-15T10:30:00Z"
    })
}

fn client_for(server: &MockServer) -> ApiClient<ReqwestTransport> {
    ApiClient::new(ApiConfig::new(format!("{}/api", server.uri())), ReqwestTransport::new())
}

#[tokio::test]
async fn list_sends_filters_and_json_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/articles/"))
        .and(query_param("page", "1"))
        .and(query_param("published", "false"))
        .and(query_param("search", "rust wasm"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 1,
            "next": null,
            "previous": null,
            "results": [article_json(3, false)],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let page = client_for(&server)
        .list_articles(1, Some(false), Some("rust wasm"))
        .await
        .expect("list articles");

    assert_eq!(page.count, 1);
    assert_eq!(page.results[0].id, 3);
}

#[tokio::test]
async fn not_found_is_classified_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/articles/77/"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "detail": "Not found." })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.get_article(77).await.expect_err("missing article");
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.to_string(), r#"{"detail":"Not found."}"#);

    assert_eq!(ArticleDetailView::load(&client, 77).await, DetailOutcome::NotFound);
}

#[tokio::test]
async fn empty_error_body_falls_back_to_reason() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/health/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client_for(&server).health_check().await.expect_err("server error");

    assert_eq!(err.status(), Some(500));
    assert_eq!(err.to_string(), "API Error: Internal Server Error");
}

#[tokio::test]
async fn delete_accepts_no_content() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/articles/5/"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server).delete_article(5).await.expect("delete");
}

#[tokio::test]
async fn update_round_trips_publish_flag() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/articles/5/"))
        .and(body_json(json!({ "published": true })))
        .respond_with(ResponseTemplate::new(200).set_body_json(article_json(5, true)))
        .expect(1)
        .mount(&server)
        .await;

    let article = client_for(&server)
        .update_article(5, &ArticlePatch::publish(true))
        .await
        .expect("update")
        .expect("confirmed article");

    assert!(article.published);
}

#[tokio::test]
async fn health_reports_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/health/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "ok" })))
        .mount(&server)
        .await;

    let health = client_for(&server).health_check().await.expect("health");

    assert_eq!(health.map(|h| h.status).as_deref(), Some("ok"));
}

#[tokio::test]
async fn plain_text_success_is_empty_result() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/articles/9/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .mount(&server)
        .await;

    let article = client_for(&server).get_article(9).await.expect("no parse failure");

    assert_eq!(article, None);
}

#[tokio::test]
async fn unreachable_service_is_network_error() {
    let client = ApiClient::new(ApiConfig::new("http://127.0.0.1:9/api"), ReqwestTransport::new());

    let err = client.get_article(1).await.expect_err("nothing listens on port 9");

    assert_eq!(err.status(), None);
    assert!(err.to_string().starts_with("Network error"));
}
