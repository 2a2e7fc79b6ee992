use std::rc::Rc;

use async_trait::async_trait;
use folio_shared::{
    api::JSON_CONTENT_TYPE, ApiClient, ApiError, ApiRequest, Method, RawResponse, Transport,
};
use gloo_net::http::{Method as HttpMethod, RequestBuilder};
use yew::prelude::*;

use crate::config::app_config;

/// Browser `fetch` transport.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
        let method = match request.method {
            Method::Get => HttpMethod::GET,
            Method::Post => HttpMethod::POST,
            Method::Put => HttpMethod::PUT,
            Method::Delete => HttpMethod::DELETE,
        };

        let builder = RequestBuilder::new(&request.url)
            .method(method)
            .header("Content-Type", JSON_CONTENT_TYPE)
            .header("Cache-Control", "no-cache, no-store, max-age=0")
            .header("Pragma", "no-cache");

        let prepared = match request.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Network(format!("{:?}", e)))?;

        let response = prepared
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("{:?}", e)))?;

        let status = response.status();
        let content_type = response.headers().get("content-type");
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(format!("{:?}", e)))?;

        Ok(RawResponse {
            status,
            content_type,
            body,
        })
    }
}

pub type Client = ApiClient<GlooTransport>;

/// Shared client handed down through context.
#[derive(Clone)]
pub struct ApiHandle(pub Rc<Client>);

impl ApiHandle {
    pub fn from_config() -> Self {
        Self(Rc::new(ApiClient::new(app_config(), GlooTransport)))
    }
}

impl PartialEq for ApiHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// The app-wide API client, or a fresh one if no provider is mounted.
#[hook]
pub fn use_api() -> Rc<Client> {
    use_context::<ApiHandle>()
        .unwrap_or_else(ApiHandle::from_config)
        .0
}
