//! Target-independent core of the Folio article catalog.
//!
//! Everything the browser frontend needs that does not touch the DOM lives
//! here: wire models, the typed client for the external article service,
//! navigation query state, the search and publish widgets' state machines,
//! and the list/detail view models. Keeping it free of `web-sys` lets the
//! whole contract be exercised by native tests.

pub mod api;
pub mod config;
pub mod error;
pub mod events;
pub mod fetch;
pub mod image;
pub mod models;
pub mod publish;
pub mod query;
pub mod search;
pub mod view;

pub use api::{ApiClient, ApiRequest, Method, RawResponse, Transport};
#[cfg(not(target_arch = "wasm32"))]
pub use api::ReqwestTransport;
pub use config::{ApiConfig, BodyTrust};
pub use error::ApiError;
pub use events::{ArticleMutated, MutationFeed};
pub use fetch::{FetchSequence, FetchTicket};
pub use models::{Article, ArticleListResponse, ArticlePatch, HealthStatus};
