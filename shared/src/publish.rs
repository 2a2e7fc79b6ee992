//! Publish/unpublish toggle.
//!
//! The request always asks for the negation of the current flag, but the
//! state only ever settles on what the service confirms.

use crate::{
    error::ApiError,
    events::ArticleMutated,
    models::{Article, ArticlePatch},
};

/// Fallback shown when the failure carries no text of its own.
pub const UPDATE_FAILED: &str = "Failed to update article";

/// Where a toggle instance currently is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishState {
    /// Settled on a confirmed value.
    Idle {
        /// Confirmed publish flag.
        published: bool,
    },
    /// A request is in flight.
    Submitting {
        /// Flag before the request was sent.
        from: bool,
    },
    /// The last request failed; the previous flag is kept.
    Error {
        /// Message to show inline.
        message: String,
        /// Unchanged publish flag.
        published: bool,
    },
}

/// State machine behind one publish button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishToggle {
    article_id: u64,
    state: PublishState,
}

impl PublishToggle {
    /// Toggle for `article_id`, idle on `published`.
    pub fn new(article_id: u64, published: bool) -> Self {
        Self {
            article_id,
            state: PublishState::Idle {
                published,
            },
        }
    }

    /// Article this toggle controls.
    pub fn article_id(&self) -> u64 {
        self.article_id
    }

    /// Current state.
    pub fn state(&self) -> &PublishState {
        &self.state
    }

    /// Flag to display: the confirmed one, or the pre-request one while busy.
    pub fn published(&self) -> bool {
        match &self.state {
            PublishState::Idle {
                published,
            }
            | PublishState::Error {
                published, ..
            } => *published,
            PublishState::Submitting {
                from,
            } => *from,
        }
    }

    /// True while a request is in flight; the control must be disabled.
    pub fn is_submitting(&self) -> bool {
        matches!(self.state, PublishState::Submitting { .. })
    }

    /// Inline error text, if the last request failed.
    pub fn error(&self) -> Option<&str> {
        match &self.state {
            PublishState::Error {
                message, ..
            } => Some(message),
            _ => None,
        }
    }

    /// Handle a click.
    ///
    /// Returns the patch to send, or `None` if a request is already running.
    pub fn activate(&mut self) -> Option<ArticlePatch> {
        if self.is_submitting() {
            return None;
        }
        let from = self.published();
        self.state = PublishState::Submitting {
            from,
        };
        Some(ArticlePatch::publish(!from))
    }

    /// Apply the outcome of the update request.
    ///
    /// On success the widget adopts the service's `published` value and the
    /// returned event should be broadcast so other views refresh.
    pub fn resolve(&mut self, outcome: Result<Option<Article>, ApiError>) -> Option<ArticleMutated> {
        let PublishState::Submitting {
            from,
        } = self.state
        else {
            return None;
        };

        match outcome {
            Ok(Some(article)) => {
                self.state = PublishState::Idle {
                    published: article.published,
                };
                Some(ArticleMutated {
                    article_id: self.article_id,
                    published: article.published,
                })
            },
            Ok(None) => {
                self.state = PublishState::Error {
                    message: UPDATE_FAILED.to_string(),
                    published: from,
                };
                None
            },
            Err(err) => {
                let message = err.to_string();
                self.state = PublishState::Error {
                    message: if message.trim().is_empty() {
                        UPDATE_FAILED.to_string()
                    } else {
                        message
                    },
                    published: from,
                };
                None
            },
        }
    }

    /// Adopt a freshly fetched value unless a request is in flight.
    pub fn sync(&mut self, published: bool) {
        if !self.is_submitting() {
            self.state = PublishState::Idle {
                published,
            };
        }
    }

    /// Button caption.
    pub fn button_label(&self) -> &'static str {
        match (self.is_submitting(), self.published()) {
            (true, true) => "Unpublishing...",
            (true, false) => "Publishing...",
            (false, true) => "Unpublish Article",
            (false, false) => "Publish Article",
        }
    }

    /// Status line under the button.
    pub fn status_label(&self) -> &'static str {
        if self.published() {
            "✓ This article is published"
        } else {
            "This article is not published"
        }
    }
}
