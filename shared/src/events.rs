//! Mutation events.
//!
//! Widgets that change server state announce it here; views that show the
//! affected data watch [`MutationFeed::revision`] and re-fetch.

/// A mutation confirmed by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArticleMutated {
    /// Article that changed.
    pub article_id: u64,
    /// Publish flag as confirmed by the service.
    pub published: bool,
}

/// Monotonic log of confirmed mutations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MutationFeed {
    revision: u64,
    last: Option<ArticleMutated>,
}

impl MutationFeed {
    /// Number of events recorded so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Most recent event.
    pub fn last(&self) -> Option<ArticleMutated> {
        self.last
    }

    /// Append an event.
    pub fn record(&mut self, event: ArticleMutated) {
        self.revision += 1;
        self.last = Some(event);
    }

    /// Whether the latest event touched `article_id`.
    pub fn concerns(&self, article_id: u64) -> bool {
        self.last.is_some_and(|event| event.article_id == article_id)
    }

    /// Whether an event recorded after revision `seen` touched `article_id`.
    pub fn concerns_since(&self, article_id: u64, seen: u64) -> bool {
        self.revision > seen && self.concerns(article_id)
    }
}

#[cfg(test)]
mod tests {
    use super::{ArticleMutated, MutationFeed};

    #[test]
    fn record_advances_revision() {
        let mut feed = MutationFeed::default();
        assert_eq!(feed.revision(), 0);
        assert!(!feed.concerns(1));

        feed.record(ArticleMutated {
            article_id: 1,
            published: true,
        });
        feed.record(ArticleMutated {
            article_id: 2,
            published: false,
        });

        assert_eq!(feed.revision(), 2);
        assert!(feed.concerns(2));
        assert!(!feed.concerns(1));
        assert_eq!(feed.last().map(|e| e.published), Some(false));
    }

    #[test]
    fn events_before_mount_are_ignored() {
        let mut feed = MutationFeed::default();
        feed.record(ArticleMutated {
            article_id: 1,
            published: false,
        });
        let seen = feed.revision();

        assert!(feed.concerns(1));
        assert!(!feed.concerns_since(1, seen));

        feed.record(ArticleMutated {
            article_id: 1,
            published: true,
        });
        assert!(feed.concerns_since(1, seen));
        assert!(!feed.concerns_since(2, seen));
    }
}
