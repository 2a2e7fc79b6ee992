//! Navigation query state.
//!
//! The list view is driven entirely by the URL query string; the search
//! control edits it and navigates. [`QueryParams`] keeps the pairs in order
//! so unrelated parameters survive a round trip.

/// Query key holding the publish filter (`"true"` / `"false"`).
pub const PUBLISHED_PARAM: &str = "published";
/// Query key holding the free-text search term.
pub const SEARCH_PARAM: &str = "search";
/// Query key holding the page number.
pub const PAGE_PARAM: &str = "page";

/// Ordered query-string pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Parse a query string, with or without the leading `?`.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        Self {
            pairs: url::form_urlencoded::parse(query.as_bytes())
                .map(|(key, value)| (key.into_owned(), value.into_owned()))
                .collect(),
        }
    }

    /// First value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Replace every value of `key` with a single `value`.
    ///
    /// The first occurrence keeps its position; a new key is appended.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.pairs.iter().position(|(k, _)| k == key) {
            Some(index) => {
                self.pairs[index].1 = value;
                let mut seen = 0usize;
                self.pairs.retain(|(k, _)| {
                    if k != key {
                        return true;
                    }
                    seen += 1;
                    seen == 1
                });
            },
            None => self.pairs.push((key.to_string(), value)),
        }
    }

    /// Drop every value of `key`.
    pub fn remove(&mut self, key: &str) {
        self.pairs.retain(|(k, _)| k != key);
    }

    /// Pairs in order, e.g. for handing to a query serializer.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// True when there are no pairs.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Encode as `a=1&b=2` (no leading `?`).
    pub fn to_query_string(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish()
    }

    /// `path` with this query appended, or bare `path` when empty.
    pub fn href(&self, path: &str) -> String {
        if self.is_empty() {
            path.to_string()
        } else {
            format!("{path}?{}", self.to_query_string())
        }
    }
}

/// Filter inputs of the article list, read from the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListFilter {
    /// Show published (true) or unpublished (false) articles.
    pub published: bool,
    /// Free-text search term, if any.
    pub search: Option<String>,
}

impl Default for ListFilter {
    fn default() -> Self {
        Self {
            published: true,
            search: None,
        }
    }
}

impl ListFilter {
    /// Read the filter: `published` defaults to true and is otherwise true
    /// only for the literal `"true"`; an empty `search` counts as absent.
    pub fn from_params(params: &QueryParams) -> Self {
        let published = params
            .get(PUBLISHED_PARAM)
            .map_or(true, |value| value == "true");
        let search = params
            .get(SEARCH_PARAM)
            .filter(|value| !value.is_empty())
            .map(str::to_string);
        Self {
            published,
            search,
        }
    }

    /// Query selecting `published`, keeping the current search term.
    ///
    /// The published view is the default, so only `published=false` is
    /// ever written.
    pub fn params_for(&self, published: bool) -> QueryParams {
        let mut params = QueryParams::default();
        if !published {
            params.set(PUBLISHED_PARAM, "false");
        }
        if let Some(term) = &self.search {
            params.set(SEARCH_PARAM, term.clone());
        }
        params
    }

    /// Home link selecting `published`, keeping the current search term.
    pub fn href_for(&self, published: bool) -> String {
        self.params_for(published).href("/")
    }
}

#[cfg(test)]
mod tests {
    use super::{ListFilter, QueryParams};

    #[test]
    fn parse_and_encode_keep_order() {
        let params = QueryParams::parse("?published=false&search=hello+world&x=1");
        assert_eq!(params.get("search"), Some("hello world"));
        assert_eq!(params.to_query_string(), "published=false&search=hello+world&x=1");
    }

    #[test]
    fn set_replaces_duplicates_in_place() {
        let mut params = QueryParams::parse("a=1&b=2&a=3");
        params.set("a", "9");
        assert_eq!(params.to_query_string(), "a=9&b=2");
        params.set("c", "4");
        assert_eq!(params.to_query_string(), "a=9&b=2&c=4");
    }

    #[test]
    fn remove_and_href() {
        let mut params = QueryParams::parse("page=2");
        assert_eq!(params.href("/"), "/?page=2");
        params.remove("page");
        assert_eq!(params.href("/"), "/");
    }

    #[test]
    fn filter_defaults_to_published_without_search() {
        let filter = ListFilter::from_params(&QueryParams::parse(""));
        assert_eq!(filter, ListFilter::default());
        assert!(filter.published);
        assert_eq!(filter.search, None);
    }

    #[test]
    fn filter_reads_unpublished_and_search() {
        let filter = ListFilter::from_params(&QueryParams::parse("published=false&search=rust"));
        assert!(!filter.published);
        assert_eq!(filter.search.as_deref(), Some("rust"));

        let odd = ListFilter::from_params(&QueryParams::parse("published=yes&search="));
        assert!(!odd.published);
        assert_eq!(odd.search, None);
    }

    #[test]
    fn filter_links_keep_search() {
        let filter = ListFilter {
            published: true,
            search: Some("a b".to_string()),
        };
        assert_eq!(filter.href_for(true), "/?search=a+b");
        assert_eq!(filter.href_for(false), "/?published=false&search=a+b");
        assert_eq!(ListFilter::default().href_for(true), "/");
        assert_eq!(ListFilter::default().href_for(false), "/?published=false");
    }
}
