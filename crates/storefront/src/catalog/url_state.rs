//! URL round-tripping for the persisted slice of filter state.
//!
//! Only `{page, query, category}` travel through the navigable URL; the
//! remaining facets (brand, sustainability, fit, stock, price range) are
//! transient and reset on a full reload. That asymmetry is inherited product
//! behavior, kept deliberately and named here as [`UrlState::PERSISTED_PARAMS`]
//! rather than being silently "fixed" - widening the set is a one-line policy
//! change, not a parser rewrite.
//!
//! Decoding is total: malformed or missing values fall back to defaults and
//! unrecognized parameters are ignored. Nothing in this module can fail.

use std::collections::HashMap;

use url::form_urlencoded;

use super::filter::CategoryFilter;

/// The URL-persisted subset of the filter state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlState {
    /// 1-based page number.
    pub page: u32,
    /// Free-text query.
    pub query: String,
    /// Category tab, or the "All Categories" sentinel.
    pub category: CategoryFilter,
}

impl Default for UrlState {
    fn default() -> Self {
        Self {
            page: 1,
            query: String::new(),
            category: CategoryFilter::All,
        }
    }
}

impl UrlState {
    /// The query parameters that round-trip through the URL. Everything else
    /// in the filter spec is deliberately transient.
    pub const PERSISTED_PARAMS: [&'static str; 3] = ["page", "query", "category"];

    /// Decode from query parameters. Total: never fails, defaults on garbage.
    #[must_use]
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        let page = params
            .get("page")
            .and_then(|v| v.parse::<u32>().ok())
            .filter(|p| *p >= 1)
            .unwrap_or(1);

        let query = params.get("query").cloned().unwrap_or_default();

        let category = params
            .get("category")
            .map_or(CategoryFilter::All, |v| CategoryFilter::from_param(v));

        Self {
            page,
            query,
            category,
        }
    }

    /// Encode back into a query string (no leading `?`).
    #[must_use]
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .append_pair("page", &self.page.to_string())
            .append_pair("query", &self.query)
            .append_pair("category", self.category.as_str())
            .finish()
    }

    /// The listing URL for this state.
    #[must_use]
    pub fn href(&self) -> String {
        format!("/footwear?{}", self.to_query_string())
    }

    /// The same state pointed at another page.
    #[must_use]
    pub fn with_page(&self, page: u32) -> Self {
        Self {
            page,
            ..self.clone()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use sole_street_core::Category;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_decode_well_formed() {
        let state = UrlState::from_params(&params(&[
            ("page", "3"),
            ("query", "air"),
            ("category", "Running"),
        ]));
        assert_eq!(state.page, 3);
        assert_eq!(state.query, "air");
        assert_eq!(state.category, CategoryFilter::Only(Category::Running));
    }

    #[test]
    fn test_decode_empty_yields_defaults() {
        let state = UrlState::from_params(&HashMap::new());
        assert_eq!(state, UrlState::default());
        assert_eq!(state.page, 1);
        assert_eq!(state.category, CategoryFilter::All);
    }

    #[test]
    fn test_decode_garbage_yields_defaults() {
        // /footwear?page=abc&category=Nonexistent
        let state = UrlState::from_params(&params(&[
            ("page", "abc"),
            ("category", "Nonexistent"),
            ("utm_source", "newsletter"),
        ]));
        assert_eq!(state.page, 1);
        assert_eq!(state.query, "");
        assert_eq!(state.category, CategoryFilter::All);
    }

    #[test]
    fn test_decode_zero_and_negative_pages_default_to_one() {
        assert_eq!(UrlState::from_params(&params(&[("page", "0")])).page, 1);
        assert_eq!(UrlState::from_params(&params(&[("page", "-2")])).page, 1);
    }

    #[test]
    fn test_round_trip() {
        let state = UrlState {
            page: 3,
            query: "air".to_string(),
            category: CategoryFilter::Only(Category::Running),
        };

        let encoded = state.to_query_string();
        let decoded: HashMap<String, String> = form_urlencoded::parse(encoded.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        assert_eq!(UrlState::from_params(&decoded), state);
    }

    #[test]
    fn test_encoding_escapes_sentinel_and_query() {
        let state = UrlState {
            page: 1,
            query: "trail runners".to_string(),
            category: CategoryFilter::All,
        };
        let encoded = state.to_query_string();
        assert_eq!(encoded, "page=1&query=trail+runners&category=All+Categories");
        assert_eq!(state.href(), format!("/footwear?{encoded}"));
    }

    #[test]
    fn test_with_page_keeps_query_and_category() {
        let state = UrlState {
            page: 1,
            query: "air".to_string(),
            category: CategoryFilter::Only(Category::Running),
        };
        let next = state.with_page(4);
        assert_eq!(next.page, 4);
        assert_eq!(next.query, "air");
        assert_eq!(next.category, state.category);
    }
}
