//! Query parameters and URL construction for the upcoming-movies listing
//!
//! A query only describes the *first* page; every later page URL comes from
//! the server's `next` link verbatim.

use crate::config::ClientConfig;
use crate::error::Result;
use tokio_util::sync::CancellationToken;
use url::Url;

/// Parameters for an upcoming-movies listing
///
/// All fields are optional; absent (or zero) numeric fields are omitted from
/// the request entirely so the server applies its own defaults. Immutable
/// once handed to the engine.
#[derive(Debug, Clone, Default)]
pub struct UpcomingQuery {
    /// Page size (wire parameter `page_limit`)
    pub items_per_page: Option<u32>,
    /// Starting page number (wire parameter `page`)
    pub max_page: Option<u32>,
    /// Country code (wire parameter `country`)
    pub country: Option<String>,
    /// One-shot cancellation signal observed by the pagination loop
    pub cancel: Option<CancellationToken>,
}

impl UpcomingQuery {
    /// Create an empty query (server defaults for everything)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page size
    #[must_use]
    pub fn items_per_page(mut self, count: u32) -> Self {
        self.items_per_page = Some(count);
        self
    }

    /// Set the starting page number
    #[must_use]
    pub fn max_page(mut self, page: u32) -> Self {
        self.max_page = Some(page);
        self
    }

    /// Set the country code
    #[must_use]
    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Attach a cancellation token
    #[must_use]
    pub fn cancel(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }
}

/// Build the page-1 URL for the upcoming-movies listing
///
/// The API key is always attached; `page_limit`, `page`, and `country` only
/// when the corresponding query field is present and positive / non-empty.
pub fn upcoming_movies_url(config: &ClientConfig, query: Option<&UpcomingQuery>) -> Result<String> {
    let endpoint = format!(
        "{}/v{}/lists/movies/upcoming/json",
        config.base_url().trim_end_matches('/'),
        config.api_version()
    );
    let mut url = Url::parse(&endpoint)?;

    {
        let mut pairs = url.query_pairs_mut();
        pairs.append_pair("apikey", &config.api_key());

        if let Some(query) = query {
            if let Some(limit) = query.items_per_page.filter(|n| *n > 0) {
                pairs.append_pair("page_limit", &limit.to_string());
            }
            if let Some(page) = query.max_page.filter(|n| *n > 0) {
                pairs.append_pair("page", &page.to_string());
            }
            if let Some(country) = query.country.as_deref().filter(|c| !c.is_empty()) {
                pairs.append_pair("country", country);
            }
        }
    }

    Ok(url.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn config() -> ClientConfig {
        ClientConfig::new("test-key")
    }

    fn query_pairs(url: &str) -> Vec<(String, String)> {
        Url::parse(url)
            .unwrap()
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    #[test]
    fn test_url_path_and_version() {
        let url = upcoming_movies_url(&config(), None).unwrap();
        assert!(url.starts_with(
            "http://api.rottentomatoes.com/api/public/v1.0/lists/movies/upcoming/json?"
        ));

        let config = config();
        config.set_api_version("2.0");
        let url = upcoming_movies_url(&config, None).unwrap();
        assert!(url.contains("/v2.0/lists/movies/upcoming/json"));
    }

    #[test]
    fn test_url_with_all_fields() {
        let query = UpcomingQuery::new()
            .items_per_page(10)
            .max_page(2)
            .country("us");
        let url = upcoming_movies_url(&config(), Some(&query)).unwrap();
        let pairs = query_pairs(&url);

        assert!(pairs.contains(&("apikey".into(), "test-key".into())));
        assert!(pairs.contains(&("page_limit".into(), "10".into())));
        assert!(pairs.contains(&("page".into(), "2".into())));
        assert!(pairs.contains(&("country".into(), "us".into())));
    }

    #[test]
    fn test_url_empty_country_omitted() {
        let query = UpcomingQuery::new()
            .items_per_page(10)
            .max_page(2)
            .country("");
        let url = upcoming_movies_url(&config(), Some(&query)).unwrap();

        assert!(url.contains("page_limit=10"));
        assert!(url.contains("page=2"));
        assert!(!url.contains("country"));
    }

    #[test_case(UpcomingQuery::new() ; "empty query")]
    #[test_case(UpcomingQuery::new().items_per_page(0).max_page(0) ; "zero fields")]
    fn test_url_only_api_key(query: UpcomingQuery) {
        let url = upcoming_movies_url(&config(), Some(&query)).unwrap();
        let pairs = query_pairs(&url);
        assert_eq!(pairs, vec![("apikey".to_string(), "test-key".to_string())]);
    }

    #[test]
    fn test_url_no_query_at_all() {
        let url = upcoming_movies_url(&config(), None).unwrap();
        let pairs = query_pairs(&url);
        assert_eq!(pairs, vec![("apikey".to_string(), "test-key".to_string())]);
    }

    #[test]
    fn test_url_malformed_base_fails() {
        let config = config();
        config.set_base_url("not a url");
        assert!(upcoming_movies_url(&config, None).is_err());
    }

    #[test]
    fn test_query_builder() {
        let token = CancellationToken::new();
        let query = UpcomingQuery::new()
            .items_per_page(25)
            .max_page(3)
            .country("de")
            .cancel(token.clone());

        assert_eq!(query.items_per_page, Some(25));
        assert_eq!(query.max_page, Some(3));
        assert_eq!(query.country.as_deref(), Some("de"));
        assert!(query.cancel.is_some());
    }
}
