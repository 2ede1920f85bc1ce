//! Wire types for the upcoming-movies listing endpoint
//!
//! Pure data-transfer records decoded from the JSON responses. Every field
//! tolerates absence in the wire payload; server order of `movies` is
//! preserved by `Vec`.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Open-ended ratings map (`"critics_score": 84`, `"audience_rating": "Upright"`, ...)
pub type Ratings = HashMap<String, serde_json::Value>;

/// Poster URLs keyed by size
pub type Posters = HashMap<PosterSize, String>;

/// Poster size names used as keys in the `posters` map
///
/// Closed set; anything the server invents later folds into `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PosterSize {
    Thumbnail,
    Profile,
    Original,
    #[serde(other)]
    Unknown,
}

/// Relation-name to URL map returned with pages and movies
///
/// Keys are case-sensitive; `"next"` is the pagination cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinksMap(pub HashMap<String, String>);

impl LinksMap {
    /// Look up a relation by name
    pub fn get(&self, rel: &str) -> Option<&str> {
        self.0.get(rel).map(String::as_str)
    }

    /// The URL of the next page, if one exists
    ///
    /// An absent `"next"` key or an empty-string value both mean "no more
    /// pages"; that is the normal end-of-results signal, not an error.
    pub fn next(&self) -> Option<&str> {
        self.get("next").filter(|url| !url.is_empty())
    }

    /// Whether the map holds no relations
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<const N: usize> From<[(&str, &str); N]> for LinksMap {
    fn from(pairs: [(&str, &str); N]) -> Self {
        Self(
            pairs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }
}

/// A cast member
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Star {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub characters: Vec<String>,
}

/// One movie record as returned by the listing endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub year: i32,
    #[serde(default)]
    pub mpaa_rating: String,
    /// Runtime in minutes (wire field `runtime`)
    #[serde(default, rename = "runtime")]
    pub runtime_minutes: f32,
    #[serde(default)]
    pub critics_consensus: String,
    /// Release-type to date-string map (`"theater": "2013-08-02"`)
    #[serde(default)]
    pub release_dates: HashMap<String, String>,
    #[serde(default)]
    pub ratings: Ratings,
    #[serde(default)]
    pub synopsis: String,
    #[serde(default)]
    pub posters: Posters,
    #[serde(default)]
    pub abridged_cast: Vec<Star>,
    #[serde(default)]
    pub links: Option<LinksMap>,
}

/// One page of upcoming-movies results
///
/// Produced once per successful fetch, immutable afterwards; ownership moves
/// to the consumer through the page stream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MoviePage {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub movies: Vec<Movie>,
    /// Pagination links; `None` when the server omits the map entirely
    #[serde(default)]
    pub links: Option<LinksMap>,
    #[serde(default)]
    pub link_template: String,
}

impl MoviePage {
    /// The URL of the next page, tolerating an absent links map
    pub fn next_url(&self) -> Option<&str> {
        self.links.as_ref().and_then(LinksMap::next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn sample_page_json() -> serde_json::Value {
        json!({
            "total": 57,
            "movies": [{
                "title": "Elysium",
                "year": 2013,
                "mpaa_rating": "R",
                "runtime": 109.0,
                "critics_consensus": "",
                "release_dates": { "theater": "2013-08-09" },
                "ratings": { "critics_score": 67, "audience_rating": "Upright" },
                "synopsis": "In the year 2154...",
                "posters": {
                    "thumbnail": "http://img.example.com/thumb.jpg",
                    "original": "http://img.example.com/orig.jpg",
                    "billboard": "http://img.example.com/wide.jpg"
                },
                "abridged_cast": [
                    { "name": "Matt Damon", "id": "162552438", "characters": ["Max"] }
                ],
                "links": { "self": "http://api.example.com/movies/1.json" }
            }],
            "links": { "next": "http://api.example.com/upcoming.json?page=2" },
            "link_template": "http://api.example.com/upcoming.json?page={page-number}"
        })
    }

    #[test]
    fn test_decode_full_page() {
        let page: MoviePage = serde_json::from_value(sample_page_json()).unwrap();

        assert_eq!(page.total, 57);
        assert_eq!(page.movies.len(), 1);
        assert_eq!(
            page.next_url(),
            Some("http://api.example.com/upcoming.json?page=2")
        );

        let movie = &page.movies[0];
        assert_eq!(movie.title, "Elysium");
        assert_eq!(movie.year, 2013);
        assert_eq!(movie.mpaa_rating, "R");
        assert_eq!(movie.runtime_minutes, 109.0);
        assert_eq!(
            movie.release_dates.get("theater"),
            Some(&"2013-08-09".to_string())
        );
        assert_eq!(movie.ratings.get("critics_score"), Some(&json!(67)));
        assert_eq!(movie.abridged_cast[0].name, "Matt Damon");
        assert_eq!(movie.abridged_cast[0].characters, vec!["Max"]);
    }

    #[test]
    fn test_poster_sizes() {
        let page: MoviePage = serde_json::from_value(sample_page_json()).unwrap();
        let posters = &page.movies[0].posters;

        assert!(posters.contains_key(&PosterSize::Thumbnail));
        assert!(posters.contains_key(&PosterSize::Original));
        // "billboard" is not a known size and folds into Unknown.
        assert!(posters.contains_key(&PosterSize::Unknown));
        assert!(!posters.contains_key(&PosterSize::Profile));
    }

    #[test]
    fn test_decode_sparse_page() {
        // A page with everything omitted is still valid and means
        // "no results, no more pages".
        let page: MoviePage = serde_json::from_str("{}").unwrap();
        assert_eq!(page.total, 0);
        assert!(page.movies.is_empty());
        assert!(page.links.is_none());
        assert_eq!(page.next_url(), None);
    }

    #[test]
    fn test_links_map_next() {
        let links = LinksMap::from([("next", "http://x/2"), ("self", "http://x/1")]);
        assert_eq!(links.next(), Some("http://x/2"));

        let links = LinksMap::from([("self", "http://x/1")]);
        assert_eq!(links.next(), None);

        // Empty-string value is the same as no next page.
        let links = LinksMap::from([("next", "")]);
        assert_eq!(links.next(), None);

        assert_eq!(LinksMap::default().next(), None);
    }

    #[test]
    fn test_links_map_case_sensitive() {
        let links = LinksMap::from([("Next", "http://x/2")]);
        assert_eq!(links.next(), None);
        assert_eq!(links.get("Next"), Some("http://x/2"));
    }

    #[test]
    fn test_movies_preserve_order() {
        let page: MoviePage = serde_json::from_value(json!({
            "movies": [{ "title": "A" }, { "title": "B" }, { "title": "C" }]
        }))
        .unwrap();
        let titles: Vec<_> = page.movies.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
    }
}
