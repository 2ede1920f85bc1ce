//! Response parsing for the upcoming-movies endpoint
//!
//! A response is consumed exactly once; the body is released on every exit
//! path because the `Response` is moved into the parser. A page with zero
//! movies and no `next` link is valid output, not an error.

use crate::error::{Error, Result};
use crate::model::MoviePage;
use reqwest::Response;

/// Validate and decode one listing response into a [`MoviePage`]
///
/// Fails with [`Error::HttpStatus`] outside 2xx, [`Error::BodyRead`] when the
/// body cannot be read, and [`Error::JsonParse`] when it is not shaped JSON.
/// Success performs no further validation.
pub async fn parse_page(response: Response) -> Result<MoviePage> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(Error::http_status(status.as_u16(), status_line(status, &body)));
    }

    let blob = response
        .bytes()
        .await
        .map_err(|e| Error::body_read(e.to_string()))?;

    decode_page(&blob)
}

/// Decode raw body bytes into a [`MoviePage`]
pub fn decode_page(blob: &[u8]) -> Result<MoviePage> {
    let page = serde_json::from_slice(blob)?;
    Ok(page)
}

/// Status text for an error, preferring the response body when present
fn status_line(status: reqwest::StatusCode, body: &str) -> String {
    if body.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("unknown status")
            .to_string()
    } else {
        body.to_string()
    }
}
