//! Place-token extraction and `listugcposts` request-URL construction.
//!
//! The endpoint has no published contract. Every other query parameter in
//! the `pb` template below (locale, result-count hint, feature flags)
//! mirrors what the Maps web app sends and is a protocol constant, not a
//! tunable.

use regex::Regex;

use crate::error::ScrapeError;
use crate::types::{ContinuationToken, SortOrder};

/// Production origin of the review endpoint.
pub(crate) const DEFAULT_BASE_URL: &str = "https://www.google.com";

/// Extracts the internal place token from a resolved place URL.
///
/// The token is wrapped in a `!1s…!` marker inside the URL's data segment.
/// Some resolved URLs carry the marker twice (the first occurrence echoes
/// the search, the second names the resolved place); the second wins when
/// present.
///
/// # Errors
///
/// Returns [`ScrapeError::PlaceTokenMissing`] when no marker is present,
/// which usually means the URL is a search-result URL that was never
/// resolved to a place page.
pub fn extract_place_token(place_url: &str) -> Result<String, ScrapeError> {
    let marker = Regex::new(r"!1s([a-zA-Z0-9_:]+)!").expect("valid regex");

    let tokens: Vec<&str> = marker
        .captures_iter(place_url)
        .filter_map(|c| c.get(1).map(|m| m.as_str()))
        .collect();

    match tokens.as_slice() {
        [] => Err(ScrapeError::PlaceTokenMissing {
            url: place_url.to_owned(),
        }),
        [only] => Ok((*only).to_owned()),
        [_, second, ..] => Ok((*second).to_owned()),
    }
}

/// Builds the paginated `listugcposts` request URL.
///
/// Interpolated segments of `pb`, in order of appearance:
/// - `!1s{place_token}`: which place to list posts for,
/// - `!3s{query}`: optional text filter, empty when unused,
/// - `!2s{token}`: continuation token, empty on the first page,
/// - `!1e{sort}`: sort code from [`SortOrder::code`].
///
/// # Errors
///
/// Returns [`ScrapeError::PlaceTokenMissing`] when `place_url` carries no
/// token marker.
pub fn listugcposts_url(
    base_url: &str,
    place_url: &str,
    sort: SortOrder,
    token: Option<&ContinuationToken>,
    query: &str,
) -> Result<String, ScrapeError> {
    let place_token = extract_place_token(place_url)?;
    let page_token = token.map_or("", ContinuationToken::as_str);
    let sort_code = sort.code();

    Ok(format!(
        "{base_url}/maps/rpc/listugcposts?authuser=0&hl=en&gl=in&pb=!1m7!1s{place_token}!3s{query}!6m4!4m1!1e1!4m1!1e3!2m2!1i10!2s{page_token}!5m2!1sBnOwZvzePPfF4-EPy7LK0Ak!7e81!8m5!1b1!2b1!3b1!5b1!7b1!11m6!1e3!2e1!3sen!4slk!6m1!1i2!13m1!1e{sort_code}"
    ))
}
