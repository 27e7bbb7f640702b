//! Parsing of the raw `listugcposts` response body.
//!
//! The body starts with the `)]}'` anti-hijacking guard; the remainder is a
//! JSON array whose index 1 carries the continuation token and index 2 the
//! review records for the page.

use serde_json::Value;

use crate::error::ScrapeError;
use crate::types::{ContinuationToken, RawPage};

/// Guard sequence the endpoint prepends to every JSON body.
const GUARD_PREFIX: &str = ")]}'";

/// Envelope index of the continuation token.
const TOKEN_INDEX: usize = 1;

/// Envelope index of the record sequence.
const RECORDS_INDEX: usize = 2;

/// Strips the guard prefix from `body` and parses the envelope into a
/// [`RawPage`].
///
/// `url` and `page` are diagnostics only; they end up in error context.
///
/// # Errors
///
/// - [`ScrapeError::MissingGuardPrefix`] when the guard is absent.
/// - [`ScrapeError::Deserialize`] when the remainder is not valid JSON.
pub(crate) fn parse_page(body: &str, url: &str, page: u32) -> Result<RawPage, ScrapeError> {
    let Some((_, payload)) = body.split_once(GUARD_PREFIX) else {
        return Err(ScrapeError::MissingGuardPrefix {
            page,
            url: url.to_owned(),
        });
    };

    let envelope: Value = serde_json::from_str(payload).map_err(|e| ScrapeError::Deserialize {
        context: format!("review page {page} from {url}"),
        source: e,
    })?;

    let next = envelope
        .get(TOKEN_INDEX)
        .and_then(Value::as_str)
        .and_then(ContinuationToken::new);

    // Absent or null records mean a page with zero results, not an error.
    let records = envelope
        .get(RECORDS_INDEX)
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();

    Ok(RawPage { records, next })
}
