//! Entity model for decoded reviews, plus the small value types that drive a
//! scrape: sort order, page bound, continuation token, raw page.
//!
//! Decoded entities are constructed once by [`crate::decode`] and never
//! mutated afterwards. They derive `Serialize` only: the wire format is
//! positional, so nothing here deserializes from upstream JSON.

use std::str::FromStr;

use serde::Serialize;
use serde_json::Value;

use crate::error::ScrapeError;

/// Sort order for the review listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Relevance,
    Newest,
    HighestRating,
    LowestRating,
}

impl SortOrder {
    /// Wire code interpolated into the `!13m1!1e{code}` segment of the `pb`
    /// parameter. The codes are the endpoint's own.
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Self::Relevance => 1,
            Self::Newest => 2,
            Self::HighestRating => 3,
            Self::LowestRating => 4,
        }
    }
}

impl FromStr for SortOrder {
    type Err = ScrapeError;

    /// Accepts the canonical names plus `relevant` as an alias and `_` in
    /// place of `-`, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "relevance" | "relevant" => Ok(Self::Relevance),
            "newest" => Ok(Self::Newest),
            "highest-rating" => Ok(Self::HighestRating),
            "lowest-rating" => Ok(Self::LowestRating),
            _ => Err(ScrapeError::InvalidSortOrder {
                value: s.to_owned(),
            }),
        }
    }
}

/// Upper bound on the number of pages fetched in one run.
///
/// Callers wanting early termination should bound the page count; there is
/// no mid-flight cancellation primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageBound {
    /// Follow continuation tokens until the endpoint stops issuing them.
    Unbounded,
    /// Fetch at most this many pages (always at least 1).
    Limit(u32),
}

impl PageBound {
    /// Returns `true` once `fetched` pages satisfy the bound.
    #[must_use]
    pub fn reached(self, fetched: u32) -> bool {
        match self {
            Self::Unbounded => false,
            Self::Limit(max) => fetched >= max,
        }
    }
}

impl FromStr for PageBound {
    type Err = ScrapeError;

    /// Parses the sentinel `max` (case-insensitive) or a positive integer.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("max") {
            return Ok(Self::Unbounded);
        }
        match s.parse::<u32>() {
            Ok(n) if n > 0 => Ok(Self::Limit(n)),
            _ => Err(ScrapeError::InvalidPageBound {
                value: s.to_owned(),
            }),
        }
    }
}

/// Opaque continuation token issued by the endpoint inside the response
/// envelope.
///
/// Absence (`Option::None`) is the only end-of-results signal. An empty
/// string is never stored: [`ContinuationToken::new`] collapses it to
/// `None`, so "no token" and "empty-string token" cannot be confused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContinuationToken(String);

impl ContinuationToken {
    /// Normalizes a raw token value from the envelope.
    ///
    /// The endpoint sometimes wraps the token in literal quote characters;
    /// those are stripped here.
    pub(crate) fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim_matches('"');
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_owned()))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One fetched page, prior to any decoding.
#[derive(Debug)]
pub struct RawPage {
    /// Raw positional review records exactly as returned (envelope index 2).
    /// Never mutated; consumed only by [`crate::decode`] or passed through.
    pub records: Vec<Value>,
    /// Continuation token for the next page (envelope index 1), if any.
    /// Presence does not guarantee the next page has records.
    pub next: Option<ContinuationToken>,
}

/// A fully decoded review.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Review {
    /// Unique per review, stable across re-fetches.
    pub review_id: String,
    /// Raw upstream publication timestamp (upstream-defined unit, observed
    /// as microseconds). Unit conversion is the caller's concern.
    pub published_at: Option<i64>,
    /// Raw upstream last-edit timestamp, same unit as [`Self::published_at`].
    pub last_edited_at: Option<i64>,
    pub author: ReviewAuthor,
    /// Star rating 1 to 5; absent when the record carries no numeric rating.
    pub rating: Option<u8>,
    pub text: Option<String>,
    pub language: Option<String>,
    /// `None` reproduces the upstream null (no gallery branch at all), as
    /// distinct from `Some(vec![])`, a present-but-empty gallery. The
    /// upstream distinction is preserved verbatim.
    pub images: Option<Vec<ReviewImage>>,
    /// Tag identifying where the review text originated (e.g. `"Google"`).
    pub source: Option<String>,
    /// Owner reply, present only when the upstream reply marker is non-null.
    pub response: Option<OwnerResponse>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewAuthor {
    pub name: Option<String>,
    pub profile_url: Option<String>,
    pub url: Option<String>,
    /// Opaque author identifier. Required: a record without it is rejected.
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewImage {
    pub id: Option<String>,
    pub url: Option<String>,
    pub width: Option<i64>,
    pub height: Option<i64>,
    /// Present when at least one location sub-field decoded.
    pub location: Option<ImageLocation>,
    pub caption: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageLocation {
    /// Human-readable label for the shot location, when the uploader set one.
    pub friendly: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

/// Reply from the place owner attached to a review.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OwnerResponse {
    pub text: Option<String>,
    pub published_at: Option<i64>,
    pub last_edited_at: Option<i64>,
}
