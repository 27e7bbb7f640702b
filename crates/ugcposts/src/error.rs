use thiserror::Error;

/// Errors that abort a scrape run.
///
/// Validation variants fire before any network I/O. Transport and page-level
/// decode variants carry the page index and URL of the failing fetch so a
/// mid-run failure can be diagnosed without re-running the scrape.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// The supplied URL does not have the shape of a resolved place page.
    #[error("invalid place URL \"{url}\": {reason}")]
    InvalidPlaceUrl { url: String, reason: String },

    #[error(
        "invalid sort order \"{value}\": expected relevance, newest, highest-rating, or lowest-rating"
    )]
    InvalidSortOrder { value: String },

    #[error("invalid page bound \"{value}\": expected \"max\" or a positive integer")]
    InvalidPageBound { value: String },

    /// The place URL carries no `!1s…!` marker, so the internal place token
    /// cannot be extracted. Usually the URL is a search-result URL that was
    /// never resolved to a place page.
    #[error("place token not found in URL \"{url}\": re-resolve the place before scraping")]
    PlaceTokenMissing { url: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP 429. Surfaced as-is; the run is not retried from inside the
    /// client because the endpoint has no published rate-limit contract.
    #[error("rate limited on page {page} from {url} (retry after {retry_after_secs}s)")]
    RateLimited {
        page: u32,
        url: String,
        retry_after_secs: u64,
    },

    #[error("unexpected HTTP status {status} on page {page} from {url}")]
    UnexpectedStatus { status: u16, page: u32, url: String },

    /// The response body does not contain the `)]}'` anti-hijacking guard.
    /// A missing guard means the upstream format changed; the run aborts
    /// rather than silently dropping the page.
    #[error("page {page} from {url} is missing the anti-hijacking prefix")]
    MissingGuardPrefix { page: u32, url: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Rejection of a single raw review record during decode.
///
/// Unlike [`ScrapeError`], a `RecordError` never aborts a pagination run:
/// the offending record is logged with its position and skipped. Only
/// identity fields reject a record; every other field is legitimately
/// optional upstream.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("record carries no review payload at index 0")]
    MissingPayload,

    #[error("review id missing at path [0]")]
    MissingReviewId,

    #[error("author id missing at path [1][4][5][3] for review {review_id}")]
    MissingAuthorId { review_id: String },
}
