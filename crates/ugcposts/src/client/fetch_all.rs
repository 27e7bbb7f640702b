//! Pagination loops for [`ReviewsClient`].

use std::time::Duration;

use serde_json::Value;

use crate::decode::decode_review;
use crate::error::ScrapeError;
use crate::types::{PageBound, Review, SortOrder};
use crate::validate::validate_place_url;

use super::ReviewsClient;

impl ReviewsClient {
    /// Fetches up to `bound` pages of raw records, concatenated in upstream
    /// order.
    ///
    /// The first page is fetched before the loop; when it carries zero
    /// records the run ends immediately with an empty result (zero reviews
    /// is a normal outcome, not an error). Each subsequent fetch is driven
    /// by the continuation token of the previous one and preceded by the
    /// inter-page delay, so pages are strictly sequential.
    ///
    /// **All-or-nothing semantics**: a failure on any page discards the
    /// earlier pages and surfaces the error, since a malformed page usually
    /// means the upstream format changed.
    ///
    /// # Errors
    ///
    /// - [`ScrapeError::InvalidPlaceUrl`] before any request when
    ///   `place_url` is not a place page.
    /// - [`ScrapeError::PlaceTokenMissing`] when the URL carries no token.
    /// - Any transport or page-decode error from [`Self::fetch_page`].
    pub async fn fetch_all_raw(
        &self,
        place_url: &str,
        sort: SortOrder,
        bound: PageBound,
        query: &str,
    ) -> Result<Vec<Value>, ScrapeError> {
        validate_place_url(place_url)?;

        let mut fetched: u32 = 1;
        let first = self.fetch_page(place_url, sort, None, query, fetched).await?;
        if first.records.is_empty() {
            tracing::debug!(place_url, "first page has zero records");
            return Ok(Vec::new());
        }

        let mut records = first.records;
        let mut token = first.next;

        while let Some(cursor) = token {
            if bound.reached(fetched) {
                break;
            }
            tokio::time::sleep(Duration::from_millis(self.inter_page_delay_ms)).await;

            fetched += 1;
            tracing::debug!(page = fetched, "fetching review page");
            let page = self
                .fetch_page(place_url, sort, Some(&cursor), query, fetched)
                .await?;
            records.extend(page.records);
            token = page.next;
        }

        tracing::info!(pages = fetched, records = records.len(), "pagination complete");
        Ok(records)
    }

    /// Fetches up to `bound` pages and decodes every accumulated record.
    ///
    /// Decoding happens in one pass after pagination completes. A record
    /// whose identity fields fail to decode is logged with its position and
    /// skipped; it does not abort the run. Output order matches upstream
    /// order.
    ///
    /// # Errors
    ///
    /// Same as [`Self::fetch_all_raw`]; record-level rejects are not errors.
    pub async fn fetch_all_reviews(
        &self,
        place_url: &str,
        sort: SortOrder,
        bound: PageBound,
        query: &str,
    ) -> Result<Vec<Review>, ScrapeError> {
        let records = self.fetch_all_raw(place_url, sort, bound, query).await?;

        let mut reviews = Vec::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            match decode_review(record) {
                Ok(review) => reviews.push(review),
                Err(err) => {
                    tracing::warn!(position, error = %err, "rejected review record");
                }
            }
        }
        Ok(reviews)
    }
}
