//! Pre-flight validation of scrape parameters.
//!
//! Everything here runs synchronously before the first network call; a
//! failure guarantees no request was made.

use reqwest::Url;

use crate::error::ScrapeError;

/// Host that serves resolved place pages.
const PLACE_HOST: &str = "www.google.com";

/// Path prefix of a resolved place page.
const PLACE_PATH_PREFIX: &str = "/maps/place/";

/// Checks that `url` has the shape of a resolved place page.
///
/// Search-result URLs (`/maps/search/…`) parse fine but never carry the
/// place token the endpoint needs, so they are rejected here with a clearer
/// error than the downstream [`ScrapeError::PlaceTokenMissing`].
///
/// # Errors
///
/// Returns [`ScrapeError::InvalidPlaceUrl`] when `url` is unparseable, has
/// the wrong host, or the wrong path prefix.
pub fn validate_place_url(url: &str) -> Result<(), ScrapeError> {
    let parsed = Url::parse(url).map_err(|e| ScrapeError::InvalidPlaceUrl {
        url: url.to_owned(),
        reason: e.to_string(),
    })?;

    if parsed.host_str() != Some(PLACE_HOST) {
        return Err(ScrapeError::InvalidPlaceUrl {
            url: url.to_owned(),
            reason: format!("host must be {PLACE_HOST}"),
        });
    }

    if !parsed.path().starts_with(PLACE_PATH_PREFIX) {
        return Err(ScrapeError::InvalidPlaceUrl {
            url: url.to_owned(),
            reason: format!("path must start with {PLACE_PATH_PREFIX}"),
        });
    }

    Ok(())
}
