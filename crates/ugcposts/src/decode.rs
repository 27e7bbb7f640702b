//! Decoder from the endpoint's positional records to [`Review`].
//!
//! The wire format has no schema: every field lives at a fixed index path
//! inside heterogeneous nested arrays, and optional branches are plain
//! nulls. Each path is named once as a constant below; nothing else in the
//! crate indexes into a raw record.
//!
//! Decoding is pure and per-record independent: no I/O, no shared state,
//! and the same record always decodes to the same value.

use serde_json::Value;

use crate::error::RecordError;
use crate::types::{ImageLocation, OwnerResponse, Review, ReviewAuthor, ReviewImage};

// Paths relative to the review payload (element 0 of the record container).

/// Review id: `[0]`. Required.
const REVIEW_ID: &[usize] = &[0];
/// Publication timestamp: `[1][2]`. Optional.
const PUBLISHED_AT: &[usize] = &[1, 2];
/// Last-edit timestamp: `[1][3]`. Optional.
const LAST_EDITED_AT: &[usize] = &[1, 3];
/// Author display name: `[1][4][5][0]`. Optional.
const AUTHOR_NAME: &[usize] = &[1, 4, 5, 0];
/// Author profile URL: `[1][4][5][1]`. Optional.
const AUTHOR_PROFILE_URL: &[usize] = &[1, 4, 5, 1];
/// Author canonical URL: `[1][4][5][2][0]`. Optional.
const AUTHOR_URL: &[usize] = &[1, 4, 5, 2, 0];
/// Opaque author id: `[1][4][5][3]`. Required.
const AUTHOR_ID: &[usize] = &[1, 4, 5, 3];
/// Star rating: `[2][0][0]`. Optional.
const RATING: &[usize] = &[2, 0, 0];
/// Review text: `[2][15][0][0]`. Optional; empty collapses to absent.
const TEXT: &[usize] = &[2, 15, 0, 0];
/// Review language: `[2][14][0]`. Optional; empty collapses to absent.
const LANGUAGE: &[usize] = &[2, 14, 0];
/// Image gallery: `[2][2]`. Null means no gallery branch at all, as
/// distinct from an explicitly empty array; the distinction is preserved.
const IMAGES: &[usize] = &[2, 2];
/// Review source tag: `[1][13][0]`. Optional.
const SOURCE: &[usize] = &[1, 13, 0];
/// Owner reply text, doubling as the reply presence marker: `[3][14][0][0]`.
const RESPONSE_TEXT: &[usize] = &[3, 14, 0, 0];
/// Owner reply publication timestamp: `[3][1]`. Optional.
const RESPONSE_PUBLISHED_AT: &[usize] = &[3, 1];
/// Owner reply last-edit timestamp: `[3][2]`. Optional.
const RESPONSE_LAST_EDITED_AT: &[usize] = &[3, 2];

// Paths relative to one gallery element.

/// Image id: `[0]`.
const IMAGE_ID: &[usize] = &[0];
/// Image CDN URL: `[1][6][0]`.
const IMAGE_URL: &[usize] = &[1, 6, 0];
/// Pixel width: `[1][6][2][0]`.
const IMAGE_WIDTH: &[usize] = &[1, 6, 2, 0];
/// Pixel height: `[1][6][2][1]`.
const IMAGE_HEIGHT: &[usize] = &[1, 6, 2, 1];
/// Latitude: `[1][8][0][2]`.
const IMAGE_LATITUDE: &[usize] = &[1, 8, 0, 2];
/// Longitude: `[1][8][0][1]`.
const IMAGE_LONGITUDE: &[usize] = &[1, 8, 0, 1];
/// Human-readable location label: `[1][21][3][7][0]`.
const IMAGE_LOCATION_FRIENDLY: &[usize] = &[1, 21, 3, 7, 0];
/// Caption: `[1][21][3][5][0]`. Optional; empty collapses to absent.
const IMAGE_CAPTION: &[usize] = &[1, 21, 3, 5, 0];

/// Walks `path` through nested arrays, treating any miss (out-of-range
/// index, non-array intermediate) or a JSON null as absence.
fn seek<'a>(value: &'a Value, path: &[usize]) -> Option<&'a Value> {
    let mut current = value;
    for &index in path {
        current = current.get(index)?;
    }
    if current.is_null() {
        None
    } else {
        Some(current)
    }
}

fn seek_str(value: &Value, path: &[usize]) -> Option<String> {
    seek(value, path)?.as_str().map(str::to_owned)
}

/// Like [`seek_str`] but collapses empty strings to `None`, matching the
/// upstream convention that an empty text branch means "no value".
fn seek_text(value: &Value, path: &[usize]) -> Option<String> {
    seek_str(value, path).filter(|s| !s.is_empty())
}

fn seek_i64(value: &Value, path: &[usize]) -> Option<i64> {
    seek(value, path)?.as_i64()
}

fn seek_f64(value: &Value, path: &[usize]) -> Option<f64> {
    seek(value, path)?.as_f64()
}

/// Decodes one raw record container into a [`Review`].
///
/// Optional branches (rating, text, language, images, owner reply) decode
/// to their documented absent state rather than failing. A record is
/// rejected only when an identity field is unparseable, since that
/// indicates a genuine format mismatch rather than legitimate optionality.
///
/// # Errors
///
/// - [`RecordError::MissingPayload`] when the container has no element 0.
/// - [`RecordError::MissingReviewId`] when the review id is absent.
/// - [`RecordError::MissingAuthorId`] when the author id is absent.
pub fn decode_review(record: &Value) -> Result<Review, RecordError> {
    let review = record
        .get(0)
        .filter(|v| !v.is_null())
        .ok_or(RecordError::MissingPayload)?;

    let review_id = seek_str(review, REVIEW_ID).ok_or(RecordError::MissingReviewId)?;
    let author_id = seek_str(review, AUTHOR_ID).ok_or_else(|| RecordError::MissingAuthorId {
        review_id: review_id.clone(),
    })?;

    // The owner-reply branch is present iff its text leaf is non-null; the
    // leaf is the upstream marker. Sub-fields may still decode to None.
    let response = seek(review, RESPONSE_TEXT).is_some().then(|| OwnerResponse {
        text: seek_text(review, RESPONSE_TEXT),
        published_at: seek_i64(review, RESPONSE_PUBLISHED_AT),
        last_edited_at: seek_i64(review, RESPONSE_LAST_EDITED_AT),
    });

    let images = seek(review, IMAGES)
        .and_then(Value::as_array)
        .map(|gallery| gallery.iter().map(decode_image).collect());

    let rating = seek(review, RATING)
        .and_then(Value::as_u64)
        .and_then(|n| u8::try_from(n).ok());

    Ok(Review {
        review_id,
        published_at: seek_i64(review, PUBLISHED_AT),
        last_edited_at: seek_i64(review, LAST_EDITED_AT),
        author: ReviewAuthor {
            name: seek_str(review, AUTHOR_NAME),
            profile_url: seek_str(review, AUTHOR_PROFILE_URL),
            url: seek_str(review, AUTHOR_URL),
            id: author_id,
        },
        rating,
        text: seek_text(review, TEXT),
        language: seek_text(review, LANGUAGE),
        images,
        source: seek_str(review, SOURCE),
        response,
    })
}

/// Decodes one gallery element. Infallible: every image field is optional.
fn decode_image(image: &Value) -> ReviewImage {
    let location = ImageLocation {
        friendly: seek_str(image, IMAGE_LOCATION_FRIENDLY),
        lat: seek_f64(image, IMAGE_LATITUDE),
        lng: seek_f64(image, IMAGE_LONGITUDE),
    };
    let has_location =
        location.friendly.is_some() || location.lat.is_some() || location.lng.is_some();

    ReviewImage {
        id: seek_str(image, IMAGE_ID),
        url: seek_str(image, IMAGE_URL),
        width: seek_i64(image, IMAGE_WIDTH),
        height: seek_i64(image, IMAGE_HEIGHT),
        location: has_location.then_some(location),
        caption: seek_text(image, IMAGE_CAPTION),
    }
}

#[cfg(test)]
#[path = "decode_test.rs"]
mod tests;
