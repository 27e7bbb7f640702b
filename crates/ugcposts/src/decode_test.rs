//! Fixture-driven tests for the positional review decoder.
//!
//! Fixtures are built bottom-up so every index lines up with the documented
//! path constants; nulls pad the gaps exactly as the endpoint does.

use serde_json::{json, Value};

use super::decode_review;
use crate::error::RecordError;

const REVIEW_ID: &str = "ChdDSUhNMG9nS0VJQ0FnSUNYcDVqVDZ3RRAB";
const AUTHOR_ID: &str = "108963741825531902273";
const PUBLISHED_AT: i64 = 1_694_000_000_000_000;
const LAST_EDITED_AT: i64 = 1_695_000_000_000_000;

/// Author block at payload path `[1][4][5]`.
fn author() -> Value {
    json!([
        "Jane Doe",
        "https://lh3.example/profile/42",
        ["https://www.google.com/maps/contrib/108963741825531902273"],
        AUTHOR_ID
    ])
}

/// Payload element `[1]`: timestamps at `[2]`/`[3]`, author wrapper at
/// `[4]` (author itself at its index 5), source tag at `[13][0]`.
fn metadata() -> Value {
    json!([
        null,
        null,
        PUBLISHED_AT,
        LAST_EDITED_AT,
        [null, null, null, null, null, author()],
        null,
        null,
        null,
        null,
        null,
        null,
        null,
        null,
        ["Google"]
    ])
}

/// Payload element `[2]`: rating at `[0][0]`, gallery at `[2]`, language
/// at `[14][0]`, text at `[15][0][0]`.
fn content(rating: u64, gallery: Value, text: &str, language: &str) -> Value {
    json!([
        [rating],
        null,
        gallery,
        null,
        null,
        null,
        null,
        null,
        null,
        null,
        null,
        null,
        null,
        null,
        [language],
        [[text]]
    ])
}

/// Payload element `[3]`: owner reply with timestamps at `[1]`/`[2]` and
/// text (the presence marker) at `[14][0][0]`.
fn owner_reply(text: &str, published: i64, edited: i64) -> Value {
    json!([
        null,
        published,
        edited,
        null,
        null,
        null,
        null,
        null,
        null,
        null,
        null,
        null,
        null,
        null,
        [[text]]
    ])
}

/// One gallery element: id at `[0]`, URL and size under `[1][6]`, geo under
/// `[1][8][0]` (longitude before latitude), caption and friendly label
/// under `[1][21][3]`.
fn gallery_image() -> Value {
    let label_block = json!([
        null,
        null,
        null,
        null,
        null,
        ["view from the terrace"],
        null,
        ["Terrace"]
    ]);
    let image_meta = json!([
        null,
        null,
        null,
        null,
        null,
        null,
        ["https://lh5.example/photo.jpg", null, [1200, 800]],
        null,
        [[null, 2.2945, 48.8584]],
        null,
        null,
        null,
        null,
        null,
        null,
        null,
        null,
        null,
        null,
        null,
        null,
        [null, null, null, label_block]
    ]);
    json!(["img-1", image_meta])
}

/// A record container whose payload carries every branch.
fn full_record(gallery: Value, reply: Value) -> Value {
    json!([[
        REVIEW_ID,
        metadata(),
        content(5, gallery, "Great coffee and quiet seating.", "en"),
        reply
    ]])
}

/// A record container carrying only the identity fields.
fn minimal_record() -> Value {
    json!([[
        REVIEW_ID,
        [null, null, null, null, [null, null, null, null, null, [null, null, null, AUTHOR_ID]]],
        null,
        null
    ]])
}

#[test]
fn decodes_fully_populated_record() {
    let record = full_record(
        json!([gallery_image()]),
        owner_reply("Thanks for visiting!", 1_696_000_000_000_000, 1_696_100_000_000_000),
    );
    let review = decode_review(&record).unwrap();

    assert_eq!(review.review_id, REVIEW_ID);
    assert_eq!(review.published_at, Some(PUBLISHED_AT));
    assert_eq!(review.last_edited_at, Some(LAST_EDITED_AT));
    assert_eq!(review.author.id, AUTHOR_ID);
    assert_eq!(review.author.name.as_deref(), Some("Jane Doe"));
    assert_eq!(
        review.author.profile_url.as_deref(),
        Some("https://lh3.example/profile/42")
    );
    assert_eq!(
        review.author.url.as_deref(),
        Some("https://www.google.com/maps/contrib/108963741825531902273")
    );
    assert_eq!(review.rating, Some(5));
    assert_eq!(review.text.as_deref(), Some("Great coffee and quiet seating."));
    assert_eq!(review.language.as_deref(), Some("en"));
    assert_eq!(review.source.as_deref(), Some("Google"));

    let response = review.response.unwrap();
    assert_eq!(response.text.as_deref(), Some("Thanks for visiting!"));
    assert_eq!(response.published_at, Some(1_696_000_000_000_000));
    assert_eq!(response.last_edited_at, Some(1_696_100_000_000_000));
}

#[test]
fn decodes_gallery_element_fields() {
    let record = full_record(json!([gallery_image()]), Value::Null);
    let review = decode_review(&record).unwrap();

    let images = review.images.unwrap();
    assert_eq!(images.len(), 1);
    let image = &images[0];
    assert_eq!(image.id.as_deref(), Some("img-1"));
    assert_eq!(image.url.as_deref(), Some("https://lh5.example/photo.jpg"));
    assert_eq!(image.width, Some(1200));
    assert_eq!(image.height, Some(800));
    assert_eq!(image.caption.as_deref(), Some("view from the terrace"));

    let location = image.location.as_ref().unwrap();
    assert_eq!(location.friendly.as_deref(), Some("Terrace"));
    assert_eq!(location.lat, Some(48.8584));
    assert_eq!(location.lng, Some(2.2945));
}

#[test]
fn minimal_record_decodes_with_all_optionals_absent() {
    let review = decode_review(&minimal_record()).unwrap();

    assert_eq!(review.review_id, REVIEW_ID);
    assert_eq!(review.author.id, AUTHOR_ID);
    assert!(review.author.name.is_none());
    assert!(review.published_at.is_none());
    assert!(review.last_edited_at.is_none());
    assert!(review.rating.is_none());
    assert!(review.text.is_none());
    assert!(review.language.is_none());
    assert!(review.images.is_none());
    assert!(review.source.is_none());
    assert!(review.response.is_none());
}

#[test]
fn absent_reply_marker_yields_no_response() {
    let record = full_record(Value::Null, Value::Null);
    let review = decode_review(&record).unwrap();
    assert!(review.response.is_none());
}

#[test]
fn empty_reply_text_still_marks_response_present() {
    // The marker leaf is non-null even when the text is empty; sub-fields
    // then decode to None individually.
    let record = full_record(Value::Null, owner_reply("", 1_696_000_000_000_000, 0));
    let review = decode_review(&record).unwrap();

    let response = review.response.unwrap();
    assert!(response.text.is_none());
    assert_eq!(response.published_at, Some(1_696_000_000_000_000));
}

#[test]
fn null_gallery_and_empty_gallery_stay_distinct() {
    let without_branch = decode_review(&full_record(Value::Null, Value::Null)).unwrap();
    assert!(without_branch.images.is_none());

    let empty_branch = decode_review(&full_record(json!([]), Value::Null)).unwrap();
    assert_eq!(empty_branch.images, Some(vec![]));
}

#[test]
fn empty_text_and_language_collapse_to_absent() {
    let record = json!([[REVIEW_ID, metadata(), content(4, Value::Null, "", ""), null]]);
    let review = decode_review(&record).unwrap();
    assert!(review.text.is_none());
    assert!(review.language.is_none());
    assert_eq!(review.rating, Some(4));
}

#[test]
fn empty_container_is_rejected_as_missing_payload() {
    let err = decode_review(&json!([])).unwrap_err();
    assert!(matches!(err, RecordError::MissingPayload));

    let err = decode_review(&json!([null])).unwrap_err();
    assert!(matches!(err, RecordError::MissingPayload));
}

#[test]
fn missing_review_id_is_rejected() {
    let record = json!([[null, metadata(), null, null]]);
    let err = decode_review(&record).unwrap_err();
    assert!(matches!(err, RecordError::MissingReviewId));
}

#[test]
fn missing_author_id_is_rejected_with_review_id_context() {
    let record = json!([[REVIEW_ID, [null, null, null, null, null], null, null]]);
    let err = decode_review(&record).unwrap_err();
    match err {
        RecordError::MissingAuthorId { review_id } => assert_eq!(review_id, REVIEW_ID),
        other => panic!("expected MissingAuthorId, got: {other:?}"),
    }
}

#[test]
fn decode_is_idempotent() {
    let record = full_record(
        json!([gallery_image()]),
        owner_reply("Thanks!", 1_696_000_000_000_000, 1_696_000_000_000_000),
    );
    let first = decode_review(&record).unwrap();
    let second = decode_review(&record).unwrap();
    assert_eq!(first, second);
}
