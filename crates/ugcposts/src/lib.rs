pub mod client;
pub mod decode;
pub mod endpoint;
pub mod error;
pub mod types;
pub mod validate;

mod envelope;

pub use client::ReviewsClient;
pub use decode::decode_review;
pub use error::{RecordError, ScrapeError};
pub use types::{
    ContinuationToken, ImageLocation, OwnerResponse, PageBound, RawPage, Review, ReviewAuthor,
    ReviewImage, SortOrder,
};
