//! Error types for the Guestbook engine.

use chrono::NaiveDate;
use thiserror::Error;

/// Validation failures for caller-supplied guest data.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("guest name is required")]
    EmptyName,

    #[error("check-out date {check_out} is before check-in date {check_in}")]
    InvalidStayRange {
        check_in: NaiveDate,
        check_out: NaiveDate,
    },

    // Image errors
    #[error("{field}: unsupported image type '{media_type}', expected JPEG or PNG")]
    UnsupportedImageType {
        field: &'static str,
        media_type: String,
    },

    #[error("{field}: image is {size} bytes, limit is {limit} bytes")]
    ImageTooLarge {
        field: &'static str,
        size: usize,
        limit: usize,
    },

    #[error("{field}: not a data URI")]
    MalformedImage { field: &'static str },
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, Error>;
