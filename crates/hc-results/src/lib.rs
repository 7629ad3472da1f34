//! hc-results: calculation records and their storage.
//!
//! The engine returns a pure result; turning it into a persisted record is
//! the separate, composable step this crate provides. Records carry a
//! content-based id so identical calculations can be recognized across
//! sessions.

pub mod hash;
pub mod store;
pub mod types;

pub use hash::compute_record_id;
pub use store::RecordStore;
pub use types::{utc_timestamp, CalculationRecord};

pub type ResultsResult<T> = Result<T, ResultsError>;

#[derive(thiserror::Error, Debug)]
pub enum ResultsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid path: {message}")]
    InvalidPath { message: String },
}
