//! Shared pieces used by every Parley feature crate

mod error;

pub use error::{ErrorBody, HttpError, error_response};
