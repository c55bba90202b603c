//! Error types for input resolution.
//!
//! Only resolution can fail: a symbolic name that isn't in the name table,
//! or a numeric code outside the valid domain for its device. Both are
//! raised synchronously at the point of resolution and propagate straight
//! to the caller. Nothing else in the crate fails, and a failed resolution
//! never leaves tracker state inconsistent (a code is always resolved
//! before that code's state is touched).

use thiserror::Error;

/// Errors produced when resolving a key or button input to a numeric code.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A symbolic name was not found in the name table.
    #[error("unknown input name: \"{0}\"")]
    UnknownName(String),

    /// A numeric code fell outside the valid range for its device.
    #[error("code {code} is out of range ({min}..={max})")]
    OutOfRange {
        /// The rejected code, as supplied by the caller.
        code: i32,
        /// Smallest valid code for the device.
        min: u8,
        /// Largest valid code for the device.
        max: u8,
    },
}

/// Result type for resolution and the queries built on it.
pub type Result<T> = std::result::Result<T, Error>;
