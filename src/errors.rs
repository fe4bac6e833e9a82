//! Unified error types for the application core.
//!
//! Precondition failures inside mutators (no signed-in user, no active
//! event) are deliberately *not* errors: those paths log a warning and leave
//! state untouched. Errors are reserved for configuration problems, failed
//! form validation, and lookups the caller explicitly asked for.

use crate::entities::BookingStatus;
use thiserror::Error;

/// All failure modes surfaced by the crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Preferences or seed file could not be read or parsed.
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of what went wrong
        message: String,
    },

    /// A form field failed its wizard-step validation.
    #[error("Validation failed for {field}: {message}")]
    Validation {
        /// Name of the offending field
        field: &'static str,
        /// Inline message shown next to the field
        message: String,
    },

    /// A phone number was incomplete or missing the +996 prefix.
    #[error("Invalid phone number: {input}")]
    InvalidPhone {
        /// The formatted input as entered
        input: String,
    },

    /// A verification code was not six digits.
    #[error("Invalid verification code: {reason}")]
    InvalidCode {
        /// Why the code was rejected
        reason: String,
    },

    /// A booking id did not match any booking.
    #[error("Booking not found: {id}")]
    BookingNotFound {
        /// The id that was looked up
        id: String,
    },

    /// A booking status change that the transition policy forbids.
    #[error("Booking {id} cannot move from {from:?} to {to:?}")]
    BookingTransition {
        /// The booking in question
        id: String,
        /// Status before the attempted change
        from: BookingStatus,
        /// Requested status
        to: BookingStatus,
    },

    /// I/O error while reading or writing a config file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Environment variable error during bootstrap.
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),
}

/// Convenience `Result` type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
