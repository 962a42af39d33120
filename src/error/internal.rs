use std::num::ParseIntError;
use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse id from String
    ///
    /// Discord ids are stored as strings; a stored value that is not a valid
    /// snowflake indicates corrupted data.
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// A stored schedule entry has no posted message to edit.
    #[error("Saved event at sheet row {index} has no posted message")]
    MissingMessageId {
        /// Sheet row of the stored event
        index: i32,
    },
}
