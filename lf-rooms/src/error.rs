/// Error types for room lookup and creation
use thiserror::Error;

/// Main error type for room service operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RoomError {
    /// HTTP request failed before a response arrived
    #[error("HTTP request failed: {0}")]
    HttpRequest(String),

    /// The room service answered with a non-success status
    #[error("Room service responded with status {status}: {message}")]
    Status { status: u16, message: String },

    /// The room service refused the request (e.g. a duplicate room name)
    #[error("Room service rejected the request: {0}")]
    Rejected(String),

    /// Failed to parse the room service response
    #[error("Failed to parse room service response: {0}")]
    ResponseParse(String),

    /// A room name was empty after trimming
    #[error("Room name must not be empty")]
    EmptyName,

    /// The room service URL could not be built
    #[error("Invalid room service URL: {0}")]
    InvalidUrl(String),

    /// The owner identifier could not be used
    #[error("Invalid owner identifier: {0:?}")]
    InvalidOwner(String),
}

/// Type alias for Results using RoomError
pub type Result<T> = std::result::Result<T, RoomError>;
