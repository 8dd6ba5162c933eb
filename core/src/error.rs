//! Error types for the Grepper answers client.
//!
//! # Design
//! Precondition failures (`MissingCredential` .. `InvalidAnswerId`) are
//! raised before a request is built. Every HTTP status the service documents
//! gets its own variant so callers can match on "rate limited" or "bad key"
//! without comparing numbers; anything else lands in `UnknownStatus`.
//! The mapping itself lives in [`STATUS_ERRORS`] as data.

use thiserror::Error;

/// Errors returned by `AnswerApi` and `AnswerClient`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Grepper API key not found")]
    MissingCredential,

    #[error("Query is empty")]
    EmptyQuery,

    #[error(
        "Similarity is invalid (1-100 where 1 is really loose matching and 100 is really strict/tight match)"
    )]
    InvalidSimilarity,

    #[error("Answer ID is invalid")]
    InvalidAnswerId,

    #[error("Bad Request -- Your request is invalid.")]
    BadRequest,

    #[error("Unauthorized -- Your API key is wrong.")]
    Unauthorized,

    #[error("Forbidden -- You do not have access to the requested resource.")]
    Forbidden,

    #[error("Not Found -- The specified endpoint could not be found.")]
    NotFound,

    #[error("Method Not Allowed -- You tried to access an endpoint with an invalid method.")]
    MethodNotAllowed,

    #[error("Too Many Requests -- You're making too many requests! Slow down!")]
    RateLimited,

    #[error("Internal Server Error -- We had a problem with our server. Try again later.")]
    ServerError,

    #[error("Service Unavailable -- We're temporarily offline for maintenance. Please try again later.")]
    ServiceUnavailable,

    /// A non-200 status outside the documented set.
    #[error("Grepper returned status code {status}")]
    UnknownStatus { status: u16 },

    /// A 200 response whose body did not match the expected shape.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The transport could not complete the round trip.
    #[error("transport error: {0}")]
    Transport(String),
}

/// Documented status codes and the error each one produces.
pub const STATUS_ERRORS: [(u16, ApiError); 8] = [
    (400, ApiError::BadRequest),
    (401, ApiError::Unauthorized),
    (403, ApiError::Forbidden),
    (404, ApiError::NotFound),
    (405, ApiError::MethodNotAllowed),
    (429, ApiError::RateLimited),
    (500, ApiError::ServerError),
    (503, ApiError::ServiceUnavailable),
];

impl ApiError {
    /// Translate a non-200 HTTP status into its error.
    pub fn from_status(status: u16) -> Self {
        STATUS_ERRORS
            .iter()
            .find(|(code, _)| *code == status)
            .map_or(ApiError::UnknownStatus { status }, |(_, err)| err.clone())
    }

    /// The HTTP status behind this error, if it came from a response.
    pub fn status(&self) -> Option<u16> {
        if let ApiError::UnknownStatus { status } = self {
            return Some(*status);
        }
        STATUS_ERRORS
            .iter()
            .find(|(_, err)| err == self)
            .map(|(code, _)| *code)
    }
}
