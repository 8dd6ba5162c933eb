//! Domain DTOs for the answers API.
//!
//! # Design
//! These types mirror the service's JSON schema. `Answer::content` is a
//! `serde_json::Value` because the service stores arbitrary text there and
//! some clients store JSON documents in it: after parsing, the client replaces
//! a string that decodes as JSON with the decoded value and leaves every other
//! string untouched (see [`try_decode_json`]).

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::ApiError;

/// Similarity used by `search` when the caller does not pass one.
pub const DEFAULT_SIMILARITY: i32 = 60;

/// A single answer returned by the API.
///
/// Only `id` and `content` are required. The descriptive fields read as
/// empty or zero when the service omits them or sends `null`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Answer {
    pub id: u64,
    /// Either the raw text as a JSON string, or the decoded JSON value.
    pub content: Value,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub author_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub author_profile_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub upvotes: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub downvotes: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub object: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Answer {
    /// Replace string content with its decoded JSON value when it parses.
    pub(crate) fn decode_content(&mut self) {
        if let Value::String(raw) = &self.content {
            self.content = try_decode_json(raw);
        }
    }

    /// The content as text when it was not decoded.
    pub fn content_text(&self) -> Option<&str> {
        self.content.as_str()
    }
}

/// Response envelope of the search endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResult {
    pub object: String,
    pub data: Vec<Answer>,
}

/// Acknowledgement returned by the update endpoint, kept as sent.
///
/// The service reports `success` as the string `"true"` or `"false"`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdateResult {
    pub id: u64,
    pub success: Value,
}

impl UpdateResult {
    /// Interpret `success` whether it arrived as a string or a boolean.
    pub fn is_success(&self) -> bool {
        match &self.success {
            Value::Bool(b) => *b,
            Value::String(s) => s == "true",
            _ => false,
        }
    }
}

/// A validated answer id: strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnswerId(u64);

impl AnswerId {
    pub fn new(id: i64) -> Result<Self, ApiError> {
        match u64::try_from(id) {
            Ok(id) if id > 0 => Ok(Self(id)),
            _ => Err(ApiError::InvalidAnswerId),
        }
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

/// Decode `raw` as JSON, falling back to `raw` itself as a JSON string.
///
/// Never fails.
pub fn try_decode_json(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| {
        tracing::trace!("answer content is not JSON, keeping raw text");
        Value::String(raw.to_string())
    })
}
