//! Client core for the Grepper answers API.
//!
//! # Overview
//! Three operations: search answers, retrieve one answer, update an
//! answer's content. `AnswerApi` builds `HttpRequest` values and parses
//! `HttpResponse` values without touching the network (host-does-IO
//! pattern); `AnswerClient` strings the two halves together over a
//! [`Transport`].
//!
//! # Design
//! - The API key is configuration handed over at construction, not global
//!   state; changing it needs `&mut`.
//! - All input validation runs in `build_*`, before any I/O.
//! - Non-200 statuses map through the static `STATUS_ERRORS` table.
//! - Answer content that parses as JSON is replaced by the parsed value;
//!   anything else stays the raw string.
//! - The `ureq` feature (on by default) provides a blocking transport.
//!   Async hosts use `AnswerApi` directly around their own client.

pub mod answer_client;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use answer_client::AnswerClient;
pub use client::{AnswerApi, UPDATE_CONTENT_FIELD};
pub use config::{ApiKey, ClientConfig, DEFAULT_BASE_URL};
pub use error::{ApiError, STATUS_ERRORS};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
#[cfg(feature = "ureq")]
pub use transport::UreqTransport;
pub use transport::Transport;
pub use types::{try_decode_json, Answer, AnswerId, SearchResult, UpdateResult, DEFAULT_SIMILARITY};
