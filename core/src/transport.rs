//! Executes `HttpRequest` values.
//!
//! A `Transport` performs exactly one round trip per call and reports every
//! HTTP status as data; only failures to complete the exchange (DNS, refused
//! connection, timeout) become `ApiError::Transport`. Timeouts and
//! cancellation belong to the implementation.

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};

/// Something that can put an `HttpRequest` on the wire.
pub trait Transport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        (**self).execute(request)
    }
}

#[cfg(feature = "ureq")]
pub use self::ureq_transport::UreqTransport;

#[cfg(feature = "ureq")]
mod ureq_transport {
    use std::time::Duration;

    use super::Transport;
    use crate::error::ApiError;
    use crate::http::{HttpMethod, HttpRequest, HttpResponse};

    /// Blocking transport backed by a shared `ureq::Agent`.
    ///
    /// ureq's status-code-as-error behavior is disabled so 4xx/5xx responses
    /// reach the status table instead of surfacing as transport failures.
    #[derive(Clone)]
    pub struct UreqTransport {
        agent: ureq::Agent,
    }

    impl Default for UreqTransport {
        fn default() -> Self {
            Self::with_timeout(None)
        }
    }

    impl UreqTransport {
        pub fn new() -> Self {
            Self::default()
        }

        /// `timeout` bounds the whole round trip; `None` waits indefinitely.
        pub fn with_timeout(timeout: Option<Duration>) -> Self {
            let agent = ureq::Agent::config_builder()
                .http_status_as_error(false)
                .timeout_global(timeout)
                .build()
                .new_agent();
            Self { agent }
        }
    }

    impl Transport for UreqTransport {
        fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
            let transport_err = |e: ureq::Error| ApiError::Transport(e.to_string());

            let mut response = match request.method {
                HttpMethod::Get => {
                    let mut builder = self.agent.get(&request.url);
                    for (k, v) in &request.headers {
                        builder = builder.header(k.as_str(), v.as_str());
                    }
                    builder.call()
                }
                HttpMethod::Post => {
                    let mut builder = self.agent.post(&request.url);
                    for (k, v) in &request.headers {
                        builder = builder.header(k.as_str(), v.as_str());
                    }
                    match request.body {
                        Some(body) => builder.send(body.as_bytes()),
                        None => builder.send_empty(),
                    }
                }
            }
            .map_err(transport_err)?;

            let status = response.status().as_u16();
            let headers = response
                .headers()
                .iter()
                .filter_map(|(k, v)| Some((k.as_str().to_string(), v.to_str().ok()?.to_string())))
                .collect();
            let body = response.body_mut().read_to_string().map_err(transport_err)?;

            Ok(HttpResponse {
                status,
                headers,
                body,
            })
        }
    }
}
