//! One-call-per-operation client: validate, build, execute, parse.

use crate::client::AnswerApi;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::Transport;
use crate::types::{Answer, UpdateResult, DEFAULT_SIMILARITY};

/// Client for the answers API over a pluggable [`Transport`].
///
/// Input validation happens inside `AnswerApi::build_*`, so a rejected call
/// never reaches the transport.
#[derive(Debug, Clone)]
pub struct AnswerClient<T> {
    api: AnswerApi,
    transport: T,
}

#[cfg(feature = "ureq")]
impl AnswerClient<crate::transport::UreqTransport> {
    /// Client over a default blocking `ureq` transport.
    pub fn with_ureq(config: ClientConfig) -> Self {
        Self::new(config, crate::transport::UreqTransport::new())
    }
}

impl<T: Transport> AnswerClient<T> {
    pub fn new(config: ClientConfig, transport: T) -> Self {
        Self {
            api: AnswerApi::new(config),
            transport,
        }
    }

    pub fn api(&self) -> &AnswerApi {
        &self.api
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn set_api_key(&mut self, key: impl Into<String>) {
        self.api.set_api_key(key);
    }

    /// Search with the default similarity of 60.
    pub fn search(&self, query: &str) -> Result<Vec<Answer>, ApiError> {
        self.search_with_similarity(query, DEFAULT_SIMILARITY)
    }

    pub fn search_with_similarity(
        &self,
        query: &str,
        similarity: i32,
    ) -> Result<Vec<Answer>, ApiError> {
        let request = self.api.build_search(query, similarity)?;
        let response = self.send(request)?;
        self.api.parse_search(response)
    }

    pub fn retrieve(&self, id: i64) -> Result<Answer, ApiError> {
        let request = self.api.build_retrieve(id)?;
        let response = self.send(request)?;
        self.api.parse_retrieve(response)
    }

    pub fn update(&self, id: i64, content: &str) -> Result<UpdateResult, ApiError> {
        let request = self.api.build_update(id, content)?;
        let response = self.send(request)?;
        self.api.parse_update(response)
    }

    fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let method = request.method.as_str();
        let url = request.url.clone();
        tracing::debug!(method, url = %url, "sending answers request");
        let response = self.transport.execute(request).inspect_err(|err| {
            tracing::debug!(method, url = %url, error = %err, "answers request failed");
        })?;
        tracing::debug!(method, url = %url, status = response.status, "answers response received");
        Ok(response)
    }
}
