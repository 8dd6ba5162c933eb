//! Stateless HTTP request builder and response parser for the answers API.
//!
//! # Design
//! `AnswerApi` holds only its `ClientConfig` and carries no mutable state
//! between calls. Each operation is split into a `build_*` method that
//! validates inputs and produces an `HttpRequest`, and a `parse_*` method that
//! consumes an `HttpResponse`. Whoever executes the round trip in between
//! (a `Transport`, an async host, a C caller) never sees the credential
//! logic or the status table.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Answer, AnswerId, SearchResult, UpdateResult};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Form field carrying the new content on update.
pub const UPDATE_CONTENT_FIELD: &str = "answer[content]";

/// Synchronous, stateless request builder / response parser.
#[derive(Debug, Clone, Default)]
pub struct AnswerApi {
    config: ClientConfig,
}

impl AnswerApi {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Replace the API key. Requires exclusive access, so no request built
    /// from this value can observe a half-changed credential.
    pub fn set_api_key(&mut self, key: impl Into<String>) {
        self.config.set_api_key(key);
    }

    /// `GET /v1/answers/search?query=..&similarity=..`
    pub fn build_search(&self, query: &str, similarity: i32) -> Result<HttpRequest, ApiError> {
        let auth = self.authorization()?;
        if query.is_empty() {
            return Err(ApiError::EmptyQuery);
        }
        if !(1..=100).contains(&similarity) {
            return Err(ApiError::InvalidSimilarity);
        }
        let url = format!(
            "{}/search?{}",
            self.config.answers_url(),
            form_encode(&[("query", query), ("similarity", &similarity.to_string())])
        );
        Ok(HttpRequest {
            method: HttpMethod::Get,
            url,
            headers: vec![auth, content_type_form()],
            body: None,
        })
    }

    /// `GET /v1/answers/{id}`
    pub fn build_retrieve(&self, id: i64) -> Result<HttpRequest, ApiError> {
        let auth = self.authorization()?;
        let id = AnswerId::new(id)?;
        Ok(HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}/{}", self.config.answers_url(), id.get()),
            headers: vec![auth],
            body: None,
        })
    }

    /// `POST /v1/answers/{id}` with `answer[content]=<content>`.
    pub fn build_update(&self, id: i64, content: &str) -> Result<HttpRequest, ApiError> {
        let auth = self.authorization()?;
        let id = AnswerId::new(id)?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: format!("{}/{}", self.config.answers_url(), id.get()),
            headers: vec![auth, content_type_form()],
            body: Some(form_encode(&[(UPDATE_CONTENT_FIELD, content)])),
        })
    }

    /// Answers in service order, each with its content decoded when possible.
    pub fn parse_search(&self, response: HttpResponse) -> Result<Vec<Answer>, ApiError> {
        check_status(&response)?;
        let result: SearchResult = from_body(&response.body)?;
        let mut answers = result.data;
        for answer in &mut answers {
            answer.decode_content();
        }
        Ok(answers)
    }

    pub fn parse_retrieve(&self, response: HttpResponse) -> Result<Answer, ApiError> {
        check_status(&response)?;
        let mut answer: Answer = from_body(&response.body)?;
        answer.decode_content();
        Ok(answer)
    }

    pub fn parse_update(&self, response: HttpResponse) -> Result<UpdateResult, ApiError> {
        check_status(&response)?;
        from_body(&response.body)
    }

    /// Basic auth with the key as username and an empty password.
    fn authorization(&self) -> Result<(String, String), ApiError> {
        let key = self.config.api_key().ok_or(ApiError::MissingCredential)?;
        let token = STANDARD.encode(format!("{}:", key.expose()));
        Ok(("authorization".to_string(), format!("Basic {token}")))
    }
}

fn content_type_form() -> (String, String) {
    ("content-type".to_string(), FORM_CONTENT_TYPE.to_string())
}

/// Percent-encode `pairs` as `k=v&k=v`.
fn form_encode(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

fn from_body<T: serde::de::DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

/// Anything but 200 short-circuits with the mapped error.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.status == 200 {
        return Ok(());
    }
    let err = ApiError::from_status(response.status);
    tracing::debug!(status = response.status, error = %err, "answers API returned an error status");
    Err(err)
}
