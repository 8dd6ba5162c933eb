//! Client configuration: where the answers API lives and which key to use.

use std::fmt;

/// Production host of the answers API.
pub const DEFAULT_BASE_URL: &str = "https://api.grepper.com";

/// Path of the answers resource, relative to the base URL.
pub const ANSWERS_PATH: &str = "/v1/answers";

/// The API key sent as the basic-auth username.
///
/// `Debug` never prints the key itself.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Returns `None` for an empty key, which the service would reject anyway.
    pub fn new(key: impl Into<String>) -> Option<Self> {
        let key = key.into();
        if key.is_empty() {
            None
        } else {
            Some(Self(key))
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// Configuration handed to `AnswerApi` at construction.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: String,
    api_key: Option<ApiKey>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the client at another host, e.g. a mock server. Trailing
    /// slashes are dropped.
    #[must_use]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Set the API key. An empty key leaves the client without a credential.
    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = ApiKey::new(key);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_key(&self) -> Option<&ApiKey> {
        self.api_key.as_ref()
    }

    pub(crate) fn set_api_key(&mut self, key: impl Into<String>) {
        self.api_key = ApiKey::new(key);
    }

    /// `{base_url}/v1/answers`
    pub fn answers_url(&self) -> String {
        format!("{}{ANSWERS_PATH}", self.base_url)
    }
}
