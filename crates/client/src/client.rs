use std::{fmt, sync::Arc, time::Duration};

use tokio::sync::RwLock;

use crate::error::Result;

/// Bound applied to every round trip unless the builder says otherwise.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Client of the groshi API.
///
/// Cloning is cheap and clones share the same token, so a token stored by
/// [`authenticate`] on one clone is used by all of them.
///
/// [`authenticate`]: Client::authenticate
#[derive(Clone)]
pub struct Client {
    pub(crate) base_url: String,
    pub(crate) http: reqwest::Client,
    token: Arc<RwLock<String>>,
}

impl Client {
    /// Creates a client with the default timeout. Pass an empty `token` to
    /// start unauthenticated.
    pub fn new(base_url: &str, token: &str) -> Result<Self> {
        Self::builder().base_url(base_url).token(token).build()
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Base URL without trailing slashes.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Current token, empty when unauthenticated.
    pub async fn token(&self) -> String {
        self.token.read().await.clone()
    }

    pub async fn set_token(&self, token: &str) {
        *self.token.write().await = token.to_string();
    }

    /// Forgets the local token. The server side session is left untouched,
    /// call [`auth_logout`] first to end it.
    ///
    /// [`auth_logout`]: Client::auth_logout
    pub async fn clear_token(&self) {
        self.token.write().await.clear();
    }

    pub async fn is_authenticated(&self) -> bool {
        !self.token.read().await.is_empty()
    }

    /// Returns the `Authorization` header value, or `None` without a token.
    pub(crate) async fn bearer(&self) -> Option<String> {
        let token = self.token.read().await;
        (!token.is_empty()).then(|| format!("Bearer {token}"))
    }
}

pub struct ClientBuilder {
    base_url: String,
    token: String,
    timeout: Duration,
}

const REDACTED: &str = "<redacted>";

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .field("http", &self.http)
            .field("token", &REDACTED)
            .finish()
    }
}

impl fmt::Debug for ClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("base_url", &self.base_url)
            .field("token", &REDACTED)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            token: String::new(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientBuilder {
    pub fn base_url(mut self, base_url: &str) -> ClientBuilder {
        self.base_url = base_url.to_string();
        self
    }

    pub fn token(mut self, token: &str) -> ClientBuilder {
        self.token = token.to_string();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> ClientBuilder {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<Client> {
        let http = reqwest::Client::builder().timeout(self.timeout).build()?;
        tracing::debug!(base_url = %self.base_url, timeout = ?self.timeout, "building groshi client");

        Ok(Client {
            base_url: self.base_url.trim_end_matches('/').to_string(),
            http,
            token: Arc::new(RwLock::new(self.token)),
        })
    }
}
