//! Login, refresh and logout.

use api_types::auth::{Authorization, Credentials};
use reqwest::Method;

use crate::{Client, dispatch::ApiRequest, error::Result};

impl Client {
    pub async fn auth_login(&self, username: &str, password: &str) -> Result<Authorization> {
        let credentials = Credentials {
            username: username.to_string(),
            password: password.to_string(),
        };
        self.dispatch(ApiRequest::new(Method::POST, "/auth/login").body(credentials))
            .await
    }

    /// Issues a new token for the current one. The stored token is left as
    /// is, see [`refresh_token`](Client::refresh_token) to replace it.
    pub async fn auth_refresh(&self) -> Result<Authorization> {
        self.dispatch(ApiRequest::new(Method::POST, "/auth/refresh").authorized())
            .await
    }

    /// Ends the session on the server. The local token is kept until
    /// [`clear_token`](Client::clear_token) is called.
    pub async fn auth_logout(&self) -> Result<()> {
        self.dispatch_unit(ApiRequest::new(Method::POST, "/auth/logout").authorized())
            .await
    }

    /// Logs in and stores the received token, so that the following
    /// authorized calls use it.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<Authorization> {
        let authorization = self.auth_login(username, password).await?;
        self.set_token(&authorization.token).await;
        tracing::info!(expires_at = %authorization.expires_at, "authenticated as {username}");
        Ok(authorization)
    }

    /// Refreshes the token and stores the new one.
    pub async fn refresh_token(&self) -> Result<Authorization> {
        let authorization = self.auth_refresh().await?;
        self.set_token(&authorization.token).await;
        tracing::info!(expires_at = %authorization.expires_at, "token refreshed");
        Ok(authorization)
    }
}
