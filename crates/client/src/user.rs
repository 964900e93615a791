use api_types::{
    auth::Credentials,
    user::{User, UserUpdate},
};
use reqwest::Method;

use crate::{Client, dispatch::ApiRequest, error::Result};

impl Client {
    /// Creates an account. Does not need a token.
    pub async fn user_create(&self, username: &str, password: &str) -> Result<User> {
        let credentials = Credentials {
            username: username.to_string(),
            password: password.to_string(),
        };
        self.dispatch(ApiRequest::new(Method::POST, "/user").body(credentials))
            .await
    }

    pub async fn user_read(&self) -> Result<User> {
        self.dispatch(ApiRequest::new(Method::GET, "/user").authorized())
            .await
    }

    /// Changes username and/or password, unset fields are not sent.
    pub async fn user_update(&self, update: UserUpdate) -> Result<User> {
        self.dispatch(ApiRequest::new(Method::PUT, "/user").body(update).authorized())
            .await
    }

    pub async fn user_delete(&self) -> Result<User> {
        self.dispatch(ApiRequest::new(Method::DELETE, "/user").authorized())
            .await
    }
}
