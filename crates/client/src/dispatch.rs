//! Request dispatching shared by every endpoint.
//!
//! An endpoint describes its call with an [`ApiRequest`] and hands it to
//! [`Client::dispatch`], which builds the HTTP request, sends it and turns
//! the answer into either the expected type or a [`ClientError`].

use api_types::error::ErrorBody;
use reqwest::{
    Method, StatusCode,
    header::{AUTHORIZATION, CONTENT_TYPE},
};
use serde::{Serialize, de::DeserializeOwned};

use crate::{
    client::Client,
    error::{ApiError, ClientError, Result},
};

/// Parameters of a call that sends none. Serializes to `{}` as a body.
#[derive(Debug, Default, Serialize)]
pub(crate) struct NoParams {}

/// One call to the API: verb, path, optional query and body, and whether the
/// bearer token must be attached.
///
/// `segment` is a caller supplied identifier appended to `path` as one
/// percent-encoded path segment.
#[derive(Debug)]
pub(crate) struct ApiRequest<Q = NoParams, B = NoParams> {
    method: Method,
    path: String,
    segment: Option<String>,
    query: Option<Q>,
    body: Option<B>,
    authorize: bool,
}

impl ApiRequest {
    pub(crate) fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            segment: None,
            query: None,
            body: None,
            authorize: false,
        }
    }
}

impl<Q, B> ApiRequest<Q, B> {
    pub(crate) fn authorized(mut self) -> Self {
        self.authorize = true;
        self
    }

    pub(crate) fn segment(mut self, segment: &str) -> Self {
        self.segment = Some(segment.to_string());
        self
    }

    pub(crate) fn query<T>(self, query: T) -> ApiRequest<T, B> {
        ApiRequest {
            method: self.method,
            path: self.path,
            segment: self.segment,
            query: Some(query),
            body: self.body,
            authorize: self.authorize,
        }
    }

    pub(crate) fn body<T>(self, body: T) -> ApiRequest<Q, T> {
        ApiRequest {
            method: self.method,
            path: self.path,
            segment: self.segment,
            query: self.query,
            body: Some(body),
            authorize: self.authorize,
        }
    }
}

/// Decoded answer of the server, before it is turned into a `Result`.
#[derive(Debug)]
enum Outcome<T> {
    Success(T),
    Failure(ErrorBody),
}

impl Client {
    /// Builds the HTTP request without sending it.
    ///
    /// Fails with [`ClientError::MissingToken`] when the call is authorized
    /// and no token is set.
    pub(crate) async fn build_request<Q, B>(
        &self,
        request: &ApiRequest<Q, B>,
    ) -> Result<reqwest::Request>
    where
        Q: Serialize,
        B: Serialize,
    {
        let bearer = if request.authorize {
            Some(self.bearer().await.ok_or(ClientError::MissingToken)?)
        } else {
            None
        };

        let url = format!("{}{}", self.base_url, request.path);
        let mut builder = self
            .http
            .request(request.method.clone(), url)
            .header(CONTENT_TYPE, "application/json");

        if let Some(query) = &request.query {
            builder = builder.query(query);
        }

        builder = match &request.body {
            Some(body) => builder.json(body),
            None => builder.json(&NoParams::default()),
        };

        if let Some(bearer) = bearer {
            builder = builder.header(AUTHORIZATION, bearer);
        }

        let mut http_request = builder.build()?;
        if let Some(segment) = &request.segment {
            if let Ok(mut segments) = http_request.url_mut().path_segments_mut() {
                segments.push(segment);
            }
        }

        Ok(http_request)
    }

    /// Sends the request and decodes a 200 body as `T`.
    pub(crate) async fn dispatch<T, Q, B>(&self, request: ApiRequest<Q, B>) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize,
        B: Serialize,
    {
        let (status, body) = self.execute(&request).await?;
        interpret(status, &body, |body| serde_json::from_slice(body))
    }

    /// Sends the request and ignores a 200 body, for calls whose success
    /// carries no information.
    pub(crate) async fn dispatch_unit<Q, B>(&self, request: ApiRequest<Q, B>) -> Result<()>
    where
        Q: Serialize,
        B: Serialize,
    {
        let (status, body) = self.execute(&request).await?;
        interpret(status, &body, |_| Ok(()))
    }

    async fn execute<Q, B>(&self, request: &ApiRequest<Q, B>) -> Result<(StatusCode, Vec<u8>)>
    where
        Q: Serialize,
        B: Serialize,
    {
        let http_request = self.build_request(request).await?;
        tracing::debug!(
            method = %request.method,
            path = %request.path,
            authorize = request.authorize,
            "dispatching request"
        );

        let response = self.http.execute(http_request).await?;
        let status = response.status();
        let body = response.bytes().await?;
        tracing::debug!(path = %request.path, status = %status, "received response");

        Ok((status, body.to_vec()))
    }
}

/// Turns a raw response into the expected value or an error.
///
/// 200 is the only success status of the API, its body goes through
/// `decode`. Any other status must carry an [`ErrorBody`].
pub(crate) fn interpret<T, F>(status: StatusCode, body: &[u8], decode: F) -> Result<T>
where
    F: FnOnce(&[u8]) -> serde_json::Result<T>,
{
    match classify(status, body, decode)? {
        Outcome::Success(value) => Ok(value),
        Outcome::Failure(body) => {
            let err = ApiError::new(status.as_u16(), body);
            tracing::warn!(status = err.http_status_code, "groshi API error: {err}");
            Err(err.into())
        }
    }
}

fn classify<T, F>(status: StatusCode, body: &[u8], decode: F) -> serde_json::Result<Outcome<T>>
where
    F: FnOnce(&[u8]) -> serde_json::Result<T>,
{
    if status == StatusCode::OK {
        decode(body).map(Outcome::Success)
    } else {
        serde_json::from_slice(body).map(Outcome::Failure)
    }
}
