//! HTTP transport for the Event Registry JSON API.

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    params::ParameterMap,
    query::{Credentials, RequestDescriptor},
    types::LoginResponse,
    Error,
};

pub const DEFAULT_HOST: &str = "http://eventregistry.org";

/// Thin HTTP client: one GET or POST per call, JSON decoding, no retries.
///
/// The underlying `reqwest::Client` keeps a cookie store, so the session
/// cookie set by [`Client::login`] is sent with every later request.
#[derive(Clone, Debug)]
pub struct Client {
    /// Base URL for the API. Defaults to [`DEFAULT_HOST`].
    base_api_url: String,
    http: reqwest::Client,
}

impl Client {
    /// Creates a new client pointing at the production service.
    pub fn new() -> Result<Self, Error> {
        Self::with_base_url(DEFAULT_HOST)
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed(e.to_string())
            })?;
        Ok(Self {
            base_api_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }

    fn get_url(&self, path: &str, params: Option<&ParameterMap>) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::RequestFailed(e.to_string())
        })?;
        Ok(match params {
            Some(params) => params.add_to_url(&url),
            None => url,
        })
    }

    /// GET `path` with `params` in the query string.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &ParameterMap,
    ) -> Result<T, Error> {
        let url = self.get_url(path, Some(params))?;
        tracing::debug!("GET {}", url);
        let resp = self
            .http
            .get(url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get resource: {}", e);
                Error::RequestFailed(e.to_string())
            })?;
        read_json(resp).await
    }

    /// POST `path` with `params` form-encoded in the body. For requests too
    /// large for a query string.
    pub async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &ParameterMap,
    ) -> Result<T, Error> {
        let url = self.get_url(path, None)?;
        tracing::debug!("POST {}", url);
        let resp = self
            .http
            .post(url)
            .header("accept", "application/json")
            .form(&params.to_query_pairs())
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to post resource: {}", e);
                Error::RequestFailed(e.to_string())
            })?;
        read_json(resp).await
    }

    /// Sends an encoded query as a GET request.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        request: &RequestDescriptor,
    ) -> Result<T, Error> {
        self.get_json(request.path, &request.params).await
    }

    /// Posts the credentials to `/login`. The session cookie from the
    /// response is kept for later calls; whether a returned `error` is fatal
    /// is left to the caller.
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, Error> {
        let mut params = ParameterMap::new();
        params.insert("email", credentials.username.as_str());
        params.insert("pass", credentials.password.as_str());
        self.post_json("/login", &params).await
    }
}

async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
    let status = resp.status();
    let body = resp.text().await.map_err(|e| {
        tracing::error!("Failed to read response body: {}", e);
        Error::RequestFailed(e.to_string())
    })?;

    if !status.is_success() {
        let snippet = truncate_body(&body);
        tracing::error!("Request failed with status {}: {}", status, snippet);
        return Err(Error::HttpStatus {
            status: status.as_u16(),
            body: snippet,
        });
    }

    serde_json::from_str::<T>(&body).map_err(|e| {
        let snippet = truncate_body(&body);
        tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
        Error::Parse(e.to_string())
    })
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
