//! The `EventRegistry` session: one HTTP client with its cookie store, the
//! account credentials, a rate limiter and a retry policy.

use std::sync::Mutex;

use eventregistry_api::types::Suggestion;
use eventregistry_api::{
    encode_query, Client, ContributesParameters, Credentials, ParameterMap, Query,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio_util::sync::CancellationToken;

use crate::error::EventRegistryError;
use crate::rate_limiter::RateLimiter;
use crate::recent::{RecentArticles, RecentEvents, OVERVIEW_PATH};
use crate::retry::RetryPolicy;
use crate::settings::Settings;
use crate::suggest::{
    CategorySuggest, ConceptClassSuggest, ConceptSuggest, LocationSuggest, SourceSuggest,
};
use crate::text::sanitize_json;

/// A session with the Event Registry service.
///
/// Every call waits on the rate limiter, is retried according to the
/// session's [`RetryPolicy`], and has its string values cleaned of control
/// characters before decoding. After a successful [`EventRegistry::login`]
/// the credentials are appended to every request.
pub struct EventRegistry {
    inner: Client,
    credentials: Option<Credentials>,
    limiter: RateLimiter,
    retry: RetryPolicy,
    cancel: CancellationToken,
    /// Message of the last failed call, cleared when a new call starts.
    last_error: Mutex<Option<String>>,
}

impl EventRegistry {
    /// Builds a session from `settings` without logging in.
    pub fn new(settings: &Settings) -> Result<Self, EventRegistryError> {
        Ok(Self {
            inner: Client::with_base_url(&settings.host)?,
            credentials: None,
            limiter: RateLimiter::new(settings.min_delay),
            retry: settings.retry,
            cancel: CancellationToken::new(),
            last_error: Mutex::new(None),
        })
    }

    /// Builds a session and, when the settings carry credentials, logs in.
    /// A refused login is logged but does not fail the session.
    pub async fn connect(settings: &Settings) -> Result<Self, EventRegistryError> {
        let mut session = Self::new(settings)?;
        if let Some(creds) = settings.credentials() {
            session
                .login(&creds.username, &creds.password, false)
                .await?;
        }
        Ok(session)
    }

    /// Replaces the session's cancellation token.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    /// Cancelling this token aborts any pending retry wait.
    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancel
    }

    pub fn host(&self) -> &str {
        self.inner.base_url()
    }

    pub fn is_logged_in(&self) -> bool {
        self.credentials.is_some()
    }

    /// Message of the most recent failure, if the last call failed.
    pub fn last_error(&self) -> Option<String> {
        self.last_error
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    fn set_last_error(&self, message: Option<String>) {
        *self.last_error.lock().unwrap_or_else(|e| e.into_inner()) = message;
    }

    /// Logs in with an account. The credentials are kept for later requests
    /// only when the service accepts them. A refusal is recorded as the last
    /// error; with `strict` it is returned as
    /// [`eventregistry_api::Error::Authentication`].
    pub async fn login(
        &mut self,
        username: &str,
        password: &str,
        strict: bool,
    ) -> Result<(), EventRegistryError> {
        self.set_last_error(None);
        let creds = Credentials::new(username, password);
        self.limiter.acquire().await;
        let resp = match self.inner.login(&creds).await {
            Ok(resp) => resp,
            Err(e) => {
                self.set_last_error(Some(e.to_string()));
                return Err(e.into());
            }
        };
        if let Some(message) = resp.error {
            tracing::error!("Login as {} failed: {}", username, message);
            self.set_last_error(Some(message.clone()));
            if strict {
                return Err(eventregistry_api::Error::Authentication(message).into());
            }
        } else {
            tracing::debug!("Logged in as {}", username);
            self.credentials = Some(creds);
        }
        Ok(())
    }

    /// Encodes `query` with the session credentials, sends it and decodes
    /// the response.
    pub async fn exec_query<T: DeserializeOwned>(
        &self,
        query: &impl Query,
    ) -> Result<T, EventRegistryError> {
        self.set_last_error(None);
        let request = match encode_query(query, self.credentials.as_ref()) {
            Ok(request) => request,
            Err(e) => {
                self.set_last_error(Some(e.to_string()));
                return Err(e.into());
            }
        };
        let value = self
            .send(query.action(), request.path, &request.params, false)
            .await?;
        self.decode(value)
    }

    /// GET `path` with `params` plus the session credentials.
    pub async fn json_request(
        &self,
        path: &str,
        params: &ParameterMap,
    ) -> Result<Value, EventRegistryError> {
        self.set_last_error(None);
        let params = self.with_credentials(params);
        self.send(path, path, &params, false).await
    }

    /// Like [`EventRegistry::json_request`] but with the parameters in a
    /// form-encoded POST body.
    pub async fn json_post_request(
        &self,
        path: &str,
        params: &ParameterMap,
    ) -> Result<Value, EventRegistryError> {
        self.set_last_error(None);
        let params = self.with_credentials(params);
        self.send(path, path, &params, true).await
    }

    fn with_credentials(&self, params: &ParameterMap) -> ParameterMap {
        let mut params = params.clone();
        if let Some(creds) = &self.credentials {
            creds.append_to(&mut params);
        }
        params
    }

    async fn send(
        &self,
        label: &str,
        path: &str,
        params: &ParameterMap,
        post: bool,
    ) -> Result<Value, EventRegistryError> {
        let result = self
            .retry
            .run(&self.cancel, label, || async {
                self.limiter.acquire().await;
                if post {
                    self.inner.post_json::<Value>(path, params).await
                } else {
                    self.inner.get_json::<Value>(path, params).await
                }
            })
            .await;
        match result {
            Ok(mut value) => {
                sanitize_json(&mut value);
                Ok(value)
            }
            Err(e) => {
                self.set_last_error(Some(e.to_string()));
                Err(e)
            }
        }
    }

    fn decode<T: DeserializeOwned>(&self, value: Value) -> Result<T, EventRegistryError> {
        serde_json::from_value(value).map_err(|e| {
            tracing::error!("Failed to decode response: {}", e);
            self.set_last_error(Some(e.to_string()));
            EventRegistryError::Serialization(e)
        })
    }

    async fn suggest(
        &self,
        path: &str,
        params: &impl ContributesParameters,
    ) -> Result<Vec<Suggestion>, EventRegistryError> {
        let value = self.json_request(path, &params.to_parameter_map()).await?;
        self.decode(value)
    }

    /// Concepts whose label starts with `prefix`.
    pub async fn suggest_concepts(
        &self,
        params: &ConceptSuggest,
    ) -> Result<Vec<Suggestion>, EventRegistryError> {
        self.suggest(ConceptSuggest::PATH, params).await
    }

    pub async fn suggest_news_sources(
        &self,
        params: &SourceSuggest,
    ) -> Result<Vec<Suggestion>, EventRegistryError> {
        self.suggest(SourceSuggest::PATH, params).await
    }

    pub async fn suggest_locations(
        &self,
        params: &LocationSuggest,
    ) -> Result<Vec<Suggestion>, EventRegistryError> {
        self.suggest(LocationSuggest::PATH, params).await
    }

    pub async fn suggest_categories(
        &self,
        params: &CategorySuggest,
    ) -> Result<Vec<Suggestion>, EventRegistryError> {
        self.suggest(CategorySuggest::PATH, params).await
    }

    pub async fn suggest_concept_classes(
        &self,
        params: &ConceptClassSuggest,
    ) -> Result<Vec<Suggestion>, EventRegistryError> {
        self.suggest(ConceptClassSuggest::PATH, params).await
    }

    /// URI of the best matching concept, searching the given concept
    /// `sources` (e.g. `["concepts"]`, `["person", "org"]`).
    pub async fn get_concept_uri(
        &self,
        label: &str,
        lang: &str,
        sources: &[&str],
    ) -> Result<Option<String>, EventRegistryError> {
        let mut params = ConceptSuggest::new(label);
        params.lang = lang.to_string();
        params.sources = sources.iter().map(|s| s.to_string()).collect();
        Ok(first_uri(self.suggest_concepts(&params).await?))
    }

    /// URI of the best matching location. Labels are resolved with
    /// `fullLocInfo` so that city names include their country.
    pub async fn get_location_uri(
        &self,
        label: &str,
        lang: &str,
    ) -> Result<Option<String>, EventRegistryError> {
        let mut params = ConceptSuggest::new(label);
        params.lang = lang.to_string();
        params.sources = vec!["loc".to_string()];
        params.full_loc_info = true;
        Ok(first_uri(self.suggest_concepts(&params).await?))
    }

    pub async fn get_category_uri(
        &self,
        label: &str,
    ) -> Result<Option<String>, EventRegistryError> {
        Ok(first_uri(
            self.suggest_categories(&CategorySuggest::new(label)).await?,
        ))
    }

    pub async fn get_news_source_uri(
        &self,
        label: &str,
    ) -> Result<Option<String>, EventRegistryError> {
        Ok(first_uri(
            self.suggest_news_sources(&SourceSuggest::new(label)).await?,
        ))
    }

    pub async fn get_concept_class_uri(
        &self,
        label: &str,
        lang: &str,
    ) -> Result<Option<String>, EventRegistryError> {
        let mut params = ConceptClassSuggest::new(label);
        params.lang = lang.to_string();
        Ok(first_uri(self.suggest_concept_classes(&params).await?))
    }

    /// Events added or updated since `params.last_activity_id`.
    pub async fn get_recent_events(
        &self,
        params: &RecentEvents,
    ) -> Result<Value, EventRegistryError> {
        self.json_request(OVERVIEW_PATH, &params.to_parameter_map())
            .await
    }

    /// Articles added since `params.last_activity_id`.
    pub async fn get_recent_articles(
        &self,
        params: &RecentArticles,
    ) -> Result<Value, EventRegistryError> {
        self.json_request(OVERVIEW_PATH, &params.to_parameter_map())
            .await
    }

    /// Counts of articles and events in the service's database.
    pub async fn get_recent_stats(&self) -> Result<Value, EventRegistryError> {
        let mut params = ParameterMap::new();
        params.insert("action", "getRecentStats");
        self.json_request(OVERVIEW_PATH, &params).await
    }
}

/// URI of the best match. A best match without a URI yields `None`; later
/// matches are never consulted.
fn first_uri(suggestions: Vec<Suggestion>) -> Option<String> {
    suggestions.into_iter().next().and_then(|s| s.uri)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn new_session_is_anonymous() {
        let settings = Settings {
            host: "http://localhost:1234/".to_string(),
            ..Default::default()
        };
        let session = EventRegistry::new(&settings).unwrap();
        assert_eq!(session.host(), "http://localhost:1234");
        assert!(!session.is_logged_in());
        assert!(session.last_error().is_none());
    }

    #[test]
    fn credentials_are_appended_to_raw_params() {
        let mut session = EventRegistry::new(&Settings::default()).unwrap();
        session.credentials = Some(Credentials::new("me@example.com", "pw"));
        let mut params = ParameterMap::new();
        params.insert("action", "getRecentStats");
        let params = session.with_credentials(&params);
        assert_eq!(
            params.keys().collect::<Vec<_>>(),
            vec!["action", "erUsername", "erPassword"]
        );
    }

    #[test]
    fn first_uri_uses_only_the_best_match() {
        let without_uri: Vec<Suggestion> = serde_json::from_str(
            r#"[{"label": {"eng": "x"}}, {"uri": "http://en.wikipedia.org/wiki/Ljubljana"}]"#,
        )
        .unwrap();
        assert_eq!(first_uri(without_uri), None);

        let with_uri: Vec<Suggestion> = serde_json::from_str(
            r#"[{"uri": "http://en.wikipedia.org/wiki/Ljubljana"}, {"uri": "http://en.wikipedia.org/wiki/Maribor"}]"#,
        )
        .unwrap();
        assert_eq!(
            first_uri(with_uri).as_deref(),
            Some("http://en.wikipedia.org/wiki/Ljubljana")
        );
        assert_eq!(first_uri(Vec::new()), None);
    }

    #[tokio::test]
    async fn cancelled_session_stops_retrying() {
        let settings = Settings {
            // Nothing listens on port 9 on the test host.
            host: "http://127.0.0.1:9".to_string(),
            min_delay: Duration::ZERO,
            retry: RetryPolicy::default(),
            ..Default::default()
        };
        let session = EventRegistry::new(&settings).unwrap();
        session.cancellation_token().cancel();
        let err = session.get_recent_stats().await.unwrap_err();
        assert!(matches!(err, EventRegistryError::Cancelled));
        assert!(session.last_error().is_some());
    }
}
