use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::credentials::{ConfigError, Credentials};
use crate::errors::ApiError;
use crate::request::RequestSpec;

const GITHUB_API_BASE: &str = "https://api.github.com";
const GITHUB_MEDIA_TYPE: &str = "application/vnd.github.v3+json";

/// A typed API client that keeps at most one request in flight.
///
/// Starting a new [`perform`](SearchClient::perform) call supersedes any
/// pending one: the old request is aborted and its callback is never invoked.
/// Callers serialize `perform` calls per instance; the `&mut self` receiver
/// enforces that.
pub struct SearchClient {
    http: Client,
    base_url: Url,
    in_flight: Option<JoinHandle<()>>,
}

impl SearchClient {
    /// Build a client against the public GitHub API, folding the credentials
    /// into the fixed request headers.
    pub fn new(credentials: Credentials) -> Result<Self, ConfigError> {
        Self::with_base_url(credentials, GITHUB_API_BASE)
    }

    /// Same as [`new`](SearchClient::new) with an explicit base URL. Used by
    /// tests to point the client at a local server.
    pub fn with_base_url(credentials: Credentials, base_url: &str) -> Result<Self, ConfigError> {
        let base_url = Url::parse(base_url).map_err(|_| ConfigError::BaseUrl {
            url: base_url.to_owned(),
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_MEDIA_TYPE));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("token {}", credentials.token)).map_err(|source| {
                ConfigError::Header {
                    header: "authorization",
                    source,
                }
            })?,
        );
        // GitHub rejects requests without a User-Agent; the configured name
        // doubles as one.
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&credentials.name).map_err(|source| ConfigError::Header {
                header: "user-agent",
                source,
            })?,
        );

        let http = Client::builder().default_headers(headers).build()?;

        Ok(SearchClient {
            http,
            base_url,
            in_flight: None,
        })
    }

    /// Issue the request described by `spec`, superseding any pending one,
    /// and decode the 200 body as `T`.
    ///
    /// The callback is invoked exactly once with the outcome, on a runtime
    /// worker, after `perform` returns. If a later `perform` supersedes this
    /// request first, the callback is never invoked. Marshaling the outcome
    /// to a particular thread or task is the caller's job.
    pub fn perform<T, F>(&mut self, spec: RequestSpec, callback: F)
    where
        T: DeserializeOwned + Send + 'static,
        F: FnOnce(Result<T, ApiError>) + Send + 'static,
    {
        if let Some(previous) = self.in_flight.take() {
            debug!("superseding in-flight request");
            previous.abort();
        }

        let url = self.build_url(&spec);
        debug!(%url, "issuing request");
        let request = self.http.get(url);

        self.in_flight = Some(tokio::spawn(async move {
            let outcome = execute::<T>(request).await;
            if let Err(err) = &outcome {
                warn!("request failed: {err}");
            }
            callback(outcome);
        }));
    }

    fn build_url(&self, spec: &RequestSpec) -> Url {
        // Request variants map to fixed, known-good paths; a failure here is
        // a programming error, not a runtime condition.
        let mut url = self
            .base_url
            .join(spec.path_component())
            .expect("request variants map to valid URL paths");
        for (key, value) in spec.query_parameters() {
            url.query_pairs_mut().append_pair(key, &value);
        }
        url
    }
}

impl Drop for SearchClient {
    // A pending callback must not outlive the client.
    fn drop(&mut self) {
        if let Some(task) = self.in_flight.take() {
            task.abort();
        }
    }
}

async fn execute<T: DeserializeOwned>(request: reqwest::RequestBuilder) -> Result<T, ApiError> {
    let response = request.send().await?;
    let status = response.status();
    let body = response.text().await?;

    if status != StatusCode::OK {
        return Err(ApiError::Status { status, body });
    }

    serde_json::from_str(&body).map_err(ApiError::Decode)
}
