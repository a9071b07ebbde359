//! HTTP client for the idea store.
//!
//! Works natively (tokio) and in the browser (reqwest's fetch backend). All
//! failures are classified into [`StoreError`] and logged with their kind
//! before being returned; callers decide whether to show them.

use ideaboard_common::{CreateRequest, Idea, IdeaId, NewIdea, StoreError};
use reqwest::header::CONTENT_TYPE;
use reqwest::{RequestBuilder, Response};
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::store::IdeaStore;

const JSON: &str = "application/json";

/// Typed access to the store's HTTP+JSON endpoints.
///
/// Cloning is cheap and shares the underlying connection pool. No timeout
/// is configured and nothing is retried.
#[derive(Clone, Debug)]
pub struct IdeaStoreClient {
    http: reqwest::Client,
    base_url: Option<String>,
}

impl IdeaStoreClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url().map(String::from),
        }
    }

    /// Create a client from `IDEA_API_URL` in the process environment.
    pub fn from_env() -> Self {
        Self::new(ClientConfig::from_env())
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    fn url(&self, path: &str) -> Result<String, StoreError> {
        self.base_url
            .as_ref()
            .map(|base| format!("{base}{path}"))
            .ok_or(StoreError::Configuration)
    }

    async fn fetch_ideas(&self) -> Result<Vec<Idea>, StoreError> {
        let url = self.url("/ideas")?;
        debug!("Fetching from: {url}");
        let resp = self.http.get(&url).send().await.map_err(transport)?;
        let resp = require_success(resp).await?;

        let is_json = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.contains(JSON));
        let text = resp.text().await.map_err(transport)?;
        if !is_json {
            return Err(StoreError::Format { detail: text });
        }

        serde_json::from_str(&text).map_err(|e| StoreError::Format {
            detail: format!("Parse ideas: {e}"),
        })
    }

    async fn post(
        &self,
        path: &str,
        build: impl FnOnce(RequestBuilder) -> RequestBuilder,
    ) -> Result<(), StoreError> {
        let url = self.url(path)?;
        debug!("POST {url}");
        let request = build(self.http.post(&url).header(CONTENT_TYPE, JSON));
        let resp = request.send().await.map_err(transport)?;
        require_success(resp).await?;
        Ok(())
    }
}

impl IdeaStore for IdeaStoreClient {
    async fn list_ideas(&self) -> Result<Vec<Idea>, StoreError> {
        let result = self.fetch_ideas().await;
        match &result {
            Ok(ideas) => debug!("Fetched {} ideas", ideas.len()),
            Err(e) => log_failure("list ideas", e),
        }
        result
    }

    async fn create_idea(&self, idea: &NewIdea) -> Result<(), StoreError> {
        self.post("/post/idea", |req| req.json(idea))
            .await
            .inspect_err(|e| log_failure("create idea", e))
    }

    async fn increment_like(&self, id: IdeaId) -> Result<(), StoreError> {
        self.post(&format!("/ideas/{id}/like"), |req| req)
            .await
            .inspect_err(|e| log_failure("like", e))
    }

    async fn request_create(&self, request: &CreateRequest) -> Result<(), StoreError> {
        self.post("/post/create", |req| req.json(request))
            .await
            .inspect_err(|e| log_failure("confirm create", e))
    }
}

/// Turn a non-2xx response into [`StoreError::Http`], keeping the body text.
async fn require_success(resp: Response) -> Result<Response, StoreError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(StoreError::Http {
        status: status.as_u16(),
        body,
    })
}

fn transport(err: reqwest::Error) -> StoreError {
    StoreError::Transport(err.to_string())
}

fn log_failure(op: &'static str, err: &StoreError) {
    match err {
        StoreError::Http { status, body } => {
            warn!(op, kind = err.kind(), status, "Response error: {body}")
        }
        StoreError::Format { detail } => {
            warn!(op, kind = err.kind(), "Non-JSON response: {detail}")
        }
        StoreError::Transport(detail) => {
            warn!(op, kind = err.kind(), "Request failed: {detail}")
        }
        StoreError::Configuration => warn!(op, kind = err.kind(), "No store URL configured"),
    }
}
