use super::DashboardService;
use crate::config::DashConfig;
use crate::error::{DashError, Result};
use crate::model::DashboardDraft;
use crate::response::{Response, ResponseStatus};
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;

const API_PREFIX: &str = "api/v1";
const MAX_ERROR_BODY: usize = 200;

pub struct HttpService {
    client: Client,
    base_url: String,
    api_key: String,
    app_key: String,
}

impl HttpService {
    pub fn new(config: &DashConfig) -> Result<Self> {
        let (api_key, app_key) = config.require_credentials()?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("dashctl/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| DashError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.api_host.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            app_key: app_key.to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}/{}", self.base_url, API_PREFIX, path)
    }

    /// URL of one dashboard. The id becomes exactly one path segment.
    fn dash_url(&self, id: &str) -> Result<String> {
        if id.is_empty() || id == "." || id == ".." {
            return Err(DashError::MalformedData(format!(
                "invalid dashboard id: {:?}",
                id
            )));
        }
        Ok(self.url(&format!("dash/{}", urlencoding::encode(id))))
    }

    fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = request
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("application_key", self.app_key.as_str()),
            ])
            .header("Accept", "application/json")
            .send()
            .map_err(|e| DashError::Transport(e.without_url().to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .map_err(|e| DashError::Transport(e.without_url().to_string()))?;
        tracing::debug!(%status, bytes = text.len(), "response received");

        interpret(status, &text)
    }
}

impl DashboardService for HttpService {
    fn get(&self, id: &str) -> Result<Response> {
        tracing::debug!(id, "GET dash");
        self.send(self.client.get(self.dash_url(id)?))
    }

    fn get_all(&self) -> Result<Response> {
        tracing::debug!("GET dash list");
        self.send(self.client.get(self.url("dash")))
    }

    fn create(&mut self, draft: &DashboardDraft) -> Result<Response> {
        tracing::debug!(title = %draft.title, "POST dash");
        self.send(self.client.post(self.url("dash")).json(draft))
    }

    fn update(&mut self, id: &str, draft: &DashboardDraft) -> Result<Response> {
        tracing::debug!(id, title = %draft.title, "PUT dash");
        self.send(self.client.put(self.dash_url(id)?).json(draft))
    }

    fn delete(&mut self, id: &str) -> Result<Response> {
        tracing::debug!(id, "DELETE dash");
        self.send(self.client.delete(self.dash_url(id)?))
    }
}

/// Turns a status line and body into a classified response.
///
/// JSON bodies are classified whatever the status; a failed status without an
/// `errors` field still counts as an error. Anything that is not JSON on a
/// failed status is a transport problem.
fn interpret(status: StatusCode, text: &str) -> Result<Response> {
    if text.trim().is_empty() {
        if status.is_success() {
            return Ok(Response::empty());
        }
        return Err(DashError::Transport(format!("HTTP {}", status)));
    }

    match serde_json::from_str::<Value>(text) {
        Ok(body) => {
            let mut response = Response::from_body(body);
            if !status.is_success() && !matches!(response.status, ResponseStatus::Errors { .. }) {
                response.status = ResponseStatus::Errors {
                    errors: vec![format!("HTTP {}", status)],
                    warnings: response.warnings().to_vec(),
                };
            }
            Ok(response)
        }
        Err(e) if status.is_success() => Err(DashError::MalformedData(format!(
            "service returned invalid JSON: {}",
            e
        ))),
        Err(_) => {
            let snippet: String = text.chars().take(MAX_ERROR_BODY).collect();
            Err(DashError::Transport(format!("HTTP {}: {}", status, snippet)))
        }
    }
}
