use crate::error::{AuditError, Result};
use crate::result::{AuditEnvelope, AuditRequest, AuditResult};
use reqwest::Client;
use reqwest::cookie::{CookieStore, Jar};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

const AUDIT_ENDPOINT: &str = "/api/audit";
const CSRF_COOKIE: &str = "csrftoken";
const CSRF_HEADER: &str = "X-CSRFToken";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Validate a URL the way the audit form does: http or https scheme and a
/// host with a dot-separated, non-empty suffix. Rejected input never gets as
/// far as building a request.
pub fn validate_url(raw: &str) -> bool {
    let Ok(url) = Url::parse(raw) else {
        return false;
    };
    if url.scheme() != "http" && url.scheme() != "https" {
        return false;
    }
    let Some(host) = url.host_str() else {
        return false;
    };
    match host.rsplit_once('.') {
        Some((name, suffix)) => !name.is_empty() && !suffix.is_empty(),
        None => false,
    }
}

/// Client for one audit backend. Owns the HTTP client and the cookie jar the
/// server's csrftoken lands in.
pub struct AuditClient {
    client: Client,
    jar: Arc<Jar>,
    base_url: Url,
}

impl AuditClient {
    pub fn new(base_url: Url) -> Self {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT_SECS)
    }

    pub fn with_timeout(base_url: Url, timeout_secs: u64) -> Self {
        let jar = Arc::new(Jar::default());
        let client = Client::builder()
            .user_agent(concat!("seolens/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(timeout_secs))
            .cookie_provider(jar.clone())
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            jar,
            base_url,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Best-effort GET against the base URL so the server can set its
    /// csrftoken cookie, the way a browser picks it up by loading the page.
    /// Failure is not fatal; the audit then goes out with an empty token.
    pub async fn prime(&self) {
        match self.client.get(self.base_url.clone()).send().await {
            Ok(response) => debug!("Primed cookie jar ({})", response.status()),
            Err(e) => debug!("Cookie priming failed: {}", e),
        }
    }

    /// Current csrftoken cookie value, empty string when absent.
    pub fn csrf_token(&self) -> String {
        let Some(header) = self.jar.cookies(&self.base_url) else {
            return String::new();
        };
        let Ok(cookies) = header.to_str() else {
            return String::new();
        };
        for cookie in cookies.split(';') {
            if let Some((name, value)) = cookie.trim().split_once('=')
                && name == CSRF_COOKIE
            {
                return value.to_string();
            }
        }
        String::new()
    }

    /// Run one audit: a single POST per submission, no retries. The first
    /// failure is terminal for this submission; the caller may resubmit.
    pub async fn audit(&self, url: &str) -> Result<AuditResult> {
        if !validate_url(url) {
            return Err(AuditError::InvalidUrl(url.to_string()));
        }

        let request = AuditRequest {
            url: url.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        let endpoint = self
            .base_url
            .join(AUDIT_ENDPOINT)
            .map_err(|e| AuditError::InvalidUrl(format!("{}: {}", self.base_url, e)))?;

        debug!("POST {} for {}", endpoint, request.url);

        let response = self
            .client
            .post(endpoint)
            .header(CSRF_HEADER, self.csrf_token())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            // Error replies still carry the envelope when the server got far
            // enough to build one; fall back to the bare status otherwise.
            let message = serde_json::from_str::<AuditEnvelope>(&body)
                .ok()
                .and_then(|envelope| envelope.message)
                .unwrap_or_else(|| format!("HTTP {}", status));
            warn!("Audit request failed: {}", message);
            return Err(AuditError::Server(message));
        }

        let envelope: AuditEnvelope = serde_json::from_str(&body)
            .map_err(|e| AuditError::Server(format!("Malformed response: {}", e)))?;

        if envelope.status != "success" {
            return Err(AuditError::Server(
                envelope
                    .message
                    .unwrap_or_else(|| "Audit failed".to_string()),
            ));
        }

        envelope
            .data
            .ok_or_else(|| AuditError::Server("Response missing audit data".to_string()))
    }
}
