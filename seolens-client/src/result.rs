use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Body of one audit submission. Built fresh per request, never reused.
#[derive(Debug, Clone, Serialize)]
pub struct AuditRequest {
    pub url: String,
    /// ISO-8601 submission time.
    pub timestamp: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Passed,
    Failed,
}

impl CheckStatus {
    pub fn is_passed(self) -> bool {
        matches!(self, CheckStatus::Passed)
    }
}

/// Outcome of a single check as the server reported it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
    pub status: CheckStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
}

/// Aggregate structural metrics about the audited page. Every field is
/// optional; the server omits whatever it could not measure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageInfo {
    pub title_length: Option<u64>,
    pub meta_description_length: Option<u64>,
    pub word_count: Option<u64>,
    pub images_count: Option<u64>,
    pub internal_links: Option<u64>,
    pub external_links: Option<u64>,
    pub h1_count: Option<u64>,
    pub load_time: Option<f64>,
}

/// One complete audit of a single URL. The `checks` map is keyed by the
/// server's check identifiers; keys the client does not recognize are kept
/// here but ignored by every consumer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditResult {
    pub url: String,
    pub timestamp: String,
    #[serde(default)]
    pub checks: HashMap<String, CheckResult>,
    #[serde(default)]
    pub page_info: PageInfo,
}

/// Wrapper the server puts around every audit reply, success or not.
#[derive(Debug, Clone, Deserialize)]
pub struct AuditEnvelope {
    pub status: String,
    #[serde(default)]
    pub data: Option<AuditResult>,
    #[serde(default)]
    pub message: Option<String>,
}
