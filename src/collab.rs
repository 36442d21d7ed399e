//! Boundaries to collaborators that live outside the core: resolved UI labels, analytics, and
//! the feedback form. None of them may block or fail generation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// User-facing strings the core embeds in its output, already translated by the caller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    /// Prefix of each PNG entry, followed by the 1-based image number.
    pub image_prefix: String,
    /// Prefix of the archive file name.
    pub archive_prefix: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            image_prefix: "Image".to_string(),
            archive_prefix: "advertisement_images".to_string(),
        }
    }
}

/// Fire-and-forget analytics events.
pub trait AnalyticsSink {
    fn emit(&self, event: &str, props: &serde_json::Value);
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NoopAnalytics;

impl AnalyticsSink for NoopAnalytics {
    fn emit(&self, _event: &str, _props: &serde_json::Value) {}
}

/// Analytics sink that forwards events to `tracing` at debug level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingAnalytics;

impl AnalyticsSink for TracingAnalytics {
    fn emit(&self, event: &str, props: &serde_json::Value) {
        tracing::debug!(event, %props, "analytics");
    }
}

/// A feedback or newsletter submission.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub timestamp: String,
    pub language: String,
    #[serde(default)]
    pub user_agent: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

pub trait FeedbackSink {
    fn submit(&self, record: &FeedbackRecord) -> anyhow::Result<()>;
}

/// Hand a record to `sink`; failures are logged and swallowed.
pub fn submit_feedback(sink: &dyn FeedbackSink, record: &FeedbackRecord) -> bool {
    match sink.submit(record) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(id = %record.id, "feedback submission failed: {e:#}");
            false
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/collab.rs"]
mod tests;
