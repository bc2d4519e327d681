//! Client module - fire-and-forget completion submission
//!
//! Submissions never block the game loop: the POST runs on the ambient
//! async runtime and any failure is logged and swallowed, with no retry
//! and no effect on session state. Timed-out rounds are dropped without
//! a request; only solved rounds are persisted.

use tracing::{debug, warn};

use crate::core::CompletionRecord;
use crate::report::record::SavedTime;

/// Reporter configuration
#[derive(Debug, Clone)]
pub struct ReporterConfig {
    pub endpoint: String,
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:3000/save-time".to_string(),
        }
    }
}

impl ReporterConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let endpoint = std::env::var("SLIDE_REPORT_URL")
            .unwrap_or_else(|_| Self::default().endpoint);
        Self { endpoint }
    }
}

/// HTTP reporter for finished rounds
#[derive(Debug, Clone)]
pub struct CompletionReporter {
    http: reqwest::Client,
    endpoint: String,
}

impl CompletionReporter {
    pub fn new(config: ReporterConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: config.endpoint,
        }
    }

    /// Whether a record is worth persisting (solved rounds only)
    pub fn should_report(record: &CompletionRecord) -> bool {
        !record.timed_out
    }

    /// Submit a record without waiting for the outcome
    pub fn submit(&self, record: &CompletionRecord) {
        if !Self::should_report(record) {
            debug!("skipping timed-out round");
            return;
        }

        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            warn!("completion not reported: no async runtime");
            return;
        };

        let payload = SavedTime::from(record);
        let http = self.http.clone();
        let endpoint = self.endpoint.clone();
        handle.spawn(async move {
            match http.post(&endpoint).json(&payload).send().await {
                Ok(response) if response.status().is_success() => {
                    debug!(moves = payload.moves, "completion recorded");
                }
                Ok(response) => {
                    warn!(status = %response.status(), "record service rejected completion");
                }
                Err(err) => {
                    warn!(%err, "failed to submit completion");
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn record(timed_out: bool) -> CompletionRecord {
        CompletionRecord {
            moves: 30,
            elapsed_ms: 120_000,
            timed_out,
            finished_at: Utc::now(),
        }
    }

    #[test]
    fn test_only_solved_rounds_are_reported() {
        assert!(CompletionReporter::should_report(&record(false)));
        assert!(!CompletionReporter::should_report(&record(true)));
    }

    #[test]
    fn test_submit_without_runtime_is_swallowed() {
        let reporter = CompletionReporter::new(ReporterConfig::default());
        // No runtime here; the submission must drop silently
        reporter.submit(&record(false));
    }

    #[test]
    fn test_config_from_env_does_not_panic() {
        let _config = ReporterConfig::from_env();
    }
}
