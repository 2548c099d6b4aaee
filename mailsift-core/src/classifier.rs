//! HTTP client for the classification service.

use std::thread;
use std::time::Duration;

use log::{debug, warn};
use reqwest::blocking::{Client, Response};

use crate::config::ClassifierConfig;
use crate::error::{Error, Result};
use crate::fallback::fallback_classify;
use crate::types::{ClassificationResult, ClassifyRequest};

/// Where a classification came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifierSource {
    /// The remote classification service answered.
    Remote,
    /// The local keyword classifier was used.
    Fallback,
}

/// A classification together with its provenance.
#[derive(Debug, Clone)]
pub struct ClassifyOutcome {
    pub result: ClassificationResult,
    pub source: ClassifierSource,
    /// Human-readable note when the remote service could not be used.
    pub advisory: Option<String>,
}

/// Blocking HTTP client for the classification service.
pub struct ClassifierClient {
    http: Client,
    base_url: String,
    fallback_delay: Duration,
}

impl ClassifierClient {
    /// Create a client for the service at `base_url` with the given request
    /// timeout. A timeout counts as a transport failure and triggers the
    /// fallback classifier.
    pub fn new(base_url: &str, timeout: Duration, fallback_delay: Duration) -> Result<Self> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            fallback_delay,
        })
    }

    /// Create a client from classifier configuration.
    pub fn from_config(config: &ClassifierConfig, fallback_delay_ms: u64) -> Result<Self> {
        Self::new(
            &config.url,
            Duration::from_secs(config.timeout_secs),
            Duration::from_millis(fallback_delay_ms),
        )
    }

    /// The base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Ask the remote service to classify `text`.
    pub fn classify(&self, text: &str) -> Result<ClassificationResult> {
        let url = format!("{}/classify", self.base_url);
        debug!("POST {url}");
        let response = self
            .http
            .post(&url)
            .json(&ClassifyRequest { email_text: text })
            .send()?;
        Self::handle_response(response)
    }

    fn handle_response(response: Response) -> Result<ClassificationResult> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(Error::Service(format!(
                "classification service returned {status}: {body}"
            )));
        }
        response
            .json::<ClassificationResult>()
            .map_err(|e| Error::Service(format!("malformed classification response: {e}")))
    }

    /// Classify `text`, falling back to the local keyword classifier when the
    /// remote service fails for any reason. Never returns an error.
    pub fn classify_with_fallback(&self, text: &str) -> ClassifyOutcome {
        match self.classify(text) {
            Ok(result) => ClassifyOutcome {
                result,
                source: ClassifierSource::Remote,
                advisory: None,
            },
            Err(e) => {
                warn!("classification service unavailable, using local fallback: {e}");
                if !self.fallback_delay.is_zero() {
                    thread::sleep(self.fallback_delay);
                }
                ClassifyOutcome {
                    result: fallback_classify(text),
                    source: ClassifierSource::Fallback,
                    advisory: Some("classifier offline, used local rules".to_string()),
                }
            }
        }
    }
}
