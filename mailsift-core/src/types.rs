//! Wire types for the classification service.

use serde::{Deserialize, Serialize};

/// Request body for `POST /classify`.
#[derive(Debug, Clone, Serialize)]
pub struct ClassifyRequest<'a> {
    /// The full text of the composed message.
    pub email_text: &'a str,
}

/// The service's spam verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrimaryLabel {
    #[serde(rename = "Spam")]
    Spam,
    #[serde(rename = "No-Spam")]
    NoSpam,
}

/// Response body from `POST /classify`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Spam / No-Spam verdict.
    pub primary_classification: PrimaryLabel,
    /// Finer-grained category labels, most confident first. May be empty.
    #[serde(default)]
    pub detailed_labels: Vec<String>,
}
