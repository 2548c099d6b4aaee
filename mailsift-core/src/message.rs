//! Message model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::folder::Folder;
use crate::id;

/// How many characters of the body become the subject line.
const SUBJECT_LEN: usize = 30;

/// A mail message filed in the mailbox.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub sender: String,
    pub subject: String,
    pub body: String,
    pub folder: Folder,
    pub timestamp: DateTime<Utc>,
    pub is_read: bool,
    pub labels: Vec<String>,
}

impl Message {
    /// Build a message from a composed body. The subject is the first 30
    /// characters of the body, with "..." appended when truncated.
    pub fn new(sender: &str, body: &str, folder: Folder, labels: Vec<String>) -> Self {
        Self {
            id: id::generate(),
            sender: sender.to_string(),
            subject: make_subject(body),
            body: body.to_string(),
            folder,
            timestamp: Utc::now(),
            is_read: false,
            labels,
        }
    }
}

fn make_subject(body: &str) -> String {
    let chars: Vec<char> = body.chars().collect();
    if chars.len() > SUBJECT_LEN {
        let head: String = chars[..SUBJECT_LEN].iter().collect();
        format!("{head}...")
    } else {
        body.to_string()
    }
}
