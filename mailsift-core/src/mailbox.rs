//! Mailbox state: the message list and the compose workflow.

use crate::classifier::{ClassifierSource, ClassifyOutcome};
use crate::folder::Folder;
use crate::message::Message;
use crate::policy;

/// In-memory mailbox holding all filed messages and the compose buffer.
#[derive(Debug, Default)]
pub struct Mailbox {
    /// All messages, newest first.
    pub messages: Vec<Message>,
    /// Text being composed.
    pub compose_buffer: String,
    /// True while a send is in flight. Re-entrant sends are ignored.
    pub is_sending: bool,
    /// Folder the most recent send filed into.
    pub last_filed: Option<Folder>,
    /// Advisory from the most recent send, e.g. when the fallback
    /// classifier had to be used.
    pub last_advisory: Option<String>,
    sender: String,
}

impl Mailbox {
    pub fn new(sender: &str) -> Self {
        Self {
            sender: sender.to_string(),
            ..Default::default()
        }
    }

    /// The configured sender address.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Messages filed under `folder`, newest first.
    pub fn messages_in(&self, folder: Folder) -> Vec<&Message> {
        self.messages.iter().filter(|m| m.folder == folder).collect()
    }

    /// Number of messages in `folder`.
    pub fn count_in(&self, folder: Folder) -> usize {
        self.messages.iter().filter(|m| m.folder == folder).count()
    }

    /// Per-folder message counts, in sidebar order.
    pub fn folder_counts(&self) -> Vec<(Folder, usize)> {
        Folder::ALL
            .iter()
            .map(|&f| (f, self.count_in(f)))
            .collect()
    }

    /// Send the compose buffer: classify it, file the resulting message at
    /// the top of the list, and clear the buffer.
    ///
    /// Returns the destination folder, or `None` when nothing was sent
    /// (empty buffer, or a send already in flight). The classification is
    /// injected so callers decide whether it hits the network.
    pub fn send(&mut self, classify: impl FnOnce(&str) -> ClassifyOutcome) -> Option<Folder> {
        if self.is_sending {
            return None;
        }
        // trimming is only the emptiness check; the body is stored verbatim
        if self.compose_buffer.trim().is_empty() {
            return None;
        }

        self.is_sending = true;
        let body = std::mem::take(&mut self.compose_buffer);
        let outcome = classify(&body);
        let (folder, labels) = policy::route(&outcome.result);

        let message = Message::new(&self.sender, &body, folder, labels);
        self.messages.insert(0, message);
        self.last_filed = Some(folder);
        self.last_advisory = match outcome.source {
            ClassifierSource::Remote => None,
            ClassifierSource::Fallback => outcome.advisory,
        };
        self.is_sending = false;
        Some(folder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ClassificationResult, PrimaryLabel};

    fn remote(primary: PrimaryLabel, labels: &[&str]) -> ClassifyOutcome {
        ClassifyOutcome {
            result: ClassificationResult {
                primary_classification: primary,
                detailed_labels: labels.iter().map(|s| s.to_string()).collect(),
            },
            source: ClassifierSource::Remote,
            advisory: None,
        }
    }

    #[test]
    fn test_send_prepends_and_clears_buffer() {
        let mut mailbox = Mailbox::new("me@example.com");
        mailbox.compose_buffer = "first message".to_string();
        mailbox.send(|_| remote(PrimaryLabel::NoSpam, &["Business"]));
        mailbox.compose_buffer = "second message".to_string();
        let folder = mailbox.send(|_| remote(PrimaryLabel::NoSpam, &["Business"]));

        assert_eq!(folder, Some(Folder::Business));
        assert_eq!(mailbox.messages.len(), 2);
        assert_eq!(mailbox.messages[0].body, "second message");
        assert!(mailbox.compose_buffer.is_empty());
    }

    #[test]
    fn test_empty_buffer_is_a_no_op() {
        let mut mailbox = Mailbox::new("me@example.com");
        mailbox.compose_buffer = "   \n  ".to_string();
        let folder = mailbox.send(|_| remote(PrimaryLabel::NoSpam, &["Business"]));
        assert_eq!(folder, None);
        assert!(mailbox.messages.is_empty());
        assert_eq!(mailbox.last_filed, None);
    }

    #[test]
    fn test_spam_verdict_files_to_spam() {
        let mut mailbox = Mailbox::new("me@example.com");
        mailbox.compose_buffer = "you win the lottery".to_string();
        let folder = mailbox.send(|_| remote(PrimaryLabel::Spam, &["Promotions"]));
        assert_eq!(folder, Some(Folder::Spam));
        assert_eq!(mailbox.messages[0].labels, vec!["Spam"]);
    }

    #[test]
    fn test_reentry_guard() {
        let mut mailbox = Mailbox::new("me@example.com");
        mailbox.compose_buffer = "text".to_string();
        mailbox.is_sending = true;
        let folder = mailbox.send(|_| remote(PrimaryLabel::NoSpam, &[]));
        assert_eq!(folder, None);
        assert!(mailbox.messages.is_empty());
    }

    #[test]
    fn test_fallback_advisory_is_surfaced() {
        let mut mailbox = Mailbox::new("me@example.com");
        mailbox.compose_buffer = "invoice".to_string();
        mailbox.send(|_| ClassifyOutcome {
            result: ClassificationResult {
                primary_classification: PrimaryLabel::NoSpam,
                detailed_labels: vec!["Finance & Bills".to_string()],
            },
            source: ClassifierSource::Fallback,
            advisory: Some("classifier offline, used local rules".to_string()),
        });
        assert!(mailbox.last_advisory.is_some());
        assert_eq!(mailbox.last_filed, Some(Folder::FinanceBills));
    }

    #[test]
    fn test_remote_send_clears_stale_advisory() {
        let mut mailbox = Mailbox::new("me@example.com");
        mailbox.last_advisory = Some("old".to_string());
        mailbox.compose_buffer = "hello".to_string();
        mailbox.send(|_| remote(PrimaryLabel::NoSpam, &["Personal"]));
        assert_eq!(mailbox.last_advisory, None);
    }

    #[test]
    fn test_folder_counts_sum_to_message_count() {
        let mut mailbox = Mailbox::new("me@example.com");
        for (text, labels) in [
            ("agenda", &["Business"][..]),
            ("invoice", &["Finance & Bills"][..]),
            ("hello", &["Personal"][..]),
        ] {
            mailbox.compose_buffer = text.to_string();
            mailbox.send(|_| remote(PrimaryLabel::NoSpam, labels));
        }
        let total: usize = mailbox.folder_counts().iter().map(|(_, n)| n).sum();
        assert_eq!(total, mailbox.messages.len());
        assert_eq!(mailbox.count_in(Folder::Business), 1);
    }

    #[test]
    fn test_body_keeps_submitted_text_verbatim() {
        let mut mailbox = Mailbox::new("me@example.com");
        mailbox.compose_buffer = "  hello there  \n".to_string();
        mailbox.send(|_| remote(PrimaryLabel::NoSpam, &["Personal"]));
        assert_eq!(mailbox.messages[0].body, "  hello there  \n");
        assert!(mailbox.compose_buffer.is_empty());
    }
}
