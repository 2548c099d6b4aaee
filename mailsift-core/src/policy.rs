//! Mapping from a classification result to a destination folder and labels.

use log::warn;

use crate::folder::Folder;
use crate::types::{ClassificationResult, PrimaryLabel};

/// Decide where a message goes and which labels it carries.
///
/// Spam always wins: a Spam verdict files the message under Spam with a
/// single "Spam" label, discarding any detailed labels. Otherwise the first
/// detailed label picks the folder (unknown labels fall back to Personal)
/// and the full label list is kept. No labels at all means Personal.
pub fn route(result: &ClassificationResult) -> (Folder, Vec<String>) {
    if result.primary_classification == PrimaryLabel::Spam {
        return (Folder::Spam, vec![Folder::Spam.as_str().to_string()]);
    }

    match result.detailed_labels.first() {
        Some(first) => {
            let folder = Folder::from_label(first).unwrap_or_else(|| {
                warn!("unknown label {first:?} from classifier, filing under Personal");
                Folder::Personal
            });
            (folder, result.detailed_labels.clone())
        }
        None => (Folder::Personal, vec![Folder::Personal.as_str().to_string()]),
    }
}
