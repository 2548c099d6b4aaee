//! Local keyword classifier used when the remote service is unreachable.

use crate::types::{ClassificationResult, PrimaryLabel};

/// Keyword rules, first match wins. Matching is a case-insensitive
/// substring check against the whole message text.
const RULES: &[(&[&str], PrimaryLabel, &[&str])] = &[
    (&["win", "lottery", "verify your account"], PrimaryLabel::Spam, &[]),
    (&["invoice", "payment"], PrimaryLabel::NoSpam, &["Finance & Bills"]),
    (&["meeting", "agenda"], PrimaryLabel::NoSpam, &["Business"]),
    (&["flight", "hotel"], PrimaryLabel::NoSpam, &["Travel & Bookings"]),
];

/// Classify `text` with the local keyword table. Anything that matches no
/// rule lands in Personal.
pub fn fallback_classify(text: &str) -> ClassificationResult {
    let lowered = text.to_lowercase();
    for (keywords, primary, labels) in RULES {
        if keywords.iter().any(|kw| lowered.contains(kw)) {
            return ClassificationResult {
                primary_classification: *primary,
                detailed_labels: labels.iter().map(|s| s.to_string()).collect(),
            };
        }
    }
    ClassificationResult {
        primary_classification: PrimaryLabel::NoSpam,
        detailed_labels: vec!["Personal".to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spam_keywords() {
        for text in ["You WIN big!", "claim your lottery prize", "please verify your account now"] {
            let result = fallback_classify(text);
            assert_eq!(result.primary_classification, PrimaryLabel::Spam, "{text}");
            assert!(result.detailed_labels.is_empty());
        }
    }

    #[test]
    fn test_finance_keywords() {
        let result = fallback_classify("Your invoice for March is attached");
        assert_eq!(result.primary_classification, PrimaryLabel::NoSpam);
        assert_eq!(result.detailed_labels, vec!["Finance & Bills"]);
    }

    #[test]
    fn test_business_keywords() {
        let result = fallback_classify("Agenda for tomorrow's sync");
        assert_eq!(result.detailed_labels, vec!["Business"]);
    }

    #[test]
    fn test_travel_keywords() {
        let result = fallback_classify("Hotel booking confirmation");
        assert_eq!(result.detailed_labels, vec!["Travel & Bookings"]);
    }

    #[test]
    fn test_first_match_wins() {
        // "win" (spam rule) appears before "payment" (finance rule)
        let result = fallback_classify("win a free payment voucher");
        assert_eq!(result.primary_classification, PrimaryLabel::Spam);
    }

    #[test]
    fn test_no_match_is_personal() {
        let result = fallback_classify("hey, how have you been?");
        assert_eq!(result.primary_classification, PrimaryLabel::NoSpam);
        assert_eq!(result.detailed_labels, vec!["Personal"]);
    }
}
