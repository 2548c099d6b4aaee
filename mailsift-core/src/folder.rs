//! The fixed set of mail folders messages can be filed into.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A mail folder. The set is fixed; the classification service may only
/// suggest labels that map onto one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Folder {
    Inbox,
    Business,
    Reminders,
    EventsInvitations,
    FinanceBills,
    TravelBookings,
    CustomerSupport,
    Newsletters,
    Personal,
    JobApplication,
    Promotions,
    Spam,
}

impl Folder {
    /// All folders, in sidebar display order.
    pub const ALL: [Folder; 12] = [
        Folder::Inbox,
        Folder::Business,
        Folder::Reminders,
        Folder::EventsInvitations,
        Folder::FinanceBills,
        Folder::TravelBookings,
        Folder::CustomerSupport,
        Folder::Newsletters,
        Folder::Personal,
        Folder::JobApplication,
        Folder::Promotions,
        Folder::Spam,
    ];

    /// The display name, which is also the label string the classification
    /// service uses.
    pub fn as_str(&self) -> &'static str {
        match self {
            Folder::Inbox => "Inbox",
            Folder::Business => "Business",
            Folder::Reminders => "Reminders",
            Folder::EventsInvitations => "Events & Invitations",
            Folder::FinanceBills => "Finance & Bills",
            Folder::TravelBookings => "Travel & Bookings",
            Folder::CustomerSupport => "Customer Support",
            Folder::Newsletters => "Newsletters",
            Folder::Personal => "Personal",
            Folder::JobApplication => "Job Application",
            Folder::Promotions => "Promotions",
            Folder::Spam => "Spam",
        }
    }

    /// Look up a folder by its label string, case-insensitively.
    pub fn from_label(label: &str) -> Option<Folder> {
        let label = label.trim();
        Folder::ALL
            .iter()
            .copied()
            .find(|f| f.as_str().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for Folder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Folder> for String {
    fn from(folder: Folder) -> Self {
        folder.as_str().to_string()
    }
}

impl TryFrom<String> for Folder {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        Folder::from_label(&value).ok_or_else(|| format!("unknown folder: {value}"))
    }
}
