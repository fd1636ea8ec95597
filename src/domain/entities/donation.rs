use serde::Serialize;

use crate::constants::{DONATION_HANDLE, DONATION_LINK};

#[derive(Debug, Clone, Serialize)]
pub struct SupportReason {
    pub title: &'static str,
    pub description: &'static str,
}

/// Static content of the "Help me make art." panel.
#[derive(Debug, Clone, Serialize)]
pub struct DonationInfo {
    pub headline: &'static str,
    pub pitch: &'static str,
    pub handle: &'static str,
    pub link: &'static str,
    pub corporate_note: &'static str,
    pub reasons: Vec<SupportReason>,
}

impl Default for DonationInfo {
    fn default() -> Self {
        DonationInfo {
            headline: "Help me make art.",
            pitch: "I have more ideas than I have the money for. I buy all supplies from local establishments.",
            handle: DONATION_HANDLE,
            link: DONATION_LINK,
            corporate_note: "Are you a corporation? Want me to leave you alone? Contact me about writing me a check.",
            reasons: vec![
                SupportReason {
                    title: "Fund New Projects",
                    description: "Your donations directly support the creation of new artistic works and installations.",
                },
                SupportReason {
                    title: "Enable Exhibitions",
                    description: "Help bring my work to public spaces for wider audiences to experience.",
                },
                SupportReason {
                    title: "Support Innovation",
                    description: "Enable experimentation with new techniques and technologies in digital art.",
                },
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CopyState {
    NotCopied,
    Copied { until_ms: u64 },
}

impl CopyState {
    pub fn is_copied(&self) -> bool {
        matches!(self, CopyState::Copied { .. })
    }

    /// Label of the small inline button next to the handle.
    pub fn short_label(&self) -> &'static str {
        if self.is_copied() { "Copied!" } else { "Copy" }
    }

    /// Label of the large call-to-action button.
    pub fn long_label(&self) -> &'static str {
        if self.is_copied() { "Venmo ID Copied!" } else { "Copy Venmo ID" }
    }
}
