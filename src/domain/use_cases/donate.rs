use std::time::Duration;

use crate::{
    constants::DONATION_HANDLE,
    entities::donation::CopyState,
    services::clipboard::Clipboard,
};

pub const COPY_FEEDBACK: Duration = Duration::from_millis(2000);

pub struct DonationPanel<C>
where
    C: Clipboard,
{
    clipboard: C,
    state: CopyState,
}

impl<C> DonationPanel<C>
where
    C: Clipboard,
{
    pub fn new(clipboard: C) -> Self {
        DonationPanel { clipboard, state: CopyState::NotCopied }
    }

    pub fn state(&self) -> CopyState {
        self.state
    }

    /// Puts the donation handle on the clipboard. A failed write is logged
    /// and leaves the panel showing its "not copied" labels.
    pub fn copy_handle(&mut self, now_ms: u64) -> CopyState {
        match self.clipboard.write_text(DONATION_HANDLE) {
            Ok(()) => {
                self.state = CopyState::Copied {
                    until_ms: now_ms.saturating_add(COPY_FEEDBACK.as_millis() as u64),
                };
            }
            Err(e) => {
                tracing::warn!("Failed to copy donation handle: {}", e);
            }
        }
        self.state
    }

    pub fn tick(&mut self, now_ms: u64) -> CopyState {
        if let CopyState::Copied { until_ms } = self.state {
            if now_ms >= until_ms {
                self.state = CopyState::NotCopied;
            }
        }
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{errors::ClipboardError, services::clipboard::MockClipboard};
    use mockall::predicate::eq;

    #[test]
    fn successful_copy_shows_feedback_for_two_seconds() {
        let mut clipboard = MockClipboard::new();
        clipboard
            .expect_write_text()
            .with(eq("@CoGaineum-Art"))
            .times(1)
            .returning(|_| Ok(()));

        let mut panel = DonationPanel::new(clipboard);
        let state = panel.copy_handle(1_000);
        assert_eq!(state, CopyState::Copied { until_ms: 3_000 });
        assert_eq!(state.short_label(), "Copied!");
        assert_eq!(state.long_label(), "Venmo ID Copied!");

        assert!(panel.tick(2_999).is_copied());
        assert_eq!(panel.tick(3_000), CopyState::NotCopied);
        assert_eq!(panel.state().short_label(), "Copy");
    }

    #[test]
    fn failed_copy_stays_not_copied() {
        let mut clipboard = MockClipboard::new();
        clipboard
            .expect_write_text()
            .returning(|_| Err(ClipboardError::Denied("no permission".into())));

        let mut panel = DonationPanel::new(clipboard);
        assert_eq!(panel.copy_handle(0), CopyState::NotCopied);
        assert_eq!(panel.state().long_label(), "Copy Venmo ID");
    }

    #[test]
    fn unavailable_clipboard_stays_not_copied() {
        let mut clipboard = MockClipboard::new();
        clipboard
            .expect_write_text()
            .returning(|_| Err(ClipboardError::Unavailable));

        let mut panel = DonationPanel::new(clipboard);
        assert_eq!(panel.copy_handle(0), CopyState::NotCopied);
    }

    #[test]
    fn copy_window_saturates_at_the_end_of_time() {
        let mut clipboard = MockClipboard::new();
        clipboard.expect_write_text().returning(|_| Ok(()));

        let mut panel = DonationPanel::new(clipboard);
        assert_eq!(panel.copy_handle(u64::MAX - 5), CopyState::Copied { until_ms: u64::MAX });
        assert_eq!(panel.tick(u64::MAX), CopyState::NotCopied);
    }

    #[test]
    fn copying_again_extends_the_window() {
        let mut clipboard = MockClipboard::new();
        clipboard.expect_write_text().times(2).returning(|_| Ok(()));

        let mut panel = DonationPanel::new(clipboard);
        panel.copy_handle(0);
        panel.copy_handle(1_500);
        assert!(panel.tick(2_500).is_copied());
        assert!(!panel.tick(3_500).is_copied());
    }
}
