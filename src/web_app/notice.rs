// web_app/notice.rs - The status message area
//
// Each shown notice gets a ticket. A dismissal timer only hides the notice
// if its ticket is still the latest, so a newer message is never cut short
// by the timer of the one it replaced.

use crate::web_app::model::Notice;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeSlot {
    current: Option<Notice>,
    generation: u64,
}

impl NoticeSlot {
    /// Show `notice`, replacing any visible one. Returns the dismissal ticket.
    pub fn show(&mut self, notice: Notice) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.current = Some(notice);
        self.generation
    }

    /// Hide the notice if `ticket` is still current. Returns whether anything was hidden.
    pub fn dismiss(&mut self, ticket: u64) -> bool {
        if ticket != self.generation || self.current.is_none() {
            return false;
        }
        self.current = None;
        true
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dismiss_latest() {
        let mut slot = NoticeSlot::default();
        let ticket = slot.show(Notice::success("Product deleted."));
        assert!(slot.is_visible());
        assert!(slot.dismiss(ticket));
        assert!(!slot.is_visible());
        assert!(!slot.dismiss(ticket));
    }
}
