use super::constants::{
    DUAL_CLICK_NOTICE_TEXT, NOTICE_HIDE_AFTER_MS, NOTICE_REMOVE_AFTER_MS, NOTICE_SHOW_AFTER_MS,
};

/// What happens to a notice element at each point of its timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeStep {
    Show,
    Hide,
    Remove,
}

/// A short-lived text banner. Each one is independent; overlapping notices
/// simply stack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
}

impl Default for Notice {
    fn default() -> Self {
        Self::new(DUAL_CLICK_NOTICE_TEXT)
    }
}

impl Notice {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Delays (ms after creation) paired with the step to apply, in order.
    pub fn timeline() -> [(i32, NoticeStep); 3] {
        [
            (NOTICE_SHOW_AFTER_MS, NoticeStep::Show),
            (NOTICE_HIDE_AFTER_MS, NoticeStep::Hide),
            (NOTICE_REMOVE_AFTER_MS, NoticeStep::Remove),
        ]
    }
}
