use super::constants::DUAL_CLICK_WINDOW_MS;
use super::panel::Side;

/// Last click seen on the page. One instance per stage, shared by both panels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ClickRecord {
    last: Option<(Side, f64)>,
}

impl ClickRecord {
    pub fn last(&self) -> Option<(Side, f64)> {
        self.last
    }

    /// Record a click on `side` at `now_ms` and report whether it completes the
    /// dual-click pattern: the previous click was on the other side and less
    /// than the window ago.
    pub fn register(&mut self, side: Side, now_ms: f64) -> bool {
        let previous = self.last.replace((side, now_ms));
        matches!(
            previous,
            Some((prev_side, prev_ms)) if prev_side != side && now_ms - prev_ms < DUAL_CLICK_WINDOW_MS
        )
    }
}
