//! Per-panel interaction state: the normalized pointer offset that drives the
//! tilt and the hover-announcement throttle.

use super::constants::{HOVER_SPEAK_THROTTLE_MS, OFFSET_DECIMALS};
use glam::Vec2;

/// Which of the two panels an event belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Left, Side::Right];

    /// Label shown (and spoken) when the page does not provide one.
    pub fn default_label(self) -> &'static str {
        match self {
            Side::Left => "6",
            Side::Right => "7",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// Bounding box of a panel (or its effects layer) in client coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PanelRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl PanelRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Pointer position relative to the top-left corner, in CSS pixels.
    #[inline]
    pub fn local(&self, pointer: Vec2) -> Vec2 {
        Vec2::new(pointer.x - self.left, pointer.y - self.top)
    }
}

#[inline]
fn round_to_decimals(v: f32, decimals: i32) -> f32 {
    let scale = 10f32.powi(decimals);
    (v * scale).round() / scale
}

/// Map a pointer sample to an offset centered on the panel, roughly
/// `[-0.5, 0.5]` on each axis inside the bounds.
///
/// A degenerate rect yields the zero offset.
#[inline]
pub fn normalized_offset(pointer: Vec2, rect: &PanelRect) -> Vec2 {
    if rect.width > 0.0 && rect.height > 0.0 {
        let local = rect.local(pointer);
        let x = local.x / rect.width - 0.5;
        let y = local.y / rect.height - 0.5;
        Vec2::new(
            round_to_decimals(x, OFFSET_DECIMALS),
            round_to_decimals(y, OFFSET_DECIMALS),
        )
    } else {
        Vec2::ZERO
    }
}

#[derive(Clone, Debug)]
pub struct Panel {
    pub side: Side,
    pub label: String,
    pub offset: Vec2,
    last_spoken_ms: Option<f64>,
}

impl Panel {
    pub fn new(side: Side, label: impl Into<String>) -> Self {
        Self {
            side,
            label: label.into(),
            offset: Vec2::ZERO,
            last_spoken_ms: None,
        }
    }

    pub fn track(&mut self, pointer: Vec2, rect: &PanelRect) -> Vec2 {
        self.offset = normalized_offset(pointer, rect);
        self.offset
    }

    pub fn reset(&mut self) -> Vec2 {
        self.offset = Vec2::ZERO;
        self.offset
    }

    /// Returns true when an announcement is due at `now_ms`, and records it.
    /// Re-entries inside the throttle window are dropped, not queued.
    pub fn try_announce(&mut self, now_ms: f64) -> bool {
        let due = match self.last_spoken_ms {
            Some(last) => now_ms - last >= HOVER_SPEAK_THROTTLE_MS,
            None => true,
        };
        if due {
            self.last_spoken_ms = Some(now_ms);
        }
        due
    }

    pub fn last_spoken_ms(&self) -> Option<f64> {
        self.last_spoken_ms
    }
}
