//! The page coordinator: owns both panels, the shared click record, the RNG
//! and the speech backend, and turns input events into effect requests.

use super::clicks::ClickRecord;
use super::constants::DUAL_CLICK_SPOKEN_TEXT;
use super::notice::Notice;
use super::panel::{Panel, PanelRect, Side};
use super::particles::ConfettiBurst;
use super::speech::{say, spoken_word, Speech, SpeechParams};
use glam::Vec2;
use rand::prelude::*;

/// Effects requested by a click.
#[derive(Clone, Debug)]
pub struct ClickOutcome {
    pub burst: ConfettiBurst,
    /// Set when the click completed the dual-click pattern.
    pub notice: Option<Notice>,
}

pub struct Stage {
    panels: [Panel; 2],
    clicks: ClickRecord,
    speech: Box<dyn Speech>,
    rng: StdRng,
}

impl Stage {
    pub fn new(labels: [String; 2], speech: Box<dyn Speech>, rng: StdRng) -> Self {
        let [left, right] = labels;
        Self {
            panels: [Panel::new(Side::Left, left), Panel::new(Side::Right, right)],
            clicks: ClickRecord::default(),
            speech,
            rng,
        }
    }

    /// Stage with the default "6"/"7" labels and a seeded RNG.
    pub fn with_seed(speech: Box<dyn Speech>, seed: u64) -> Self {
        let labels = Side::ALL.map(|s| s.default_label().to_string());
        Self::new(labels, speech, StdRng::seed_from_u64(seed))
    }

    pub fn panel(&self, side: Side) -> &Panel {
        &self.panels[Self::index(side)]
    }

    fn panel_mut(&mut self, side: Side) -> &mut Panel {
        &mut self.panels[Self::index(side)]
    }

    #[inline]
    fn index(side: Side) -> usize {
        match side {
            Side::Left => 0,
            Side::Right => 1,
        }
    }

    pub fn click_record(&self) -> &ClickRecord {
        &self.clicks
    }

    pub fn pointer_move(&mut self, side: Side, pointer: Vec2, rect: &PanelRect) -> Vec2 {
        self.panel_mut(side).track(pointer, rect)
    }

    pub fn pointer_leave(&mut self, side: Side) -> Vec2 {
        self.panel_mut(side).reset()
    }

    /// Speak the panel's label unless it was announced within the throttle
    /// window. Returns whether it spoke.
    pub fn pointer_enter(&mut self, side: Side, now_ms: f64) -> bool {
        let panel = &mut self.panels[Self::index(side)];
        if !panel.try_announce(now_ms) {
            log::debug!("[hover] {} throttled", side.name());
            return false;
        }
        let word = spoken_word(&panel.label).to_string();
        say(self.speech.as_ref(), &word, SpeechParams::hover());
        true
    }

    /// Confetti at the click point, plus the "Nice." easter egg when both
    /// sides were clicked inside the window.
    pub fn click(
        &mut self,
        side: Side,
        pointer: Vec2,
        layer_rect: &PanelRect,
        now_ms: f64,
    ) -> ClickOutcome {
        let burst = ConfettiBurst::spawn(layer_rect.local(pointer), &mut self.rng);
        let notice = if self.clicks.register(side, now_ms) {
            log::info!("[click] dual-click on {}", side.name());
            say(
                self.speech.as_ref(),
                DUAL_CLICK_SPOKEN_TEXT,
                SpeechParams::default(),
            );
            Some(Notice::default())
        } else {
            None
        };
        ClickOutcome { burst, notice }
    }
}
