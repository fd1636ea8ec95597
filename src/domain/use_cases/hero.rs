use std::time::Duration;

use crate::entities::page::{
    HeroFrame, HeroPhase, HERO_FINAL_WORD, HERO_INITIAL_WORD, HERO_SEQUENCE,
};

pub const SPIN_START_DELAY: Duration = Duration::from_millis(2000);
pub const SPIN_DURATION: Duration = Duration::from_millis(6000);
pub const SETTLE_DELAY: Duration = Duration::from_millis(100);

/// The "Co·loss·eum → Co·gain·eum" slot animation as a scheduled timeline.
///
/// Every transition has an absolute due time; `tick` moves through all
/// transitions that are due, so a caller may tick at any cadence (or jump
/// straight to a timestamp) and always lands in the same state.
#[derive(Debug, Clone)]
pub struct HeroTimeline {
    phase: HeroPhase,
    current_word: &'static str,
    phase_due_at: u64,
    last_tick: u64,
    spin_duration_ms: u64,
    settle_delay_ms: u64,
}

impl HeroTimeline {
    /// Schedules the one automatic spin relative to page load.
    pub fn new(loaded_at_ms: u64) -> Self {
        HeroTimeline {
            phase: HeroPhase::Waiting,
            current_word: HERO_INITIAL_WORD,
            phase_due_at: loaded_at_ms.saturating_add(SPIN_START_DELAY.as_millis() as u64),
            last_tick: loaded_at_ms,
            spin_duration_ms: SPIN_DURATION.as_millis() as u64,
            settle_delay_ms: SETTLE_DELAY.as_millis() as u64,
        }
    }

    /// Frame `elapsed_ms` after page load, without keeping a timeline around.
    pub fn frame_at(elapsed_ms: u64) -> HeroFrame {
        let mut timeline = HeroTimeline::new(0);
        timeline.tick(elapsed_ms);
        timeline.frame()
    }

    pub fn phase(&self) -> HeroPhase {
        self.phase
    }

    /// When the next transition is due, if any remains.
    pub fn next_deadline(&self) -> Option<u64> {
        match self.phase {
            HeroPhase::Complete => None,
            _ => Some(self.phase_due_at),
        }
    }

    pub fn tick(&mut self, now_ms: u64) {
        if now_ms < self.last_tick {
            return;
        }
        self.last_tick = now_ms;

        while let Some(due) = self.next_deadline() {
            if now_ms < due {
                break;
            }
            self.advance(due);
        }
    }

    /// Starts a spin by hand. Ignored while a spin is already running.
    pub fn spin(&mut self, now_ms: u64) {
        if self.phase == HeroPhase::Spinning {
            return;
        }
        self.last_tick = self.last_tick.max(now_ms);
        self.phase = HeroPhase::Spinning;
        self.phase_due_at = now_ms.saturating_add(self.spin_duration_ms);
    }

    fn advance(&mut self, due: u64) {
        match self.phase {
            HeroPhase::Waiting => {
                self.phase = HeroPhase::Spinning;
                self.phase_due_at = due.saturating_add(self.spin_duration_ms);
            }
            HeroPhase::Spinning => {
                self.phase = HeroPhase::Settling;
                self.current_word = HERO_FINAL_WORD;
                self.phase_due_at = due.saturating_add(self.settle_delay_ms);
            }
            HeroPhase::Settling => {
                self.phase = HeroPhase::Complete;
            }
            HeroPhase::Complete => {}
        }
    }

    pub fn frame(&self) -> HeroFrame {
        HeroFrame {
            phase: self.phase,
            current_word: self.current_word,
            is_spinning: self.phase == HeroPhase::Spinning,
            animation_complete: self.phase == HeroPhase::Complete,
            sequence: &HERO_SEQUENCE,
        }
    }
}
