use serde::{Deserialize, Serialize};

/// Maximum blur, in pixels, applied to a fully faded section.
pub const MAX_BLUR_PX: f64 = 15.0;

/// Visual state of one fixed, fading layer of the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SectionFade {
    pub opacity: f64,
    pub blur: f64,
    pub scale: f64,
    pub visible: bool,
}

impl SectionFade {
    pub fn from_opacity(opacity: f64) -> Self {
        let blur = (1.0 - opacity) * MAX_BLUR_PX;
        SectionFade {
            opacity,
            blur,
            scale: 1.0 + blur * 0.01,
            visible: opacity > 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScrollEffects {
    pub hero: SectionFade,
    pub intro: SectionFade,
    pub about_opacity: f64,
    pub navbar_opacity: f64,
}

impl Default for ScrollEffects {
    /// Layout before the first scroll event: hero fully shown, intro hidden.
    fn default() -> Self {
        ScrollEffects {
            hero: SectionFade::from_opacity(1.0),
            intro: SectionFade::from_opacity(0.0),
            about_opacity: 0.0,
            navbar_opacity: 0.0,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ScrollQuery {
    pub scroll_y: f64,
    pub viewport_height: f64,
}

#[derive(Debug, Serialize)]
pub struct ScrollResponse {
    #[serde(flatten)]
    pub effects: ScrollEffects,
    pub navbar_scrolled: bool,
}

// ───── Hero Word Swap ───────────────────────────────────────────────

pub const HERO_SEQUENCE: [&str; 5] = ["loss", "gain", "loss", "gain", "gain"];
pub const HERO_INITIAL_WORD: &str = "loss";
pub const HERO_FINAL_WORD: &str = "gain";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HeroPhase {
    Waiting,
    Spinning,
    Settling,
    Complete,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeroFrame {
    pub phase: HeroPhase,
    pub current_word: &'static str,
    pub is_spinning: bool,
    pub animation_complete: bool,
    pub sequence: &'static [&'static str],
}

#[derive(Debug, Deserialize)]
pub struct HeroQuery {
    #[serde(default)]
    pub elapsed_ms: u64,
}
