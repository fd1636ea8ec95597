use crate::entities::page::{ScrollEffects, SectionFade};

/// Scroll offset past which the compact navbar gets a solid background.
pub const NAVBAR_SOLID_AFTER_PX: f64 = 50.0;

/// NaN (from bounds that overflowed to infinity) counts as 0.
fn clamp01(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

/// Linear ramp from 0 at `start` to 1 at `end`, clamped.
fn ramp(y: f64, start: f64, end: f64) -> f64 {
    clamp01((y - start) / (end - start))
}

/// Derives every scroll-driven visual value of the landing page from the
/// current scroll offset and viewport height.
///
/// All ranges are fractions of the viewport height:
/// hero fades out over `[0, 1]`, intro fades in over `[1, 1.3]` and out
/// over `[2.3, 3.0]`, and the about section (and navbar with it) fades in
/// over `[2.3, 2.6]`.
pub fn scroll_effects(scroll_y: f64, viewport_height: f64) -> ScrollEffects {
    if !scroll_y.is_finite() || !viewport_height.is_finite() || viewport_height <= 0.0 {
        return ScrollEffects::default();
    }

    let vh = viewport_height;
    let y = scroll_y;

    let hero_opacity = clamp01(1.0 - ramp(y, 0.0, vh));

    let intro_in = ramp(y, vh, vh * 1.3);
    let intro_out = 1.0 - ramp(y, vh * 2.3, vh * 3.0);
    let intro_opacity = intro_in.min(intro_out);

    let about_opacity = ramp(y, vh * 2.3, vh * 2.6);

    ScrollEffects {
        hero: SectionFade::from_opacity(hero_opacity),
        intro: SectionFade::from_opacity(intro_opacity),
        about_opacity,
        navbar_opacity: about_opacity,
    }
}

pub fn navbar_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_SOLID_AFTER_PX
}
