//! Reveal animations applied when content scrolls into view.

pub const FADE_IN_UP_MS: u32 = 600;
pub const SCALE_IN_MS: u32 = 800;
pub const STAGGER_STEP_MS: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reveal {
    /// Fade in while rising 20px
    FadeInUp,
    Fade,
    /// Fade in while sliding 20px from the left
    SlideIn,
    /// Fade in while rising 40px
    Rise,
    ScaleIn,
}

impl Reveal {
    pub fn class(&self) -> &'static str {
        match self {
            Reveal::FadeInUp => "reveal reveal-fade-up",
            Reveal::Fade => "reveal reveal-fade",
            Reveal::SlideIn => "reveal reveal-slide",
            Reveal::Rise => "reveal reveal-rise",
            Reveal::ScaleIn => "reveal reveal-scale",
        }
    }

    pub fn duration_ms(&self) -> u32 {
        match self {
            Reveal::ScaleIn => SCALE_IN_MS,
            _ => FADE_IN_UP_MS,
        }
    }

    /// Inline custom properties for the nth element of a staggered group
    pub fn style(&self, index: usize) -> String {
        format!(
            "--reveal-delay: {}; --reveal-duration: {}ms",
            stagger_delay(index),
            self.duration_ms()
        )
    }
}

/// Delay for the nth child of a staggered group
pub fn stagger_delay(index: usize) -> String {
    let step = u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(STAGGER_STEP_MS);
    format!("{step}ms")
}
