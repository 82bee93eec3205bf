use std::time::{Duration, Instant};

use ratatui::style::Color;

/// Fade-in duration for a newly inserted cell.
pub const FADE_IN: Duration = Duration::from_millis(200);

/// Fade-out duration for a removed cell. The cell stays on screen while
/// fading and is dropped once the fade completes.
pub const FADE_OUT: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeDirection {
    In,
    Out,
}

/// A fire-and-forget opacity transition. Purely cosmetic: container state
/// never waits on a fade.
#[derive(Debug, Clone, Copy)]
pub struct Fade {
    started: Instant,
    duration: Duration,
    direction: FadeDirection,
}

impl Fade {
    pub fn fade_in() -> Self {
        Self {
            started: Instant::now(),
            duration: FADE_IN,
            direction: FadeDirection::In,
        }
    }

    pub fn fade_out() -> Self {
        Self {
            started: Instant::now(),
            duration: FADE_OUT,
            direction: FadeDirection::Out,
        }
    }

    /// Current opacity in [0, 1].
    pub fn alpha(&self) -> f32 {
        self.alpha_at(self.started.elapsed())
    }

    /// Opacity after `elapsed` time, clamped to [0, 1].
    pub fn alpha_at(&self, elapsed: Duration) -> f32 {
        let progress = (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0);
        match self.direction {
            FadeDirection::In => progress,
            FadeDirection::Out => 1.0 - progress,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.started.elapsed() >= self.duration
    }
}

/// Linear interpolation between two colors; `t == 0.0` yields `from`,
/// `t == 1.0` yields `to`. Non-RGB palette colors cannot be interpolated
/// and snap at the halfway point.
pub fn blend(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(fr, fg, fb), Color::Rgb(tr, tg, tb)) => Color::Rgb(
            lerp_channel(fr, tr, t),
            lerp_channel(fg, tg, t),
            lerp_channel(fb, tb, t),
        ),
        _ => {
            if t < 0.5 {
                from
            } else {
                to
            }
        }
    }
}

fn lerp_channel(from: u8, to: u8, t: f32) -> u8 {
    (from as f32 + (to as f32 - from as f32) * t).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_in_alpha_ramps_up() {
        let fade = Fade::fade_in();
        assert_eq!(fade.alpha_at(Duration::ZERO), 0.0);
        assert!((fade.alpha_at(Duration::from_millis(100)) - 0.5).abs() < 0.01);
        assert_eq!(fade.alpha_at(FADE_IN), 1.0);
        // Clamped past the end
        assert_eq!(fade.alpha_at(Duration::from_secs(10)), 1.0);
    }

    #[test]
    fn test_fade_out_alpha_ramps_down() {
        let fade = Fade::fade_out();
        assert_eq!(fade.alpha_at(Duration::ZERO), 1.0);
        assert!((fade.alpha_at(Duration::from_millis(250)) - 0.5).abs() < 0.01);
        assert_eq!(fade.alpha_at(FADE_OUT), 0.0);
        assert_eq!(fade.alpha_at(Duration::from_secs(10)), 0.0);
    }

    #[test]
    fn test_blend_endpoints_and_midpoint() {
        let black = Color::Rgb(0, 0, 0);
        let white = Color::Rgb(255, 255, 255);

        assert_eq!(blend(black, white, 0.0), black);
        assert_eq!(blend(black, white, 1.0), white);
        assert_eq!(blend(black, white, 0.5), Color::Rgb(128, 128, 128));
    }

    #[test]
    fn test_blend_non_rgb_snaps() {
        assert_eq!(blend(Color::DarkGray, Color::White, 0.2), Color::DarkGray);
        assert_eq!(blend(Color::DarkGray, Color::White, 0.8), Color::White);
    }
}
