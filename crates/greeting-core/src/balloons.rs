use crate::constants::*;
use rand::prelude::*;

/// One background balloon on the greeting card screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Balloon {
    pub x_vw: f32,
    pub delay_secs: f32,
    pub duration_secs: f32,
    pub color_rgb: [f32; 3],
}

impl Balloon {
    /// Fraction of the top-to-bottom drift at intro time `t`; loops forever.
    pub fn progress(&self, t: f64) -> Option<f32> {
        let since = t - self.delay_secs as f64;
        if since < 0.0 {
            return None;
        }
        let duration = self.duration_secs as f64;
        Some((since.rem_euclid(duration) / duration) as f32)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct BalloonFrame {
    pub x_vw: f32,
    pub progress: f32,
    pub color_rgb: [f32; 3],
}

/// Seeded so every run draws the same sky.
pub fn make_balloons(seed: u64, count: usize) -> Vec<Balloon> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| Balloon {
            x_vw: rng.gen::<f32>() * 100.0,
            delay_secs: rng.gen::<f32>() * BALLOON_DELAY_MAX_SECS,
            duration_secs: BALLOON_DURATION_MIN_SECS + rng.gen::<f32>() * BALLOON_DURATION_SPAN_SECS,
            color_rgb: *BALLOON_COLORS.choose(&mut rng).unwrap_or(&BALLOON_COLORS[0]),
        })
        .collect()
}

pub fn balloon_frames(balloons: &[Balloon], t: f64) -> Vec<BalloonFrame> {
    balloons
        .iter()
        .filter_map(|b| {
            b.progress(t).map(|progress| BalloonFrame {
                x_vw: b.x_vw,
                progress,
                color_rgb: b.color_rgb,
            })
        })
        .collect()
}
