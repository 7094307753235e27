//! Frame clock shared by every time-derived component.
//!
//! Hosts hand in raw timestamps (seconds, any monotonic base). The clock keeps
//! two views of time: `elapsed_secs` follows the host's wall time so that
//! hold durations and reveal thresholds stay honest, while `delta_secs` is
//! clamped so exponential smoothing cannot overshoot after a stall.

use crate::constants::{MAX_DELTA_SECS, NOMINAL_DELTA_SECS};
use instant::Instant;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ClockState {
    pub elapsed_secs: f64,
    pub delta_secs: f32,
}

#[derive(Clone, Debug, Default)]
pub struct Clock {
    state: ClockState,
    last_stamp: Option<f64>,
}

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ClockState {
        self.state
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.state.elapsed_secs
    }

    /// Advance by one frame.
    ///
    /// `None` (or a non-finite stamp) means the host could not read its timer;
    /// the clock then advances by a nominal frame and resynchronises on the
    /// next real stamp. Stamps that go backwards count as a zero-length frame.
    pub fn tick(&mut self, stamp_secs: Option<f64>) -> ClockState {
        match stamp_secs.filter(|s| s.is_finite()) {
            Some(now) => {
                let gap = self.last_stamp.map_or(0.0, |prev| (now - prev).max(0.0));
                if gap > MAX_DELTA_SECS as f64 {
                    log::debug!("[clock] stall of {:.3}s, delta clamped", gap);
                }
                self.last_stamp = Some(self.last_stamp.map_or(now, |prev| prev.max(now)));
                self.state.elapsed_secs += gap;
                self.state.delta_secs = (gap as f32).min(MAX_DELTA_SECS);
            }
            None => {
                self.last_stamp = None;
                self.state.elapsed_secs += NOMINAL_DELTA_SECS as f64;
                self.state.delta_secs = NOMINAL_DELTA_SECS;
            }
        }
        self.state
    }

    /// Map an input-event stamp onto the elapsed timeline without advancing
    /// the frame. Never returns less than the current elapsed time.
    pub fn observe(&self, stamp_secs: f64) -> f64 {
        match self.last_stamp {
            Some(prev) if stamp_secs.is_finite() => {
                self.state.elapsed_secs + (stamp_secs - prev).max(0.0)
            }
            _ => self.state.elapsed_secs,
        }
    }
}

/// Monotonic stamp source for hosts without a frame timestamp of their own.
#[derive(Clone, Copy, Debug)]
pub struct WallClock {
    start: Instant,
}

impl WallClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn now_secs(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

impl Default for WallClock {
    fn default() -> Self {
        Self::new()
    }
}
