use crate::constants::{
    GESTURE_POLL_INTERVAL_MS, HARD_TRY_MESSAGE_SECS, HOLD_TOLERANCE_SECS, REQUIRED_BLOW_SECS,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureConfig {
    pub required_secs: f64,
    pub hard_try_message_secs: f64,
    pub poll_interval_ms: i32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            required_secs: REQUIRED_BLOW_SECS,
            hard_try_message_secs: HARD_TRY_MESSAGE_SECS,
            poll_interval_ms: GESTURE_POLL_INTERVAL_MS,
        }
    }
}

/// One sustained press-hold attempt.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureSession {
    pub started_at: f64,
    pub progress: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEvent {
    /// The hold reached the required duration; the session is gone.
    Success { held_secs: f64 },
    /// The press ended early; the session is gone.
    Cancelled { held_secs: f64 },
}

/// Measures a press-hold against the required duration.
///
/// At most one session exists at a time. Every call is applied atomically to
/// the session, so the render tick and the progress timer may both drive it
/// from the same thread in any order.
#[derive(Clone, Debug, Default)]
pub struct GestureTracker {
    config: GestureConfig,
    session: Option<GestureSession>,
}

impl GestureTracker {
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            session: None,
        }
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    pub fn session(&self) -> Option<&GestureSession> {
        self.session.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Progress of the live session, 0 when idle.
    pub fn progress(&self) -> f32 {
        self.session.map_or(0.0, |s| s.progress)
    }

    /// Begin a session. No-op while `locked` (candle already out) or while a
    /// session is already running; returns whether a session was created.
    pub fn start_press(&mut self, now: f64, locked: bool) -> bool {
        if locked {
            log::debug!("[gesture] press ignored, interaction locked");
            return false;
        }
        if self.session.is_some() {
            return false;
        }
        self.session = Some(GestureSession {
            started_at: now,
            progress: 0.0,
        });
        log::debug!("[gesture] session started at {:.3}s", now);
        true
    }

    /// Refresh progress; emits `Success` once the hold is long enough.
    pub fn tick(&mut self, now: f64) -> Option<GestureEvent> {
        let required = self.config.required_secs;
        let session = self.session.as_mut()?;
        let held = (now - session.started_at).max(0.0);
        let progress = (held / required).min(1.0) as f32;
        session.progress = session.progress.max(progress);
        if held + HOLD_TOLERANCE_SECS >= required {
            self.session = None;
            log::debug!("[gesture] success after {:.3}s", held);
            return Some(GestureEvent::Success { held_secs: held });
        }
        None
    }

    /// End the press. A release at or past the required duration counts as
    /// success even if no tick observed it yet.
    pub fn end_press(&mut self, now: f64) -> Option<GestureEvent> {
        if let Some(success) = self.tick(now) {
            return Some(success);
        }
        let session = self.session.take()?;
        let held = (now - session.started_at).max(0.0);
        log::debug!("[gesture] cancelled after {:.3}s", held);
        Some(GestureEvent::Cancelled { held_secs: held })
    }

    /// Drop any live session without an outcome (host teardown).
    pub fn abandon(&mut self) -> bool {
        self.session.take().is_some()
    }
}
