use crate::constants::*;
use crate::interaction::InteractionState;
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraConfig {
    pub initial_position: Vec3,
    pub initial_look_at: Vec3,
    pub close_up_position: Vec3,
    pub close_up_look_at: Vec3,
    pub close_up_rate: f32,
    /// Ease back to the initial pose when a hold ends without success.
    pub return_to_wide_on_release: bool,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            initial_position: CAMERA_INITIAL_POSITION,
            initial_look_at: CAMERA_INITIAL_LOOK_AT,
            close_up_position: CAMERA_CLOSE_UP_POSITION,
            close_up_look_at: CAMERA_CLOSE_UP_LOOK_AT,
            close_up_rate: CAMERA_CLOSE_UP_RATE,
            return_to_wide_on_release: false,
        }
    }
}

/// Live camera pose plus the orbit limits the host should enforce.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CameraPose {
    pub position: Vec3,
    pub look_at: Vec3,
    pub orbit_target: Vec3,
    pub min_distance: f32,
    pub max_distance: f32,
}

#[inline]
pub fn distance_bounds(state: InteractionState) -> (f32, f32) {
    match state {
        InteractionState::Blowing => CAMERA_CLOSE_DISTANCE,
        _ => CAMERA_WIDE_DISTANCE,
    }
}

#[inline]
pub fn orbit_target(state: InteractionState) -> Vec3 {
    match state {
        InteractionState::Blowing => CAMERA_CLOSE_UP_ORBIT_TARGET,
        _ => Vec3::ZERO,
    }
}

/// Smooths the camera toward the close-up while blowing and otherwise leaves
/// it to the user's orbit control.
#[derive(Clone, Debug)]
pub struct CameraController {
    config: CameraConfig,
    position: Vec3,
    look_at: Vec3,
    returning: bool,
    prev_state: InteractionState,
}

impl CameraController {
    pub fn new(config: CameraConfig) -> Self {
        Self {
            position: config.initial_position,
            look_at: config.initial_look_at,
            config,
            returning: false,
            prev_state: InteractionState::Idle,
        }
    }

    pub fn is_returning(&self) -> bool {
        self.returning
    }

    pub fn step(&mut self, state: InteractionState, delta_secs: f32) -> CameraPose {
        let alpha = (delta_secs.max(0.0) * self.config.close_up_rate).min(1.0);
        if state == InteractionState::Blowing {
            self.returning = false;
            self.approach(self.config.close_up_position, self.config.close_up_look_at, alpha);
        } else {
            if self.prev_state == InteractionState::Blowing
                && state == InteractionState::Idle
                && self.config.return_to_wide_on_release
            {
                log::debug!("[camera] returning to wide shot");
                self.returning = true;
            }
            if self.returning {
                self.approach(self.config.initial_position, self.config.initial_look_at, alpha);
                let settled = self.position.distance(self.config.initial_position)
                    < CAMERA_SETTLE_EPSILON
                    && self.look_at.distance(self.config.initial_look_at) < CAMERA_SETTLE_EPSILON;
                if settled {
                    self.returning = false;
                }
            }
        }
        self.prev_state = state;
        self.pose(state)
    }

    fn approach(&mut self, position: Vec3, look_at: Vec3, alpha: f32) {
        self.position = self.position.lerp(position, alpha);
        self.look_at = self.look_at.lerp(look_at, alpha);
    }

    /// Accept a pose written back by the host's orbit control. Ignored while
    /// blowing; otherwise the distance to the orbit target is clamped to the
    /// current bounds and any return animation stops.
    pub fn sync_user_pose(&mut self, state: InteractionState, position: Vec3, look_at: Vec3) -> bool {
        if state == InteractionState::Blowing {
            return false;
        }
        let target = orbit_target(state);
        let (min_d, max_d) = distance_bounds(state);
        let offset = position - target;
        let dist = offset.length();
        self.position = if dist > f32::EPSILON {
            target + offset * (dist.clamp(min_d, max_d) / dist)
        } else {
            position
        };
        self.look_at = look_at;
        self.returning = false;
        true
    }

    pub fn pose(&self, state: InteractionState) -> CameraPose {
        let (min_distance, max_distance) = distance_bounds(state);
        CameraPose {
            position: self.position,
            look_at: self.look_at,
            orbit_target: orbit_target(state),
            min_distance,
            max_distance,
        }
    }
}
