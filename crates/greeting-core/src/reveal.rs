//! Scripted, input-independent reveal of scene elements.
//!
//! Each stage waits for its start time, then moves its element from a hidden
//! transform toward a target. Ordering comes only from distinct start times;
//! stages never wait on each other.

use crate::constants::*;
use fnv::FnvHashSet;
use glam::Vec3;
use thiserror::Error;

pub type ElementId = &'static str;

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Transform {
    pub position: Vec3,
    /// Euler angles (XYZ, radians).
    pub rotation: Vec3,
    pub scale: f32,
}

impl Transform {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Vec3::ZERO,
        scale: 1.0,
    };

    pub const fn new(position: Vec3, rotation: Vec3, scale: f32) -> Self {
        Self {
            position,
            rotation,
            scale,
        }
    }

    pub fn with_scale(self, scale: f32) -> Self {
        Self { scale, ..self }
    }

    pub fn with_position(self, position: Vec3) -> Self {
        Self { position, ..self }
    }

    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self {
            position: self.position.lerp(other.position, t),
            rotation: self.rotation.lerp(other.rotation, t),
            scale: self.scale + (other.scale - self.scale) * t,
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    /// `current = lerp(current, target, delta * rate)`: ease-out whose feel
    /// depends on `rate` (lower reads as heavier).
    Exponential { rate: f32 },
    /// Straight ramp from hidden to target over `ramp_secs`.
    Linear { ramp_secs: f32 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct RevealEntry {
    pub id: ElementId,
    pub start_secs: f64,
    pub easing: Easing,
    pub hidden: Transform,
    pub target: Transform,
}

#[derive(Debug, Error, PartialEq)]
pub enum TimelineError {
    #[error("timeline has no stages")]
    EmptyTimeline,
    #[error("stage '{0}' appears more than once")]
    DuplicateStage(ElementId),
    #[error("stage '{0}' targets an element the scene does not define")]
    UnknownElement(ElementId),
    #[error("stage '{id}' has invalid start time {start}")]
    InvalidStart { id: ElementId, start: f64 },
    #[error("stage '{id}' has a non-positive or non-finite ramp")]
    InvalidRamp { id: ElementId },
}

/// Validated, immutable list of reveal stages.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealTimeline {
    entries: Vec<RevealEntry>,
}

impl RevealTimeline {
    /// Validate `entries` against the elements the scene knows about.
    pub fn new(entries: Vec<RevealEntry>, known: &[ElementId]) -> Result<Self, TimelineError> {
        if entries.is_empty() {
            return Err(TimelineError::EmptyTimeline);
        }
        let known: FnvHashSet<ElementId> = known.iter().copied().collect();
        let mut seen = FnvHashSet::default();
        for e in &entries {
            if !known.contains(e.id) {
                return Err(TimelineError::UnknownElement(e.id));
            }
            if !seen.insert(e.id) {
                return Err(TimelineError::DuplicateStage(e.id));
            }
            if !e.start_secs.is_finite() || e.start_secs < 0.0 {
                return Err(TimelineError::InvalidStart {
                    id: e.id,
                    start: e.start_secs,
                });
            }
            let ramp_ok = match e.easing {
                Easing::Exponential { rate } => rate.is_finite() && rate > 0.0,
                Easing::Linear { ramp_secs } => ramp_secs.is_finite() && ramp_secs > 0.0,
            };
            if !ramp_ok {
                return Err(TimelineError::InvalidRamp { id: e.id });
            }
        }
        Ok(Self { entries })
    }

    /// Picnic scene: cloth, then the cake drop, then the photo frames, then
    /// the bouquet.
    pub fn picnic() -> Result<Self, TimelineError> {
        let cloth = Transform::IDENTITY;
        let cake = Transform::IDENTITY.with_scale(CAKE_SCALE);
        let frame_layout: [(Vec3, f32); 4] = [
            (Vec3::new(-2.5, 1.0, -1.0), 0.5),
            (Vec3::new(-0.9, 1.0, -1.5), 0.2),
            (Vec3::new(0.9, 1.0, -1.5), -0.2),
            (Vec3::new(2.5, 1.0, -1.0), -0.5),
        ];
        let bouquet = Transform::new(
            Vec3::new(0.8, 0.15, 0.6),
            Vec3::new(0.0, -0.3, 0.0),
            BOUQUET_SCALE,
        );

        let mut entries = vec![
            RevealEntry {
                id: ELEMENT_CLOTH,
                start_secs: CLOTH_START_SECS,
                easing: Easing::Exponential { rate: CLOTH_RATE },
                hidden: cloth.with_scale(0.0),
                target: cloth,
            },
            RevealEntry {
                id: ELEMENT_CAKE,
                start_secs: CAKE_START_SECS,
                easing: Easing::Exponential { rate: CAKE_RATE },
                hidden: cake.with_position(Vec3::new(0.0, CAKE_DROP_HEIGHT, 0.0)),
                target: cake.with_position(Vec3::new(0.0, CAKE_REST_HEIGHT, 0.0)),
            },
        ];
        for (i, (local, yaw)) in frame_layout.into_iter().enumerate() {
            // frames live in a half-scale group; bake the group into the transform
            let target = Transform::new(
                local * FRAME_GROUP_SCALE,
                Vec3::new(0.0, yaw, 0.0),
                FRAME_GROUP_SCALE,
            );
            entries.push(RevealEntry {
                id: ELEMENT_FRAMES[i],
                start_secs: FRAME_START_SECS[i],
                easing: Easing::Exponential { rate: FRAME_RATE },
                hidden: target.with_scale(0.0),
                target,
            });
        }
        entries.push(RevealEntry {
            id: ELEMENT_BOUQUET,
            start_secs: BOUQUET_START_SECS,
            easing: Easing::Exponential { rate: BOUQUET_RATE },
            hidden: bouquet.with_scale(0.0),
            target: bouquet,
        });

        Self::new(entries, &SCENE_ELEMENTS)
    }

    pub fn entries(&self) -> &[RevealEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Per-element live transforms driven by a timeline.
#[derive(Clone, Debug)]
pub struct RevealSequencer {
    timeline: RevealTimeline,
    current: Vec<Transform>,
    started: Vec<bool>,
}

impl RevealSequencer {
    pub fn new(timeline: RevealTimeline) -> Self {
        let current = timeline.entries.iter().map(|e| e.hidden).collect();
        let started = vec![false; timeline.len()];
        Self {
            timeline,
            current,
            started,
        }
    }

    pub fn timeline(&self) -> &RevealTimeline {
        &self.timeline
    }

    pub fn step(&mut self, scene_secs: f64, delta_secs: f32) {
        let delta = delta_secs.max(0.0);
        for (i, entry) in self.timeline.entries.iter().enumerate() {
            let since = scene_secs - entry.start_secs;
            if since <= 0.0 {
                self.current[i] = entry.hidden;
                self.started[i] = false;
                continue;
            }
            if !self.started[i] {
                self.started[i] = true;
                log::info!("[reveal] stage '{}' started at {:.2}s", entry.id, scene_secs);
            }
            self.current[i] = match entry.easing {
                Easing::Exponential { rate } => {
                    let t = (delta * rate).clamp(0.0, 1.0);
                    self.current[i].lerp(&entry.target, t)
                }
                Easing::Linear { ramp_secs } => {
                    let t = (since / ramp_secs as f64).clamp(0.0, 1.0) as f32;
                    entry.hidden.lerp(&entry.target, t)
                }
            };
        }
    }

    pub fn transform(&self, id: &str) -> Option<Transform> {
        self.timeline
            .entries
            .iter()
            .position(|e| e.id == id)
            .map(|i| self.current[i])
    }

    pub fn transforms(&self) -> impl Iterator<Item = (ElementId, Transform)> + '_ {
        self.timeline
            .entries
            .iter()
            .zip(self.current.iter())
            .map(|(e, t)| (e.id, *t))
    }

    /// Number of stages whose start time has passed.
    pub fn started_count(&self) -> usize {
        self.started.iter().filter(|s| **s).count()
    }
}
