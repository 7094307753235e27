use anyhow::{ensure, Result};
use clap::{Parser, ValueEnum};
use greeting_core::{
    CameraConfig, Effect, EngineConfig, GreetingEngine, InteractionState, PressSource, Snapshot,
    CONTINUE_BUTTON_DELAY_SECS, REQUIRED_BLOW_SECS,
};
use rand::prelude::*;

/// Replays a scripted press-and-hold against the engine and logs what a
/// renderer would see.
#[derive(Parser, Debug)]
#[command(name = "greeting-sim", version)]
struct Args {
    /// Nominal frame rate of the simulated render loop.
    #[arg(long, default_value_t = 60.0)]
    fps: f64,
    /// Scene time at which the press begins.
    #[arg(long, default_value_t = 5.0)]
    press_at: f64,
    /// How long the press is held.
    #[arg(long, default_value_t = REQUIRED_BLOW_SECS + 0.2)]
    hold: f64,
    /// Scene seconds to simulate.
    #[arg(long, default_value_t = 10.0)]
    duration: f64,
    /// Uniform frame-time jitter, in milliseconds.
    #[arg(long, default_value_t = 0.0)]
    jitter_ms: f64,
    /// Scene time at which rendering stalls once.
    #[arg(long)]
    stall_at: Option<f64>,
    /// Length of the stall.
    #[arg(long, default_value_t = 0.5)]
    stall_secs: f64,
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Ease the camera back to the wide shot after an early release.
    #[arg(long)]
    return_to_wide: bool,
    /// Run the greeting card and continue button before the scene.
    #[arg(long)]
    with_intro: bool,
    /// Input device the scripted press comes from.
    #[arg(long, value_enum, default_value_t = Source::Pointer)]
    source: Source,
    /// Log a snapshot line every N frames (0 disables).
    #[arg(long, default_value_t = 30)]
    report_every: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Source {
    Mouse,
    Touch,
    Pointer,
    Keyboard,
}

impl Source {
    fn press_source(self) -> PressSource {
        match self {
            Source::Mouse => PressSource::Mouse,
            Source::Touch => PressSource::Touch(0),
            Source::Pointer => PressSource::Pointer(1),
            Source::Keyboard => PressSource::Keyboard,
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    DismissCard,
    Continue,
    PressStart,
    PressEnd,
}

/// Host-time schedule of input actions, sorted by time.
fn build_script(args: &Args) -> (Vec<(f64, Action)>, f64) {
    let mut script = Vec::new();
    let scene_start = if args.with_intro {
        let dismiss_at = 0.5;
        script.push((dismiss_at, Action::DismissCard));
        let continue_at = dismiss_at + CONTINUE_BUTTON_DELAY_SECS + 0.25;
        script.push((continue_at, Action::Continue));
        continue_at
    } else {
        0.0
    };
    script.push((scene_start + args.press_at, Action::PressStart));
    script.push((scene_start + args.press_at + args.hold, Action::PressEnd));
    script.sort_by(|a, b| a.0.total_cmp(&b.0));
    (script, scene_start)
}

struct Sim {
    engine: GreetingEngine,
    effects: Vec<Effect>,
    next_poll: Option<f64>,
    poll_secs: f64,
    source: PressSource,
    extinguished_at: Option<f64>,
    weak_attempts: usize,
}

impl Sim {
    fn apply(&mut self, at: f64, action: Action) {
        log::debug!("[sim] t={:.3} {:?}", at, action);
        match action {
            Action::DismissCard => {
                self.engine.dismiss_card(at, &mut self.effects);
            }
            Action::Continue => {
                if !self.engine.continue_to_scene(at, &mut self.effects) {
                    log::warn!("[sim] continue refused at t={:.3}", at);
                }
            }
            Action::PressStart => self
                .engine
                .press_start(at, self.source, &mut self.effects),
            Action::PressEnd => self
                .engine
                .press_end(at, self.source, &mut self.effects),
        }
        self.drain(at);
    }

    /// Fire every poll-timer tick due up to `until`.
    fn poll_until(&mut self, until: f64) {
        while let Some(at) = self.next_poll.filter(|at| *at <= until) {
            self.next_poll = Some(at + self.poll_secs);
            let progress = self.engine.poll_gesture(at, &mut self.effects);
            log::debug!("[sim] t={:.3} poll progress={:.2}", at, progress);
            self.drain(at);
        }
    }

    fn drain(&mut self, at: f64) {
        for effect in std::mem::take(&mut self.effects) {
            match effect {
                Effect::StartProgressTimer => self.next_poll = Some(at + self.poll_secs),
                Effect::StopProgressTimer => self.next_poll = None,
                Effect::Extinguished => {
                    self.extinguished_at.get_or_insert(at);
                    log::info!("[sim] t={:.3} candle out, celebration shown", at);
                }
                Effect::BlowTooWeak { held_secs } => {
                    self.weak_attempts += 1;
                    log::info!("[sim] t={:.3} blow harder! (held {:.2}s)", at, held_secs);
                }
                Effect::PlayIntroMusic | Effect::StopIntroMusic | Effect::PlaySceneMusic => {
                    log::info!("[sim] t={:.3} audio: {:?}", at, effect);
                }
            }
        }
    }
}

fn report(frame: usize, snap: &Snapshot) {
    let revealed = snap
        .element_transforms
        .values()
        .filter(|t| t.scale > 0.0)
        .count();
    let cam = snap.camera.position;
    log::info!(
        "[sim] frame={} t={:.3} scene={} state={:?} progress={:.2} flame={:.2} cam=({:.2},{:.2},{:.2}) revealed={}/{}",
        frame,
        snap.elapsed_secs,
        snap.scene_secs.map_or("-".to_string(), |s| format!("{:.2}", s)),
        snap.interaction_state,
        snap.gesture_progress,
        snap.flames.main.scale,
        cam.x,
        cam.y,
        cam.z,
        revealed,
        snap.element_transforms.len(),
    );
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    ensure!(args.fps > 0.0, "--fps must be positive");
    ensure!(args.hold >= 0.0, "--hold must not be negative");
    ensure!(args.duration > 0.0, "--duration must be positive");

    let config = EngineConfig {
        skip_intro: !args.with_intro,
        camera: CameraConfig {
            return_to_wide_on_release: args.return_to_wide,
            ..CameraConfig::default()
        },
        ..EngineConfig::default()
    };
    let poll_secs = config.gesture.poll_interval_ms as f64 / 1000.0;
    let engine = GreetingEngine::new(config)?;
    let mut sim = Sim {
        engine,
        effects: Vec::new(),
        next_poll: None,
        poll_secs,
        source: args.source.press_source(),
        extinguished_at: None,
        weak_attempts: 0,
    };

    let (script, scene_start) = build_script(&args);
    let end = scene_start + args.duration;
    let frame_secs = 1.0 / args.fps;
    let jitter = args.jitter_ms / 1000.0;
    let mut rng = StdRng::seed_from_u64(args.seed);
    let mut stall = args.stall_at.map(|at| scene_start + at);
    let mut pending = script.into_iter().peekable();

    log::info!(
        "[sim] fps={} press_at={:.2}s hold={:.2}s duration={:.2}s jitter={}ms",
        args.fps,
        args.press_at,
        args.hold,
        args.duration,
        args.jitter_ms
    );

    let mut stamp = 0.0_f64;
    let mut frame = 0usize;
    let mut last = sim.engine.tick(Some(stamp), &mut sim.effects);
    sim.drain(stamp);
    while stamp < end {
        let mut step = frame_secs;
        if jitter > 0.0 {
            step += rng.gen_range(-jitter..=jitter);
        }
        if let Some(at) = stall.filter(|at| stamp + step >= *at) {
            log::info!("[sim] t={:.3} render stall of {:.2}s", at, args.stall_secs);
            step += args.stall_secs;
            stall = None;
        }
        let next = stamp + step.max(0.0);

        // input and timer callbacks between frames, in host-time order
        while let Some(&(at, action)) = pending.peek() {
            if at > next {
                break;
            }
            sim.poll_until(at);
            sim.apply(at, action);
            pending.next();
        }
        sim.poll_until(next);

        stamp = next;
        frame += 1;
        last = sim.engine.tick(Some(stamp), &mut sim.effects);
        sim.drain(stamp);
        if args.report_every > 0 && frame % args.report_every == 0 {
            report(frame, &last);
        }
    }
    report(frame, &last);

    match sim.extinguished_at {
        Some(at) => log::info!(
            "[sim] done: extinguished at t={:.3} (scene {:.3}), {} weak attempt(s)",
            at,
            at - scene_start,
            sim.weak_attempts
        ),
        None => log::info!(
            "[sim] done: candle still lit ({:?}), {} weak attempt(s)",
            last.interaction_state,
            sim.weak_attempts
        ),
    }
    if last.interaction_state == InteractionState::Extinguished && sim.next_poll.is_some() {
        log::warn!("[sim] poll timer outlived the gesture");
    }
    sim.engine.shutdown(&mut sim.effects);
    sim.drain(stamp);
    Ok(())
}
