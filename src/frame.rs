use crate::audio::{self, BackgroundMusic};
use crate::constants::*;
use crate::overlay;
use crate::timer::PollTimer;
use crate::view::OverlayView;
use greeting_core::{Effect, GreetingEngine, PressSource, Snapshot, WallClock};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

thread_local! {
    static RENDERER: RefCell<Option<js_sys::Function>> = RefCell::new(None);
}

/// Register the JS callback that receives one snapshot per frame.
pub fn set_renderer(callback: js_sys::Function) {
    RENDERER.with(|r| *r.borrow_mut() = Some(callback));
    log::info!("[frame] renderer attached");
}

/// Host-side state shared by the frame loop, DOM listeners and the poll timer.
pub struct FrameContext {
    pub engine: GreetingEngine,
    pub clock: WallClock,
    pub document: web::Document,
    pub intro_music: Option<BackgroundMusic>,
    pub scene_music: Option<BackgroundMusic>,
    poll_timer: Option<PollTimer>,
    // cancelled from inside its own callback; released on the next frame
    retired_timer: Option<PollTimer>,
    effects: Vec<Effect>,
    overlay: Option<OverlayView>,
    this: Weak<RefCell<FrameContext>>,
}

impl FrameContext {
    pub fn new(engine: GreetingEngine, document: web::Document) -> Rc<RefCell<Self>> {
        Rc::new_cyclic(|this| {
            RefCell::new(Self {
                engine,
                clock: WallClock::new(),
                document,
                intro_music: audio::load("intro", INTRO_MUSIC_URL, INTRO_MUSIC_VOLUME),
                scene_music: audio::load("scene", SCENE_MUSIC_URL, SCENE_MUSIC_VOLUME),
                poll_timer: None,
                retired_timer: None,
                effects: Vec::new(),
                overlay: None,
                this: this.clone(),
            })
        })
    }

    pub fn frame(&mut self) -> Snapshot {
        self.retired_timer = None;
        let stamp = self.clock.now_secs();
        let snap = self.engine.tick(Some(stamp), &mut self.effects);
        self.apply_effects();
        self.present(&snap);
        snap
    }

    pub fn dismiss_card(&mut self) {
        let stamp = self.clock.now_secs();
        self.engine.dismiss_card(stamp, &mut self.effects);
        self.apply_effects();
    }

    pub fn continue_to_scene(&mut self) {
        let stamp = self.clock.now_secs();
        if !self.engine.continue_to_scene(stamp, &mut self.effects) {
            log::debug!("[flow] continue ignored");
        }
        self.apply_effects();
    }

    pub fn press_start(&mut self, source: PressSource) {
        let stamp = self.clock.now_secs();
        self.engine.press_start(stamp, source, &mut self.effects);
        self.apply_effects();
    }

    pub fn press_end(&mut self, source: PressSource) {
        let stamp = self.clock.now_secs();
        self.engine.press_end(stamp, source, &mut self.effects);
        self.apply_effects();
    }

    pub fn release_all(&mut self) {
        let stamp = self.clock.now_secs();
        self.engine.release_all(stamp, &mut self.effects);
        self.apply_effects();
    }

    pub fn shutdown(&mut self) {
        self.engine.shutdown(&mut self.effects);
        self.apply_effects();
        if let Some(music) = &self.intro_music {
            music.stop();
        }
        if let Some(music) = &self.scene_music {
            music.stop();
        }
    }

    fn poll(&mut self) {
        let stamp = self.clock.now_secs();
        let progress = self.engine.poll_gesture(stamp, &mut self.effects);
        log::debug!("[gesture] progress {:.2}", progress);
        self.apply_effects();
    }

    fn apply_effects(&mut self) {
        for effect in std::mem::take(&mut self.effects) {
            match effect {
                Effect::PlayIntroMusic => {
                    if let Some(music) = &self.intro_music {
                        music.play();
                    }
                }
                Effect::StopIntroMusic => {
                    if let Some(music) = &self.intro_music {
                        music.stop();
                    }
                }
                Effect::PlaySceneMusic => {
                    if let Some(music) = &self.scene_music {
                        music.play();
                    }
                }
                Effect::StartProgressTimer => self.start_poll_timer(),
                Effect::StopProgressTimer => {
                    if let Some(mut timer) = self.poll_timer.take() {
                        timer.cancel();
                        self.retired_timer = Some(timer);
                    }
                }
                Effect::Extinguished => log::info!("[flow] celebration"),
                Effect::BlowTooWeak { held_secs } => {
                    log::info!("[flow] hint shown after {:.2}s hold", held_secs)
                }
            }
        }
    }

    fn start_poll_timer(&mut self) {
        let this = self.this.clone();
        let timer = PollTimer::start(self.engine.poll_interval_ms(), move || {
            let Some(ctx) = this.upgrade() else { return };
            match ctx.try_borrow_mut() {
                Ok(mut ctx) => ctx.poll(),
                Err(_) => log::debug!("[gesture] poll skipped, context busy"),
            };
        });
        match timer {
            Ok(timer) => self.poll_timer = Some(timer),
            // frames still advance the gesture without the timer
            Err(e) => log::warn!("[gesture] {}", e),
        }
    }

    fn present(&mut self, snap: &Snapshot) {
        let view = OverlayView::from_snapshot(snap);
        if self.overlay.as_ref() != Some(&view) {
            overlay::apply(&self.document, self.overlay.as_ref(), &view);
            self.overlay = Some(view);
        }
    }
}

/// Hand the frame to the JS renderer. Called with no borrow of the context
/// held, so the renderer may call back into exported functions.
fn render(snap: &Snapshot) {
    let Some(renderer) = RENDERER.with(|r| r.borrow().clone()) else {
        return;
    };
    #[allow(deprecated)]
    let value = match JsValue::from_serde(snap) {
        Ok(v) => v,
        Err(e) => {
            log::warn!("[frame] snapshot serialization failed: {}", e);
            return;
        }
    };
    if let Err(e) = renderer.call1(&JsValue::NULL, &value) {
        log::warn!("[frame] renderer threw: {:?}", e);
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let snap = frame_ctx.borrow_mut().frame();
        render(&snap);
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
