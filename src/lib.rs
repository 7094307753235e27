#![cfg(target_arch = "wasm32")]
use glam::Vec3;
use greeting_core::{EngineConfig, GreetingEngine};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod audio;
mod constants;
mod dom;
mod events;
mod frame;
mod overlay;
mod timer;
mod view;

thread_local! {
    static CONTEXT: RefCell<Option<Rc<RefCell<frame::FrameContext>>>> = RefCell::new(None);
}

/// Called by the page with a function that draws the 3D scene from each
/// frame's snapshot.
#[wasm_bindgen]
pub fn set_renderer(callback: js_sys::Function) {
    frame::set_renderer(callback);
}

/// Write back a camera pose the user orbited to. Returns false while the
/// engine owns the camera.
#[wasm_bindgen]
pub fn sync_camera(px: f32, py: f32, pz: f32, tx: f32, ty: f32, tz: f32) -> bool {
    CONTEXT.with(|slot| {
        let slot = slot.borrow();
        let Some(ctx) = slot.as_ref() else {
            return false;
        };
        match ctx.try_borrow_mut() {
            Ok(mut ctx) => ctx
                .engine
                .sync_user_camera(Vec3::new(px, py, pz), Vec3::new(tx, ty, tz)),
            Err(_) => {
                log::warn!("[camera] sync skipped, frame context busy");
                false
            }
        }
    })
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("greeting-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn skip_intro_requested(window: &web::Window) -> bool {
    window
        .location()
        .search()
        .map(|q| q.contains("skip-intro"))
        .unwrap_or(false)
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let config = EngineConfig {
        skip_intro: skip_intro_requested(&window),
        ..EngineConfig::default()
    };
    let engine = GreetingEngine::new(config)?;
    let ctx = frame::FrameContext::new(engine, document.clone());

    events::wire_intro_buttons(&document, &ctx);
    events::wire_blow_button(&document, &ctx);
    events::wire_blow_key(&ctx);
    events::wire_page_lifecycle(&ctx);

    CONTEXT.with(|slot| *slot.borrow_mut() = Some(ctx.clone()));
    frame::start_loop(ctx);
    Ok(())
}
