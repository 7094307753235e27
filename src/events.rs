use crate::constants::*;
use crate::dom;
use crate::frame::FrameContext;
use crate::view::is_blow_key;
use greeting_core::PressSource;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

fn with_ctx(ctx: &Rc<RefCell<FrameContext>>, f: impl FnOnce(&mut FrameContext)) {
    match ctx.try_borrow_mut() {
        Ok(mut ctx) => f(&mut ctx),
        Err(_) => log::warn!("[events] dropped input, context busy"),
    }
}

pub fn wire_intro_buttons(document: &web::Document, ctx: &Rc<RefCell<FrameContext>>) {
    let card = ctx.clone();
    dom::add_click_listener(document, CARD_ID, move || {
        with_ctx(&card, |c| c.dismiss_card());
    });
    let cont = ctx.clone();
    dom::add_click_listener(document, CONTINUE_BUTTON_ID, move || {
        with_ctx(&cont, |c| c.continue_to_scene());
    });
}

/// Press-and-hold on the blow button. Pointer events cover mouse and touch;
/// the default action is suppressed so touch does not also synthesize a mouse
/// press or scroll the page.
pub fn wire_blow_button(document: &web::Document, ctx: &Rc<RefCell<FrameContext>>) {
    let Some(button) = document.get_element_by_id(BLOW_BUTTON_ID) else {
        log::warn!("[dom] missing #{}", BLOW_BUTTON_ID);
        return;
    };

    let down = ctx.clone();
    let target = button.clone();
    dom::add_pointer_listener(&button, "pointerdown", move |ev: web::PointerEvent| {
        ev.prevent_default();
        _ = target.set_pointer_capture(ev.pointer_id());
        with_ctx(&down, |c| c.press_start(PressSource::Pointer(ev.pointer_id())));
    });

    for event in ["pointerup", "pointercancel"] {
        let up = ctx.clone();
        dom::add_pointer_listener(&button, event, move |ev: web::PointerEvent| {
            ev.prevent_default();
            with_ctx(&up, |c| c.press_end(PressSource::Pointer(ev.pointer_id())));
        });
    }

    let leave = ctx.clone();
    dom::add_pointer_listener(&button, "pointerleave", move |_ev: web::PointerEvent| {
        with_ctx(&leave, |c| c.release_all());
    });
}

pub fn wire_page_lifecycle(ctx: &Rc<RefCell<FrameContext>>) {
    let blur = ctx.clone();
    dom::add_window_listener("blur", move || {
        with_ctx(&blur, |c| c.release_all());
    });
    let hide = ctx.clone();
    dom::add_window_listener("pagehide", move || {
        with_ctx(&hide, |c| c.shutdown());
    });
}

/// Holding the space bar blows like holding the button. Auto-repeat keydowns
/// are absorbed by the press latch.
pub fn wire_blow_key(ctx: &Rc<RefCell<FrameContext>>) {
    let down = ctx.clone();
    dom::add_key_listener("keydown", move |ev: web::KeyboardEvent| {
        if !is_blow_key(&ev.key()) {
            return;
        }
        ev.prevent_default();
        if ev.repeat() {
            return;
        }
        with_ctx(&down, |c| c.press_start(PressSource::Keyboard));
    });
    let up = ctx.clone();
    dom::add_key_listener("keyup", move |ev: web::KeyboardEvent| {
        if is_blow_key(&ev.key()) {
            with_ctx(&up, |c| c.press_end(PressSource::Keyboard));
        }
    });
}
