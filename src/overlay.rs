use crate::constants::*;
use crate::view::{OverlayView, Panel};
use web_sys as web;

fn panel_id(panel: Panel) -> &'static str {
    match panel {
        Panel::Card => CARD_ID,
        Panel::ContinueButton => CONTINUE_BUTTON_ID,
        Panel::BlowButton => BLOW_BUTTON_ID,
        Panel::Vignette => VIGNETTE_ID,
        Panel::HardTryMessage => HARD_TRY_ID,
        Panel::Celebration => CELEBRATION_ID,
    }
}

#[inline]
pub fn show(document: &web::Document, element_id: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        _ = el.class_list().remove_1(HIDDEN_CLASS);
        // fallback for environments without CSS class
        _ = el.remove_attribute("hidden");
    }
}

#[inline]
pub fn hide(document: &web::Document, element_id: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        _ = el.class_list().add_1(HIDDEN_CLASS);
        // fallback
        _ = el.set_attribute("hidden", "");
    }
}

/// Push the differences between `prev` and `next` into the page.
pub fn apply(document: &web::Document, prev: Option<&OverlayView>, next: &OverlayView) {
    for (panel, visible) in next.changed_panels(prev) {
        if visible {
            show(document, panel_id(panel));
        } else {
            hide(document, panel_id(panel));
        }
    }

    let button = next.button;
    if prev.map(|p| p.button) == Some(button) {
        return;
    }
    crate::dom::set_text(document, BLOW_LABEL_ID, button.label);
    crate::dom::set_style(
        document,
        BLOW_PROGRESS_ID,
        &crate::view::progress_bar_style(button.percent),
    );
    if let Some(el) = document.get_element_by_id(BLOW_BUTTON_ID) {
        _ = el.class_list().toggle_with_force(PRESSED_CLASS, button.pressed);
    }
}
