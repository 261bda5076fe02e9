use crate::constants::*;
use crate::dom;
use folio_core::constants::THEME_CYCLE_INTERVAL_MS;
use folio_core::theme::{Accent, ThemeCycle};
use folio_core::Interaction;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedTheme = Rc<RefCell<ThemeCycle>>;

fn paint(document: &web::Document, accent: &Accent) {
    let hex = accent.hex();
    dom::set_root_var(document, ACCENT_VAR, &hex);
    if let Ok(Some(meta)) = document.query_selector(THEME_COLOR_META_SELECTOR) {
        _ = meta.set_attribute("content", &hex);
    }
}

/// Stop the auto-cycle after any user interaction.
#[inline]
pub fn note_interaction(theme: &SharedTheme) {
    theme.borrow_mut().handle(Interaction::UserInteracted);
}

/// Apply the first accent, start the auto-cycle timer and wire the toggle.
pub fn wire(document: &web::Document) -> SharedTheme {
    let theme: SharedTheme = Rc::new(RefCell::new(ThemeCycle::default()));
    paint(document, theme.borrow().current());

    if let Some(window) = web::window() {
        let (doc, theme_cb) = (document.clone(), theme.clone());
        let closure = Closure::wrap(Box::new(move || {
            let next = theme_cb.borrow_mut().tick();
            if let Some(accent) = next {
                paint(&doc, accent);
            }
        }) as Box<dyn FnMut()>);
        _ = window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            THEME_CYCLE_INTERVAL_MS,
        );
        closure.forget();
    }

    let (doc, theme_cb) = (document.clone(), theme.clone());
    dom::add_click_listener(document, THEME_TOGGLE_ID, move || {
        let accent = theme_cb.borrow_mut().toggle();
        log::debug!("[theme] toggled to {}", accent.name);
        paint(&doc, accent);
    });

    theme
}
