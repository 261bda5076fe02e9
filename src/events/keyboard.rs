use crate::dom;
use crate::modal::Modal;
use std::rc::Rc;
use web_sys as web;

#[inline]
pub fn closes_modal(key: &str) -> bool {
    key == "Escape"
}

pub fn wire_global_keydown(window: &web::Window, modal: Rc<Modal>) {
    dom::listen(window.as_ref(), "keydown", move |ev: web::KeyboardEvent| {
        if closes_modal(&ev.key()) {
            modal.close();
        }
    });
}
