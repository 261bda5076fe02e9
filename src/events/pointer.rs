use crate::constants::*;
use crate::dom;
use crate::frame::SharedScheduler;
use crate::surface::client_rect;
use crate::theme::{self, SharedTheme};
use folio_core::theme::focal_point_css;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A preview canvas and the scheduler slot it feeds.
#[derive(Clone)]
pub struct PressTarget {
    pub slot: usize,
    pub canvas: web::HtmlCanvasElement,
}

/// Route pointerdown on each preview canvas to its slot.
pub fn wire_preview_press(scheduler: &SharedScheduler, targets: Vec<PressTarget>) {
    for PressTarget { slot, canvas } in targets {
        let scheduler = scheduler.clone();
        let target = canvas.clone();
        dom::listen(canvas.as_ref(), "pointerdown", move |ev: web::PointerEvent| {
            let Some(uv) = client_rect(&target).uv_of(ev.client_x() as f64, ev.client_y() as f64)
            else {
                return;
            };
            if scheduler.borrow_mut().press(slot, uv).is_some() {
                log::trace!("[pointer] press slot {} at {:?}", slot, uv);
            }
        });
    }
}

/// Track the pointer for the page background, writing `--mx`/`--my` at
/// most once per animation frame.
pub fn wire_aurora(window: &web::Window, document: &web::Document) {
    let latest: Rc<Cell<(f64, f64)>> = Rc::new(Cell::new((0.0, 0.0)));
    let queued = Rc::new(Cell::new(false));

    let apply = {
        let (doc, latest, queued) = (document.clone(), latest.clone(), queued.clone());
        Rc::new(Closure::wrap(Box::new(move || {
            queued.set(false);
            let Some(w) = web::window() else {
                return;
            };
            let view_w = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            let view_h = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            let (x, y) = latest.get();
            let (mx, my) = focal_point_css(x, y, view_w, view_h);
            dom::set_root_var(&doc, FOCAL_X_VAR, &mx);
            dom::set_root_var(&doc, FOCAL_Y_VAR, &my);
        }) as Box<dyn FnMut()>))
    };

    dom::listen(window.as_ref(), "pointermove", move |ev: web::PointerEvent| {
        latest.set((ev.client_x() as f64, ev.client_y() as f64));
        if queued.replace(true) {
            return;
        }
        if let Some(w) = web::window() {
            _ = w.request_animation_frame((*apply).as_ref().unchecked_ref());
        }
    });
}

fn add_ripple(document: &web::Document, host: &web::Element, client_x: f64, client_y: f64) {
    let rect = client_rect(host);
    let Ok(ripple) = document.create_element("span") else {
        return;
    };
    ripple.set_class_name(RIPPLE_CLASS);
    if let Some(el) = ripple.dyn_ref::<web::HtmlElement>() {
        let style = el.style();
        _ = style.set_property("left", &format!("{}px", client_x - rect.left));
        _ = style.set_property("top", &format!("{}px", client_y - rect.top));
    }
    if host.append_child(&ripple).is_err() {
        return;
    }
    if let Some(w) = web::window() {
        let remove = Closure::once_into_js(move || ripple.remove());
        _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
            remove.unchecked_ref(),
            RIPPLE_LIFETIME_MS,
        );
    }
}

/// Press ripple on every `.iridescent` element.
pub fn wire_ripples(document: &web::Document, theme: &SharedTheme) {
    for host in dom::query_all(document, RIPPLE_HOST_SELECTOR) {
        let (doc, theme, target) = (document.clone(), theme.clone(), host.clone());
        dom::listen(host.as_ref(), "pointerdown", move |ev: web::PointerEvent| {
            add_ripple(&doc, &target, ev.client_x() as f64, ev.client_y() as f64);
            theme::note_interaction(&theme);
        });
    }
}
