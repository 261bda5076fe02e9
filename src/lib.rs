#![cfg(target_arch = "wasm32")]
use crate::events::PressTarget;
use crate::frame::FrameLoop;
use crate::surface::{AttachError, CanvasSurface};
use folio_core::{PreviewConfig, Registry};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod contact;
mod dom;
mod events;
mod frame;
mod modal;
mod reveal;
pub mod surface;
mod theme;

use constants::*;

/// Attach every tagged preview canvas and hand the set to a frame loop.
/// Canvases with a missing/unknown tag or no 2D context are skipped.
fn build_previews(document: &web::Document, theme: &theme::SharedTheme) -> Option<FrameLoop> {
    let mut registry = Registry::new(PreviewConfig::default());
    let mut targets = Vec::new();

    for el in dom::query_all(document, PREVIEW_CANVAS_SELECTOR) {
        let Ok(canvas) = el.dyn_into::<web::HtmlCanvasElement>() else {
            continue;
        };
        let surface = match CanvasSurface::attach(canvas.clone()) {
            Ok(s) => s,
            Err(AttachError::Tag(e)) => {
                log::debug!("[registry] skipping canvas: {}", e);
                continue;
            }
            Err(AttachError::NoContext) => {
                log::debug!("[surface] no 2d context, skipping canvas");
                continue;
            }
        };
        match registry.register(surface) {
            Ok(slot) => targets.push(PressTarget { slot, canvas }),
            Err(e) => log::debug!("[registry] skipping canvas: {}", e),
        }
    }

    if registry.is_empty() {
        return None;
    }
    log::info!("[registry] {} preview(s)", registry.len());

    let scheduler = Rc::new(RefCell::new(registry.into_scheduler(instant::now())));
    let theme_listener = theme.clone();
    scheduler
        .borrow_mut()
        .on_interaction(move |ev| theme_listener.borrow_mut().handle(ev));
    events::wire_preview_press(&scheduler, targets);
    Some(FrameLoop::new(scheduler))
}

fn wire_visibility(window: &web::Window, document: &web::Document, frames: FrameLoop) {
    {
        let frames = frames.clone();
        dom::listen(window.as_ref(), "pagehide", move |ev: web::PageTransitionEvent| {
            // bfcache may restore the page; only tear down for real unloads
            if !ev.persisted() {
                frames.stop();
            }
        });
    }
    let doc = document.clone();
    dom::listen(document.as_ref(), "visibilitychange", move |_: web::Event| {
        if doc.hidden() {
            frames.pause();
        } else {
            frames.resume();
        }
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let theme = theme::wire(&document);
    events::wire_aurora(&window, &document);
    if let Err(e) = reveal::wire(&document) {
        log::warn!("[reveal] {:?}", e);
    }
    events::wire_ripples(&document, &theme);

    let modal = Rc::new(modal::Modal::new(document.clone()));
    modal::wire(&document, &modal, &theme);
    events::wire_global_keydown(&window, modal);

    contact::wire(&document, &theme);

    let year = js_sys::Date::new_0().get_full_year();
    dom::set_text(&document, YEAR_ID, &year.to_string());

    if let Some(frames) = build_previews(&document, &theme) {
        frames.start();
        wire_visibility(&window, &document, frames);
    }
    Ok(())
}
