use crate::constants::*;
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Fade in `.reveal` sections once they scroll into view. Each element is
/// revealed at most once.
pub fn wire(document: &web::Document) -> anyhow::Result<()> {
    let targets = dom::query_all(document, REVEAL_SELECTOR);
    if targets.is_empty() {
        return Ok(());
    }

    let closure = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let el = entry.target();
                    _ = el.class_list().add_1(REVEAL_VISIBLE_CLASS);
                    observer.unobserve(&el);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    let observer =
        web::IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &init)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    closure.forget();

    for el in &targets {
        observer.observe(el);
    }
    log::debug!("[reveal] observing {} sections", targets.len());
    Ok(())
}
