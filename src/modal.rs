use crate::constants::*;
use crate::dom;
use crate::theme::{self, SharedTheme};
use folio_core::projects::ProjectCatalog;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Project details dialog. Inert when the page has no `#modal`.
pub struct Modal {
    document: web::Document,
    catalog: ProjectCatalog,
}

impl Modal {
    pub fn new(document: web::Document) -> Self {
        Self {
            document,
            catalog: ProjectCatalog::default(),
        }
    }

    pub fn open(&self, key: &str) -> bool {
        let (Some(modal), Some(content)) = (
            self.document.get_element_by_id(MODAL_ID),
            self.document.get_element_by_id(MODAL_CONTENT_ID),
        ) else {
            return false;
        };
        let Some(project) = self.catalog.get(key) else {
            log::debug!("[modal] no project {:?}", key);
            return false;
        };
        content.set_inner_html(&project.render_html());
        _ = modal.set_attribute("aria-hidden", "false");
        self.lock_scroll(true);
        if let Some(close) = modal
            .query_selector(MODAL_CLOSE_SELECTOR)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
        {
            _ = close.focus();
        }
        true
    }

    pub fn close(&self) {
        if let Some(modal) = self.document.get_element_by_id(MODAL_ID) {
            _ = modal.set_attribute("aria-hidden", "true");
            self.lock_scroll(false);
        }
    }

    fn lock_scroll(&self, locked: bool) {
        if let Some(body) = self.document.body() {
            _ = body
                .style()
                .set_property("overflow", if locked { "hidden" } else { "" });
        }
    }
}

/// "Learn more" buttons open their card's project; backdrop and close
/// buttons carry `data-close="true"`.
pub fn wire(document: &web::Document, modal: &Rc<Modal>, theme: &SharedTheme) {
    for button in dom::query_all(document, LEARN_BUTTON_SELECTOR) {
        let (modal, theme) = (modal.clone(), theme.clone());
        let target = button.clone();
        dom::listen(button.as_ref(), "click", move |_: web::MouseEvent| {
            theme::note_interaction(&theme);
            let key = target
                .closest(CARD_SELECTOR)
                .ok()
                .flatten()
                .and_then(|card| card.get_attribute(PROJECT_ATTR));
            if let Some(key) = key {
                modal.open(&key);
            }
        });
    }

    if let Some(el) = document.get_element_by_id(MODAL_ID) {
        let modal = modal.clone();
        dom::listen(el.as_ref(), "click", move |ev: web::MouseEvent| {
            let closes = ev
                .target()
                .and_then(|t| t.dyn_into::<web::Element>().ok())
                .and_then(|el| el.get_attribute(CLOSE_ATTR))
                .is_some_and(|v| v == "true");
            if closes {
                modal.close();
            }
        });
    }
}
