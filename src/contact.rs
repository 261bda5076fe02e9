use crate::constants::*;
use crate::dom;
use crate::theme::{self, SharedTheme};
use folio_core::contact::{
    ContactMessage, PUBLIC_EMAIL, STATUS_COPIED, STATUS_COPY_FAILED, STATUS_OPENING,
};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

fn field(data: &web::FormData, name: &str) -> String {
    data.get(name).as_string().unwrap_or_default()
}

fn submit(document: &web::Document, form: &web::HtmlFormElement) -> anyhow::Result<()> {
    let data = web::FormData::new_with_form(form).map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let msg = match ContactMessage::from_fields(
        &field(&data, "name"),
        &field(&data, "email"),
        &field(&data, "message"),
    ) {
        Ok(msg) => msg,
        Err(e) => {
            dom::set_text(document, FORM_STATUS_ID, &e.to_string());
            return Ok(());
        }
    };
    let href = msg.mailto_href(|s| String::from(js_sys::encode_uri_component(s)));
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    window
        .location()
        .set_href(&href)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    dom::set_text(document, FORM_STATUS_ID, STATUS_OPENING);
    Ok(())
}

// navigator.clipboard.writeText, looked up dynamically since the async
// clipboard may be missing (insecure origins, older browsers).
async fn write_clipboard(text: &str) -> Result<(), JsValue> {
    let window = web::window().ok_or(JsValue::NULL)?;
    let clipboard = js_sys::Reflect::get(&window.navigator(), &JsValue::from_str("clipboard"))?;
    let write = js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText"))?
        .dyn_into::<js_sys::Function>()?;
    let promise = write
        .call1(&clipboard, &JsValue::from_str(text))?
        .dyn_into::<js_sys::Promise>()?;
    JsFuture::from(promise).await?;
    Ok(())
}

pub fn wire(document: &web::Document, theme: &SharedTheme) {
    if let Some(form) = document
        .get_element_by_id(CONTACT_FORM_ID)
        .and_then(|el| el.dyn_into::<web::HtmlFormElement>().ok())
    {
        let (doc, theme, target) = (document.clone(), theme.clone(), form.clone());
        dom::listen(form.as_ref(), "submit", move |ev: web::Event| {
            ev.prevent_default();
            theme::note_interaction(&theme);
            if let Err(e) = submit(&doc, &target) {
                log::warn!("[contact] {:?}", e);
            }
        });
    }

    let doc = document.clone();
    dom::add_click_listener(document, COPY_EMAIL_ID, move || {
        let doc = doc.clone();
        spawn_local(async move {
            let status = match write_clipboard(PUBLIC_EMAIL).await {
                Ok(()) => STATUS_COPIED,
                Err(e) => {
                    log::debug!("[contact] clipboard: {:?}", e);
                    STATUS_COPY_FAILED
                }
            };
            dom::set_text(&doc, FORM_STATUS_ID, status);
        });
    });
}
