//! Small browser utilities for the term wizard: timestamps, date formatting,
//! and blob URL plumbing for the PDF dialog.

use wasm_bindgen::JsValue;

/// Current moment as an ISO-8601 string, the format the record's `data`
/// field persists.
pub fn now_iso() -> String {
    String::from(js_sys::Date::new_0().to_iso_string())
}

/// `dd/mm/aaaa` for the document body.
pub fn format_date(iso: &str) -> String {
    let date = js_sys::Date::new(&JsValue::from_str(iso));
    String::from(date.to_locale_date_string("pt-BR", &JsValue::UNDEFINED))
}

/// Date and time for the history list.
pub fn format_date_time(iso: &str) -> String {
    let date = js_sys::Date::new(&JsValue::from_str(iso));
    String::from(date.to_locale_string("pt-BR", &JsValue::UNDEFINED))
}

/// Wraps raw bytes in a blob and returns an object URL for the iframe.
pub fn bytes_to_object_url(bytes: &[u8], mime: &str) -> Result<String, String> {
    let array = js_sys::Array::new();
    array.push(&js_sys::Uint8Array::from(bytes).buffer());
    let props = web_sys::BlobPropertyBag::new();
    props.set_type(mime);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&array, &props)
        .map_err(|e| format!("{:?}", e))?;
    web_sys::Url::create_object_url_with_blob(&blob).map_err(|e| format!("{:?}", e))
}

pub fn revoke_object_url(url: &str) {
    web_sys::Url::revoke_object_url(url).ok();
}

/// Opens the user's mail client with a canned subject/body. Sharing the
/// actual file is out of scope; this mirrors the mailto stub of the portal.
pub fn share_via_email() {
    if let Some(window) = web_sys::window() {
        window
            .location()
            .set_href(
                "mailto:?subject=Termo Assinado&body=Segue o termo assinado em anexo (simulação).",
            )
            .ok();
    }
}
