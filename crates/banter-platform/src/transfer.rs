//! Browser file transfer — export download and import upload.
//!
//! Export writes the JSON bytes into a Blob and clicks a synthetic anchor;
//! import clicks a synthetic file input and reads the chosen file through
//! a FileReader, handing the bytes to the caller's callback.

use js_sys::Uint8Array;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, FileReader, HtmlAnchorElement, HtmlInputElement, Url};

use banter_types::{ChatError, Result};

fn js_err(e: impl std::fmt::Debug) -> ChatError {
    ChatError::JsInterop(format!("{:?}", e))
}

/// Offer `bytes` as a downloadable file named `filename`.
pub fn download_json(filename: &str, bytes: &[u8]) -> Result<()> {
    let parts = js_sys::Array::new();
    parts.push(&Uint8Array::from(bytes));
    let props = BlobPropertyBag::new();
    props.set_type("application/json");
    let blob =
        Blob::new_with_u8_array_sequence_and_options(&parts, &props).map_err(js_err)?;
    let url = Url::create_object_url_with_blob(&blob).map_err(js_err)?;

    let document = gloo_utils::document();
    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(js_err)?
        .dyn_into()
        .map_err(js_err)?;
    anchor.set_href(&url);
    anchor.set_download(filename);

    let body = gloo_utils::body();
    body.append_child(&anchor).map_err(js_err)?;
    anchor.click();
    body.remove_child(&anchor).map_err(js_err)?;
    Url::revoke_object_url(&url).map_err(js_err)?;
    Ok(())
}

/// Open a file picker for a JSON file and pass its contents to `on_load`.
/// If the user cancels the picker, the callback simply never fires.
pub fn pick_json_file(on_load: impl FnOnce(Vec<u8>) + 'static) -> Result<()> {
    let document = gloo_utils::document();
    let input: HtmlInputElement = document
        .create_element("input")
        .map_err(js_err)?
        .dyn_into()
        .map_err(js_err)?;
    input.set_type("file");
    input.set_accept(".json,application/json");

    let picker = input.clone();
    let onchange = Closure::once(move |_: web_sys::Event| {
        let Some(file) = picker.files().and_then(|list| list.get(0)) else {
            return;
        };
        let reader = match FileReader::new() {
            Ok(r) => r,
            Err(e) => {
                log::error!("FileReader unavailable: {:?}", e);
                return;
            }
        };
        let result_source = reader.clone();
        let onload = Closure::once(move |_: web_sys::Event| {
            match result_source.result() {
                Ok(value) => {
                    if let Some(text) = value.as_string() {
                        on_load(text.into_bytes());
                    }
                }
                Err(e) => log::error!("Failed to read import file: {:?}", e),
            }
        });
        reader.set_onload(Some(onload.as_ref().unchecked_ref()));
        onload.forget();
        if let Err(e) = reader.read_as_text(&file) {
            log::error!("Failed to start file read: {:?}", e);
        }
    });
    input.set_onchange(Some(onchange.as_ref().unchecked_ref()));
    onchange.forget();

    input.click();
    Ok(())
}

/// Best-effort `navigator.onLine` for the header indicator.
pub fn is_online() -> bool {
    web_sys::window()
        .map(|w| w.navigator().on_line())
        .unwrap_or(true)
}
