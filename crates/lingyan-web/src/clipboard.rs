//! Async wrappers over the clipboard and native share APIs.
//!
//! Both are looked up at call time: they are missing in insecure contexts and
//! in older browsers, which callers treat as an ordinary failure.

use js_sys::{Function, Object, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Navigator;

use crate::error::{Result, WebError};

fn method(target: &JsValue, name: &str) -> Option<Function> {
    Reflect::get(target, &name.into())
        .ok()
        .and_then(|value| value.dyn_into::<Function>().ok())
}

async fn await_promise(value: JsValue) -> Result<JsValue> {
    let promise = value
        .dyn_into::<Promise>()
        .map_err(|_| WebError::Js("expected a promise".to_string()))?;
    Ok(JsFuture::from(promise).await?)
}

/// Write `text` to the system clipboard.
pub async fn write_text(navigator: &Navigator, text: &str) -> Result<()> {
    let clipboard = Reflect::get(navigator, &"clipboard".into())?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err(WebError::Unavailable("clipboard"));
    }

    let write = method(&clipboard, "writeText")
        .ok_or(WebError::Unavailable("clipboard.writeText"))?;
    let pending = write.call1(&clipboard, &JsValue::from_str(text))?;
    await_promise(pending).await?;
    Ok(())
}

/// Whether `navigator.share` exists.
pub fn can_share(navigator: &Navigator) -> bool {
    method(navigator, "share").is_some()
}

/// Open the native share sheet.
pub async fn share(navigator: &Navigator, title: &str, url: &str) -> Result<()> {
    let share = method(navigator, "share").ok_or(WebError::Unavailable("navigator.share"))?;

    let data = Object::new();
    Reflect::set(&data, &"title".into(), &title.into())?;
    Reflect::set(&data, &"url".into(), &url.into())?;

    let pending = share.call1(navigator, &data)?;
    await_promise(pending).await?;
    Ok(())
}
