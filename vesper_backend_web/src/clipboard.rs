// Copyright 2026 the Vesper Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Clipboard writes through `navigator.clipboard`.

use wasm_bindgen::{JsCast as _, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Window;

use crate::error::{WebError, WebResult};

/// Writes `text` to the system clipboard.
///
/// `navigator.clipboard` only exists in secure contexts. When it is missing
/// this logs a warning and returns [`WebError::MissingCapability`] rather than
/// throwing; a rejected write (e.g. permission denied) returns
/// [`WebError::Js`].
pub async fn write_text(window: &Window, text: &str) -> WebResult<()> {
    let navigator = window.navigator();
    let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
        .and_then(|v| v.dyn_into::<web_sys::Clipboard>().ok());
    let Some(clipboard) = clipboard else {
        tracing::warn!("clipboard unavailable");
        return Err(WebError::MissingCapability("navigator.clipboard"));
    };

    JsFuture::from(clipboard.write_text(text))
        .await
        .map(|_| ())
        .map_err(|err| {
            let err = WebError::from(err);
            tracing::warn!(%err, "clipboard write rejected");
            err
        })
}

/// Text to place on the clipboard for an IBAN: the display grouping spaces
/// are removed.
#[must_use]
pub fn compact_iban(iban: &str) -> alloc::string::String {
    iban.chars().filter(|c| !c.is_whitespace()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iban_is_copied_without_spaces() {
        assert_eq!(
            compact_iban("ES00 0000 0000 00 0000000000"),
            "ES0000000000000000000000"
        );
    }
}
