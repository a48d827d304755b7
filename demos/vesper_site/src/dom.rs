// Copyright 2026 the Vesper Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Element lookup.

use alloc::vec::Vec;

use vesper_backend_web::{WebError, WebResult};
use wasm_bindgen::JsCast;
use web_sys::Document;

/// The element with `id`, cast to `T`.
pub(crate) fn by_id<T: JsCast>(document: &Document, id: &'static str) -> WebResult<T> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
        .ok_or(WebError::MissingElement(id))
}

/// Every element matching `selector` that casts to `T`, in document order.
pub(crate) fn query_all<T: JsCast>(document: &Document, selector: &str) -> WebResult<Vec<T>> {
    let list = document.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect())
}
