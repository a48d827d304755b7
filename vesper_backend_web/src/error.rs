// Copyright 2026 the Vesper Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised at the browser boundary.

use alloc::format;
use alloc::string::{String, ToString};

use wasm_bindgen::JsValue;

/// Failure while talking to the page.
#[derive(thiserror::Error, Debug)]
pub enum WebError {
    /// A browser API threw or rejected.
    #[error("JavaScript error: {0}")]
    Js(String),

    /// The browser lacks an API we need (e.g. `navigator.clipboard` outside
    /// a secure context).
    #[error("missing host capability: {0}")]
    MissingCapability(&'static str),

    /// An element the page markup is expected to contain was not found.
    #[error("missing element: {0}")]
    MissingElement(&'static str),

    /// Invalid configuration from `vesper_core`.
    #[error(transparent)]
    Core(#[from] vesper_core::Error),
}

impl From<JsValue> for WebError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{value:?}"));
        Self::Js(message)
    }
}

impl From<WebError> for JsValue {
    fn from(err: WebError) -> Self {
        Self::from_str(&err.to_string())
    }
}

/// Result alias for browser operations.
pub type WebResult<T> = Result<T, WebError>;
