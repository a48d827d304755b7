// Copyright 2026 the Vesper Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser console logging.

/// Routes `tracing` events to the browser console and installs the panic
/// hook.
///
/// Call once at startup. Later calls keep the first subscriber.
pub fn init() {
    console_error_panic_hook::set_once();
    if tracing_wasm::try_set_as_global_default().is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
