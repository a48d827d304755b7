// Copyright 2026 the Vesper Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renders the active language into the page.
//!
//! Text nodes carry their translation key in `data-i18n`, e.g.
//! `<span data-i18n="nav.history">`. Every language change rewrites all of
//! them from the same table, so the page never shows a mix of languages.

use vesper_backend_web::WebResult;
use vesper_core::language::Language;
use vesper_core::translations::{language_toggle_label, menu_toggle_label};
use web_sys::{Document, Element};

use crate::dom;

/// Attribute naming an element's translation key.
pub(crate) const KEY_ATTR: &str = "data-i18n";

/// Id of the menu button that toggles the navigation panel.
pub(crate) const MENU_TOGGLE: &str = "menu-toggle";

/// Rewrites every translated string, the document `lang`, and the toggle
/// labels for `language`.
pub(crate) fn render(document: &Document, language: Language, panel_open: bool) -> WebResult<()> {
    let strings = language.strings();
    if let Some(root) = document.document_element() {
        let _ = root.set_attribute("lang", language.html_lang());
    }

    for el in dom::query_all::<Element>(document, "[data-i18n]")? {
        let Some(key) = el.get_attribute(KEY_ATTR) else {
            continue;
        };
        match strings.get(&key) {
            Some(text) => el.set_text_content(Some(text)),
            None => tracing::warn!(%key, "unknown translation key"),
        }
    }

    let label = language_toggle_label(language);
    for button in dom::query_all::<Element>(document, "[data-action=language]")? {
        let _ = button.set_attribute("aria-label", &label);
        if let Some(code) = button.query_selector("[data-language-code]")? {
            code.set_text_content(Some(language.code()));
        }
    }

    sync_menu_toggle(document, language, panel_open);
    Ok(())
}

/// Updates the menu button's label and `aria-expanded` for the panel state.
pub(crate) fn sync_menu_toggle(document: &Document, language: Language, panel_open: bool) {
    if let Some(button) = document.get_element_by_id(MENU_TOGGLE) {
        let _ = button.set_attribute("aria-label", menu_toggle_label(language, panel_open));
        let _ = button.set_attribute("aria-expanded", if panel_open { "true" } else { "false" });
    }
}
