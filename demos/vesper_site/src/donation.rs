// Copyright 2026 the Vesper Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The donation dialog's bank details and copy buttons.
//!
//! `[data-bank=<field>]` elements are filled from [`BANK_DETAILS`] and
//! `[data-donate-link=paypal]` anchors point at the donation page.
//! `[data-copy=<field>]` buttons write the field to the clipboard and carry
//! `data-copied` while their acknowledgment lasts.

use alloc::rc::{Rc, Weak};
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;

use vesper_backend_web::clipboard::{self, compact_iban};
use vesper_backend_web::{EventSubscription, Timeout, WebResult};
use vesper_core::copy::CopyFeedback;
use vesper_core::time::HostTime;
use web_sys::{Document, Element, Window};

use crate::dom;

/// The parish's donation accounts.
#[derive(Debug)]
pub(crate) struct BankDetails {
    pub(crate) bank: &'static str,
    pub(crate) iban: &'static str,
    pub(crate) swift: &'static str,
    pub(crate) beneficiary: &'static str,
    pub(crate) concept: &'static str,
    pub(crate) bizum: &'static str,
    pub(crate) paypal: &'static str,
}

pub(crate) const BANK_DETAILS: BankDetails = BankDetails {
    bank: "Banco Ejemplo",
    iban: "ES00 0000 0000 00 0000000000",
    swift: "ABCDESXX",
    beneficiary: "Parroquia Santa Rita",
    concept: "Donativo Parroquia",
    bizum: "600000000",
    paypal: "https://www.paypal.com/donate",
};

impl BankDetails {
    /// Display text for `field`.
    pub(crate) fn display(&self, field: &str) -> Option<String> {
        let text = match field {
            "bank" => self.bank,
            "iban" => self.iban,
            "swift" => self.swift,
            "beneficiary" => self.beneficiary,
            "concept" => self.concept,
            "bizum" => return Some(group_phone(self.bizum)),
            _ => return None,
        };
        Some(String::from(text))
    }

    /// The feedback key and clipboard text for a copyable `field`.
    pub(crate) fn clipboard(&self, field: &str) -> Option<(&'static str, String)> {
        match field {
            "iban" => Some(("iban", compact_iban(self.iban))),
            "bizum" => Some(("bizum", String::from(self.bizum))),
            _ => None,
        }
    }
}

/// Groups a nine-digit phone number as `600 00 00 00`.
///
/// Anything that is not nine characters long is returned unchanged.
pub(crate) fn group_phone(number: &str) -> String {
    if number.chars().count() != 9 {
        return String::from(number);
    }
    let mut out = String::with_capacity(12);
    for (i, c) in number.chars().enumerate() {
        if i == 3 || i == 5 || i == 7 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

struct CopyState {
    document: Document,
    feedback: CopyFeedback,
    expiry: Option<Timeout>,
}

impl CopyState {
    fn mark(&self, field: &str, copied: bool) {
        let selector = alloc::format!("[data-copy={field}]");
        let Ok(buttons) = dom::query_all::<Element>(&self.document, &selector) else {
            return;
        };
        for button in buttons {
            let _ = if copied {
                button.set_attribute("data-copied", "true")
            } else {
                button.remove_attribute("data-copied")
            };
        }
    }
}

/// Reverts expired acknowledgments, then re-arms the timer for the next
/// deadline.
fn expire(state: &Rc<RefCell<CopyState>>) {
    let now = vesper_backend_web::now();
    let mut s = state.borrow_mut();
    for field in s.feedback.expire(now) {
        s.mark(field, false);
    }
    s.expiry = s
        .feedback
        .next_deadline()
        .map(|deadline| arm(Rc::downgrade(state), now, deadline));
}

fn arm(state: Weak<RefCell<CopyState>>, now: HostTime, deadline: HostTime) -> Timeout {
    let millis = deadline.saturating_duration_since(now).as_millis() + 1;
    Timeout::new(u32::try_from(millis).unwrap_or(u32::MAX), move || {
        if let Some(state) = state.upgrade() {
            expire(&state);
        }
    })
}

async fn copy(window: Window, state: Weak<RefCell<CopyState>>, field: &'static str, text: String) {
    if let Err(err) = clipboard::write_text(&window, &text).await {
        tracing::warn!(field, %err, "copy not acknowledged");
        return;
    }
    let Some(state) = state.upgrade() else {
        return;
    };
    let now = vesper_backend_web::now();
    let mut s = state.borrow_mut();
    s.feedback.acknowledge(field, now);
    s.mark(field, true);
    if let Some(deadline) = s.feedback.next_deadline() {
        s.expiry = Some(arm(Rc::downgrade(&state), now, deadline));
    }
}

/// The mounted donation details.
pub(crate) struct Donation {
    _state: Rc<RefCell<CopyState>>,
    _subscriptions: Vec<EventSubscription>,
}

/// Fills the bank details and wires the copy buttons.
pub(crate) fn mount(window: &Window, document: &Document) -> WebResult<Donation> {
    for el in dom::query_all::<Element>(document, "[data-bank]")? {
        let Some(field) = el.get_attribute("data-bank") else {
            continue;
        };
        match BANK_DETAILS.display(&field) {
            Some(text) => el.set_text_content(Some(&text)),
            None => tracing::warn!(%field, "unknown bank field"),
        }
    }
    for link in dom::query_all::<Element>(document, "[data-donate-link=paypal]")? {
        let _ = link.set_attribute("href", BANK_DETAILS.paypal);
    }

    let state = Rc::new(RefCell::new(CopyState {
        document: document.clone(),
        feedback: CopyFeedback::default(),
        expiry: None,
    }));

    let mut subscriptions = Vec::new();
    for button in dom::query_all::<Element>(document, "[data-copy]")? {
        let Some((field, text)) = button
            .get_attribute("data-copy")
            .and_then(|f| BANK_DETAILS.clipboard(&f))
        else {
            continue;
        };
        let window = window.clone();
        let state = Rc::downgrade(&state);
        subscriptions.push(EventSubscription::new(&button, "click", move |_| {
            wasm_bindgen_futures::spawn_local(copy(
                window.clone(),
                state.clone(),
                field,
                text.clone(),
            ));
        })?);
    }

    Ok(Donation {
        _state: state,
        _subscriptions: subscriptions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bizum_is_grouped_for_display() {
        assert_eq!(group_phone("600000000"), "600 00 00 00");
        assert_eq!(group_phone("12345"), "12345");
    }

    #[test]
    fn copyable_fields() {
        assert_eq!(
            BANK_DETAILS.clipboard("iban"),
            Some(("iban", String::from("ES0000000000000000000000")))
        );
        assert_eq!(
            BANK_DETAILS.clipboard("bizum"),
            Some(("bizum", String::from("600000000")))
        );
        assert_eq!(BANK_DETAILS.clipboard("swift"), None);
    }

    #[test]
    fn every_detail_displays() {
        for field in ["bank", "iban", "swift", "beneficiary", "concept", "bizum"] {
            assert!(BANK_DETAILS.display(field).is_some(), "{field} has no display text");
        }
        assert_eq!(BANK_DETAILS.display("bizum").as_deref(), Some("600 00 00 00"));
        assert_eq!(BANK_DETAILS.display("pin"), None);
    }
}
