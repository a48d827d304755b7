// Copyright 2026 the Vesper Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The page's display language.
//!
//! [`Language`] is the fixed, ordered set of supported languages.
//! [`LanguageState`] is the one mutable value the page shell owns for its
//! whole lifetime and lends to whatever renders labels. There is no global:
//! callers that need the language receive the state (or a subscription to
//! it) explicitly.

use alloc::string::ToString;
use core::fmt;
use core::str::FromStr;

use crate::listener::{ListenerId, Listeners};
use crate::translations::{self, Translations};

/// A supported display language, in cycle order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Language {
    /// Spanish.
    #[default]
    Es,
    /// Galician.
    Gl,
    /// English.
    En,
}

impl Language {
    /// Every supported language, in cycle order.
    pub const ALL: [Self; 3] = [Self::Es, Self::Gl, Self::En];

    /// Position of this language in [`Language::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Es => 0,
            Self::Gl => 1,
            Self::En => 2,
        }
    }

    /// The language after this one, wrapping from the last to the first.
    #[must_use]
    pub const fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// The two-letter uppercase code shown on the language toggle.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Es => "ES",
            Self::Gl => "GL",
            Self::En => "EN",
        }
    }

    /// The BCP 47 tag for the document's `lang` attribute.
    #[must_use]
    pub const fn html_lang(self) -> &'static str {
        match self {
            Self::Es => "es",
            Self::Gl => "gl",
            Self::En => "en",
        }
    }

    /// The string table for this language.
    #[must_use]
    pub fn strings(self) -> &'static Translations {
        translations::resolve(self)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = crate::Error;

    /// Parses a language code, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| crate::Error::UnsupportedLanguage {
                code: s.to_string(),
            })
    }
}

/// Notification delivered to [`LanguageState`] subscribers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LanguageChange {
    /// The language before the change.
    pub previous: Language,
    /// The language now active.
    pub current: Language,
}

/// The active display language plus its change subscribers.
///
/// Starts at the first language in [`Language::ALL`]. Subscribers fire only
/// when the value actually changes.
#[derive(Debug, Default)]
pub struct LanguageState {
    current: Language,
    listeners: Listeners<LanguageChange>,
}

impl LanguageState {
    /// Creates a state initialized to the first supported language.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current: Language::ALL[0],
            listeners: Listeners::new(),
        }
    }

    /// The active language.
    #[must_use]
    pub const fn current(&self) -> Language {
        self.current
    }

    /// The string table for the active language.
    #[must_use]
    pub fn strings(&self) -> &'static Translations {
        self.current.strings()
    }

    /// Sets the active language directly.
    pub fn set(&mut self, language: Language) {
        if language == self.current {
            return;
        }
        let change = LanguageChange {
            previous: self.current,
            current: language,
        };
        self.current = language;
        tracing::debug!(from = change.previous.code(), to = language.code(), "language changed");
        self.listeners.emit(&change);
    }

    /// Advances to the next language in the fixed order, wrapping around.
    ///
    /// Returns the new language.
    pub fn cycle(&mut self) -> Language {
        self.set(self.current.next());
        self.current
    }

    /// Registers a change callback. The returned id is its disposer.
    pub fn subscribe(&mut self, callback: impl FnMut(&LanguageChange) + 'static) -> ListenerId {
        self.listeners.add(callback)
    }

    /// Removes a change callback; removing twice is a no-op.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    #[test]
    fn starts_at_first_language() {
        assert_eq!(LanguageState::new().current(), Language::Es);
        assert_eq!(LanguageState::default().current(), Language::ALL[0]);
    }

    #[test]
    fn cycle_visits_fixed_order_and_wraps() {
        let mut state = LanguageState::new();
        assert_eq!(state.cycle(), Language::Gl);
        assert_eq!(state.cycle(), Language::En);
        assert_eq!(state.cycle(), Language::Es);
    }

    #[test]
    fn subscribers_see_only_real_changes() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut state = LanguageState::new();
        let sink = Rc::clone(&seen);
        let id = state.subscribe(move |c| sink.borrow_mut().push(*c));

        state.set(Language::Es);
        state.set(Language::En);
        state.cycle();
        assert_eq!(
            *seen.borrow(),
            [
                LanguageChange {
                    previous: Language::Es,
                    current: Language::En,
                },
                LanguageChange {
                    previous: Language::En,
                    current: Language::Es,
                },
            ]
        );

        assert!(state.unsubscribe(id));
        state.cycle();
        assert_eq!(seen.borrow().len(), 2, "unsubscribed callback must not fire");
    }

    #[test]
    fn parse_codes() {
        assert_eq!("gl".parse::<Language>(), Ok(Language::Gl));
        assert_eq!(" EN ".parse::<Language>(), Ok(Language::En));
        assert_eq!(
            "fr".parse::<Language>(),
            Err(crate::Error::UnsupportedLanguage { code: "fr".into() })
        );
    }

    #[test]
    fn display_uses_code() {
        assert_eq!(alloc::format!("{}", Language::Gl), "GL");
        assert_eq!(Language::En.html_lang(), "en");
    }
}
