// Copyright 2026 the Vesper Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for the language cycle and translation totality.

use proptest::prelude::*;
use vesper_core::language::{Language, LanguageState};
use vesper_core::translations::{ENTRY_COUNT, resolve};

fn language_strategy() -> impl Strategy<Value = Language> {
    prop::sample::select(Language::ALL.to_vec())
}

proptest! {
    /// Property: cycling once per supported language returns to the start.
    #[test]
    fn prop_full_cycle_is_identity(start in language_strategy(), laps in 1usize..4) {
        let mut state = LanguageState::new();
        state.set(start);
        for _ in 0..laps * Language::ALL.len() {
            state.cycle();
        }
        prop_assert_eq!(state.current(), start);
    }

    /// Property: one cycle advances to the next language in order, wrapping.
    #[test]
    fn prop_cycle_advances_in_order(start in language_strategy()) {
        let mut state = LanguageState::new();
        state.set(start);
        let next = state.cycle();
        let expected = Language::ALL[(start.index() + 1) % Language::ALL.len()];
        prop_assert_eq!(next, expected);
        prop_assert_eq!(state.current(), expected);
    }

    /// Property: every key resolves to a non-empty string in every language.
    #[test]
    fn prop_resolve_is_total(lang in language_strategy(), key in 0usize..ENTRY_COUNT) {
        let (name, value) = resolve(lang).entries()[key];
        prop_assert!(!value.trim().is_empty(), "{lang:?} is missing {name}");
        prop_assert_eq!(resolve(lang).get(name), Some(value));
    }

    /// Property: codes parse back to the same language, in any case.
    #[test]
    fn prop_code_round_trips(lang in language_strategy(), lower in any::<bool>()) {
        let code = if lower { lang.code().to_lowercase() } else { lang.code().to_owned() };
        prop_assert_eq!(code.parse::<Language>(), Ok(lang));
    }
}

#[test]
fn unknown_codes_are_rejected() {
    assert!("FR".parse::<Language>().is_err());
    assert!("".parse::<Language>().is_err());
}
