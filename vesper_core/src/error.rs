// Copyright 2026 the Vesper Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

/// Errors raised at the configuration and parsing boundaries.
///
/// Runtime state transitions never produce errors: duplicate teardown and
/// stale handles are no-ops, and invariant breaches are debug assertions.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A language code outside the supported set was parsed.
    #[error("unsupported language code `{code}`")]
    UnsupportedLanguage {
        /// The code that was rejected.
        code: String,
    },

    /// A reveal configuration failed validation.
    #[error("invalid reveal configuration: {0}")]
    InvalidRevealConfig(&'static str),

    /// A particle configuration failed validation.
    #[error("invalid particle configuration: {0}")]
    InvalidParticleConfig(&'static str),
}

/// Result alias for fallible `vesper_core` operations.
pub type Result<T, E = Error> = core::result::Result<T, E>;
