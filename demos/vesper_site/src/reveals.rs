// Copyright 2026 the Vesper Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reveal targets declared in markup.
//!
//! - `data-reveal` reveals the element itself. A non-empty value names the
//!   direction (`up`, `down`, `left`, `right`, `none`).
//! - `data-reveal-stagger="100"` reveals each child instead, child `i`
//!   waiting an extra `i × 100` ms. Its own `data-reveal`, if any, sets the
//!   children's direction.
//! - `data-reveal-delay="150"` adds a base delay to either form.
//!
//! The schedule cards stagger by 150 ms, the service cards by 100 ms, and
//! the history cards start at 100 ms and stagger by 100 ms.

use vesper_backend_web::{DomReveal, WebResult};
use vesper_core::reveal::{Direction, RevealConfig, Stagger};
use web_sys::{Element, HtmlElement, Window};

use crate::dom;

/// Parses a `data-reveal` direction. Empty means the default.
pub(crate) fn parse_direction(value: &str) -> Option<Direction> {
    match value.trim() {
        "" => Some(Direction::default()),
        "up" => Some(Direction::Up),
        "down" => Some(Direction::Down),
        "left" => Some(Direction::Left),
        "right" => Some(Direction::Right),
        "none" => Some(Direction::None),
        _ => None,
    }
}

/// Parses a millisecond attribute, treating anything malformed as zero.
pub(crate) fn parse_millis(value: Option<&str>) -> u64 {
    value.and_then(|v| v.trim().parse().ok()).unwrap_or(0)
}

fn config_for(el: &Element) -> RevealConfig {
    let direction = el
        .get_attribute("data-reveal")
        .map_or(Some(Direction::default()), |v| parse_direction(&v))
        .unwrap_or_else(|| {
            tracing::warn!(id = %el.id(), "unknown reveal direction");
            Direction::default()
        });
    let delay = parse_millis(el.get_attribute("data-reveal-delay").as_deref());
    RevealConfig::default()
        .with_direction(direction)
        .with_delay_ms(delay)
}

/// Registers every declared target.
pub(crate) fn mount(window: &Window) -> WebResult<DomReveal> {
    let reveal = DomReveal::new(window)?;
    let Some(document) = window.document() else {
        return Ok(reveal);
    };

    let singles = dom::query_all::<HtmlElement>(&document, "[data-reveal]:not([data-reveal-stagger])")?
        .into_iter()
        .map(|el| {
            let config = config_for(&el);
            (el, config)
        });
    let mut targets = reveal.observe_each(singles)?.len();
    for parent in dom::query_all::<Element>(&document, "[data-reveal-stagger]")? {
        let stagger = parse_millis(parent.get_attribute("data-reveal-stagger").as_deref());
        let config = config_for(&parent);
        targets += reveal
            .observe_children(&parent, config, Stagger::millis(stagger))?
            .len();
    }
    tracing::debug!(targets, "reveals mounted");
    Ok(reveal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directions() {
        assert_eq!(parse_direction(""), Some(Direction::Up));
        assert_eq!(parse_direction(" left "), Some(Direction::Left));
        assert_eq!(parse_direction("none"), Some(Direction::None));
        assert_eq!(parse_direction("sideways"), None);
    }

    #[test]
    fn millis() {
        assert_eq!(parse_millis(Some("150")), 150);
        assert_eq!(parse_millis(Some(" 100 ")), 100);
        assert_eq!(parse_millis(Some("-5")), 0);
        assert_eq!(parse_millis(None), 0);
    }
}
