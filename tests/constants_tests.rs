// Host-side tests for page constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn typewriter_timings_are_ordered() {
    assert!(DELETING_SPEED_MS > 0);
    // deleting runs faster than typing; the full text lingers longest
    assert!(DELETING_SPEED_MS < TYPING_SPEED_MS);
    assert!(TYPING_PAUSE_MS > NEXT_TEXT_GAP_MS);
    assert!(NEXT_TEXT_GAP_MS > TYPING_SPEED_MS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn reveal_threshold_is_a_fraction() {
    assert!(REVEAL_THRESHOLD > 0.0 && REVEAL_THRESHOLD <= 1.0);
}

#[test]
fn theme_values_differ() {
    assert_ne!(THEME_LIGHT, THEME_DARK);
    assert!(THEME_TRANSITION_MS > 0);
}

#[test]
fn canvas_fills_its_container() {
    assert!(CANVAS_STYLE.contains("width:100%"));
    assert!(CANVAS_STYLE.contains("height:100%"));
    assert!(CANVAS_STYLE.contains("display:block"));
}

#[test]
fn selectors_target_expected_attributes() {
    assert!(TYPEWRITER_SELECTOR.contains("data-texts"));
    assert!(REVEAL_SELECTOR.contains("data-animate"));
    assert!(ANCHOR_SELECTOR.starts_with("a[href^="));
    assert_eq!(DOTS_PER_SKILL, 8);
}
