// Host-side tests for the typewriter state machine.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod attrs {
    include!("../src/page/attrs.rs");
}
mod typewriter {
    include!("../src/page/typewriter.rs");
}

use constants::*;
use std::collections::HashMap;
use typewriter::*;

fn attrs(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name: &str| map.get(name).cloned()
}

fn writer(texts: &[&str], settings: TypewriterSettings) -> Typewriter {
    Typewriter::new(texts.iter().map(|s| s.to_string()).collect(), settings).expect("texts")
}

#[test]
fn settings_default_when_attributes_absent() {
    let s = TypewriterSettings::from_attributes(attrs(&[]));
    assert_eq!(s, TypewriterSettings::default());
    assert_eq!(s.typing_ms, 50);
    assert_eq!(s.deleting_ms, 30);
    assert_eq!(s.pause_ms, 2000);
    assert!(s.looping && s.show_cursor && !s.start_on_visible);
    assert_eq!(s.cursor, "|");
}

#[test]
fn settings_read_data_attributes() {
    let s = TypewriterSettings::from_attributes(attrs(&[
        ("data-typing-speed", "80ms"),
        ("data-deleting-speed", " 10"),
        ("data-pause", "oops"),
        ("data-loop", "false"),
        ("data-show-cursor", "no"),
        ("data-cursor", ""),
        ("data-start-on-visible", "true"),
    ]));
    assert_eq!(s.typing_ms, 80);
    assert_eq!(s.deleting_ms, 10);
    assert_eq!(s.pause_ms, TYPING_PAUSE_MS);
    assert!(!s.looping);
    // only the literal "false" disables
    assert!(s.show_cursor);
    assert_eq!(s.cursor, "|");
    assert!(s.start_on_visible);
}

#[test]
fn texts_parse_from_json_array() {
    assert_eq!(parse_texts(r#"["Hi", "There"]"#), vec!["Hi", "There"]);
    assert_eq!(parse_texts(r#"["a", 3, null, "b"]"#), vec!["a", "b"]);
    assert!(parse_texts("not json").is_empty());
    assert!(parse_texts(r#"{"a": 1}"#).is_empty());
    assert!(parse_texts("").is_empty());
}

#[test]
fn no_texts_means_no_typewriter() {
    assert!(Typewriter::new(Vec::new(), TypewriterSettings::default()).is_none());
}

#[test]
fn types_pauses_deletes_then_moves_on() {
    let mut tw = writer(&["ab", "c"], TypewriterSettings::default());
    let steps: Vec<TypeStep> = (0..6).map(|_| tw.step()).collect();
    let shown: Vec<&str> = steps.iter().map(|s| s.text.as_str()).collect();
    let delays: Vec<Option<u32>> = steps.iter().map(|s| s.next_delay_ms).collect();
    assert_eq!(shown, vec!["a", "ab", "a", "", "c", ""]);
    assert_eq!(
        delays,
        vec![
            Some(TYPING_SPEED_MS),
            Some(TYPING_PAUSE_MS),
            Some(DELETING_SPEED_MS),
            Some(NEXT_TEXT_GAP_MS),
            Some(TYPING_PAUSE_MS),
            Some(NEXT_TEXT_GAP_MS),
        ]
    );
    // wrapped around to the first text
    assert_eq!(tw.text_index(), 0);
    assert_eq!(tw.step().text, "a");
}

#[test]
fn non_looping_stops_after_last_text() {
    let settings = TypewriterSettings {
        looping: false,
        ..TypewriterSettings::default()
    };
    let mut tw = writer(&["x", "yz"], settings);
    let mut last = tw.step();
    let mut guard = 0;
    while last.next_delay_ms.is_some() {
        last = tw.step();
        guard += 1;
        assert!(guard < 20, "typewriter never stopped");
    }
    assert_eq!(last.text, "yz");
    assert!(tw.is_finished());
    // further steps keep the final text
    assert_eq!(tw.step(), last);
}

#[test]
fn counts_characters_not_bytes() {
    let mut tw = writer(&["héé"], TypewriterSettings::default());
    assert_eq!(tw.step().text, "h");
    assert_eq!(tw.step().text, "hé");
    assert_eq!(tw.step().text, "héé");
}

#[test]
fn empty_text_is_skipped_over() {
    let mut tw = writer(&["", "a"], TypewriterSettings::default());
    let first = tw.step();
    assert_eq!(first.text, "");
    assert_eq!(first.next_delay_ms, Some(TYPING_PAUSE_MS));
    assert_eq!(tw.step().next_delay_ms, Some(NEXT_TEXT_GAP_MS));
    assert_eq!(tw.step().text, "a");
}
