// Typewriter text cycling, independent of the DOM so it can be tested on the host.

use super::attrs::leading_int;
use crate::constants::{
    DEFAULT_CURSOR, DELETING_SPEED_MS, NEXT_TEXT_GAP_MS, TYPING_PAUSE_MS, TYPING_SPEED_MS,
};

#[derive(Clone, Debug, PartialEq)]
pub struct TypewriterSettings {
    pub typing_ms: u32,
    pub deleting_ms: u32,
    pub pause_ms: u32,
    pub looping: bool,
    pub show_cursor: bool,
    pub cursor: String,
    pub start_on_visible: bool,
}

impl Default for TypewriterSettings {
    fn default() -> Self {
        Self {
            typing_ms: TYPING_SPEED_MS,
            deleting_ms: DELETING_SPEED_MS,
            pause_ms: TYPING_PAUSE_MS,
            looping: true,
            show_cursor: true,
            cursor: DEFAULT_CURSOR.to_string(),
            start_on_visible: false,
        }
    }
}

impl TypewriterSettings {
    /// Read `data-*` attributes through `attr`; missing or unreadable values
    /// keep their defaults.
    pub fn from_attributes(attr: impl Fn(&str) -> Option<String>) -> Self {
        let d = Self::default();
        let ms = |name: &str, default: u32| {
            attr(name)
                .and_then(|v| leading_int(&v))
                .unwrap_or(default)
        };
        Self {
            typing_ms: ms("data-typing-speed", d.typing_ms),
            deleting_ms: ms("data-deleting-speed", d.deleting_ms),
            pause_ms: ms("data-pause", d.pause_ms),
            looping: attr("data-loop").map_or(true, |v| v != "false"),
            show_cursor: attr("data-show-cursor").map_or(true, |v| v != "false"),
            cursor: attr("data-cursor")
                .filter(|v| !v.is_empty())
                .unwrap_or(d.cursor),
            start_on_visible: attr("data-start-on-visible").is_some_and(|v| v == "true"),
        }
    }
}

/// Texts from a `data-texts` JSON array. Non-string entries are dropped.
pub fn parse_texts(json: &str) -> Vec<String> {
    match serde_json::from_str::<serde_json::Value>(json) {
        Ok(serde_json::Value::Array(items)) => items
            .into_iter()
            .filter_map(|v| match v {
                serde_json::Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

/// What to show after one step, and when to step again (`None` = done).
#[derive(Clone, Debug, PartialEq)]
pub struct TypeStep {
    pub text: String,
    pub next_delay_ms: Option<u32>,
}

#[derive(Clone, Debug)]
pub struct Typewriter {
    texts: Vec<Vec<char>>,
    settings: TypewriterSettings,
    text_index: usize,
    char_index: usize,
    deleting: bool,
    finished: bool,
}

impl Typewriter {
    /// `None` when there is nothing to type.
    pub fn new(texts: Vec<String>, settings: TypewriterSettings) -> Option<Self> {
        if texts.is_empty() {
            return None;
        }
        Some(Self {
            texts: texts.into_iter().map(|t| t.chars().collect()).collect(),
            settings,
            text_index: 0,
            char_index: 0,
            deleting: false,
            finished: false,
        })
    }

    #[inline]
    pub fn settings(&self) -> &TypewriterSettings {
        &self.settings
    }

    #[inline]
    pub fn text_index(&self) -> usize {
        self.text_index
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    fn visible(&self) -> String {
        self.texts[self.text_index][..self.char_index].iter().collect()
    }

    pub fn step(&mut self) -> TypeStep {
        if self.finished {
            return TypeStep {
                text: self.visible(),
                next_delay_ms: None,
            };
        }
        let len = self.texts[self.text_index].len();
        let next_delay_ms = if !self.deleting {
            self.char_index = (self.char_index + 1).min(len);
            if self.char_index >= len {
                let last = self.text_index + 1 == self.texts.len();
                if !self.settings.looping && last {
                    self.finished = true;
                    None
                } else {
                    self.deleting = true;
                    Some(self.settings.pause_ms)
                }
            } else {
                Some(self.settings.typing_ms)
            }
        } else {
            self.char_index = self.char_index.saturating_sub(1);
            if self.char_index == 0 {
                let text = String::new();
                self.deleting = false;
                self.text_index = (self.text_index + 1) % self.texts.len();
                return TypeStep {
                    text,
                    next_delay_ms: Some(NEXT_TEXT_GAP_MS),
                };
            }
            Some(self.settings.deleting_ms)
        };
        TypeStep {
            text: self.visible(),
            next_delay_ms,
        }
    }
}
