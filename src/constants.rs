/// Page-level constants for the browser front-end.
///
/// Shader and option defaults live in `lines_core::constants`; this file only
/// holds DOM names, class names and timings used by the web glue.

// Mounted canvas
pub const CANVAS_CLASS: &str = "floating-lines-canvas";
pub const CANVAS_STYLE: &str = "display:block;width:100%;height:100%;";

// Theme toggle
pub const THEME_TOGGLE_ID: &str = "toggle";
pub const THEME_STORAGE_KEY: &str = "theme";
pub const THEME_LIGHT: &str = "light"; // class on <html> and stored value
pub const THEME_DARK: &str = "dark";
pub const THEME_TRANSITION_CLASS: &str = "theme-transition";
pub const THEME_TRANSITION_MS: i32 = 360; // matches the CSS transition length

// Scroll reveal
pub const REVEAL_SELECTOR: &str = "[data-animate]";
pub const REVEAL_CLASS: &str = "in-view";
pub const REVEAL_THRESHOLD: f64 = 0.1; // fraction of the element visible

// Skill dots
pub const DOTS_SELECTOR: &str = ".dots";
pub const DOTS_PER_SKILL: u32 = 8;
pub const DOT_ACTIVE_CLASS: &str = "active";

// Smooth anchors
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

// Typewriter
pub const TYPEWRITER_SELECTOR: &str = ".text-type[data-texts]";
pub const TYPEWRITER_CURSOR_CLASS: &str = "text-type__cursor";
pub const TYPING_SPEED_MS: u32 = 50;
pub const DELETING_SPEED_MS: u32 = 30;
pub const TYPING_PAUSE_MS: u32 = 2000; // full text stays visible this long
pub const NEXT_TEXT_GAP_MS: u32 = 300; // after a text is fully deleted
pub const DEFAULT_CURSOR: &str = "|";
