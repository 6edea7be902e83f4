//! Color constants for the Daylog theme.
//!
//! Light journal palette around the brand indigo.

#![allow(dead_code)]

// === BRAND ===
pub const PRIMARY: &str = "#3C23D7";
pub const PRIMARY_SOFT: &str = "rgba(60, 35, 215, 0.08)";

// === SURFACES ===
pub const PAGE_BG: &str = "#f7f7f9";
pub const SURFACE: &str = "#ffffff";
pub const SURFACE_MUTED: &str = "#f0f0f0";
pub const CANCEL_BG: &str = "#f5f5f5";
pub const BORDER: &str = "#eeeeee";
pub const OVERLAY: &str = "rgba(0, 0, 0, 0.5)";

// === TEXT ===
pub const TEXT_STRONG: &str = "#333333";
pub const TEXT_BODY: &str = "#444444";
pub const TEXT_MUTED: &str = "#666666";

// === SEMANTIC ===
pub const EXERCISE_GREEN: &str = "#2e9e5b";
pub const DANGER: &str = "#d23c3c";
