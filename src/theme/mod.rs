//! Visual theme for Daylog.

mod colors;
mod styles;

pub use styles::GLOBAL_STYLES;
