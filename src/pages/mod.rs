//! Page components for Daylog.

mod schedule;

pub use schedule::Schedule;
