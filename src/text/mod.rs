//! Small text and JSON extraction utilities.

pub mod containlines;
pub mod pluck;
pub mod stripprefix;
