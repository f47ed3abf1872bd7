//! Browser utility helpers for theme persistence and file reading.

pub mod dark_mode;
pub mod file_reader;
