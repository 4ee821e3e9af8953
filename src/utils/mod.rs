//! Utility modules for the wiki generator.

pub mod date;
pub mod log;
