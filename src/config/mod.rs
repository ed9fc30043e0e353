//! Configuration constants
//!
//! - [`defaults`] - File names, tool names and default values
//! - [`urls`] - Documentation and help URLs

pub mod defaults;
pub mod urls;
