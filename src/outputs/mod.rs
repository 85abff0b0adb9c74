//! Presentation of search results.
//!
//! # Submodules
//!
//! - [`text`]: numbered result cards for the terminal session
//! - [`json`]: the visible results as a JSON array, for piping into other tools
//!
//! Both render only what the screen currently shows; the "load more" hint is
//! printed by [`text`] alone and only while more results remain.

pub mod json;
pub mod text;
