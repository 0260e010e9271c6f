//! Command handlers.
//!
//! Each handler takes the shared loader and a writer for stdout, so output
//! can be captured in tests.

pub mod get;
pub mod show;
pub mod source;
