#![warn(clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions, // Rust naming conventions
    clippy::missing_errors_doc,      // errors are documented on StampError
)]

//! Build-time version stamping plus a small lazy/greedy regex demo.
//!
//! - [`stamper`] writes an include-guarded `VERSION` header (the
//!   `version-stamper` binary, and `build.rs` via [`header`]).
//! - [`demo`] prints the baked-in version and runs two fixed matches through
//!   a [`matcher::PatternMatcher`] (the `demo-runner` binary).

pub mod demo;
pub mod error;
pub mod header;
pub mod matcher;
pub mod stamper;
