//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`source`]: where user and post records come from
//!
//! These ports allow the domain and application layers to remain
//! independent of specific storage formats.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod source;

pub use source::{PostSource, UserSource};
