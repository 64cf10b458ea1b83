// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod fixtures;
pub mod persistence;

pub use fixtures::{Backfill, BackfillOptions, BackfillReport, JsonFixtureStore, Record};
