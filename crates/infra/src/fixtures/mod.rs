pub mod backfill;
pub mod json_store;

pub use backfill::{Backfill, BackfillOptions, BackfillReport};
pub use json_store::{JsonFixtureStore, Record};
