// crates/shared-kernel/src/value_objects/mod.rs
pub mod ids;
pub mod timestamp;

pub use ids::{PostId, UserId};
pub use timestamp::{EpochSeconds, TimeRef, TimeValue, normalize_time};
