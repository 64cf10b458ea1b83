// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    DomainError, DomainResult, ErrorContext, InfraResult, InfrastructureError, PresentationError,
    PresentationResult, Result, UsersPostsError,
};

pub mod error;
pub mod value_objects;

pub use value_objects::{EpochSeconds, PostId, TimeRef, TimeValue, UserId, normalize_time};
