//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`orchestrator`]: loads both collections, filters and sorts them, then joins posts
//!   onto users
//! - [`dto`]: data transfer objects for use case boundaries
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod orchestrator;

pub use dto::{TimelineStats, UsersWithPostsOutput};
pub use orchestrator::ListUsersWithPosts;
