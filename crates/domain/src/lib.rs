#![allow(clippy::multiple_crate_versions)]

pub mod filtering;
pub mod mapping;
pub mod model;
pub mod sorting;

pub use filtering::filter_out_deleted_posts;
pub use mapping::{dangling_posts, map_posts_to_users};
pub use model::{Post, PostBuilder, User, UserBuilder, UserWithPosts};
pub use sorting::{
    QuickSort, SortKind, SortPrimitive, StableSort, compare_posts, compare_users, sort_posts_by_published_date,
    sort_posts_with, sort_users_by_registration_date, sort_users_with,
};
