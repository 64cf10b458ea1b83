pub mod entities;

pub use entities::{Post, PostBuilder, User, UserBuilder, UserWithPosts};
