pub mod post;
pub mod user;
pub mod user_with_posts;

pub use post::{Post, PostBuilder};
pub use user::{User, UserBuilder};
pub use user_with_posts::UserWithPosts;
