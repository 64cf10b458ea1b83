use users_posts_domain::{Post, User};
use users_posts_shared_kernel::Result;

/// Port delivering the user collection, already deserialized.
pub trait UserSource: Send + Sync {
    fn load_users(&self) -> Result<Vec<User>>;
}

/// Port delivering the post collection, already deserialized.
pub trait PostSource: Send + Sync {
    fn load_posts(&self) -> Result<Vec<Post>>;
}
