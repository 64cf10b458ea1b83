use serde::Serialize;

use super::{Post, User};

/// A user together with the posts that reference it.
///
/// Built from a copy of the source user; serializes flat, i.e. the user's attributes
/// followed by `posts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserWithPosts {
    #[serde(flatten)]
    pub user: User,
    pub posts: Vec<Post>,
}

impl UserWithPosts {
    pub fn new(user: User, posts: Vec<Post>) -> Self {
        Self { user, posts }
    }
}
