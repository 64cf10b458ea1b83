use serde::Serialize;
use users_posts_domain::UserWithPosts;

/// Counts gathered while building the timeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TimelineStats {
    pub users: usize,
    pub posts_loaded: usize,
    pub posts_deleted: usize,
    /// Active posts whose `userId` matches no loaded user.
    pub posts_orphaned: usize,
}

impl TimelineStats {
    pub fn posts_active(&self) -> usize {
        self.posts_loaded - self.posts_deleted
    }

    pub fn posts_attached(&self) -> usize {
        self.posts_active() - self.posts_orphaned
    }
}

#[derive(Debug, Clone)]
pub struct UsersWithPostsOutput {
    pub users: Vec<UserWithPosts>,
    pub stats: TimelineStats,
}
