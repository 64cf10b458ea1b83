use users_posts_domain::{
    dangling_posts, filter_out_deleted_posts, map_posts_to_users, sort_posts_by_published_date,
    sort_users_by_registration_date,
};
use users_posts_ports::{PostSource, UserSource};
use users_posts_shared_kernel::{ErrorContext, Result};

use crate::dto::{TimelineStats, UsersWithPostsOutput};

/// Builds the users-with-posts timeline.
///
/// Posts: drop soft-deleted, sort oldest first. Users: sort by registration, oldest first.
/// Finally every user receives its posts in publish order.
pub struct ListUsersWithPosts<'a> {
    users: &'a dyn UserSource,
    posts: &'a dyn PostSource,
}

impl<'a> ListUsersWithPosts<'a> {
    pub fn new(users: &'a dyn UserSource, posts: &'a dyn PostSource) -> Self {
        Self { users, posts }
    }

    pub fn run(&self) -> Result<UsersWithPostsOutput> {
        let users = self.users.load_users().context("loading users")?;
        let posts = self.posts.load_posts().context("loading posts")?;
        log::debug!("loaded {} users and {} posts", users.len(), posts.len());

        let active = filter_out_deleted_posts(&posts);
        let sorted_posts = sort_posts_by_published_date(&active).context("sorting posts by publishedAt")?;
        let sorted_users = sort_users_by_registration_date(&users).context("sorting users by registeredAt")?;

        let orphaned = dangling_posts(&sorted_users, &sorted_posts);
        if !orphaned.is_empty() {
            log::warn!("{} active posts reference unknown users and are not shown", orphaned.len());
            for post in &orphaned {
                log::debug!("post {} references missing user {}", post.id, post.user_id);
            }
        }

        let stats = TimelineStats {
            users: sorted_users.len(),
            posts_loaded: posts.len(),
            posts_deleted: posts.len() - active.len(),
            posts_orphaned: orphaned.len(),
        };
        log::info!(
            "{} users, {} active posts ({} deleted, {} orphaned)",
            stats.users,
            stats.posts_active(),
            stats.posts_deleted,
            stats.posts_orphaned
        );

        let users = map_posts_to_users(&sorted_users, &sorted_posts);
        Ok(UsersWithPostsOutput { users, stats })
    }
}
