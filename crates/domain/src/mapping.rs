use std::collections::{HashMap, HashSet};

use users_posts_shared_kernel::UserId;

use crate::model::{Post, User, UserWithPosts};

/// 投稿を所有ユーザーに関連付ける
///
/// Returns one entry per user, in the order of `users`. Each entry holds the posts whose
/// `userId` equals the user's `id`, in the order of `posts`; users without posts get an empty
/// list. Posts referencing an unknown user are dropped. Neither input is modified: every
/// entry is built from clones.
pub fn map_posts_to_users(users: &[User], posts: &[Post]) -> Vec<UserWithPosts> {
    let mut by_user: HashMap<UserId, Vec<&Post>> = HashMap::with_capacity(users.len());
    for post in posts {
        by_user.entry(post.user_id).or_default().push(post);
    }

    users
        .iter()
        .map(|user| {
            let owned: Vec<Post> = by_user
                .get(&user.id)
                .map(|bucket| bucket.iter().map(|&post| post.clone()).collect())
                .unwrap_or_default();
            UserWithPosts::new(user.clone(), owned)
        })
        .collect()
}

/// Posts whose `userId` matches none of `users`, in input order.
pub fn dangling_posts<'a>(users: &[User], posts: &'a [Post]) -> Vec<&'a Post> {
    let known: HashSet<UserId> = users.iter().map(|user| user.id).collect();
    posts.iter().filter(|post| !known.contains(&post.user_id)).collect()
}
