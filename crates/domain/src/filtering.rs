use crate::model::Post;

/// 削除済み (`deletedAt` を持つ) 投稿を除いた新しいベクタを返す
///
/// Surviving posts keep their input order; the input is not modified.
pub fn filter_out_deleted_posts(posts: &[Post]) -> Vec<Post> {
    posts.iter().filter(|post| post.is_active()).cloned().collect()
}
