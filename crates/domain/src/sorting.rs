// domain timeline sorting
//
// Posts are ordered by `publishedAt`, users by `registeredAt`. Every time value goes through
// `normalize_time` before any comparison; the raw string/integer forms are never compared.
use std::cmp::Ordering;

pub use primitive::{QuickSort, SortKind, SortPrimitive, StableSort};
use users_posts_shared_kernel::{DomainResult, EpochSeconds, normalize_time};

use crate::model::{Post, User};

pub mod primitive;

/// Primitive behind [`sort_posts_by_published_date`].
pub const POSTS_PRIMITIVE: QuickSort = QuickSort;

/// Primitive behind [`sort_users_by_registration_date`].
pub const USERS_PRIMITIVE: StableSort = StableSort;

/// 投稿を公開日時の昇順に並べた新しいベクタを返す
///
/// Uses the hand-rolled [`QuickSort`]; posts with equal publish times keep their input order.
/// The input slice is left untouched.
///
/// # Errors
/// Fails with `MalformedTimestamp` when any `publishedAt` cannot be parsed.
pub fn sort_posts_by_published_date(posts: &[Post]) -> DomainResult<Vec<Post>> {
    sort_posts_with(&POSTS_PRIMITIVE, posts)
}

/// ユーザーを登録日時の昇順に並べた新しいベクタを返す
///
/// Handles both `registeredAt` representations (ISO string and epoch seconds) in the same
/// collection.
///
/// # Errors
/// Fails with `MalformedTimestamp` when any `registeredAt` cannot be parsed.
pub fn sort_users_by_registration_date(users: &[User]) -> DomainResult<Vec<User>> {
    sort_users_with(&USERS_PRIMITIVE, users)
}

/// [`sort_posts_by_published_date`] with an injected primitive.
pub fn sort_posts_with<P: SortPrimitive>(primitive: &P, posts: &[Post]) -> DomainResult<Vec<Post>> {
    sort_by_time(primitive, posts, |post| normalize_time(&post.published_at))
}

/// [`sort_users_by_registration_date`] with an injected primitive.
pub fn sort_users_with<P: SortPrimitive>(primitive: &P, users: &[User]) -> DomainResult<Vec<User>> {
    sort_by_time(primitive, users, |user| normalize_time(&user.registered_at))
}

/// Compares the `registeredAt` instants of two users.
///
/// `Equal` for the same instant regardless of representation, `Less` when `a` registered
/// earlier, `Greater` otherwise.
pub fn compare_users(a: &User, b: &User) -> DomainResult<Ordering> {
    Ok(normalize_time(&a.registered_at)?.cmp(&normalize_time(&b.registered_at)?))
}

/// Compares the `publishedAt` instants of two posts.
pub fn compare_posts(a: &Post, b: &Post) -> DomainResult<Ordering> {
    Ok(normalize_time(&a.published_at)?.cmp(&normalize_time(&b.published_at)?))
}

/// Decorate, sort, undecorate: every key is normalized exactly once, so a malformed value
/// fails the call before any ordering happens.
fn sort_by_time<P, T, K>(primitive: &P, items: &[T], key: K) -> DomainResult<Vec<T>>
where
    P: SortPrimitive,
    T: Clone,
    K: Fn(&T) -> DomainResult<EpochSeconds>,
{
    if items.is_empty() {
        return Ok(Vec::new());
    }

    let keyed = items
        .iter()
        .map(|item| key(item).map(|time| (time, item)))
        .collect::<DomainResult<Vec<_>>>()?;

    log::trace!("sorting {} items with {}", keyed.len(), primitive.kind());
    let sorted = primitive.sort_by(keyed, |(a, _), (b, _)| a.cmp(b));

    Ok(sorted.into_iter().map(|(_, item)| item.clone()).collect())
}
