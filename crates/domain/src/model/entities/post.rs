use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use users_posts_shared_kernel::{PostId, UserId};

/// A post as delivered by the data source.
///
/// `title`, `body`, `tags` and every attribute not named here (`reactions`, ...) are payload
/// that the core never interprets; unknown keys are kept in `extra` so they survive a
/// serialization round trip.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub user_id: UserId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// 公開日時 (ISO-8601), e.g. `2023-04-10T09:45:00Z`
    pub published_at: String,
    /// 削除日時 (ISO-8601)。キーが無い、または `null` なら有効な投稿
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Post {
    pub fn builder(id: i64) -> PostBuilder {
        PostBuilder::new(PostId::new(id))
    }

    /// Soft-deleted posts carry a `deletedAt`, whatever its content.
    #[inline]
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        !self.is_deleted()
    }
}

/// Builder filling every field not under test with a neutral default.
#[derive(Debug, Clone)]
pub struct PostBuilder {
    post: Post,
}

impl PostBuilder {
    pub fn new(id: PostId) -> Self {
        Self { post: Post { id, ..Post::default() } }
    }

    pub fn user_id(mut self, user_id: i64) -> Self {
        self.post.user_id = UserId::new(user_id);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.post.title = title.into();
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.post.body = body.into();
        self
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.post.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn published_at(mut self, published_at: impl Into<String>) -> Self {
        self.post.published_at = published_at.into();
        self
    }

    pub fn deleted_at(mut self, deleted_at: impl Into<String>) -> Self {
        self.post.deleted_at = Some(deleted_at.into());
        self
    }

    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.post.extra.insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> Post {
        self.post
    }
}
