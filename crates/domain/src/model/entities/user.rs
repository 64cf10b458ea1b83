use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use users_posts_shared_kernel::{TimeValue, UserId};

/// A user as delivered by the data source.
///
/// `registeredAt` is an ISO-8601 string for web sign-ups and epoch seconds for mobile
/// sign-ups; see [`TimeValue`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub registered_at: TimeValue,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    pub fn builder(id: i64) -> UserBuilder {
        UserBuilder::new(UserId::new(id))
    }

    pub fn full_name(&self) -> String {
        match (self.first_name.is_empty(), self.last_name.is_empty()) {
            (false, false) => format!("{} {}", self.first_name, self.last_name),
            (false, true) => self.first_name.clone(),
            (true, _) => self.last_name.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct UserBuilder {
    user: User,
}

impl UserBuilder {
    pub fn new(id: UserId) -> Self {
        Self { user: User { id, ..User::default() } }
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.user.first_name = first_name.into();
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.user.last_name = last_name.into();
        self
    }

    pub fn registered_at(mut self, registered_at: impl Into<TimeValue>) -> Self {
        self.user.registered_at = registered_at.into();
        self
    }

    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.user.extra.insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> User {
        self.user
    }
}
