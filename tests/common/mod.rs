// tests/common/mod.rs
//! 共通テストユーティリティ
#![allow(dead_code)]

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde_json::{Value, json};

/// users.json / posts.json を置いた一時ディレクトリ
pub struct FixtureDir {
    dir: tempfile::TempDir,
}

impl FixtureDir {
    pub fn new(users: &Value, posts: &Value) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let fixture = Self { dir };
        fixture.write("users.json", users);
        fixture.write("posts.json", posts);
        fixture
    }

    pub fn office() -> Self {
        Self::new(&office_users(), &office_posts())
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn users(&self) -> PathBuf {
        self.dir.path().join("users.json")
    }

    pub fn posts(&self) -> PathBuf {
        self.dir.path().join("posts.json")
    }

    pub fn write_raw(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    pub fn read(&self, name: &str) -> Value {
        let text = fs::read_to_string(self.dir.path().join(name)).unwrap();
        serde_json::from_str(&text).unwrap()
    }

    fn write(&self, name: &str, value: &Value) {
        self.write_raw(name, &serde_json::to_string_pretty(value).unwrap());
    }
}

/// Registered in the order Jim, Dwight, Pam; listed out of order on purpose.
pub fn office_users() -> Value {
    json!([
        { "id": 1, "firstName": "Pam", "lastName": "Beesly", "registeredAt": "2022-06-01T08:07:20.410Z" },
        { "id": 2, "firstName": "Dwight", "lastName": "Schrute", "registeredAt": 1609459200 },
        { "id": 3, "firstName": "Jim", "lastName": "Halpert", "registeredAt": "2020-06-01T08:07:20.410Z" }
    ])
}

pub fn office_posts() -> Value {
    json!([
        { "id": 10, "userId": 3, "title": "Second prank", "publishedAt": "2023-06-01T08:00:00Z", "reactions": 5 },
        { "id": 11, "userId": 3, "title": "First prank", "publishedAt": "2022-06-01T08:00:00Z" },
        { "id": 12, "userId": 2, "title": "Deleted rant", "publishedAt": "2022-01-01T00:00:00Z",
          "deletedAt": "2022-01-02T00:00:00Z" },
        { "id": 13, "userId": 1, "title": "Art show", "publishedAt": "2023-01-01T00:00:00Z", "deletedAt": null },
        { "id": 14, "userId": 99, "title": "Nobody's post", "publishedAt": "2023-02-01T00:00:00Z" }
    ])
}
