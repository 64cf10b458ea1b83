// crates/infra/src/fixtures/json_store.rs
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use users_posts_domain::{Post, User};
use users_posts_ports::{PostSource, UserSource};
use users_posts_shared_kernel::{ErrorContext, InfrastructureError, Result, UsersPostsError};

use crate::persistence::{FileReader, FileWriter};

/// A fixture record kept as raw JSON so unrelated attributes survive rewrites.
pub type Record = Map<String, Value>;

/// `users.json` / `posts.json` pair, each a JSON array of objects.
#[derive(Debug, Clone)]
pub struct JsonFixtureStore {
    users_path: PathBuf,
    posts_path: PathBuf,
}

impl JsonFixtureStore {
    pub fn new(users_path: impl Into<PathBuf>, posts_path: impl Into<PathBuf>) -> Self {
        Self { users_path: users_path.into(), posts_path: posts_path.into() }
    }

    pub fn users_path(&self) -> &Path {
        &self.users_path
    }

    pub fn posts_path(&self) -> &Path {
        &self.posts_path
    }

    /// Reads an array of JSON objects without interpreting any field.
    pub fn read_records(path: &Path) -> Result<Vec<Record>> {
        let value: Value = Self::read_json(path)?;
        let Value::Array(items) = value else {
            return Err(shape_error(path, "top-level value is not an array"));
        };

        items
            .into_iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::Object(record) => Ok(record),
                _ => Err(shape_error(path, &format!("element {index} is not an object"))),
            })
            .collect()
    }

    /// Writes records back as a pretty-printed array (two-space indent), replacing the file
    /// atomically.
    pub fn write_records(path: &Path, records: &[Record]) -> Result<()> {
        let data = serde_json::to_vec_pretty(records)
            .with_context(|| format!("encoding {}", path.display()))?;
        FileWriter::atomic_write(path, &data)?;
        log::debug!("wrote {} records to {}", records.len(), path.display());
        Ok(())
    }

    fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
        let bytes = FileReader::read_to_end(path)?;
        serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))
    }
}

fn shape_error(path: &Path, reason: &str) -> UsersPostsError {
    InfrastructureError::FixtureShape { path: path.to_path_buf(), reason: reason.to_string() }.into()
}

impl UserSource for JsonFixtureStore {
    fn load_users(&self) -> Result<Vec<User>> {
        let users: Vec<User> = Self::read_json(&self.users_path)?;
        log::debug!("read {} users from {}", users.len(), self.users_path.display());
        Ok(users)
    }
}

impl PostSource for JsonFixtureStore {
    fn load_posts(&self) -> Result<Vec<Post>> {
        let posts: Vec<Post> = Self::read_json(&self.posts_path)?;
        log::debug!("read {} posts from {}", posts.len(), self.posts_path.display());
        Ok(posts)
    }
}
