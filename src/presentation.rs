// src/presentation.rs
use std::fmt::{self, Write};

use users_posts_domain::UserWithPosts;
use users_posts_shared_kernel::{PresentationError, PresentationResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Markdown,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::Markdown => "markdown",
        }
    }
}

/// タイムラインを指定フォーマットの文字列にする
pub fn render(users: &[UserWithPosts], format: OutputFormat) -> PresentationResult<String> {
    match format {
        OutputFormat::Text => render_text(users).map_err(|e| failed(format, &e)),
        OutputFormat::Markdown => render_markdown(users).map_err(|e| failed(format, &e)),
        OutputFormat::Json => serde_json::to_string_pretty(users).map_err(|e| failed(format, &e)),
    }
}

fn failed(format: OutputFormat, reason: &dyn fmt::Display) -> PresentationError {
    PresentationError::RenderFailed { format: format.as_str().to_string(), reason: reason.to_string() }
}

fn render_text(users: &[UserWithPosts]) -> Result<String, fmt::Error> {
    let mut out = String::new();
    for entry in users {
        let user = &entry.user;
        writeln!(out, "# {} {} ({})", user.first_name, user.last_name, user.registered_at)?;
        for post in &entry.posts {
            writeln!(out, " - {}", post.title)?;
            writeln!(out, "   {} {}", post.published_at, post.deleted_at.as_deref().unwrap_or_default())?;
        }
        writeln!(out)?;
    }
    Ok(out)
}

fn render_markdown(users: &[UserWithPosts]) -> Result<String, fmt::Error> {
    let mut out = String::new();
    for entry in users {
        let user = &entry.user;
        writeln!(out, "## {}", user.full_name())?;
        writeln!(out)?;
        writeln!(out, "Registered: `{}`", user.registered_at)?;
        writeln!(out)?;
        if entry.posts.is_empty() {
            writeln!(out, "_No posts._")?;
        }
        for post in &entry.posts {
            match post.deleted_at.as_deref() {
                Some(deleted_at) => {
                    writeln!(out, "- **{}** (`{}`, deleted `{deleted_at}`)", post.title, post.published_at)?
                }
                None => writeln!(out, "- **{}** (`{}`)", post.title, post.published_at)?,
            }
        }
        writeln!(out)?;
    }
    Ok(out)
}
