// src/config.rs
use std::path::PathBuf;

use crate::{
    cli::{Args, Command},
    presentation::OutputFormat,
};

/// 実行モード
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mode {
    /// Print the users-with-posts timeline.
    Show,
    /// Rewrite the fixture time fields in place.
    Backfill { seed: Option<u64>, deleted_ratio: f64 },
}

/// Resolved runtime configuration, free of clap types.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub users_path: PathBuf,
    pub posts_path: PathBuf,
    pub format: OutputFormat,
    pub verbosity: u8,
    pub mode: Mode,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let mode = match args.command {
            None => Mode::Show,
            Some(Command::Backfill(backfill)) => {
                Mode::Backfill { seed: backfill.seed, deleted_ratio: backfill.deleted_ratio }
            }
        };

        Self {
            users_path: args.users,
            posts_path: args.posts,
            format: args.format.into(),
            verbosity: args.verbose,
            mode,
        }
    }
}
