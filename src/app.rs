// src/app.rs
use std::io::{self, Write};

use anyhow::{Context, Result};
use chrono::Utc;
use rand::{SeedableRng, rngs::StdRng};
use users_posts_infra::{Backfill, BackfillOptions, JsonFixtureStore};
use users_posts_usecase::ListUsersWithPosts;

use crate::{
    config::{Config, Mode},
    presentation,
};

pub fn run(config: &Config) -> Result<()> {
    match config.mode {
        Mode::Show => show(config),
        Mode::Backfill { seed, deleted_ratio } => backfill(config, seed, deleted_ratio),
    }
}

/// Loads both fixtures, builds the timeline and prints it to stdout.
fn show(config: &Config) -> Result<()> {
    let store = JsonFixtureStore::new(config.users_path.clone(), config.posts_path.clone());
    let output = ListUsersWithPosts::new(&store, &store).run()?;

    let rendered = presentation::render(&output.users, config.format)?;
    let mut stdout = io::stdout().lock();
    stdout.write_all(rendered.as_bytes()).context("writing to stdout")?;
    stdout.flush().context("writing to stdout")?;

    tracing::info!(
        users = output.stats.users,
        posts = output.stats.posts_attached(),
        "timeline rendered"
    );
    Ok(())
}

/// Rewrites the time fields of both fixtures in place.
fn backfill(config: &Config, seed: Option<u64>, deleted_ratio: f64) -> Result<()> {
    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut filler = Backfill::new(rng, Utc::now(), BackfillOptions { deleted_ratio });

    // Both files must parse before either is rewritten.
    let mut posts = JsonFixtureStore::read_records(&config.posts_path)?;
    let mut users = JsonFixtureStore::read_records(&config.users_path)?;

    filler.posts(&mut posts);
    filler.users(&mut users);

    JsonFixtureStore::write_records(&config.posts_path, &posts)?;
    JsonFixtureStore::write_records(&config.users_path, &users)?;

    let report = filler.report();
    tracing::info!(
        posts = report.posts,
        deleted = report.posts_deleted,
        users = report.users,
        iso = report.users_iso,
        epoch = report.users_epoch,
        "backfill done"
    );
    Ok(())
}
