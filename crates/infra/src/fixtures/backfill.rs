// crates/infra/src/fixtures/backfill.rs
//
// Fills the synthetic time fields of raw fixture records:
// posts get `publishedAt` (and sometimes `deletedAt`), users get `registeredAt`.
use chrono::{DateTime, Duration, SecondsFormat, Utc};
use rand::Rng;
use serde_json::Value;

use super::json_store::Record;

const DAY_MILLISECONDS: i64 = 24 * 60 * 60 * 1_000;
const MONTH_MILLISECONDS: i64 = 30 * DAY_MILLISECONDS;
const YEAR_MILLISECONDS: i64 = 365 * DAY_MILLISECONDS;

/// How far back `publishedAt` may go, in months.
const PUBLISHED_WINDOW_MONTHS: i64 = 6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackfillOptions {
    /// Probability that a post is marked deleted, within `0.0..=1.0`.
    pub deleted_ratio: f64,
}

impl Default for BackfillOptions {
    fn default() -> Self {
        Self { deleted_ratio: 0.25 }
    }
}

/// What a backfill pass changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BackfillReport {
    pub posts: usize,
    pub posts_deleted: usize,
    pub users: usize,
    pub users_iso: usize,
    pub users_epoch: usize,
}

/// Random time-field generator anchored at `now`.
pub struct Backfill<R: Rng> {
    rng: R,
    now: DateTime<Utc>,
    options: BackfillOptions,
    report: BackfillReport,
}

impl<R: Rng> Backfill<R> {
    pub fn new(rng: R, now: DateTime<Utc>, options: BackfillOptions) -> Self {
        Self { rng, now, options, report: BackfillReport::default() }
    }

    /// Every post gets a `publishedAt` within the past six months. Each post is independently
    /// marked deleted with probability `deleted_ratio`, at a random instant within one month
    /// after publishing; posts not picked lose any stale `deletedAt`.
    pub fn posts(&mut self, posts: &mut [Record]) {
        for post in posts.iter_mut() {
            let published_at = self.now - self.random_span(PUBLISHED_WINDOW_MONTHS * MONTH_MILLISECONDS);
            post.insert("publishedAt".to_string(), Value::String(iso(published_at)));

            if self.rng.gen_range(0.0..1.0) < self.options.deleted_ratio {
                let deleted_at = published_at + self.random_span(MONTH_MILLISECONDS);
                post.insert("deletedAt".to_string(), Value::String(iso(deleted_at)));
                self.report.posts_deleted += 1;
            } else {
                post.shift_remove("deletedAt");
            }
        }
        self.report.posts += posts.len();
    }

    /// Every user gets a `registeredAt` one to two years back: half of them as an ISO string
    /// (web sign-up), the rest as epoch seconds (mobile sign-up).
    pub fn users(&mut self, users: &mut [Record]) {
        for user in users.iter_mut() {
            let one_year_back = self.now - Duration::milliseconds(YEAR_MILLISECONDS);
            let registered_at = one_year_back - self.random_span(YEAR_MILLISECONDS);

            let value = if self.rng.gen_bool(0.5) {
                self.report.users_iso += 1;
                Value::String(iso(registered_at))
            } else {
                self.report.users_epoch += 1;
                Value::from(registered_at.timestamp_millis() / 1000)
            };
            user.insert("registeredAt".to_string(), value);
        }
        self.report.users += users.len();
    }

    pub fn report(&self) -> BackfillReport {
        self.report
    }

    /// Uniform span in `[0, max_millis)`.
    fn random_span(&mut self, max_millis: i64) -> Duration {
        Duration::milliseconds(self.rng.gen_range(0..max_millis))
    }
}

/// `YYYY-MM-DDTHH:MM:SS.sssZ`
fn iso(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}
