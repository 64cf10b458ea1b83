// tests/integration/end_to_end.rs
use serde_json::json;
use users_posts::presentation::{OutputFormat, render};
use users_posts_infra::JsonFixtureStore;
use users_posts_usecase::{ListUsersWithPosts, TimelineStats};

use super::common::FixtureDir;

#[test]
fn fixture_store_feeds_the_use_case() {
    let fixture = FixtureDir::office();
    let store = JsonFixtureStore::new(fixture.users(), fixture.posts());

    let output = ListUsersWithPosts::new(&store, &store).run().unwrap();

    assert_eq!(
        output.stats,
        TimelineStats { users: 3, posts_loaded: 5, posts_deleted: 1, posts_orphaned: 1 }
    );
    let names: Vec<_> = output.users.iter().map(|entry| entry.user.first_name.as_str()).collect();
    assert_eq!(names, vec!["Jim", "Dwight", "Pam"]);
    let jim_posts: Vec<_> = output.users[0].posts.iter().map(|post| post.id.value()).collect();
    assert_eq!(jim_posts, vec![11, 10]);
}

#[test]
fn rendered_text_matches_the_line_format() {
    let fixture = FixtureDir::new(
        &json!([{ "id": 1, "firstName": "Jim", "lastName": "Halpert", "registeredAt": 1609459200 }]),
        &json!([{ "id": 7, "userId": 1, "title": "Hello", "publishedAt": "2023-04-10T09:45:00.000Z" }]),
    );
    let store = JsonFixtureStore::new(fixture.users(), fixture.posts());

    let output = ListUsersWithPosts::new(&store, &store).run().unwrap();
    let text = render(&output.users, OutputFormat::Text).unwrap();

    assert_eq!(text, "# Jim Halpert (1609459200)\n - Hello\n   2023-04-10T09:45:00.000Z \n\n");
}

#[test]
fn backfilled_fixtures_still_load() {
    use rand::{SeedableRng, rngs::StdRng};
    use users_posts_infra::{Backfill, BackfillOptions};

    let fixture = FixtureDir::office();
    let now = chrono::Utc::now();
    let mut filler = Backfill::new(StdRng::seed_from_u64(1), now, BackfillOptions::default());

    let mut posts = JsonFixtureStore::read_records(&fixture.posts()).unwrap();
    filler.posts(&mut posts);
    JsonFixtureStore::write_records(&fixture.posts(), &posts).unwrap();
    let mut users = JsonFixtureStore::read_records(&fixture.users()).unwrap();
    filler.users(&mut users);
    JsonFixtureStore::write_records(&fixture.users(), &users).unwrap();

    let store = JsonFixtureStore::new(fixture.users(), fixture.posts());
    let output = ListUsersWithPosts::new(&store, &store).run().unwrap();

    assert_eq!(output.stats.posts_loaded, 5);
    assert_eq!(output.stats.posts_deleted, filler.report().posts_deleted);
}
