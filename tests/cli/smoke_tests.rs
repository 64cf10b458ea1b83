use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

use super::common::FixtureDir;

fn users_posts(fixture: &FixtureDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_users_posts"));
    cmd.env_remove("RUST_LOG")
        .arg("--users")
        .arg(fixture.users())
        .arg("--posts")
        .arg(fixture.posts());
    cmd
}

#[test]
fn shows_help() {
    Command::new(env!("CARGO_BIN_EXE_users_posts"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("backfill"))
        .stdout(predicate::str::contains("--format"));
}

#[test]
fn text_output_lists_users_by_registration() {
    let fixture = FixtureDir::office();

    let output = users_posts(&fixture).assert().success().get_output().stdout.clone();
    let text = String::from_utf8(output).unwrap();

    let jim = text.find("# Jim Halpert (2020-06-01T08:07:20.410Z)").unwrap();
    let dwight = text.find("# Dwight Schrute (1609459200)").unwrap();
    let pam = text.find("# Pam Beesly (2022-06-01T08:07:20.410Z)").unwrap();
    assert!(jim < dwight && dwight < pam);

    let first = text.find(" - First prank").unwrap();
    let second = text.find(" - Second prank").unwrap();
    assert!(jim < first && first < second && second < dwight);

    assert!(!text.contains("Deleted rant"));
    assert!(text.contains(" - Art show"), "null deletedAt is active");
    assert!(!text.contains("Nobody's post"));
}

#[test]
fn json_output_keeps_unknown_attributes() {
    let fixture = FixtureDir::office();

    let output = users_posts(&fixture).args(["--format", "json"]).assert().success().get_output().stdout.clone();
    let value: Value = serde_json::from_slice(&output).unwrap();

    let users = value.as_array().unwrap();
    assert_eq!(users.len(), 3);
    assert_eq!(users[0]["firstName"], "Jim");
    assert_eq!(users[0]["posts"][0]["id"], 11);
    assert_eq!(users[0]["posts"][1]["reactions"], 5);
    assert_eq!(users[1]["posts"].as_array().map(Vec::len), Some(0));
}

#[test]
fn markdown_output_has_headings() {
    let fixture = FixtureDir::office();

    users_posts(&fixture)
        .args(["--format", "markdown"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Jim Halpert"))
        .stdout(predicate::str::contains("- **First prank**"));
}

#[test]
fn missing_fixture_fails_with_path_in_message() {
    let fixture = FixtureDir::office();

    Command::new(env!("CARGO_BIN_EXE_users_posts"))
        .arg("--users")
        .arg(fixture.path().join("absent.json"))
        .arg("--posts")
        .arg(fixture.posts())
        .assert()
        .failure()
        .stderr(predicate::str::contains("absent.json"));
}

#[test]
fn malformed_timestamp_fails() {
    let fixture = FixtureDir::office();
    fixture.write_raw(
        "users.json",
        r#"[{"id":1,"firstName":"Bad","lastName":"Date","registeredAt":"yesterday"}]"#,
    );

    users_posts(&fixture)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed timestamp 'yesterday'"));
}

#[test]
fn verbose_flag_logs_summary_to_stderr() {
    let fixture = FixtureDir::office();

    users_posts(&fixture)
        .arg("-v")
        .assert()
        .success()
        .stderr(predicate::str::contains("reference unknown users"))
        .stderr(predicate::str::contains("timeline rendered"));
}

#[test]
fn backfill_rewrites_time_fields_in_place() {
    let fixture = FixtureDir::office();

    users_posts(&fixture).args(["backfill", "--seed", "42", "--deleted-ratio", "1"]).assert().success();

    let posts = fixture.read("posts.json");
    for post in posts.as_array().unwrap() {
        assert!(post["publishedAt"].as_str().unwrap().ends_with('Z'));
        assert!(post["deletedAt"].is_string());
    }
    assert_eq!(posts[0]["reactions"], 5, "unrelated fields survive");

    let users = fixture.read("users.json");
    for user in users.as_array().unwrap() {
        let registered = &user["registeredAt"];
        assert!(registered.is_string() || registered.is_i64());
    }
    assert_eq!(users[0]["firstName"], "Pam");
}

#[test]
fn backfill_with_same_seed_is_reproducible_apart_from_now() {
    let first = FixtureDir::office();
    let second = FixtureDir::office();

    users_posts(&first).args(["backfill", "--seed", "7", "--deleted-ratio", "0.5"]).assert().success();
    users_posts(&second).args(["backfill", "--seed", "7", "--deleted-ratio", "0.5"]).assert().success();

    let deleted = |fixture: &FixtureDir| -> Vec<bool> {
        fixture.read("posts.json").as_array().unwrap().iter().map(|p| p.get("deletedAt").is_some()).collect()
    };
    assert_eq!(deleted(&first), deleted(&second));
}

#[test]
fn backfill_leaves_posts_alone_when_users_do_not_parse() {
    let fixture = FixtureDir::office();
    fixture.write_raw("users.json", "[{");
    let posts_before = std::fs::read_to_string(fixture.posts()).unwrap();

    users_posts(&fixture)
        .args(["backfill", "--seed", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("users.json"));

    assert_eq!(std::fs::read_to_string(fixture.posts()).unwrap(), posts_before);
}

#[test]
fn backfill_rejects_ratio_out_of_range() {
    let fixture = FixtureDir::office();

    users_posts(&fixture)
        .args(["backfill", "--deleted-ratio", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("outside 0..=1"));
}
