// src/cli/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

use super::{parsers::parse_ratio, value_enum::OutputFormatArg};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "users_posts",
    version = crate::VERSION,
    about = "ユーザーと投稿を時系列に並べて表示するツール"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// ユーザー一覧 (JSON 配列)
    #[arg(long, global = true, default_value = "data/users.json", value_hint = ValueHint::FilePath)]
    pub users: PathBuf,

    /// 投稿一覧 (JSON 配列)
    #[arg(long, global = true, default_value = "data/posts.json", value_hint = ValueHint::FilePath)]
    pub posts: PathBuf,

    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "text", help_heading = "出力")]
    pub format: OutputFormatArg,

    /// ログを詳細にする (-v: info, -vv: debug, -vvv: trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// publishedAt / deletedAt / registeredAt をランダムに埋め直す
    Backfill(BackfillArgs),
}

#[derive(clap::Args, Debug)]
pub struct BackfillArgs {
    /// 乱数シード（指定すると出力が再現可能になる）
    #[arg(long)]
    pub seed: Option<u64>,

    /// 削除済みにする投稿の割合 (0..=1)
    #[arg(long, default_value = "0.25", value_parser = parse_ratio)]
    pub deleted_ratio: f64,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn verify_cli() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults_point_at_data_directory() {
        let args = Args::try_parse_from(["users_posts"]).unwrap();
        assert!(args.command.is_none());
        assert_eq!(args.users, PathBuf::from("data/users.json"));
        assert_eq!(args.posts, PathBuf::from("data/posts.json"));
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn backfill_accepts_global_paths() {
        let args = Args::try_parse_from([
            "users_posts",
            "backfill",
            "--users",
            "u.json",
            "--seed",
            "42",
            "--deleted-ratio",
            "0.5",
            "-vv",
        ])
        .unwrap();

        let Some(Command::Backfill(backfill)) = args.command else {
            panic!("expected backfill");
        };
        assert_eq!(backfill.seed, Some(42));
        assert!((backfill.deleted_ratio - 0.5).abs() < f64::EPSILON);
        assert_eq!(args.users, PathBuf::from("u.json"));
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn ratio_out_of_range_is_rejected() {
        let err = Args::try_parse_from(["users_posts", "backfill", "--deleted-ratio", "1.5"]).unwrap_err();
        assert!(err.to_string().contains("0..=1"));
    }
}
