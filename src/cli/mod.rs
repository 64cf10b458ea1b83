mod args;
mod parsers;
mod value_enum;

pub use args::{Args, BackfillArgs, Command};
pub use parsers::parse_ratio;
pub use value_enum::OutputFormatArg;
