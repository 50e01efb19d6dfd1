mod log;

pub use log::{parse_commit_dates, GitLog};
