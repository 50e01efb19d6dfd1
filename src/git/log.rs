use crate::error::{Result, SkylineError};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, info};

/// Reads commit dates by running `git log` in a working directory.
pub struct GitLog {
    binary: PathBuf,
    workdir: PathBuf,
}

impl GitLog {
    pub fn new<B: AsRef<Path>, W: AsRef<Path>>(binary: B, workdir: W) -> Self {
        Self {
            binary: binary.as_ref().to_path_buf(),
            workdir: workdir.as_ref().to_path_buf(),
        }
    }

    /// Author dates of every reachable commit, optionally filtered by author.
    pub fn commit_dates(&self, author: Option<&str>) -> Result<Vec<NaiveDate>> {
        let raw = self.raw_log(author)?;
        let dates = parse_commit_dates(&raw)?;
        info!(commits = dates.len(), author = author.unwrap_or("<any>"), "read git history");
        Ok(dates)
    }

    fn raw_log(&self, author: Option<&str>) -> Result<String> {
        let mut cmd = Command::new(&self.binary);
        cmd.args(["log", "--date=short", "--pretty=format:%ad"])
            .current_dir(&self.workdir);
        if let Some(author) = author {
            cmd.arg(format!("--author={author}"));
        }
        debug!(binary = %self.binary.display(), workdir = %self.workdir.display(), "running git log");

        let output = cmd.output().map_err(|e| {
            SkylineError::VersionControl(format!(
                "failed to run {}: {e}",
                self.binary.display()
            ))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(SkylineError::VersionControl(format!(
                "git log exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Parses newline-separated `YYYY-MM-DD` lines. Blank lines are skipped.
pub fn parse_commit_dates(log: &str) -> Result<Vec<NaiveDate>> {
    log.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(parse_short_date)
        .collect()
}

fn parse_short_date(line: &str) -> Result<NaiveDate> {
    let malformed = || SkylineError::MalformedDate {
        line: line.to_string(),
    };
    let bytes = line.as_bytes();
    let shape_ok = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !shape_ok {
        return Err(malformed());
    }
    NaiveDate::parse_from_str(line, "%Y-%m-%d").map_err(|_| malformed())
}
