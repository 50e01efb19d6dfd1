use crate::error::SkylineError;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const SCHEMA_VERSION: u32 = 1;

/// A 4-digit calendar year (1000..=9999).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Year(i32);

impl Year {
    pub fn new(value: i32) -> Result<Self, SkylineError> {
        if (1000..=9999).contains(&value) {
            Ok(Self(value))
        } else {
            Err(SkylineError::InvalidYear(value.to_string()))
        }
    }

    pub fn value(self) -> i32 {
        self.0
    }
}

impl FromStr for Year {
    type Err = SkylineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.len() != 4 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(SkylineError::InvalidYear(s.to_string()));
        }
        let value = s
            .parse::<i32>()
            .map_err(|_| SkylineError::InvalidYear(s.to_string()))?;
        Self::new(value)
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayBucket {
    pub date: NaiveDate,
    pub count: u32,
}

/// Commit counts for every weekday of one year, in calendar order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    year: Year,
    buckets: Vec<DayBucket>,
}

impl Histogram {
    pub(crate) fn new(year: Year, buckets: Vec<DayBucket>) -> Self {
        Self { year, buckets }
    }

    pub fn year(&self) -> Year {
        self.year
    }

    pub fn buckets(&self) -> &[DayBucket] {
        &self.buckets
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn max_count(&self) -> u32 {
        self.buckets.iter().map(|b| b.count).max().unwrap_or(0)
    }

    pub fn total_commits(&self) -> u64 {
        self.buckets.iter().map(|b| b.count as u64).sum()
    }

    /// True when no bucket holds a commit.
    pub fn has_no_commits(&self) -> bool {
        self.max_count() == 0
    }

    pub fn busiest_day(&self) -> Option<&DayBucket> {
        self.buckets
            .iter()
            .filter(|b| b.count > 0)
            .max_by(|a, b| a.count.cmp(&b.count).then(b.date.cmp(&a.date)))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistogramOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub year: Year,
    pub author: Option<String>,
    pub total_commits: u64,
    pub max_count: u32,
    pub buckets: Vec<DayBucket>,
}
