use crate::model::{DayBucket, Histogram, Year};
use chrono::{Datelike, Days, NaiveDate, Weekday};
use std::collections::HashMap;
use tracing::debug;

/// Moves weekend dates onto the nearest workday: Saturday to the
/// preceding Friday, Sunday to the following Monday.
pub fn fold_weekend(date: NaiveDate) -> NaiveDate {
    let shifted = match date.weekday() {
        Weekday::Sat => date.checked_sub_days(Days::new(1)),
        Weekday::Sun => date.checked_add_days(Days::new(1)),
        _ => return date,
    };
    // NaiveDate spans far beyond 1000..=9999, so a one-day shift cannot overflow.
    shifted.unwrap_or(date)
}

pub fn is_weekday(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Every Monday to Friday of `year`, in calendar order.
pub fn weekdays_of_year(year: Year) -> Vec<NaiveDate> {
    NaiveDate::from_ymd_opt(year.value(), 1, 1)
        .into_iter()
        .flat_map(|first| first.iter_days())
        .take_while(|d| d.year() == year.value())
        .filter(|d| is_weekday(*d))
        .collect()
}

pub fn build(year: Year, commit_dates: &[NaiveDate]) -> Histogram {
    let mut per_day: HashMap<NaiveDate, u32> = HashMap::new();
    for date in commit_dates {
        *per_day.entry(fold_weekend(*date)).or_insert(0) += 1;
    }

    let buckets: Vec<DayBucket> = weekdays_of_year(year)
        .into_iter()
        .map(|date| DayBucket {
            date,
            count: per_day.get(&date).copied().unwrap_or(0),
        })
        .collect();

    let histogram = Histogram::new(year, buckets);
    debug!(
        year = year.value(),
        commits_seen = commit_dates.len(),
        commits_in_year = histogram.total_commits(),
        buckets = histogram.len(),
        "built commit histogram"
    );
    histogram
}
