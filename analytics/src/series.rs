//! Calendar-day deduplication of dated record series

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};

use shared::WeighingRecord;

/// A record carrying a measurement timestamp
pub trait Dated {
    fn timestamp(&self) -> DateTime<Utc>;

    /// Calendar day the record belongs to
    fn day(&self) -> NaiveDate {
        self.timestamp().date_naive()
    }
}

impl Dated for WeighingRecord {
    fn timestamp(&self) -> DateTime<Utc> {
        self.date
    }
}

/// Collapse an unordered series to one canonical record per calendar day
///
/// Among records sharing a day, the one with the greatest full timestamp
/// survives (the later input element on an exact timestamp tie). The
/// output is a new sequence in ascending day order; the input is never
/// mutated. Empty input yields empty output.
pub fn dedup_by_day<T: Dated + Clone>(records: &[T]) -> Vec<T> {
    let mut by_day: BTreeMap<NaiveDate, T> = BTreeMap::new();
    for record in records {
        match by_day.get(&record.day()) {
            Some(kept) if kept.timestamp() > record.timestamp() => {}
            _ => {
                by_day.insert(record.day(), record.clone());
            }
        }
    }
    by_day.into_values().collect()
}
