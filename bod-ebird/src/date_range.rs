use crate::error::{EbirdError, Result};
use chrono::{NaiveDate, TimeDelta};
use std::mem::replace;

/// An inclusive date range used for filtering observations.
///
/// Construction rejects ranges whose start is after their end; iterating
/// yields each date from the start through the end (inclusive).
#[derive(Clone, Eq, PartialEq, Copy, Debug)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(EbirdError::InvalidDateRange { start, end });
        }
        Ok(DateRange { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Whether a date falls within the range, bounds included.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

impl Iterator for DateRange {
    type Item = NaiveDate;
    fn next(&mut self) -> Option<Self::Item> {
        if self.start <= self.end {
            let next = self.start + TimeDelta::try_days(1).unwrap();
            Some(replace(&mut self.start, next))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DateRange;
    use crate::error::EbirdError;
    use chrono::NaiveDate;

    #[test]
    fn test_date_range_iteration() {
        let start = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 5, 5).unwrap();
        let range = DateRange::new(start, end).unwrap();
        let dates: Vec<NaiveDate> = range.collect();
        assert_eq!(dates.len(), 5);
        assert_eq!(dates[0], start);
        assert_eq!(dates[4], end);
    }

    #[test]
    fn test_date_range_single_day() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let range = DateRange::new(day, day).unwrap();
        assert!(range.contains(day));
        let dates: Vec<NaiveDate> = range.collect();
        assert_eq!(dates.len(), 1);
        assert_eq!(dates[0], day);
    }

    #[test]
    fn test_date_range_rejects_inverted_bounds() {
        let start = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 3, 14).unwrap();
        let result = DateRange::new(start, end);
        assert!(matches!(result, Err(EbirdError::InvalidDateRange { .. })));
    }

    #[test]
    fn test_date_range_contains_bounds() {
        let start = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();
        let range = DateRange::new(start, end).unwrap();
        assert!(range.contains(start));
        assert!(range.contains(end));
        assert!(!range.contains(NaiveDate::from_ymd_opt(2024, 5, 11).unwrap()));
    }
}
