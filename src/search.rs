// 🔍 Weton Search - filters and forward scans over the calendar
//
// - filter_by_weton: days of a year/month carrying one weton
// - good_days: neptu heuristic against a birth weton
// - find_next_weton_occurrence / days_until_weton: 35-day forward scan

use crate::calendar::{month_bounds, year_bounds, CalendarEngine, JavaneseDate};
use crate::error::Result;
use crate::weton::{Weton, WETON_CYCLE_DAYS};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// RESULT TYPES
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoodDaysResult {
    pub birth_weton: Weton,
    pub year: i32,
    pub good_days: Vec<NaiveDate>,
    pub total_days: usize,
}

/// Where and when a weton next falls, counted from `from`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WetonOccurrence {
    pub weton: Weton,
    pub from: NaiveDate,
    pub date: NaiveDate,
    pub days_until: i64,
}

/// Good-day rule: equal neptu, or neptu sum divisible by 5.
///
/// A placeholder heuristic, not primbon doctrine. Kept exactly as served.
pub fn is_good_day(day_neptu: u8, birth_neptu: u8) -> bool {
    day_neptu == birth_neptu || (day_neptu as u32 + birth_neptu as u32) % 5 == 0
}

// ============================================================================
// SEARCH OPERATIONS
// ============================================================================

impl CalendarEngine {
    /// Days of `year` (or of `month` when given and non-zero) whose weton is
    /// exactly `weton`.
    ///
    /// The match is case-sensitive: callers normalize user input first. A
    /// string that is not an exactly-cased weton matches nothing.
    pub fn filter_by_weton(
        &self,
        year: i32,
        month: Option<u32>,
        weton: &str,
    ) -> Result<Vec<JavaneseDate>> {
        let (start, end) = match month {
            None | Some(0) => year_bounds(year)?,
            Some(m) => month_bounds(year, m)?,
        };

        let target = match Weton::parse_exact(weton) {
            Some(target) => target,
            None => return Ok(Vec::new()),
        };

        Ok(self
            .date_range(start, end)
            .into_iter()
            .filter(|jd| jd.weton == target)
            .collect())
    }

    /// Days of `target_year` that pass [`is_good_day`] against the weton of
    /// `birth_date`.
    pub fn good_days(&self, birth_date: NaiveDate, target_year: i32) -> Result<GoodDaysResult> {
        let birth_weton = self.weton_of(birth_date);
        let birth_neptu = birth_weton.neptu();
        let (start, end) = year_bounds(target_year)?;

        let good_days: Vec<NaiveDate> = start
            .iter_days()
            .take_while(|d| *d <= end)
            .filter(|d| is_good_day(self.neptu_of(*d), birth_neptu))
            .collect();

        Ok(GoodDaysResult {
            birth_weton,
            year: target_year,
            total_days: good_days.len(),
            good_days,
        })
    }

    /// First day on or after `from` whose weton matches `target`
    /// (case-insensitive), looking at most one full 35-day cycle ahead.
    ///
    /// `None` only when `target` is not a weton at all.
    pub fn find_next_weton_occurrence(&self, from: NaiveDate, target: &str) -> Option<NaiveDate> {
        let target: Weton = target.parse().ok()?;

        from.iter_days()
            .take(WETON_CYCLE_DAYS as usize)
            .find(|d| self.weton_of(*d) == target)
    }

    /// Whole days from `from` to the next occurrence of `target`;
    /// `Some(0)` when `from` already carries it.
    pub fn days_until_weton(&self, from: NaiveDate, target: &str) -> Option<i64> {
        self.find_next_weton_occurrence(from, target)
            .map(|found| found.signed_duration_since(from).num_days())
    }

    /// Next occurrence packaged with its distance.
    pub fn next_occurrence(&self, from: NaiveDate, target: &str) -> Option<WetonOccurrence> {
        let date = self.find_next_weton_occurrence(from, target)?;

        Some(WetonOccurrence {
            weton: self.weton_of(date),
            from,
            date,
            days_until: date.signed_duration_since(from).num_days(),
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================
