// 📅 Calendar Engine - Gregorian → Javanese
//
// Day of week comes from the Gregorian calendar. Pasaran comes from the
// number of whole days since 1970-01-01, which was Kamis Wage:
//
//   pasaran_index = (days_since_epoch + 3) mod 5
//
// Everything else (weton, neptu, Javanese year) derives from those two.

use crate::error::{CalendarError, Result};
use crate::weton::{Day, Pasaran, Weton};
use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Pasaran index of the epoch day (3 = Wage).
pub const EPOCH_PASARAN_OFFSET: i64 = 3;

/// Javanese year = Gregorian year - 1632.
pub const JAVANESE_YEAR_OFFSET: i32 = 1632;

/// Indonesian Gregorian month names, January first.
pub const MONTH_NAMES: [&str; 12] = [
    "Januari", "Februari", "Maret", "April", "Mei", "Juni",
    "Juli", "Agustus", "September", "Oktober", "November", "Desember",
];

/// Indonesian name for month 1-12, empty outside that range.
pub fn month_name(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|i| MONTH_NAMES.get(i as usize))
        .copied()
        .unwrap_or("")
}

// ============================================================================
// JAVANESE DATE
// ============================================================================

/// One Gregorian day in Javanese terms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JavaneseDate {
    /// Serialized as YYYY-MM-DD
    pub gregorian_date: NaiveDate,

    pub day: Day,
    pub pasaran: Pasaran,

    /// Always "<day> <pasaran>"
    pub weton: Weton,

    pub javanese_year: i32,

    /// 1-based, 1 = Minggu
    pub day_of_week: u8,

    /// 1-based, 1 = Legi
    pub pasaran_index: u8,

    /// 7..=18
    pub neptu: u8,
}

// ============================================================================
// PERIOD DATA
// ============================================================================

/// Occurrence counts over a run of days.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearStatistics {
    pub day_count: BTreeMap<Day, usize>,
    pub pasaran_count: BTreeMap<Pasaran, usize>,
    pub weton_count: BTreeMap<Weton, usize>,
}

impl YearStatistics {
    /// Tally days, pasarans and wetons across `dates`.
    pub fn tally(dates: &[JavaneseDate]) -> Self {
        let mut stats = YearStatistics::default();

        for date in dates {
            *stats.day_count.entry(date.day).or_insert(0) += 1;
            *stats.pasaran_count.entry(date.pasaran).or_insert(0) += 1;
            *stats.weton_count.entry(date.weton).or_insert(0) += 1;
        }

        stats
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearData {
    pub year: i32,
    pub total_days: usize,
    pub dates: Vec<JavaneseDate>,
    pub statistics: YearStatistics,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthData {
    pub year: i32,
    pub month: u32,
    pub total_days: usize,
    pub dates: Vec<JavaneseDate>,
}

// ============================================================================
// CALENDAR ENGINE
// ============================================================================

/// Converts Gregorian days and builds periods of them.
///
/// Holds only the epoch anchor, so it is `Copy` and safe to share between
/// any number of request handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarEngine {
    epoch: NaiveDate,
    epoch_pasaran_offset: i64,
    javanese_year_offset: i32,
}

impl CalendarEngine {
    pub fn new() -> Self {
        CalendarEngine {
            epoch: NaiveDate::default(), // 1970-01-01
            epoch_pasaran_offset: EPOCH_PASARAN_OFFSET,
            javanese_year_offset: JAVANESE_YEAR_OFFSET,
        }
    }

    /// Whole days from the epoch to `date` (negative before 1970).
    pub fn days_since_epoch(&self, date: NaiveDate) -> i64 {
        date.signed_duration_since(self.epoch).num_days()
    }

    pub fn pasaran_of(&self, date: NaiveDate) -> Pasaran {
        let index = (self.days_since_epoch(date) + self.epoch_pasaran_offset).rem_euclid(5);
        Pasaran::from_index(index as u32)
    }

    /// Convert a single day.
    pub fn convert(&self, date: NaiveDate) -> JavaneseDate {
        let day = Day::from_weekday(date.weekday());
        let pasaran = self.pasaran_of(date);
        let weton = Weton::new(day, pasaran);

        JavaneseDate {
            gregorian_date: date,
            day,
            pasaran,
            weton,
            javanese_year: date.year() - self.javanese_year_offset,
            day_of_week: day.index() + 1,
            pasaran_index: pasaran.index() + 1,
            neptu: weton.neptu(),
        }
    }

    pub fn weton_of(&self, date: NaiveDate) -> Weton {
        Weton::new(Day::from_weekday(date.weekday()), self.pasaran_of(date))
    }

    pub fn neptu_of(&self, date: NaiveDate) -> u8 {
        self.weton_of(date).neptu()
    }

    /// Every day from `start` to `end` inclusive. Empty if start > end.
    pub fn date_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<JavaneseDate> {
        start
            .iter_days()
            .take_while(|d| *d <= end)
            .map(|d| self.convert(d))
            .collect()
    }

    /// January 1 through December 31 of `year`, with statistics.
    pub fn year_data(&self, year: i32) -> Result<YearData> {
        let (start, end) = year_bounds(year)?;
        let dates = self.date_range(start, end);
        let statistics = YearStatistics::tally(&dates);

        Ok(YearData {
            year,
            total_days: dates.len(),
            dates,
            statistics,
        })
    }

    /// Every day of `month` (1-12) in `year`.
    pub fn month_data(&self, year: i32, month: u32) -> Result<MonthData> {
        let (start, end) = month_bounds(year, month)?;
        let dates = self.date_range(start, end);

        Ok(MonthData {
            year,
            month,
            total_days: dates.len(),
            dates,
        })
    }
}

impl Default for CalendarEngine {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// PERIOD BOUNDS
// ============================================================================

/// First and last day of `year`.
pub fn year_bounds(year: i32) -> Result<(NaiveDate, NaiveDate)> {
    let out_of_range = || CalendarError::DateOutOfRange { year, month: 1 };
    let start = NaiveDate::from_ymd_opt(year, 1, 1).ok_or_else(out_of_range)?;
    let end = NaiveDate::from_ymd_opt(year, 12, 31).ok_or_else(out_of_range)?;
    Ok((start, end))
}

/// First and last day of `month` in `year`.
///
/// The last day is the first day of the next month minus one, so leap years
/// and month lengths come from chrono rather than a table.
pub fn month_bounds(year: i32, month: u32) -> Result<(NaiveDate, NaiveDate)> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth(month));
    }

    let out_of_range = || CalendarError::DateOutOfRange { year, month };
    let start = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(out_of_range)?;
    let end = start
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .ok_or_else(out_of_range)?;

    Ok((start, end))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_name() {
        assert_eq!(month_name(1), "Januari");
        assert_eq!(month_name(7), "Juli");
        assert_eq!(month_name(12), "Desember");
        assert_eq!(month_name(0), "");
        assert_eq!(month_name(13), "");
    }

    #[test]
    fn test_epoch_is_kamis_wage() {
        let engine = CalendarEngine::new();
        let jd = engine.convert(ymd(1970, 1, 1));

        assert_eq!(jd.day, Day::Kamis);
        assert_eq!(jd.pasaran, Pasaran::Wage);
        assert_eq!(jd.weton.to_string(), "Kamis Wage");
        assert_eq!(jd.neptu, 12);
        assert_eq!(jd.day_of_week, 5);
        assert_eq!(jd.pasaran_index, 4);
        assert_eq!(jd.javanese_year, 338);
    }

    #[test]
    fn test_known_reference_dates() {
        let engine = CalendarEngine::new();

        // Proclamation day
        let jd = engine.convert(ymd(1945, 8, 17));
        assert_eq!(jd.weton.to_string(), "Jumat Legi");
        assert_eq!(jd.neptu, 11);

        let jd = engine.convert(ymd(1990, 5, 15));
        assert_eq!(jd.weton.to_string(), "Selasa Pon");
        assert_eq!(jd.neptu, 10);

        let jd = engine.convert(ymd(2000, 2, 29));
        assert_eq!(jd.weton.to_string(), "Selasa Kliwon");

        let jd = engine.convert(ymd(2025, 7, 29));
        assert_eq!(jd.weton.to_string(), "Selasa Pahing");
        assert_eq!(jd.javanese_year, 393);
    }

    #[test]
    fn test_pre_epoch_pasaran_is_normalized() {
        let engine = CalendarEngine::new();

        let jd = engine.convert(ymd(1969, 12, 31));
        assert_eq!(jd.weton.to_string(), "Rabu Pon");
        assert_eq!(jd.pasaran_index, 3);
        assert_eq!(jd.neptu, 14);

        let jd = engine.convert(ymd(1900, 1, 1));
        assert_eq!(jd.weton.to_string(), "Senin Pahing");
    }

    #[test]
    fn test_weton_repeats_every_35_days() {
        let engine = CalendarEngine::new();
        let mut date = ymd(1899, 11, 3);

        for _ in 0..400 {
            let later = date + chrono::Duration::days(35);
            assert_eq!(engine.weton_of(date), engine.weton_of(later));

            let next = date + chrono::Duration::days(1);
            assert_ne!(engine.weton_of(date), engine.weton_of(next));

            let week = date + chrono::Duration::days(7);
            assert_eq!(engine.convert(date).day, engine.convert(week).day);

            let market = date + chrono::Duration::days(5);
            assert_eq!(engine.pasaran_of(date), engine.pasaran_of(market));

            date += chrono::Duration::days(97);
        }
    }

    #[test]
    fn test_convert_fields_agree() {
        let engine = CalendarEngine::new();
        for jd in engine.date_range(ymd(2023, 12, 1), ymd(2024, 1, 31)) {
            assert_eq!(jd.weton, Weton::new(jd.day, jd.pasaran));
            assert_eq!(jd.neptu, jd.day.neptu() + jd.pasaran.neptu());
            assert!((7..=18).contains(&jd.neptu));
            assert_eq!(jd.weton.to_string(), format!("{} {}", jd.day, jd.pasaran));
        }
    }

    #[test]
    fn test_single_day_range() {
        let engine = CalendarEngine::new();
        let day = ymd(2025, 1, 3);
        let range = engine.date_range(day, day);

        assert_eq!(range.len(), 1);
        assert_eq!(range[0], engine.convert(day));
    }

    #[test]
    fn test_reversed_range_is_empty() {
        let engine = CalendarEngine::new();
        assert!(engine.date_range(ymd(2025, 2, 1), ymd(2025, 1, 1)).is_empty());
    }

    #[test]
    fn test_month_lengths() {
        let engine = CalendarEngine::new();

        assert_eq!(engine.month_data(2024, 2).unwrap().total_days, 29);
        assert_eq!(engine.month_data(2023, 2).unwrap().total_days, 28);
        assert_eq!(engine.month_data(1900, 2).unwrap().total_days, 28);
        assert_eq!(engine.month_data(2000, 2).unwrap().total_days, 29);
        assert_eq!(engine.month_data(2025, 4).unwrap().total_days, 30);

        for year in [1999, 2024, 2025] {
            let december = engine.month_data(year, 12).unwrap();
            assert_eq!(december.total_days, 31);
            assert_eq!(
                december.dates.last().unwrap().gregorian_date,
                ymd(year, 12, 31)
            );
            assert_eq!(december.dates[0].gregorian_date, ymd(year, 12, 1));
        }
    }

    #[test]
    fn test_month_data_rejects_bad_month() {
        let engine = CalendarEngine::new();
        assert_eq!(engine.month_data(2025, 0), Err(CalendarError::InvalidMonth(0)));
        assert_eq!(engine.month_data(2025, 13), Err(CalendarError::InvalidMonth(13)));
    }

    #[test]
    fn test_year_data_totals() {
        let engine = CalendarEngine::new();

        let leap = engine.year_data(2024).unwrap();
        assert_eq!(leap.total_days, 366);
        assert_eq!(leap.dates.len(), 366);
        assert_eq!(leap.statistics.day_count.values().sum::<usize>(), 366);
        assert_eq!(leap.statistics.pasaran_count.values().sum::<usize>(), 366);
        assert_eq!(leap.statistics.weton_count.values().sum::<usize>(), 366);

        let common = engine.year_data(2025).unwrap();
        assert_eq!(common.total_days, 365);
        assert_eq!(common.statistics.day_count.values().sum::<usize>(), 365);
    }

    #[test]
    fn test_year_statistics_counts() {
        let engine = CalendarEngine::new();
        let stats = engine.year_data(2024).unwrap().statistics;

        // 2024 starts on a Monday and is a leap year
        assert_eq!(stats.day_count[&Day::Senin], 53);
        assert_eq!(stats.day_count[&Day::Selasa], 53);
        assert_eq!(stats.day_count[&Day::Minggu], 52);

        // 2024-01-01 is Senin Pahing
        assert_eq!(stats.pasaran_count[&Pasaran::Pahing], 74);
        assert_eq!(stats.pasaran_count[&Pasaran::Legi], 73);

        assert_eq!(stats.weton_count.len(), 35);
    }

    #[test]
    fn test_year_out_of_range() {
        let engine = CalendarEngine::new();
        assert!(matches!(
            engine.year_data(i32::MAX),
            Err(CalendarError::DateOutOfRange { .. })
        ));
    }

    #[test]
    fn test_javanese_date_json_shape() {
        let engine = CalendarEngine::new();
        let value = serde_json::to_value(engine.convert(ymd(1970, 1, 1))).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "gregorian_date": "1970-01-01",
                "day": "Kamis",
                "pasaran": "Wage",
                "weton": "Kamis Wage",
                "javanese_year": 338,
                "day_of_week": 5,
                "pasaran_index": 4,
                "neptu": 12
            })
        );
    }

    #[test]
    fn test_statistics_json_uses_names_as_keys() {
        let engine = CalendarEngine::new();
        let stats = YearStatistics::tally(&engine.date_range(ymd(1970, 1, 1), ymd(1970, 1, 2)));
        let value = serde_json::to_value(&stats).unwrap();

        assert_eq!(value["day_count"]["Kamis"], 1);
        assert_eq!(value["day_count"]["Jumat"], 1);
        assert_eq!(value["pasaran_count"]["Wage"], 1);
        assert_eq!(value["pasaran_count"]["Kliwon"], 1);
        assert_eq!(value["weton_count"]["Jumat Kliwon"], 1);
    }
}
