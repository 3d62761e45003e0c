// 🗓️ Weton - Day × Pasaran
// Two fixed cycles (7-day week, 5-day market week) and their neptu scores.
//
// A weton is the pair (Day, Pasaran). The display string "<Day> <Pasaran>"
// is only produced at the boundary (Display / serde), never compared.

use crate::error::{CalendarError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Number of distinct wetons: lcm(7, 5).
pub const WETON_CYCLE_DAYS: u32 = 35;

// ============================================================================
// DAY (7-day week)
// ============================================================================

/// Weekday in Javanese/Indonesian naming, Sunday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Day {
    Minggu,
    Senin,
    Selasa,
    Rabu,
    Kamis,
    Jumat,
    Sabtu,
}

impl Day {
    /// All days in table order (0 = Minggu/Sunday).
    pub const ALL: [Day; 7] = [
        Day::Minggu,
        Day::Senin,
        Day::Selasa,
        Day::Rabu,
        Day::Kamis,
        Day::Jumat,
        Day::Sabtu,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Day::Minggu => "Minggu",
            Day::Senin => "Senin",
            Day::Selasa => "Selasa",
            Day::Rabu => "Rabu",
            Day::Kamis => "Kamis",
            Day::Jumat => "Jumat",
            Day::Sabtu => "Sabtu",
        }
    }

    /// Neptu score of the day.
    pub fn neptu(&self) -> u8 {
        match self {
            Day::Minggu => 5,
            Day::Senin => 4,
            Day::Selasa => 3,
            Day::Rabu => 7,
            Day::Kamis => 8,
            Day::Jumat => 6,
            Day::Sabtu => 9,
        }
    }

    /// 0-based position in the table (0 = Minggu).
    pub fn index(&self) -> u8 {
        *self as u8
    }

    /// Day at a 0-based table position, wrapping modulo 7.
    pub fn from_index(index: u32) -> Self {
        Day::ALL[(index % 7) as usize]
    }

    pub fn from_weekday(weekday: chrono::Weekday) -> Self {
        Day::from_index(weekday.num_days_from_sunday())
    }

    /// Exact table lookup ("Senin" matches, "senin" does not).
    pub fn from_name(name: &str) -> Option<Self> {
        Day::ALL.into_iter().find(|d| d.name() == name)
    }

    /// Case-insensitive lookup, used when validating user input.
    pub fn from_name_ignore_case(name: &str) -> Option<Self> {
        Day::ALL.into_iter().find(|d| d.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// PASARAN (5-day market week)
// ============================================================================

/// Market-cycle day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Pasaran {
    Legi,
    Pahing,
    Pon,
    Wage,
    Kliwon,
}

impl Pasaran {
    pub const ALL: [Pasaran; 5] = [
        Pasaran::Legi,
        Pasaran::Pahing,
        Pasaran::Pon,
        Pasaran::Wage,
        Pasaran::Kliwon,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Pasaran::Legi => "Legi",
            Pasaran::Pahing => "Pahing",
            Pasaran::Pon => "Pon",
            Pasaran::Wage => "Wage",
            Pasaran::Kliwon => "Kliwon",
        }
    }

    /// Neptu score of the pasaran.
    pub fn neptu(&self) -> u8 {
        match self {
            Pasaran::Legi => 5,
            Pasaran::Pahing => 9,
            Pasaran::Pon => 7,
            Pasaran::Wage => 4,
            Pasaran::Kliwon => 8,
        }
    }

    pub fn index(&self) -> u8 {
        *self as u8
    }

    pub fn from_index(index: u32) -> Self {
        Pasaran::ALL[(index % 5) as usize]
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Pasaran::ALL.into_iter().find(|p| p.name() == name)
    }

    pub fn from_name_ignore_case(name: &str) -> Option<Self> {
        Pasaran::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Pasaran {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// WETON
// ============================================================================

/// A position in the 35-day weton cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Weton {
    pub day: Day,
    pub pasaran: Pasaran,
}

impl Weton {
    pub fn new(day: Day, pasaran: Pasaran) -> Self {
        Weton { day, pasaran }
    }

    /// Day neptu + pasaran neptu, always within 7..=18.
    pub fn neptu(&self) -> u8 {
        self.day.neptu() + self.pasaran.neptu()
    }

    /// Parse requiring the exact table casing, e.g. "Selasa Legi".
    ///
    /// This is the matching rule of the weton filter; `FromStr` is the
    /// lenient, case-insensitive one.
    pub fn parse_exact(s: &str) -> Option<Self> {
        let (day, pasaran) = split_pair(s)?;
        Some(Weton::new(Day::from_name(day)?, Pasaran::from_name(pasaran)?))
    }
}

/// Split on a single space into exactly two tokens.
fn split_pair(s: &str) -> Option<(&str, &str)> {
    let mut parts = s.split(' ');
    let first = parts.next()?;
    let second = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    Some((first, second))
}

impl fmt::Display for Weton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.day, self.pasaran)
    }
}

impl FromStr for Weton {
    type Err = CalendarError;

    /// Case-insensitive parse of "<day> <pasaran>" separated by one space.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || CalendarError::InvalidWeton(s.to_string());
        let (day, pasaran) = split_pair(s).ok_or_else(invalid)?;
        let day = Day::from_name_ignore_case(day).ok_or_else(invalid)?;
        let pasaran = Pasaran::from_name_ignore_case(pasaran).ok_or_else(invalid)?;
        Ok(Weton::new(day, pasaran))
    }
}

impl Serialize for Weton {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Weton {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// TABLE ACCESSORS
// ============================================================================

/// Neptu of a day name. Unknown names are an error, never a zero score.
pub fn day_neptu(name: &str) -> Result<u8> {
    Day::from_name(name)
        .map(|d| d.neptu())
        .ok_or_else(|| CalendarError::UnknownDay(name.to_string()))
}

/// Neptu of a pasaran name. Unknown names are an error, never a zero score.
pub fn pasaran_neptu(name: &str) -> Result<u8> {
    Pasaran::from_name(name)
        .map(|p| p.neptu())
        .ok_or_else(|| CalendarError::UnknownPasaran(name.to_string()))
}

/// All 35 wetons, day-major then pasaran-minor.
pub fn all_possible_wetons() -> Vec<Weton> {
    Day::ALL
        .iter()
        .flat_map(|&day| Pasaran::ALL.iter().map(move |&pasaran| Weton::new(day, pasaran)))
        .collect()
}

pub fn is_valid_weton(s: &str) -> bool {
    s.parse::<Weton>().is_ok()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_neptu_tables() {
        let days: Vec<u8> = Day::ALL.iter().map(|d| d.neptu()).collect();
        assert_eq!(days, vec![5, 4, 3, 7, 8, 6, 9]);

        let pasarans: Vec<u8> = Pasaran::ALL.iter().map(|p| p.neptu()).collect();
        assert_eq!(pasarans, vec![5, 9, 7, 4, 8]);
    }

    #[test]
    fn test_table_order_matches_index() {
        for (i, day) in Day::ALL.iter().enumerate() {
            assert_eq!(day.index() as usize, i);
            assert_eq!(Day::from_index(i as u32), *day);
        }
        for (i, pasaran) in Pasaran::ALL.iter().enumerate() {
            assert_eq!(pasaran.index() as usize, i);
            assert_eq!(Pasaran::from_index(i as u32), *pasaran);
        }
    }

    #[test]
    fn test_from_weekday() {
        assert_eq!(Day::from_weekday(chrono::Weekday::Sun), Day::Minggu);
        assert_eq!(Day::from_weekday(chrono::Weekday::Thu), Day::Kamis);
        assert_eq!(Day::from_weekday(chrono::Weekday::Sat), Day::Sabtu);
    }

    #[test]
    fn test_day_and_pasaran_neptu_lookup() {
        assert_eq!(day_neptu("Kamis"), Ok(8));
        assert_eq!(pasaran_neptu("Wage"), Ok(4));

        assert_eq!(
            day_neptu("kamis"),
            Err(CalendarError::UnknownDay("kamis".to_string()))
        );
        assert_eq!(
            pasaran_neptu("Manis"),
            Err(CalendarError::UnknownPasaran("Manis".to_string()))
        );
    }

    #[test]
    fn test_all_possible_wetons() {
        let wetons = all_possible_wetons();
        assert_eq!(wetons.len(), 35);

        let unique: HashSet<String> = wetons.iter().map(|w| w.to_string()).collect();
        assert_eq!(unique.len(), 35);

        assert_eq!(wetons[0].to_string(), "Minggu Legi");
        assert_eq!(wetons[1].to_string(), "Minggu Pahing");
        assert_eq!(wetons[5].to_string(), "Senin Legi");
        assert_eq!(wetons[34].to_string(), "Sabtu Kliwon");

        for w in &wetons {
            assert!(is_valid_weton(&w.to_string()));
        }
    }

    #[test]
    fn test_is_valid_weton() {
        assert!(is_valid_weton("Selasa Legi"));
        assert!(is_valid_weton("selasa legi"));
        assert!(is_valid_weton("JUMAT KLIWON"));

        assert!(!is_valid_weton("Selasa"));
        assert!(!is_valid_weton("Selasa  Legi"));
        assert!(!is_valid_weton("Selasa Legi Pon"));
        assert!(!is_valid_weton("Selasa-Legi"));
        assert!(!is_valid_weton("Tuesday Legi"));
        assert!(!is_valid_weton(""));
    }

    #[test]
    fn test_parse_exact_is_case_sensitive() {
        assert_eq!(
            Weton::parse_exact("Jumat Kliwon"),
            Some(Weton::new(Day::Jumat, Pasaran::Kliwon))
        );
        assert_eq!(Weton::parse_exact("jumat kliwon"), None);
        assert_eq!(Weton::parse_exact("Jumat  Kliwon"), None);
    }

    #[test]
    fn test_weton_neptu_bounds() {
        let neptus: Vec<u8> = all_possible_wetons().iter().map(|w| w.neptu()).collect();
        assert_eq!(neptus.iter().min(), Some(&7));
        assert_eq!(neptus.iter().max(), Some(&18));
    }

    #[test]
    fn test_weton_serde_as_string() {
        let weton = Weton::new(Day::Kamis, Pasaran::Wage);
        let json = serde_json::to_string(&weton).unwrap();
        assert_eq!(json, "\"Kamis Wage\"");

        let back: Weton = serde_json::from_str("\"kamis wage\"").unwrap();
        assert_eq!(back, weton);

        assert!(serde_json::from_str::<Weton>("\"Kamis\"").is_err());
    }
}
