// 💞 Weton Compatibility
// Neptu pairing of two wetons. The classification itself is not implemented
// yet: every pair gets the same placeholder verdict.

use crate::calendar::JavaneseDate;
use crate::weton::Weton;
use serde::{Deserialize, Serialize};

/// Verdict returned for every pair until real primbon rules are supplied.
pub const COMPATIBILITY_PLACEHOLDER: &str = "Implementasi kecocokan weton belum lengkap";

pub const COMPATIBILITY_DESCRIPTION: &str = "Kecocokan berdasarkan perhitungan weton Jawa";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WetonCompatibility {
    pub weton1: Weton,
    pub weton2: Weton,
    pub neptu1: u8,
    pub neptu2: u8,
    pub total_neptu: u8,
    pub compatibility: String,
    pub description: String,
}

impl WetonCompatibility {
    pub fn between(first: &JavaneseDate, second: &JavaneseDate) -> Self {
        Self::of(first.weton, second.weton)
    }

    pub fn of(weton1: Weton, weton2: Weton) -> Self {
        WetonCompatibility {
            weton1,
            weton2,
            neptu1: weton1.neptu(),
            neptu2: weton2.neptu(),
            total_neptu: weton1.neptu() + weton2.neptu(),
            compatibility: compatibility(weton1, weton2).to_string(),
            description: COMPATIBILITY_DESCRIPTION.to_string(),
        }
    }
}

/// Classify a pair of wetons. Inputs are currently ignored.
pub fn compatibility(_weton1: Weton, _weton2: Weton) -> &'static str {
    COMPATIBILITY_PLACEHOLDER
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::CalendarEngine;
    use crate::weton::{all_possible_wetons, Day, Pasaran};
    use chrono::NaiveDate;

    #[test]
    fn test_compatibility_is_constant() {
        let wetons = all_possible_wetons();
        for a in &wetons {
            for b in wetons.iter().step_by(7) {
                assert_eq!(compatibility(*a, *b), COMPATIBILITY_PLACEHOLDER);
            }
        }
    }

    #[test]
    fn test_between_two_dates() {
        let engine = CalendarEngine::new();
        let first = engine.convert(NaiveDate::from_ymd_opt(1990, 5, 15).unwrap());
        let second = engine.convert(NaiveDate::from_ymd_opt(1992, 8, 20).unwrap());

        let result = WetonCompatibility::between(&first, &second);

        assert_eq!(result.weton1, Weton::new(Day::Selasa, Pasaran::Pon));
        assert_eq!(result.weton2, Weton::new(Day::Kamis, Pasaran::Legi));
        assert_eq!(result.neptu1, 10);
        assert_eq!(result.neptu2, 13);
        assert_eq!(result.total_neptu, 23);
        assert_eq!(result.compatibility, COMPATIBILITY_PLACEHOLDER);
    }
}
