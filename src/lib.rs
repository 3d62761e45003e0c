// jakal - Javanese Calendar Engine - Core Library
// Exposes all modules for use in CLI, TUI, API server, and tests

pub mod weton;         // Day / Pasaran / Weton tables and parsing
pub mod calendar;      // Gregorian -> Javanese conversion, period builders
pub mod search;        // Weton filter, good days, next occurrence
pub mod compatibility; // Weton pair record (placeholder classifier)
pub mod error;
pub mod config;
pub mod logging;

#[cfg(feature = "server")]
pub mod api;

// Re-export commonly used types
pub use weton::{
    Day, Pasaran, Weton, WETON_CYCLE_DAYS,
    day_neptu, pasaran_neptu, all_possible_wetons, is_valid_weton,
};
pub use calendar::{
    CalendarEngine, JavaneseDate, YearData, MonthData, YearStatistics,
    year_bounds, month_bounds, month_name, MONTH_NAMES,
};
pub use search::{GoodDaysResult, WetonOccurrence, is_good_day};
pub use compatibility::{WetonCompatibility, compatibility};
pub use error::{CalendarError, Result};
pub use config::{ServerConfig, LogFormat};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
