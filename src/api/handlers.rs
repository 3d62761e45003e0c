//! HTTP request handlers.
//!
//! Each handler validates its path segments, calls the engine and wraps the
//! result in an [`ApiResponse`] envelope.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::NaiveDate;
use serde::Serialize;
use serde_json::{json, Value};

use super::envelope::ApiResponse;
use super::error::ApiError;
use super::metrics::MetricsSnapshot;
use super::state::AppState;
use super::validation::{
    check_span, check_year, normalize_weton_query, parse_date, parse_month, parse_year,
};
use crate::calendar::{month_name, JavaneseDate, MonthData, YearData, YearStatistics};
use crate::compatibility::WetonCompatibility;
use crate::search::{GoodDaysResult, WetonOccurrence};
use crate::weton::{self, all_possible_wetons, Day, Pasaran, Weton};
use crate::VERSION;

type ApiResult<T> = Result<Json<ApiResponse<T>>, ApiError>;

const INVALID_DATE: &str = "Format tanggal tidak valid. Gunakan YYYY-MM-DD";

// ============================================================================
// SERVICE
// ============================================================================

/// GET / - endpoint map
pub async fn index() -> Json<Value> {
    Json(json!({
        "service": "jakal",
        "description": "Kalender Jawa: weton, pasaran dan neptu dari tanggal Masehi",
        "version": VERSION,
        "endpoints": {
            "today": "/api/v1/today",
            "date": "/api/v1/date/{YYYY-MM-DD}",
            "range": "/api/v1/range/{start}/{end}",
            "year": "/api/v1/year/{year}",
            "month": "/api/v1/month/{year}/{month}",
            "weton": "/api/v1/weton/{YYYY-MM-DD}",
            "neptu": "/api/v1/neptu/{YYYY-MM-DD}",
            "filter": "/api/v1/weton/{weton}/{year}[/{month}]",
            "wetons": "/api/v1/wetons",
            "statistics": "/api/v1/statistics/{start}/{end}",
            "compatibility": "/api/v1/compatibility/{date1}/{date2}",
            "good_days": "/api/v1/good-days/{birth_date}/{target_year}",
            "next": "/api/v1/next/{weton}/{from}",
            "health": "/health",
            "metrics": "/metrics"
        },
        "examples": [
            "/api/v1/date/1945-08-17",
            "/api/v1/weton/selasa-legi/2025",
            "/api/v1/good-days/1990-05-15/2025",
            "/api/v1/next/jumat-kliwon/2025-07-01"
        ]
    }))
}

/// GET /health
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "jakal",
        "version": VERSION,
    }))
}

/// GET /metrics
pub async fn metrics(State(state): State<AppState>) -> Json<MetricsSnapshot> {
    Json(state.metrics.snapshot())
}

// ============================================================================
// CONVERSION
// ============================================================================

/// GET /api/v1/today
pub async fn today(State(state): State<AppState>) -> ApiResult<JavaneseDate> {
    let date = state.engine.convert(state.today());
    state.metrics.record_conversions(1);
    Ok(Json(ApiResponse::success("Tanggal Jawa hari ini", date)))
}

/// GET /api/v1/date/:date
pub async fn date(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> ApiResult<JavaneseDate> {
    let date = parse_date(&raw, INVALID_DATE)?;
    state.metrics.record_conversions(1);
    Ok(Json(ApiResponse::success(
        format!("Tanggal Jawa untuk {}", raw),
        state.engine.convert(date),
    )))
}

/// GET /api/v1/range/:start/:end
pub async fn range(
    State(state): State<AppState>,
    Path((start_raw, end_raw)): Path<(String, String)>,
) -> ApiResult<Vec<JavaneseDate>> {
    let start = parse_date(&start_raw, "Format tanggal start tidak valid")?;
    let end = parse_date(&end_raw, "Format tanggal end tidak valid")?;
    check_span(start, end, state.config.max_range_days)?;

    let dates = state.engine.date_range(start, end);
    state.metrics.record_conversions(dates.len());

    Ok(Json(ApiResponse::success(
        format!("Range tanggal Jawa dari {} hingga {}", start_raw, end_raw),
        dates,
    )))
}

/// GET /api/v1/year/:year
pub async fn year(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> ApiResult<YearData> {
    let (min, max) = state.year_bounds();
    let year = parse_year(&raw, min, max)?;

    let (data, status) = state
        .years
        .get_or_try_insert(year, || state.engine.year_data(year))?;
    state.metrics.record_cache(status);
    state.metrics.record_conversions(data.total_days);

    Ok(Json(ApiResponse::success(
        format!("Data tanggal Jawa untuk tahun {}", year),
        YearData::clone(&data),
    )))
}

/// GET /api/v1/month/:year/:month
pub async fn month(
    State(state): State<AppState>,
    Path((year_raw, month_raw)): Path<(String, String)>,
) -> ApiResult<MonthData> {
    let (min, max) = state.year_bounds();
    let year = parse_year(&year_raw, min, max)?;
    let month = parse_month(&month_raw)?;

    let (data, status) = state
        .months
        .get_or_try_insert((year, month), || state.engine.month_data(year, month))?;
    state.metrics.record_cache(status);
    state.metrics.record_conversions(data.total_days);

    Ok(Json(ApiResponse::success(
        format!("Data tanggal Jawa untuk bulan {} tahun {}", month, year),
        MonthData::clone(&data),
    )))
}

// ============================================================================
// WETON & NEPTU
// ============================================================================

#[derive(Debug, Serialize)]
pub struct WetonOfDate {
    pub date: NaiveDate,
    pub weton: Weton,
}

#[derive(Debug, Serialize)]
pub struct NeptuOfDate {
    pub date: NaiveDate,
    pub weton: Weton,
    pub day: Day,
    pub pasaran: Pasaran,
    pub neptu: u8,
    pub day_neptu: u8,
    pub pasaran_neptu: u8,
}

/// GET /api/v1/weton/:date
pub async fn weton_of_date(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> ApiResult<WetonOfDate> {
    let date = parse_date(&raw, INVALID_DATE)?;
    state.metrics.record_conversions(1);
    Ok(Json(ApiResponse::success(
        format!("Weton untuk tanggal {}", raw),
        WetonOfDate {
            date,
            weton: state.engine.weton_of(date),
        },
    )))
}

/// GET /api/v1/neptu/:date
pub async fn neptu_of_date(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> ApiResult<NeptuOfDate> {
    let date = parse_date(&raw, INVALID_DATE)?;
    let jd = state.engine.convert(date);
    state.metrics.record_conversions(1);

    let data = NeptuOfDate {
        date,
        weton: jd.weton,
        day: jd.day,
        pasaran: jd.pasaran,
        neptu: state.engine.neptu_of(date),
        day_neptu: weton::day_neptu(jd.day.name())?,
        pasaran_neptu: weton::pasaran_neptu(jd.pasaran.name())?,
    };

    Ok(Json(ApiResponse::success(
        format!("Neptu untuk tanggal {}", raw),
        data,
    )))
}

#[derive(Debug, Serialize)]
pub struct WetonFilter {
    pub weton: String,
    pub year: i32,
    pub month: u32,
    pub total_dates: usize,
    pub dates: Vec<JavaneseDate>,
}

/// GET /api/v1/weton/:weton/:year
pub async fn filter_weton_year(
    State(state): State<AppState>,
    Path((weton_raw, year_raw)): Path<(String, String)>,
) -> ApiResult<WetonFilter> {
    filter_weton(&state, &weton_raw, &year_raw, None)
}

/// GET /api/v1/weton/:weton/:year/:month
pub async fn filter_weton_month(
    State(state): State<AppState>,
    Path((weton_raw, year_raw, month_raw)): Path<(String, String, String)>,
) -> ApiResult<WetonFilter> {
    filter_weton(&state, &weton_raw, &year_raw, Some(&month_raw))
}

fn filter_weton(
    state: &AppState,
    weton_raw: &str,
    year_raw: &str,
    month_raw: Option<&str>,
) -> ApiResult<WetonFilter> {
    let (min, max) = state.year_bounds();
    let year = parse_year(year_raw, min, max)?;
    let month = month_raw.map(parse_month).transpose()?;
    let weton = normalize_weton_query(weton_raw);

    let dates = state.engine.filter_by_weton(year, month, &weton)?;

    let message = match month {
        Some(m) => format!(
            "Daftar tanggal untuk weton {} di bulan {} {}",
            weton,
            month_name(m),
            year
        ),
        None => format!("Daftar tanggal untuk weton {} di tahun {}", weton, year),
    };

    Ok(Json(ApiResponse::success(
        message,
        WetonFilter {
            weton,
            year,
            month: month.unwrap_or(0),
            total_dates: dates.len(),
            dates,
        },
    )))
}

#[derive(Debug, Serialize)]
pub struct WetonList {
    pub total_weton: usize,
    pub wetons: Vec<Weton>,
}

/// GET /api/v1/wetons
pub async fn wetons() -> ApiResult<WetonList> {
    let wetons = all_possible_wetons();
    Ok(Json(ApiResponse::success(
        "Daftar semua kemungkinan weton dalam kalender Jawa",
        WetonList {
            total_weton: wetons.len(),
            wetons,
        },
    )))
}

// ============================================================================
// AGGREGATES & SEARCH
// ============================================================================

#[derive(Debug, Serialize)]
pub struct Period {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

#[derive(Debug, Serialize)]
pub struct RangeStatistics {
    pub period: Period,
    pub total_days: usize,
    #[serde(flatten)]
    pub statistics: YearStatistics,
}

/// GET /api/v1/statistics/:start/:end
pub async fn statistics(
    State(state): State<AppState>,
    Path((start_raw, end_raw)): Path<(String, String)>,
) -> ApiResult<RangeStatistics> {
    let start = parse_date(&start_raw, "Format tanggal start tidak valid")?;
    let end = parse_date(&end_raw, "Format tanggal end tidak valid")?;
    check_span(start, end, state.config.max_statistics_days)?;

    let dates = state.engine.date_range(start, end);
    state.metrics.record_conversions(dates.len());

    Ok(Json(ApiResponse::success(
        format!("Statistik weton dari {} hingga {}", start_raw, end_raw),
        RangeStatistics {
            period: Period { start, end },
            total_days: dates.len(),
            statistics: YearStatistics::tally(&dates),
        },
    )))
}

/// GET /api/v1/compatibility/:date1/:date2
pub async fn compatibility(
    State(state): State<AppState>,
    Path((first_raw, second_raw)): Path<(String, String)>,
) -> ApiResult<WetonCompatibility> {
    let first = parse_date(&first_raw, "Format tanggal pertama tidak valid")?;
    let second = parse_date(&second_raw, "Format tanggal kedua tidak valid")?;
    state.metrics.record_conversions(2);

    let result = WetonCompatibility::between(
        &state.engine.convert(first),
        &state.engine.convert(second),
    );

    Ok(Json(ApiResponse::success(
        format!("Kecocokan weton untuk {} dan {}", first_raw, second_raw),
        result,
    )))
}

/// GET /api/v1/good-days/:birth_date/:target_year
pub async fn good_days(
    State(state): State<AppState>,
    Path((birth_raw, year_raw)): Path<(String, String)>,
) -> ApiResult<GoodDaysResult> {
    let birth = parse_date(&birth_raw, "Format tanggal lahir tidak valid")?;
    let year: i32 = year_raw
        .trim()
        .parse()
        .map_err(|_| ApiError::BadRequest("Format tahun target tidak valid".to_string()))?;
    let (min, max) = state.year_bounds();
    check_year(year, min, max)?;

    let result = state.engine.good_days(birth, year)?;
    state.metrics.record_conversions(result.total_days);

    Ok(Json(ApiResponse::success(
        format!(
            "Hari baik untuk weton {} di tahun {}",
            result.birth_weton, year
        ),
        result,
    )))
}

/// GET /api/v1/next/:weton/:from
pub async fn next_occurrence(
    State(state): State<AppState>,
    Path((weton_raw, from_raw)): Path<(String, String)>,
) -> ApiResult<WetonOccurrence> {
    let from = parse_date(&from_raw, INVALID_DATE)?;
    let weton = normalize_weton_query(&weton_raw);

    if !weton::is_valid_weton(&weton) {
        return Err(ApiError::BadRequest(format!("Weton tidak valid: {}", weton)));
    }

    let occurrence = state
        .engine
        .next_occurrence(from, &weton)
        .ok_or_else(|| ApiError::Internal(format!("no occurrence of {} within 35 days", weton)))?;

    Ok(Json(ApiResponse::success(
        format!(
            "Weton {} berikutnya dari {}: {} hari lagi",
            occurrence.weton, from_raw, occurrence.days_until
        ),
        occurrence,
    )))
}

/// Fallback for unknown routes.
pub async fn not_found() -> ApiError {
    ApiError::NotFound("Endpoint tidak ditemukan".to_string())
}
