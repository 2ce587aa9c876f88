use chrono::{DateTime, NaiveDate, Utc};
use core_types::ValueFormat;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregate statistics over all countries sharing a region.
///
/// Always derived from the full country set in view; a summary is never
/// updated incrementally, so it cannot drift from the records it describes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionSummary {
    pub name: String,
    pub avg_gdp_growth: Decimal,
    pub avg_inflation: Decimal,
    pub country_count: usize,
}

/// The atomic unit of a leaderboard: one country and its metric value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub id: String,
    pub name: String,
    pub value: Decimal,
}

/// One point of a derived period-over-period growth series.
///
/// `growth` is `None` when the prior-period value was zero, in which case
/// percentage growth is undefined. Renderers show such points as a gap
/// rather than an infinity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthPoint {
    pub date: NaiveDate,
    pub growth: Option<Decimal>,
}

/// One country's value and best-relative difference for a chosen metric.
///
/// `diff` is always `value - best`, where "best" follows the metric's
/// direction policy. A row with `is_best` set is labeled "Best" by renderers
/// instead of showing a signed diff. `format` carries the presentation
/// category so a renderer can format the raw numbers; the numbers themselves
/// stay unformatted here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonRow {
    pub id: String,
    pub name: String,
    pub value: Decimal,
    pub diff: Decimal,
    pub is_best: bool,
    pub format: ValueFormat,
}

/// The three standard dashboard leaderboards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopPerformers {
    pub gdp_growth: Vec<RankedEntry>,
    pub lowest_inflation: Vec<RankedEntry>,
    pub highest_investment_score: Vec<RankedEntry>,
}

/// The composite snapshot report backing the dashboard home screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalReport {
    pub last_updated: DateTime<Utc>,
    pub total_countries: usize,
    pub regions: Vec<RegionSummary>,
    pub top_performers: TopPerformers,
}
