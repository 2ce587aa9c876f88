use crate::error::AnalyticsError;
use crate::report::{
    ComparisonRow, GlobalReport, GrowthPoint, RankedEntry, RegionSummary, TopPerformers,
};
use chrono::Utc;
use core_types::{CountryRecord, Metric, MetricDirection, SortOrder, TimeSeriesPoint};
use rust_decimal::Decimal;
use tracing::debug;

/// The most countries a single comparison view can hold.
pub const MAX_COMPARISON_COUNTRIES: usize = 5;

/// A stateless calculator for deriving dashboard views from country records.
#[derive(Debug, Default)]
pub struct AggregationEngine {}

impl AggregationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Produces one `RegionSummary` per distinct region observed in the
    /// country set, ordered by region name.
    ///
    /// Regions are derived from the data, not from a fixed enum, so a region
    /// with zero countries cannot appear. An empty country set yields an
    /// empty collection, not an error.
    pub fn region_summaries(&self, countries: &[CountryRecord]) -> Vec<RegionSummary> {
        let mut regions: Vec<&str> = countries.iter().map(|c| c.region.as_str()).collect();
        regions.sort_unstable();
        regions.dedup();

        regions
            .into_iter()
            .map(|region| {
                let members: Vec<&CountryRecord> =
                    countries.iter().filter(|c| c.region == region).collect();
                // `members` is non-empty by construction: the region name came
                // from at least one country.
                let count = Decimal::from(members.len());
                let growth_sum: Decimal =
                    members.iter().map(|c| c.indicators.gdp_growth).sum();
                let inflation_sum: Decimal =
                    members.iter().map(|c| c.indicators.inflation).sum();

                RegionSummary {
                    name: region.to_string(),
                    avg_gdp_growth: growth_sum / count,
                    avg_inflation: inflation_sum / count,
                    country_count: members.len(),
                }
            })
            .collect()
    }

    /// Ranks all countries by a metric and returns the top `limit` entries.
    ///
    /// The sort is stable: countries with equal metric values keep their
    /// relative order from the input set. The input is never mutated.
    pub fn top_performers(
        &self,
        countries: &[CountryRecord],
        metric: Metric,
        order: SortOrder,
        limit: usize,
    ) -> Vec<RankedEntry> {
        let mut ranked: Vec<RankedEntry> = countries
            .iter()
            .map(|c| RankedEntry {
                id: c.id.clone(),
                name: c.name.clone(),
                value: metric.value_of(c),
            })
            .collect();

        match order {
            SortOrder::Descending => ranked.sort_by(|a, b| b.value.cmp(&a.value)),
            SortOrder::Ascending => ranked.sort_by(|a, b| a.value.cmp(&b.value)),
        }

        ranked.truncate(limit);
        debug!(metric = %metric, limit, entries = ranked.len(), "built leaderboard");
        ranked
    }

    /// Derives a period-over-period percentage growth series from a series
    /// of absolute values.
    ///
    /// The output has the same length as the input with dates carried
    /// through unchanged. The first element's growth is defined as zero (no
    /// prior-period baseline). A zero prior-period value makes percentage
    /// growth undefined; such points carry `None` instead of an infinity.
    pub fn derive_growth_series(&self, series: &[TimeSeriesPoint]) -> Vec<GrowthPoint> {
        series
            .iter()
            .enumerate()
            .map(|(i, point)| {
                let growth = if i == 0 {
                    Some(Decimal::ZERO)
                } else {
                    let prev = series[i - 1].value;
                    if prev.is_zero() {
                        None
                    } else {
                        Some((point.value - prev) / prev * Decimal::ONE_HUNDRED)
                    }
                };
                GrowthPoint {
                    date: point.date,
                    growth,
                }
            })
            .collect()
    }

    /// Builds one `ComparisonRow` per selected country for a chosen metric.
    ///
    /// The "best" reference value follows the metric's direction policy:
    /// maximum observed for higher-is-better metrics, minimum for
    /// lower-is-better, and the first selected country's value for neutral
    /// metrics (reference only). Selections beyond
    /// `MAX_COMPARISON_COUNTRIES` are rejected; an empty selection yields an
    /// empty result.
    pub fn comparison_rows(
        &self,
        selected: &[CountryRecord],
        metric: Metric,
    ) -> Result<Vec<ComparisonRow>, AnalyticsError> {
        if selected.len() > MAX_COMPARISON_COUNTRIES {
            return Err(AnalyticsError::TooManySelected {
                selected: selected.len(),
                max: MAX_COMPARISON_COUNTRIES,
            });
        }
        if selected.is_empty() {
            return Ok(Vec::new());
        }

        let values: Vec<Decimal> = selected.iter().map(|c| metric.value_of(c)).collect();
        let best = match metric.direction() {
            MetricDirection::HigherIsBetter => values.iter().copied().fold(values[0], Decimal::max),
            MetricDirection::LowerIsBetter => values.iter().copied().fold(values[0], Decimal::min),
            MetricDirection::Neutral => values[0],
        };

        let rows = selected
            .iter()
            .zip(values)
            .map(|(country, value)| {
                let diff = value - best;
                ComparisonRow {
                    id: country.id.clone(),
                    name: country.name.clone(),
                    value,
                    diff,
                    is_best: diff.is_zero(),
                    format: metric.format(),
                }
            })
            .collect();

        Ok(rows)
    }

    /// Assembles the composite dashboard report: totals, region summaries,
    /// and the three standard leaderboards.
    pub fn global_report(
        &self,
        countries: &[CountryRecord],
        leaderboard_limit: usize,
    ) -> GlobalReport {
        GlobalReport {
            last_updated: Utc::now(),
            total_countries: countries.len(),
            regions: self.region_summaries(countries),
            top_performers: TopPerformers {
                gdp_growth: self.top_performers(
                    countries,
                    Metric::GdpGrowth,
                    SortOrder::Descending,
                    leaderboard_limit,
                ),
                lowest_inflation: self.top_performers(
                    countries,
                    Metric::Inflation,
                    SortOrder::Ascending,
                    leaderboard_limit,
                ),
                highest_investment_score: self.top_performers(
                    countries,
                    Metric::InvestmentScore,
                    SortOrder::Descending,
                    leaderboard_limit,
                ),
            },
        }
    }
}
