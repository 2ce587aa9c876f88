use crate::error::CoreError;
use crate::structs::{CountryRecord, HistoricalData, TimeSeriesPoint};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The comparable country-level metrics.
///
/// Every metric the aggregation layer can rank, filter, or compare on is an
/// explicit variant with an explicit accessor. There is no stringly-typed
/// field path anywhere in the system, so "unknown metric" can only occur
/// while parsing user input, never during aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Metric {
    Gdp,
    GdpGrowth,
    Inflation,
    Unemployment,
    DebtToGdpRatio,
    ForeignDirectInvestment,
    TradeBalance,
    InvestmentScore,
}

impl Metric {
    /// Reads this metric's value from a country record. Total: every variant
    /// maps to a field that exists on every well-formed record.
    pub fn value_of(&self, country: &CountryRecord) -> Decimal {
        match self {
            Metric::Gdp => country.indicators.gdp,
            Metric::GdpGrowth => country.indicators.gdp_growth,
            Metric::Inflation => country.indicators.inflation,
            Metric::Unemployment => country.indicators.unemployment,
            Metric::DebtToGdpRatio => country.indicators.debt_to_gdp_ratio,
            Metric::ForeignDirectInvestment => country.indicators.foreign_direct_investment,
            Metric::TradeBalance => country.indicators.trade_balance,
            Metric::InvestmentScore => country.investment_score.overall,
        }
    }

    /// The centralized best-direction table.
    ///
    /// Comparison views use this to decide which observed value counts as
    /// "best"; it is deliberately the only place in the codebase that knows
    /// whether a metric is good when high or good when low.
    pub fn direction(&self) -> MetricDirection {
        match self {
            Metric::GdpGrowth | Metric::InvestmentScore => MetricDirection::HigherIsBetter,
            Metric::Inflation | Metric::Unemployment | Metric::DebtToGdpRatio => {
                MetricDirection::LowerIsBetter
            }
            Metric::Gdp | Metric::ForeignDirectInvestment | Metric::TradeBalance => {
                MetricDirection::Neutral
            }
        }
    }

    /// The format category a renderer should apply to this metric's values.
    pub fn format(&self) -> ValueFormat {
        match self {
            Metric::Gdp | Metric::ForeignDirectInvestment | Metric::TradeBalance => {
                ValueFormat::Currency
            }
            Metric::GdpGrowth
            | Metric::Inflation
            | Metric::Unemployment
            | Metric::DebtToGdpRatio => ValueFormat::Percentage,
            Metric::InvestmentScore => ValueFormat::Plain,
        }
    }

    /// The human-readable label used in table headers.
    pub fn label(&self) -> &'static str {
        match self {
            Metric::Gdp => "GDP",
            Metric::GdpGrowth => "GDP Growth",
            Metric::Inflation => "Inflation",
            Metric::Unemployment => "Unemployment",
            Metric::DebtToGdpRatio => "Debt to GDP",
            Metric::ForeignDirectInvestment => "FDI",
            Metric::TradeBalance => "Trade Balance",
            Metric::InvestmentScore => "Investment Score",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Metric {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gdp" => Ok(Metric::Gdp),
            "gdp-growth" => Ok(Metric::GdpGrowth),
            "inflation" => Ok(Metric::Inflation),
            "unemployment" => Ok(Metric::Unemployment),
            "debt-to-gdp" => Ok(Metric::DebtToGdpRatio),
            "fdi" => Ok(Metric::ForeignDirectInvestment),
            "trade-balance" => Ok(Metric::TradeBalance),
            "investment-score" => Ok(Metric::InvestmentScore),
            other => Err(CoreError::UnknownMetric(other.to_string())),
        }
    }
}

/// Whether a higher or lower value of a metric counts as better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetricDirection {
    HigherIsBetter,
    LowerIsBetter,
    /// No better/worse semantics; comparisons are shown for reference only.
    Neutral,
}

/// The presentation category for a metric's raw numeric values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValueFormat {
    Percentage,
    Currency,
    Plain,
}

/// Sort direction for leaderboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    /// Best = highest value. The default for most leaderboards.
    Descending,
    /// Best = lowest value, for "lower is better" metrics such as inflation.
    Ascending,
}

/// The metrics that carry a historical time series on each record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SeriesMetric {
    Gdp,
    Inflation,
    Unemployment,
    ExchangeRate,
}

impl SeriesMetric {
    pub fn series_of<'a>(&self, historical: &'a HistoricalData) -> &'a [TimeSeriesPoint] {
        match self {
            SeriesMetric::Gdp => &historical.gdp,
            SeriesMetric::Inflation => &historical.inflation,
            SeriesMetric::Unemployment => &historical.unemployment,
            SeriesMetric::ExchangeRate => &historical.exchange_rate,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SeriesMetric::Gdp => "GDP",
            SeriesMetric::Inflation => "Inflation",
            SeriesMetric::Unemployment => "Unemployment",
            SeriesMetric::ExchangeRate => "Exchange Rate",
        }
    }
}

impl FromStr for SeriesMetric {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gdp" => Ok(SeriesMetric::Gdp),
            "inflation" => Ok(SeriesMetric::Inflation),
            "unemployment" => Ok(SeriesMetric::Unemployment),
            "exchange-rate" => Ok(SeriesMetric::ExchangeRate),
            other => Err(CoreError::UnknownMetric(other.to_string())),
        }
    }
}
