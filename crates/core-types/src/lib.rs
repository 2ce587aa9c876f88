pub mod enums;
pub mod error;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use enums::{Metric, MetricDirection, SeriesMetric, SortOrder, ValueFormat};
pub use error::CoreError;
pub use structs::{
    CountryRecord, CreditRatings, EconomicIndicators, HistoricalData, InvestmentScore,
    SectorOpportunity, TimeSeriesPoint,
};
