use rust_decimal::Decimal;
use serde::Deserialize;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub data: DataSettings,
    pub display: DisplaySettings,
    #[serde(default)]
    pub screener: ScreenerDefaults,
}

/// Where the country snapshot comes from.
#[derive(Debug, Clone, Deserialize)]
pub struct DataSettings {
    /// Path to the JSON snapshot of country records.
    pub snapshot_path: String,
}

/// Parameters for how derived views are sized and rendered.
#[derive(Debug, Clone, Deserialize)]
pub struct DisplaySettings {
    /// How many entries each leaderboard carries. Must be at least 1.
    pub leaderboard_limit: usize,
    /// Decimal places for rendered percentage and diff values.
    pub precision: u32,
    /// The comparison view's country cap. Must be at least 1.
    pub max_comparison: usize,
}

/// Default screening thresholds, applied when the caller supplies none.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScreenerDefaults {
    pub min_gdp_growth: Option<Decimal>,
    pub max_inflation: Option<Decimal>,
}
