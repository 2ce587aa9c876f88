use crate::error::CoreError;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// The wire format uses camelCase field names, so every struct here maps
// from JSON camelCase to Rust snake_case via `#[serde(rename_all)]`.

/// One country's complete economic snapshot at a point in time.
///
/// This is the single input shape for the entire aggregation layer. Records
/// are delivered as a whole snapshot by the data-source collaborator and are
/// never mutated by any downstream component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryRecord {
    pub id: String,
    pub name: String,
    pub flag: String,
    pub region: String,
    pub subregion: String,
    pub capital: String,
    pub population: u64,
    pub indicators: EconomicIndicators,
    #[serde(rename = "historicalData")]
    pub historical: HistoricalData,
    pub investment_score: InvestmentScore,
}

impl CountryRecord {
    /// Checks the structural invariants of a record as it enters the system.
    ///
    /// The aggregation functions assume well-formed input; this is the one
    /// place where malformed records are rejected with a typed error.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.id.is_empty() {
            return Err(CoreError::InvalidInput(
                "id".to_string(),
                "must not be empty".to_string(),
            ));
        }
        if self.region.is_empty() {
            return Err(CoreError::InvalidInput(
                "region".to_string(),
                "must not be empty".to_string(),
            ));
        }
        if self.indicators.gdp.is_sign_negative() {
            return Err(CoreError::InvalidInput(
                "indicators.gdp".to_string(),
                "must be non-negative".to_string(),
            ));
        }
        if self.indicators.unemployment.is_sign_negative() {
            return Err(CoreError::InvalidInput(
                "indicators.unemployment".to_string(),
                "must be non-negative".to_string(),
            ));
        }
        if self.indicators.debt_to_gdp_ratio.is_sign_negative() {
            return Err(CoreError::InvalidInput(
                "indicators.debtToGdpRatio".to_string(),
                "must be non-negative".to_string(),
            ));
        }

        for (name, series) in [
            ("historicalData.gdp", &self.historical.gdp),
            ("historicalData.inflation", &self.historical.inflation),
            ("historicalData.unemployment", &self.historical.unemployment),
            ("historicalData.exchangeRate", &self.historical.exchange_rate),
        ] {
            // Dates must be strictly increasing, which also guarantees uniqueness.
            for window in series.windows(2) {
                if window[1].date <= window[0].date {
                    return Err(CoreError::InvalidInput(
                        name.to_string(),
                        format!(
                            "dates must be strictly increasing, found {} after {}",
                            window[1].date, window[0].date
                        ),
                    ));
                }
            }
        }

        Ok(())
    }
}

/// The headline economic indicators for one country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EconomicIndicators {
    /// Gross domestic product in USD. Never negative.
    pub gdp: Decimal,
    /// Year-over-year GDP growth in percent. Any sign.
    pub gdp_growth: Decimal,
    pub gdp_per_capita: Decimal,
    /// Consumer price inflation in percent. Negative means deflation.
    pub inflation: Decimal,
    /// Unemployment rate in percent. Never negative.
    pub unemployment: Decimal,
    pub public_debt: Decimal,
    /// Public debt as a percentage of GDP. Never negative.
    pub debt_to_gdp_ratio: Decimal,
    /// Net foreign direct investment inflows in USD.
    pub foreign_direct_investment: Decimal,
    /// Exports minus imports in USD. Any sign.
    pub trade_balance: Decimal,
    pub currency_code: String,
    pub exchange_rate: Decimal,
    pub credit_ratings: CreditRatings,
}

/// Sovereign credit ratings from the three major agencies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditRatings {
    pub sp: String,
    pub moodys: String,
    pub fitch: String,
}

/// The historical time series attached to a country, one per tracked metric.
///
/// Each series is ordered by date with unique dates; a series may be empty
/// when no history is available for that metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalData {
    pub gdp: Vec<TimeSeriesPoint>,
    pub inflation: Vec<TimeSeriesPoint>,
    pub unemployment: Vec<TimeSeriesPoint>,
    pub exchange_rate: Vec<TimeSeriesPoint>,
}

/// A single dated observation within a historical series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    pub date: NaiveDate,
    pub value: Decimal,
}

/// The composite investment assessment for one country.
///
/// All four scores are conceptually bounded to [0, 100].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentScore {
    pub overall: Decimal,
    pub economic_stability: Decimal,
    pub growth_potential: Decimal,
    pub risk_factor: Decimal,
    /// Per-sector assessments. Sector names are unique within a country.
    pub sector_opportunities: Vec<SectorOpportunity>,
}

/// One sector's investment assessment within a country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorOpportunity {
    pub sector: String,
    pub score: Decimal,
    pub growth_rate: Decimal,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn record() -> CountryRecord {
        CountryRecord {
            id: "bra".to_string(),
            name: "Brazil".to_string(),
            flag: "🇧🇷".to_string(),
            region: "Americas".to_string(),
            subregion: "South America".to_string(),
            capital: "Brasília".to_string(),
            population: 214_300_000,
            indicators: EconomicIndicators {
                gdp: dec!(1_920_000_000_000),
                gdp_growth: dec!(2.9),
                gdp_per_capita: dec!(8_960),
                inflation: dec!(4.6),
                unemployment: dec!(8.0),
                public_debt: dec!(1_400_000_000_000),
                debt_to_gdp_ratio: dec!(72.9),
                foreign_direct_investment: dec!(50_000_000_000),
                trade_balance: dec!(61_000_000_000),
                currency_code: "BRL".to_string(),
                exchange_rate: dec!(4.95),
                credit_ratings: CreditRatings {
                    sp: "BB-".to_string(),
                    moodys: "Ba2".to_string(),
                    fitch: "BB".to_string(),
                },
            },
            historical: HistoricalData {
                gdp: vec![
                    TimeSeriesPoint {
                        date: NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
                        value: dec!(1_650_000_000_000),
                    },
                    TimeSeriesPoint {
                        date: NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(),
                        value: dec!(1_920_000_000_000),
                    },
                ],
                inflation: vec![],
                unemployment: vec![],
                exchange_rate: vec![],
            },
            investment_score: InvestmentScore {
                overall: dec!(68),
                economic_stability: dec!(61),
                growth_potential: dec!(74),
                risk_factor: dec!(45),
                sector_opportunities: vec![SectorOpportunity {
                    sector: "Agriculture".to_string(),
                    score: dec!(82),
                    growth_rate: dec!(5.1),
                    description: "Major exporter of soy and beef".to_string(),
                }],
            },
        }
    }

    #[test]
    fn valid_record_passes_validation() {
        assert!(record().validate().is_ok());
    }

    #[test]
    fn empty_id_is_rejected() {
        let mut r = record();
        r.id.clear();
        assert!(matches!(r.validate(), Err(CoreError::InvalidInput(field, _)) if field == "id"));
    }

    #[test]
    fn negative_unemployment_is_rejected() {
        let mut r = record();
        r.indicators.unemployment = dec!(-1.0);
        assert!(r.validate().is_err());
    }

    #[test]
    fn out_of_order_series_dates_are_rejected() {
        let mut r = record();
        r.historical.gdp.swap(0, 1);
        assert!(r.validate().is_err());
    }

    #[test]
    fn duplicate_series_dates_are_rejected() {
        let mut r = record();
        let first = r.historical.gdp[0];
        r.historical.gdp[1].date = first.date;
        assert!(r.validate().is_err());
    }

    #[test]
    fn record_round_trips_through_camel_case_json() {
        let r = record();
        let json = serde_json::to_string(&r).unwrap();
        assert!(json.contains("\"gdpGrowth\""));
        assert!(json.contains("\"historicalData\""));
        assert!(json.contains("\"sectorOpportunities\""));
        let back: CountryRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(r, back);
    }
}
