use crate::error::DataSourceError;
use core_types::CountryRecord;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Loads complete country snapshots from a JSON file.
///
/// The file holds one array of camelCase country records, the same shape the
/// backing service delivers. A snapshot is whole or failed; there is no
/// streaming or incremental path.
#[derive(Debug, Clone)]
pub struct SnapshotSource {
    path: PathBuf,
}

impl SnapshotSource {
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Reads, parses, and validates the snapshot.
    ///
    /// Every record is checked against the core invariants before the set is
    /// handed out; one malformed record fails the whole load.
    pub fn load(&self) -> Result<Vec<CountryRecord>, DataSourceError> {
        let raw = fs::read_to_string(&self.path)?;
        let countries: Vec<CountryRecord> = serde_json::from_str(&raw)?;

        for country in &countries {
            country
                .validate()
                .map_err(|e| DataSourceError::InvalidRecord {
                    id: country.id.clone(),
                    reason: e.to_string(),
                })?;
        }

        info!(
            path = %self.path.display(),
            countries = countries.len(),
            "loaded country snapshot"
        );
        Ok(countries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const VALID_SNAPSHOT: &str = r#"[
        {
            "id": "vnm",
            "name": "Vietnam",
            "flag": "🇻🇳",
            "region": "Asia",
            "subregion": "South-Eastern Asia",
            "capital": "Hanoi",
            "population": 98100000,
            "indicators": {
                "gdp": 409000000000,
                "gdpGrowth": 6.5,
                "gdpPerCapita": 4160,
                "inflation": 3.2,
                "unemployment": 2.3,
                "publicDebt": 157000000000,
                "debtToGdpRatio": 38.4,
                "foreignDirectInvestment": 17900000000,
                "tradeBalance": 11200000000,
                "currencyCode": "VND",
                "exchangeRate": 24300,
                "creditRatings": { "sp": "BB+", "moodys": "Ba2", "fitch": "BB+" }
            },
            "historicalData": {
                "gdp": [
                    { "date": "2021-01-01", "value": 366000000000 },
                    { "date": "2022-01-01", "value": 409000000000 }
                ],
                "inflation": [],
                "unemployment": [],
                "exchangeRate": []
            },
            "investmentScore": {
                "overall": 74,
                "economicStability": 70,
                "growthPotential": 85,
                "riskFactor": 38,
                "sectorOpportunities": [
                    {
                        "sector": "Manufacturing",
                        "score": 86,
                        "growthRate": 8.1,
                        "description": "Electronics assembly hub"
                    }
                ]
            }
        }
    ]"#;

    fn write_snapshot(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_a_valid_snapshot() {
        let file = write_snapshot(VALID_SNAPSHOT);
        let countries = SnapshotSource::from_path(file.path()).load().unwrap();

        assert_eq!(countries.len(), 1);
        assert_eq!(countries[0].id, "vnm");
        assert_eq!(countries[0].indicators.currency_code, "VND");
        assert_eq!(countries[0].historical.gdp.len(), 2);
        assert_eq!(
            countries[0].investment_score.sector_opportunities[0].sector,
            "Manufacturing"
        );
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let source = SnapshotSource::from_path("/nonexistent/countries.json");
        assert!(matches!(source.load(), Err(DataSourceError::Io(_))));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let file = write_snapshot("{ not json");
        let source = SnapshotSource::from_path(file.path());
        assert!(matches!(source.load(), Err(DataSourceError::Parse(_))));
    }

    #[test]
    fn invalid_record_fails_the_whole_load() {
        let broken = VALID_SNAPSHOT.replace("\"unemployment\": 2.3", "\"unemployment\": -2.3");
        let file = write_snapshot(&broken);
        let source = SnapshotSource::from_path(file.path());

        assert!(matches!(
            source.load(),
            Err(DataSourceError::InvalidRecord { id, .. }) if id == "vnm"
        ));
    }
}
