use core_types::{CountryRecord, SectorOpportunity};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The optional screening criteria, AND-combined when present.
///
/// An empty filter (all fields `None`) matches every country, so running the
/// screener with the default filter simply sorts the full set by overall
/// investment score.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OpportunityFilter {
    /// Keep countries with `gdp_growth >= min_gdp_growth`.
    pub min_gdp_growth: Option<Decimal>,
    /// Keep countries with `inflation <= max_inflation`.
    pub max_inflation: Option<Decimal>,
    /// Exact match on region name.
    pub region: Option<String>,
    /// Keep countries with at least one sector opportunity in this set.
    pub sectors: Option<Vec<String>>,
}

/// One country-sector pair surfaced by the pipeline as a candidate for
/// investment interest, ready to render as an opportunity card.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpportunityCard {
    pub country_id: String,
    pub country_name: String,
    pub overall_score: Decimal,
    pub sector: String,
    pub sector_score: Decimal,
    pub growth_rate: Decimal,
    pub description: String,
}

/// The investment-opportunity screening engine.
///
/// Filters a country snapshot against the configured criteria, then ranks
/// the survivors by overall investment score. Pure and total: it never
/// errors and never mutates its input.
pub struct Screener {
    filter: OpportunityFilter,
}

impl Screener {
    pub fn new(filter: OpportunityFilter) -> Self {
        Self { filter }
    }

    /// Filters, then ranks. The sort is stable, so countries with equal
    /// overall scores keep their relative order from the input set.
    pub fn run(&self, countries: &[CountryRecord]) -> Vec<CountryRecord> {
        let mut matches: Vec<CountryRecord> = countries
            .iter()
            .filter(|c| self.matches(c))
            .cloned()
            .collect();

        matches.sort_by(|a, b| b.investment_score.overall.cmp(&a.investment_score.overall));

        debug!(
            total = countries.len(),
            matched = matches.len(),
            "screened countries"
        );
        matches
    }

    /// Runs the pipeline and reduces each surviving country to its single
    /// strongest sector. Countries without sector opportunities are skipped.
    pub fn opportunity_cards(&self, countries: &[CountryRecord]) -> Vec<OpportunityCard> {
        self.run(countries)
            .into_iter()
            .filter_map(|country| {
                top_sector(&country).cloned().map(|sector| OpportunityCard {
                    country_id: country.id.clone(),
                    country_name: country.name.clone(),
                    overall_score: country.investment_score.overall,
                    sector: sector.sector,
                    sector_score: sector.score,
                    growth_rate: sector.growth_rate,
                    description: sector.description,
                })
            })
            .collect()
    }

    fn matches(&self, country: &CountryRecord) -> bool {
        if let Some(min) = self.filter.min_gdp_growth {
            if country.indicators.gdp_growth < min {
                return false;
            }
        }
        if let Some(max) = self.filter.max_inflation {
            if country.indicators.inflation > max {
                return false;
            }
        }
        if let Some(region) = &self.filter.region {
            if &country.region != region {
                return false;
            }
        }
        if let Some(sectors) = &self.filter.sectors {
            let has_requested_sector = country
                .investment_score
                .sector_opportunities
                .iter()
                .any(|so| sectors.contains(&so.sector));
            if !has_requested_sector {
                return false;
            }
        }
        true
    }
}

/// Picks a country's strongest sector opportunity: the highest `score`,
/// first-listed on ties. `None` when the country has no sectors.
pub fn top_sector(country: &CountryRecord) -> Option<&SectorOpportunity> {
    country
        .investment_score
        .sector_opportunities
        .iter()
        .fold(None, |best: Option<&SectorOpportunity>, candidate| match best {
            Some(current) if candidate.score > current.score => Some(candidate),
            Some(current) => Some(current),
            None => Some(candidate),
        })
}

/// The de-duplicated, sorted sector vocabulary across a country set, used to
/// populate sector filter choices.
pub fn all_sectors(countries: &[CountryRecord]) -> Vec<String> {
    let mut sectors: Vec<String> = countries
        .iter()
        .flat_map(|c| c.investment_score.sector_opportunities.iter())
        .map(|so| so.sector.clone())
        .collect();
    sectors.sort_unstable();
    sectors.dedup();
    sectors
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::{CreditRatings, EconomicIndicators, HistoricalData, InvestmentScore};
    use rust_decimal_macros::dec;

    fn country(
        id: &str,
        region: &str,
        gdp_growth: Decimal,
        inflation: Decimal,
        overall: Decimal,
        sectors: &[(&str, Decimal)],
    ) -> CountryRecord {
        CountryRecord {
            id: id.to_string(),
            name: id.to_uppercase(),
            flag: String::new(),
            region: region.to_string(),
            subregion: String::new(),
            capital: String::new(),
            population: 1_000_000,
            indicators: EconomicIndicators {
                gdp: dec!(1_000_000_000),
                gdp_growth,
                gdp_per_capita: dec!(10_000),
                inflation,
                unemployment: dec!(5.0),
                public_debt: dec!(500_000_000),
                debt_to_gdp_ratio: dec!(50),
                foreign_direct_investment: dec!(10_000_000),
                trade_balance: dec!(0),
                currency_code: "USD".to_string(),
                exchange_rate: dec!(1),
                credit_ratings: CreditRatings {
                    sp: "A".to_string(),
                    moodys: "A2".to_string(),
                    fitch: "A".to_string(),
                },
            },
            historical: HistoricalData {
                gdp: vec![],
                inflation: vec![],
                unemployment: vec![],
                exchange_rate: vec![],
            },
            investment_score: InvestmentScore {
                overall,
                economic_stability: dec!(50),
                growth_potential: dec!(50),
                risk_factor: dec!(50),
                sector_opportunities: sectors
                    .iter()
                    .map(|(name, score)| SectorOpportunity {
                        sector: name.to_string(),
                        score: *score,
                        growth_rate: dec!(4.0),
                        description: String::new(),
                    })
                    .collect(),
            },
        }
    }

    #[test]
    fn empty_filter_returns_all_countries_sorted_by_score() {
        let countries = vec![
            country("a", "Asia", dec!(2), dec!(3), dec!(55), &[]),
            country("b", "Europe", dec!(2), dec!(3), dec!(80), &[]),
            country("c", "Asia", dec!(2), dec!(3), dec!(67), &[]),
        ];
        let screener = Screener::new(OpportunityFilter::default());
        let result = screener.run(&countries);

        let ids: Vec<&str> = result.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
    }

    #[test]
    fn thresholds_are_and_combined() {
        let countries = vec![
            country("growth-only", "Asia", dec!(6.0), dec!(9.0), dec!(50), &[]),
            country("inflation-only", "Asia", dec!(1.0), dec!(2.0), dec!(50), &[]),
            country("both", "Asia", dec!(6.0), dec!(2.0), dec!(50), &[]),
        ];
        let screener = Screener::new(OpportunityFilter {
            min_gdp_growth: Some(dec!(5.0)),
            max_inflation: Some(dec!(4.0)),
            ..Default::default()
        });
        let result = screener.run(&countries);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "both");
    }

    #[test]
    fn threshold_boundaries_are_inclusive() {
        let countries = vec![country("edge", "Asia", dec!(5.0), dec!(4.0), dec!(50), &[])];
        let screener = Screener::new(OpportunityFilter {
            min_gdp_growth: Some(dec!(5.0)),
            max_inflation: Some(dec!(4.0)),
            ..Default::default()
        });

        assert_eq!(screener.run(&countries).len(), 1);
    }

    #[test]
    fn region_filter_is_an_exact_match() {
        let countries = vec![
            country("a", "Asia", dec!(2), dec!(3), dec!(50), &[]),
            country("b", "Southeast Asia", dec!(2), dec!(3), dec!(50), &[]),
        ];
        let screener = Screener::new(OpportunityFilter {
            region: Some("Asia".to_string()),
            ..Default::default()
        });
        let result = screener.run(&countries);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "a");
    }

    #[test]
    fn sector_filter_keeps_countries_with_any_requested_sector() {
        let countries = vec![
            country("a", "Asia", dec!(2), dec!(3), dec!(50), &[("Technology", dec!(80))]),
            country("b", "Asia", dec!(2), dec!(3), dec!(60), &[("Agriculture", dec!(70))]),
            country("c", "Asia", dec!(2), dec!(3), dec!(70), &[]),
        ];
        let screener = Screener::new(OpportunityFilter {
            sectors: Some(vec!["Technology".to_string(), "Energy".to_string()]),
            ..Default::default()
        });
        let result = screener.run(&countries);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "a");
    }

    #[test]
    fn empty_input_screens_to_empty() {
        let screener = Screener::new(OpportunityFilter::default());
        assert!(screener.run(&[]).is_empty());
        assert!(screener.opportunity_cards(&[]).is_empty());
    }

    #[test]
    fn top_sector_takes_highest_score_first_on_ties() {
        let c = country(
            "a",
            "Asia",
            dec!(2),
            dec!(3),
            dec!(50),
            &[("Energy", dec!(70)), ("Technology", dec!(85)), ("Mining", dec!(85))],
        );

        let top = top_sector(&c).unwrap();
        assert_eq!(top.sector, "Technology");
    }

    #[test]
    fn top_sector_of_sectorless_country_is_none() {
        let c = country("a", "Asia", dec!(2), dec!(3), dec!(50), &[]);
        assert!(top_sector(&c).is_none());
    }

    #[test]
    fn opportunity_cards_pair_countries_with_their_best_sector() {
        let countries = vec![
            country("a", "Asia", dec!(2), dec!(3), dec!(55), &[("Energy", dec!(60))]),
            country("b", "Asia", dec!(2), dec!(3), dec!(80), &[("Technology", dec!(90))]),
            country("no-sectors", "Asia", dec!(2), dec!(3), dec!(99), &[]),
        ];
        let screener = Screener::new(OpportunityFilter::default());
        let cards = screener.opportunity_cards(&countries);

        assert_eq!(cards.len(), 2);
        // Sectorless countries are skipped even when they rank first.
        assert_eq!(cards[0].country_id, "b");
        assert_eq!(cards[0].sector, "Technology");
        assert_eq!(cards[1].country_id, "a");
    }

    #[test]
    fn all_sectors_is_sorted_and_deduplicated() {
        let countries = vec![
            country("a", "Asia", dec!(2), dec!(3), dec!(50), &[("Technology", dec!(80)), ("Energy", dec!(60))]),
            country("b", "Asia", dec!(2), dec!(3), dec!(50), &[("Technology", dec!(75))]),
        ];

        assert_eq!(all_sectors(&countries), vec!["Energy", "Technology"]);
    }
}
