use analytics::AggregationEngine;
use anyhow::{anyhow, bail};
use clap::{Parser, Subcommand};
use comfy_table::{Table, presets::UTF8_FULL};
use configuration::Config;
use core_types::{CountryRecord, Metric, SeriesMetric, SortOrder};
use data_source::SnapshotSource;
use rust_decimal::Decimal;
use screener::{OpportunityFilter, Screener};
use session::AppState;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod render;

/// The main entry point for the Meridian dashboard CLI.
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Load the configuration and the full country snapshot
    let config = configuration::load_config()?;
    let countries = SnapshotSource::from_path(&config.data.snapshot_path).load()?;
    info!(countries = countries.len(), "snapshot ready");

    // Execute the appropriate command
    match cli.command {
        Commands::Overview => handle_overview(&countries, &config),
        Commands::Top(args) => handle_top(args, &countries, &config),
        Commands::Screen(args) => handle_screen(args, &countries, &config),
        Commands::Compare(args) => handle_compare(args, &countries, &config)?,
        Commands::Growth(args) => handle_growth(args, &countries, &config)?,
    }

    Ok(())
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// A macroeconomic dashboard over country snapshots: region summaries,
/// leaderboards, investment screening, and side-by-side comparisons.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the global report: totals, region summaries, and leaderboards.
    Overview,
    /// Rank countries by a single metric.
    Top(TopArgs),
    /// Screen for investment opportunities.
    Screen(ScreenArgs),
    /// Compare selected countries on one metric.
    Compare(CompareArgs),
    /// Derive period-over-period growth from a country's historical series.
    Growth(GrowthArgs),
}

#[derive(Parser)]
struct TopArgs {
    /// The metric to rank by (e.g., "gdp-growth", "inflation", "investment-score").
    #[arg(long)]
    metric: Metric,

    /// Rank ascending (lowest first), for "lower is better" metrics.
    #[arg(long)]
    ascending: bool,

    /// How many entries to show. Defaults to the configured leaderboard size.
    #[arg(long)]
    limit: Option<usize>,
}

#[derive(Parser)]
struct ScreenArgs {
    /// Keep countries with GDP growth at or above this percentage.
    #[arg(long)]
    min_gdp_growth: Option<Decimal>,

    /// Keep countries with inflation at or below this percentage.
    #[arg(long)]
    max_inflation: Option<Decimal>,

    /// Keep countries in this region only.
    #[arg(long)]
    region: Option<String>,

    /// Keep countries with an opportunity in this sector. Repeatable.
    #[arg(long = "sector")]
    sectors: Vec<String>,
}

#[derive(Parser)]
struct CompareArgs {
    /// The metric to compare on.
    #[arg(long)]
    metric: Metric,

    /// Comma-separated country ids, e.g. "usa,deu,vnm". At most five.
    #[arg(long, value_delimiter = ',')]
    countries: Vec<String>,
}

#[derive(Parser)]
struct GrowthArgs {
    /// The country id to derive growth for.
    #[arg(long)]
    country: String,

    /// The historical series to use (gdp, inflation, unemployment, exchange-rate).
    #[arg(long, default_value = "gdp")]
    series: SeriesMetric,
}

// ==============================================================================
// Command Handlers
// ==============================================================================

fn handle_overview(countries: &[CountryRecord], config: &Config) {
    let engine = AggregationEngine::new();
    let report = engine.global_report(countries, config.display.leaderboard_limit);
    let precision = config.display.precision;

    println!(
        "{} countries, updated {}",
        report.total_countries,
        report.last_updated.format("%Y-%m-%d %H:%M UTC")
    );

    let mut regions = Table::new();
    regions
        .load_preset(UTF8_FULL)
        .set_header(vec!["Region", "Countries", "Avg GDP Growth", "Avg Inflation"]);
    for summary in &report.regions {
        regions.add_row(vec![
            summary.name.clone(),
            summary.country_count.to_string(),
            render::format_percentage(summary.avg_gdp_growth, precision),
            render::format_percentage(summary.avg_inflation, precision),
        ]);
    }
    println!("\nRegions\n{regions}");

    for (title, metric, entries) in [
        ("Top GDP Growth", Metric::GdpGrowth, &report.top_performers.gdp_growth),
        ("Lowest Inflation", Metric::Inflation, &report.top_performers.lowest_inflation),
        (
            "Highest Investment Score",
            Metric::InvestmentScore,
            &report.top_performers.highest_investment_score,
        ),
    ] {
        println!("\n{title}\n{}", leaderboard_table(entries, metric, precision));
    }
}

fn handle_top(args: TopArgs, countries: &[CountryRecord], config: &Config) {
    let engine = AggregationEngine::new();
    let order = if args.ascending {
        SortOrder::Ascending
    } else {
        SortOrder::Descending
    };
    let limit = args.limit.unwrap_or(config.display.leaderboard_limit);
    let entries = engine.top_performers(countries, args.metric, order, limit);

    println!(
        "{}",
        leaderboard_table(&entries, args.metric, config.display.precision)
    );
}

fn handle_screen(args: ScreenArgs, countries: &[CountryRecord], config: &Config) {
    // CLI thresholds take precedence over the configured defaults.
    let filter = OpportunityFilter {
        min_gdp_growth: args.min_gdp_growth.or(config.screener.min_gdp_growth),
        max_inflation: args.max_inflation.or(config.screener.max_inflation),
        region: args.region,
        sectors: if args.sectors.is_empty() {
            None
        } else {
            Some(args.sectors)
        },
    };
    let cards = Screener::new(filter).opportunity_cards(countries);

    if cards.is_empty() {
        // A valid, non-error empty result.
        println!("No opportunities found.");
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "Country",
        "Score",
        "Top Sector",
        "Sector Score",
        "Growth",
        "Description",
    ]);
    for card in &cards {
        table.add_row(vec![
            card.country_name.clone(),
            card.overall_score.to_string(),
            card.sector.clone(),
            card.sector_score.to_string(),
            render::format_percentage(card.growth_rate, config.display.precision),
            card.description.clone(),
        ]);
    }
    println!("{table}");
}

fn handle_compare(
    args: CompareArgs,
    countries: &[CountryRecord],
    config: &Config,
) -> anyhow::Result<()> {
    if args.countries.is_empty() {
        bail!("--countries requires at least one country id");
    }
    if args.countries.len() > config.display.max_comparison {
        bail!(
            "at most {} countries can be compared at once",
            config.display.max_comparison
        );
    }

    // Thread the selection through an explicit session, which enforces the
    // duplicate and cap rules.
    let mut state = AppState::new();
    for id in &args.countries {
        let country = countries
            .iter()
            .find(|c| c.id == *id)
            .cloned()
            .ok_or_else(|| anyhow!("unknown country id '{id}'"))?;
        state.add_selected(country)?;
    }

    let engine = AggregationEngine::new();
    let rows = engine.comparison_rows(state.selected(), args.metric)?;
    let precision = config.display.precision;

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Country", args.metric.label(), "Diff"]);
    for row in &rows {
        table.add_row(vec![
            row.name.clone(),
            render::format_value(row.value, row.format, precision),
            render::format_diff(row, precision),
        ]);
    }
    println!("{table}");

    Ok(())
}

fn handle_growth(
    args: GrowthArgs,
    countries: &[CountryRecord],
    config: &Config,
) -> anyhow::Result<()> {
    let country = countries
        .iter()
        .find(|c| c.id == args.country)
        .ok_or_else(|| anyhow!("unknown country id '{}'", args.country))?;

    let engine = AggregationEngine::new();
    let series = args.series.series_of(&country.historical);
    let growth = engine.derive_growth_series(series);

    if growth.is_empty() {
        println!(
            "No {} history available for {}.",
            args.series.label(),
            country.name
        );
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Date", "Value", "Growth"]);
    for (point, derived) in series.iter().zip(&growth) {
        let formatted = match derived.growth {
            Some(value) => render::format_percentage(value, config.display.precision),
            // Undefined growth over a zero baseline renders as a gap.
            None => "n/a".to_string(),
        };
        table.add_row(vec![
            point.date.to_string(),
            point.value.to_string(),
            formatted,
        ]);
    }
    println!("{} {} history\n{table}", country.name, args.series.label());

    Ok(())
}

// ==============================================================================
// Rendering Helpers
// ==============================================================================

fn leaderboard_table(entries: &[analytics::RankedEntry], metric: Metric, precision: u32) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["#", "Country", metric.label()]);
    for (rank, entry) in entries.iter().enumerate() {
        table.add_row(vec![
            (rank + 1).to_string(),
            entry.name.clone(),
            render::format_value(entry.value, metric.format(), precision),
        ]);
    }
    table
}
