//! # Meridian Aggregation Engine
//!
//! This crate turns a snapshot of raw country records into the derived views
//! the dashboard consumes: region summaries, leaderboards, growth-rate
//! series, and side-by-side comparison rows.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of
//!   external systems. It depends only on `core-types` (Layer 0).
//! - **Stateless Calculation:** The `AggregationEngine` is a stateless
//!   calculator. Every operation is a pure function of its inputs; the same
//!   snapshot always produces the same views, and concurrent callers need no
//!   locking because nothing is shared.
//! - **Whole-snapshot Aggregation:** Derived views are always recomputed from
//!   the full country set. There are no incremental caches to go stale.
//!
//! ## Public API
//!
//! - `AggregationEngine`: the main struct that contains the calculation logic.
//! - `report`: the derived view-model structs (`RegionSummary`, `RankedEntry`,
//!   `GrowthPoint`, `ComparisonRow`, `GlobalReport`).
//! - `AnalyticsError`: the specific error types that can be returned from
//!   this crate.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod error;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use engine::{AggregationEngine, MAX_COMPARISON_COUNTRIES};
pub use error::AnalyticsError;
pub use report::{
    ComparisonRow, GlobalReport, GrowthPoint, RankedEntry, RegionSummary, TopPerformers,
};
