//! The data-source collaborator boundary.
//!
//! The aggregation layer never consumes partial input: a snapshot load
//! either yields the complete, validated country set or a typed error.
//! Everything downstream can therefore assume well-formed records.

pub mod error;
pub mod snapshot;

pub use error::DataSourceError;
pub use snapshot::SnapshotSource;
