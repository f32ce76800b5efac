//! Per-move chess game statistics: CSV ingestion, derived series, charts.
//!
//! Every derived view is a pure function of the loaded rows and is
//! recomputed on each request; nothing here persists state.

pub mod charts;
pub mod clock;
pub mod error;
pub mod series;
pub mod table;

pub use error::StatsError;
pub use series::PlayerSeries;
pub use table::MoveRow;
