//! Record filtering and output.
//!
//! This module contains:
//! - [`filter`] - User selection and filtering by user, sentiment and date
//! - [`output`] - Format writers (CSV, JSON, JSONL) for records and dashboards
//!
//! # Quick Start
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() {
//! use chatlyze::core::{
//!     FilterConfig, OutputConfig, UserSelection,
//!     apply_filters, write_csv, write_json, write_jsonl,
//! };
//! # }
//! ```

pub mod filter;
pub mod output;

// Re-export main types for convenience
pub use filter::{FilterConfig, UserSelection, apply_filters};
pub use output::OutputConfig;

// Conditionally re-export output writers
#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{dashboard_to_json, to_json, to_jsonl, write_dashboard, write_json, write_jsonl};
