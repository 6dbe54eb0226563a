//! drift-report - schema drift checker logs to markdown CI annotations.
//!
//! The drift checker prints free-text logs. This crate picks out the
//! critical difference count, per-table column and constraint changes,
//! index differences and the trigger summary, and renders them as a
//! markdown report suitable for a CI comment.
//!
//! # Quick Start
//!
//! ```no_run
//! use drift_report::prelude::*;
//!
//! let report = format_file("drift.log", &ReportOptions::default()).unwrap();
//! println!("{report}");
//! ```
//!
//! # Modules
//!
//! - [`api`] - High-level entry points mirroring the CLI
//! - [`scan`] - Per-line pattern recognition
//! - [`parser`] - Forward-only scan into a [`model::DriftLog`]
//! - [`report`] - Markdown and JSON rendering

pub mod api;
pub mod model;
pub mod parser;
pub mod prelude;
pub mod report;
pub mod scan;
pub mod util;
