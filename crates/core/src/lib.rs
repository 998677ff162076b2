//! # Chartview Core
//!
//! Core business logic for the chartview clinical-data viewer.
//!
//! This crate ties the data-source boundary (`healthie`) to the pure
//! parsing core (`quicknotes`):
//! - startup-resolved configuration, including the label table
//! - the `NotesService` that parses and formats quick-notes exports with a
//!   defensive catch-all around the pipeline
//!
//! **No API concerns**: HTTP serving belongs to the root `chartview-run`
//! binary; fetching belongs to the `healthie` crate.

pub mod config;
pub mod error;
pub mod notes;

pub use config::{load_label_table, CoreConfig, DEFAULT_HEALTHIE_API_URL};
pub use error::{ChartError, ChartResult};
pub use notes::NotesService;
