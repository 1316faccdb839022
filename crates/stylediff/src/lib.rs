//! Structural stylesheet differ.
//!
//! Given two parsed, near-identical stylesheet trees (a *base*, e.g. the
//! left-to-right build, and a *compare*, e.g. the right-to-left build),
//! computes a minimal *diff* stylesheet holding only the compare-side content
//! that differs from the base, plus a *stack* of compare-side rules that could
//! not be aligned with anything in the base.
//!
//! # Key Types
//!
//! - [`Differ`] / [`DiffConfig`] -- The diff engine and its knobs
//! - [`DiffOutcome`] / [`DiffStats`] -- The diff and stack trees plus counters
//! - [`DiffError`] -- Alignment failures
//! - [`is_color_property`] -- The color-bearing property heuristic

pub mod color;
pub mod config;
pub mod differ;
pub mod error;

pub use color::is_color_property;
pub use config::{DeclarationPairing, DiffConfig, StackScope};
pub use differ::{diff, diff_with_config, DiffOutcome, DiffStats, Differ};
pub use error::{DiffError, DiffResult};

pub use stylediff_types as types;
