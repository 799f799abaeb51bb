//! Domain layer containing dashboard types and pure projections.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (campus/course/year ids, errors, question types)
//! - `dataset` - Typed records of the four published JSON slices plus exam links
//! - `comparison` - Metrics, baselines and the field lookup tables
//! - `selection` - Selection state reducer and load tags
//! - `dashboard` - Projections from dataset + selection to chart series
//! - `exam` - Question label to exam booklet page resolution

pub mod comparison;
pub mod dashboard;
pub mod dataset;
pub mod exam;
pub mod foundation;
pub mod selection;
