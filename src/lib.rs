//! ENADE Dashboard - selection and projection engine for exam results.
//!
//! This crate loads the consolidated ENADE JSON dataset of a campus, keeps the
//! user's selection consistent, and projects chart-ready series for the
//! overview, topic, history and perception views.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
