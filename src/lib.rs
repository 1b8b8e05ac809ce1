//! Timesheet report engine.
//!
//! This crate turns raw employee time entries into a per-employee hours
//! summary and renders it two ways: a PNG pie chart with legend and an
//! HTML table that highlights employees under 100 hours.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod render;
pub mod source;
