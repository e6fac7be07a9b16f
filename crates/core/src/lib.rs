//! Core dashboard logic for VentureHub.
//!
//! This crate contains the dashboards' view models with ZERO web dependencies.
//! Every figure, chart and link the founder and investor views show is
//! computed here.
//!
//! # Modules
//!
//! - `display` - Decimal formatting for percentages, money and dates
//! - `chart` - Chart specifications handed to a renderer
//! - `rotation` - Timed chart rotation and its injectable clock
//! - `navigation` - Routes linked from the dashboards
//! - `dashboard` - Snapshots, page models and metrics providers

pub mod chart;
pub mod dashboard;
pub mod display;
pub mod navigation;
pub mod rotation;
