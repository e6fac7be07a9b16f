//! Founder and investor dashboards.
//!
//! This module provides:
//! - Snapshot types and demo data
//! - Page models rendered from a snapshot, an active chart and a theme
//! - Metrics providers

pub mod demo;
pub mod error;
pub mod founder;
pub mod investor;
pub mod provider;
pub mod roster;
pub mod types;
pub mod view;


pub use demo::{DemoData, founder_demo, investor_demo};
pub use error::ViewError;
pub use founder::{FounderChart, FounderPage, FounderView};
pub use investor::{InvestorChart, InvestorPage, InvestorView};
pub use provider::{DemoProvider, JsonFileProvider, MetricsProvider};
pub use roster::{AvatarSource, RosterSection, render_roster};
pub use types::*;
pub use view::{DashboardView, Link, StatCard, parse_chart};
