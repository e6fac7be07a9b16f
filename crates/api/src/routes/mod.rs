//! API route definitions.

use axum::Router;
use serde::Deserialize;
use venturehub_core::dashboard::parse_chart;
use venturehub_core::rotation::ChartVariant;
use venturehub_shared::types::Theme;
use venturehub_shared::{AppError, DashboardConfig};

use crate::AppState;
use crate::error::ApiResult;

pub mod founder;
pub mod health;
pub mod investor;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(founder::routes())
        .merge(investor::routes())
}

/// Query parameters shared by the dashboard endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    /// Chart key to show; the first chart when absent.
    pub chart: Option<String>,
    /// `light` or `dark`; the configured default when absent.
    pub theme: Option<String>,
}

impl DashboardQuery {
    /// Requested theme.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an unknown theme name.
    pub fn theme(&self, config: &DashboardConfig) -> ApiResult<Theme> {
        match self.theme.as_deref() {
            Some(name) => Ok(name.parse().map_err(AppError::Validation)?),
            None => Ok(config.default_theme),
        }
    }

    /// Requested chart.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an unknown chart key.
    pub fn chart<V: ChartVariant>(&self) -> ApiResult<V> {
        match self.chart.as_deref() {
            Some(key) => Ok(parse_chart(key)?),
            None => Ok(V::ALL[0]),
        }
    }
}
