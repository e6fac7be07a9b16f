//! Chart colors per theme.

use serde::Serialize;
use venturehub_shared::types::Theme;

/// Colors applied to chart chrome (legend, titles, axes, tooltips).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    /// Legend label color.
    pub legend: &'static str,
    /// Chart and axis title color.
    pub title: &'static str,
    /// Axis tick label color.
    pub ticks: &'static str,
    /// Grid line color.
    pub grid: &'static str,
    /// Axis border color.
    pub axis_border: &'static str,
    /// Tooltip background.
    pub tooltip_background: &'static str,
    /// Tooltip title and body text.
    pub tooltip_text: &'static str,
}

const LIGHT: Palette = Palette {
    legend: "rgb(55 65 81)",
    title: "rgb(55 65 81)",
    ticks: "rgb(107 114 128)",
    grid: "rgba(200, 200, 200, 0.1)",
    axis_border: "rgb(229 231 235)",
    tooltip_background: "rgba(0,0,0,0.7)",
    tooltip_text: "#fff",
};

const DARK: Palette = Palette {
    legend: "rgb(156 163 175)",
    title: "rgb(249 250 251)",
    ticks: "rgb(156 163 175)",
    grid: "rgba(100, 100, 100, 0.2)",
    axis_border: "rgb(75 85 99)",
    tooltip_background: "rgba(255,255,255,0.8)",
    tooltip_text: "#000",
};

/// Investor charts sit on white panels in both themes.
const PANEL: Palette = Palette {
    legend: "rgb(55, 65, 81)",
    title: "rgb(75, 85, 99)",
    ticks: "rgb(75, 85, 99)",
    grid: "rgb(229, 231, 235)",
    axis_border: "rgb(229, 231, 235)",
    tooltip_background: "rgba(0,0,0,0.7)",
    tooltip_text: "#fff",
};

impl Palette {
    /// Palette following the theme.
    #[must_use]
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => LIGHT,
            Theme::Dark => DARK,
        }
    }

    /// Fixed palette for charts drawn on a white panel regardless of theme.
    #[must_use]
    pub fn white_panel() -> Self {
        PANEL
    }
}
