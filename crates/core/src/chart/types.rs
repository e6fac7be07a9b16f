//! Chart specification types.

use rust_decimal::Decimal;
use serde::Serialize;

use super::format::ValueFormat;
use super::palette::Palette;

/// Kind of visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartKind {
    /// Time series.
    Line,
    /// Categorical comparison.
    Bar,
    /// Proportional split.
    Doughnut,
}

/// Where the legend sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LegendPosition {
    /// Above the plot.
    Top,
    /// Right of the plot.
    Right,
}

/// Legend settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Legend {
    /// Legend position.
    pub position: LegendPosition,
    /// Label color.
    pub color: &'static str,
}

/// Tooltip settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tooltip {
    /// Background color.
    pub background: &'static str,
    /// Text color.
    pub text: &'static str,
    /// Value format used for tooltip lines.
    pub format: ValueFormat,
}

/// One axis of a line or bar chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    /// Axis title, if shown.
    pub title: Option<String>,
    /// Title color.
    pub title_color: &'static str,
    /// Tick label color.
    pub tick_color: &'static str,
    /// Tick label format.
    pub tick_format: ValueFormat,
    /// Grid line color; `None` hides the grid.
    pub grid_color: Option<&'static str>,
    /// Axis border color.
    pub border_color: &'static str,
    /// Whether the scale starts at zero.
    pub begin_at_zero: bool,
}

impl Axis {
    /// Axis styled from `palette` with the given title and tick format.
    #[must_use]
    pub fn new(palette: &Palette, title: Option<&str>, tick_format: ValueFormat) -> Self {
        Self {
            title: title.map(str::to_string),
            title_color: palette.title,
            tick_color: palette.ticks,
            tick_format,
            grid_color: Some(palette.grid),
            border_color: palette.axis_border,
            begin_at_zero: false,
        }
    }

    /// Hides the grid lines.
    #[must_use]
    pub fn without_grid(mut self) -> Self {
        self.grid_color = None;
        self
    }

    /// Starts the scale at zero.
    #[must_use]
    pub fn from_zero(mut self) -> Self {
        self.begin_at_zero = true;
        self
    }
}

/// Chart-wide style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartStyle {
    /// Chart title, if shown.
    pub title: Option<String>,
    /// Title color.
    pub title_color: &'static str,
    /// Legend settings.
    pub legend: Legend,
    /// Tooltip settings.
    pub tooltip: Tooltip,
    /// Horizontal axis (line and bar charts).
    pub x_axis: Option<Axis>,
    /// Vertical axis (line and bar charts).
    pub y_axis: Option<Axis>,
}

impl ChartStyle {
    /// Style from `palette` with a legend at `position` and tooltips in `format`.
    #[must_use]
    pub fn new(palette: &Palette, position: LegendPosition, format: ValueFormat) -> Self {
        Self {
            title: None,
            title_color: palette.title,
            legend: Legend {
                position,
                color: palette.legend,
            },
            tooltip: Tooltip {
                background: palette.tooltip_background,
                text: palette.tooltip_text,
                format,
            },
            x_axis: None,
            y_axis: None,
        }
    }

    /// Sets the chart title.
    #[must_use]
    pub fn titled(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    /// Sets both axes.
    #[must_use]
    pub fn with_axes(mut self, x_axis: Axis, y_axis: Axis) -> Self {
        self.x_axis = Some(x_axis);
        self.y_axis = Some(y_axis);
        self
    }
}

/// One data series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    /// Series label; empty for unlabeled doughnut series.
    pub label: String,
    /// Values, one per chart label.
    pub data: Vec<Decimal>,
    /// Border color(s); doughnuts use one per slice.
    pub border_color: Vec<&'static str>,
    /// Fill color(s); doughnuts use one per slice.
    pub background_color: Vec<&'static str>,
    /// Border width in pixels.
    pub border_width: u8,
    /// Whether the area under a line is filled.
    pub fill: bool,
    /// Line curve tension.
    pub tension: Option<Decimal>,
    /// Point markers for line charts.
    #[serde(flatten)]
    pub points: Option<PointStyle>,
}

/// Marker styling of line chart points, at rest and on hover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PointStyle {
    /// Radius in pixels.
    pub point_radius: u8,
    /// Fill color.
    pub point_background_color: &'static str,
    /// Outline color.
    pub point_border_color: &'static str,
    /// Radius while hovered.
    pub point_hover_radius: u8,
    /// Fill color while hovered.
    pub point_hover_background_color: &'static str,
    /// Outline color while hovered.
    pub point_hover_border_color: &'static str,
}

impl PointStyle {
    /// Markers that grow on hover and keep their colors.
    #[must_use]
    pub const fn new(radius: u8, hover_radius: u8, fill: &'static str, outline: &'static str) -> Self {
        Self {
            point_radius: radius,
            point_background_color: fill,
            point_border_color: outline,
            point_hover_radius: hover_radius,
            point_hover_background_color: fill,
            point_hover_border_color: outline,
        }
    }
}

impl Dataset {
    /// Series with a single border and fill color.
    #[must_use]
    pub fn new(label: &str, data: Vec<Decimal>, border: &'static str, background: &'static str) -> Self {
        Self {
            label: label.to_string(),
            data,
            border_color: vec![border],
            background_color: vec![background],
            border_width: 1,
            fill: false,
            tension: None,
            points: None,
        }
    }

    /// Unlabeled series coloring each slice from the given lists, cycling when short.
    #[must_use]
    pub fn slices(data: Vec<Decimal>, borders: &[&'static str], backgrounds: &[&'static str]) -> Self {
        let cycle = |colors: &[&'static str]| -> Vec<&'static str> {
            if colors.is_empty() {
                return Vec::new();
            }
            (0..data.len()).map(|i| colors[i % colors.len()]).collect()
        };
        Self {
            label: String::new(),
            border_color: cycle(borders),
            background_color: cycle(backgrounds),
            data,
            border_width: 1,
            fill: false,
            tension: None,
            points: None,
        }
    }

    /// Fills the area under a curved line.
    #[must_use]
    pub fn filled_curve(mut self, tension: Decimal) -> Self {
        self.fill = true;
        self.tension = Some(tension);
        self
    }

    /// Sets the border width.
    #[must_use]
    pub fn border_width(mut self, width: u8) -> Self {
        self.border_width = width;
        self
    }

    /// Sets the point markers.
    #[must_use]
    pub fn points(mut self, style: PointStyle) -> Self {
        self.points = Some(style);
        self
    }
}

/// Everything a renderer needs to draw one chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSpec {
    /// Visualization kind.
    pub kind: ChartKind,
    /// Category or time labels.
    pub labels: Vec<String>,
    /// Data series.
    pub datasets: Vec<Dataset>,
    /// Style configuration.
    pub style: ChartStyle,
    /// Preformatted tooltip text, per dataset and point.
    pub tooltips: Vec<Vec<String>>,
}

impl ChartSpec {
    /// Builds a spec and precomputes its tooltip text.
    #[must_use]
    pub fn new(kind: ChartKind, labels: Vec<String>, datasets: Vec<Dataset>, style: ChartStyle) -> Self {
        let format = style.tooltip.format;
        let tooltips = datasets
            .iter()
            .map(|dataset| {
                dataset
                    .data
                    .iter()
                    .enumerate()
                    .map(|(i, value)| {
                        let label = match kind {
                            ChartKind::Doughnut => labels.get(i).map_or("", String::as_str),
                            ChartKind::Line | ChartKind::Bar => dataset.label.as_str(),
                        };
                        format.tooltip(label, *value)
                    })
                    .collect()
            })
            .collect();

        Self {
            kind,
            labels,
            datasets,
            style,
            tooltips,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use venturehub_shared::types::Theme;

    #[test]
    fn test_line_tooltips_use_series_label() {
        let palette = Palette::for_theme(Theme::Light);
        let spec = ChartSpec::new(
            ChartKind::Line,
            vec!["Jan".into(), "Feb".into()],
            vec![Dataset::new("Pitch Views", vec![dec!(500), dec!(1200)], "#000", "#fff")],
            ChartStyle::new(&palette, LegendPosition::Top, ValueFormat::Thousands),
        );
        assert_eq!(
            spec.tooltips,
            vec![vec!["Pitch Views: 500".to_string(), "Pitch Views: 1,200".to_string()]]
        );
    }

    #[test]
    fn test_point_style_flattens_into_dataset() {
        let dataset = Dataset::new("Views", vec![dec!(1)], "#4F46E5", "#fff")
            .points(PointStyle::new(5, 7, "#4F46E5", "#fff"));
        let json = serde_json::to_value(&dataset).unwrap();
        assert_eq!(json["pointRadius"], 5);
        assert_eq!(json["pointHoverRadius"], 7);
        assert_eq!(json["pointBackgroundColor"], "#4F46E5");
        assert_eq!(json["pointHoverBorderColor"], "#fff");

        let bare = serde_json::to_value(Dataset::new("Rate", vec![], "#a", "#b")).unwrap();
        assert!(bare.get("pointRadius").is_none());
    }

    #[test]
    fn test_doughnut_tooltips_use_slice_label() {
        let palette = Palette::for_theme(Theme::Dark);
        let spec = ChartSpec::new(
            ChartKind::Doughnut,
            vec!["Raised".into(), "Remaining".into()],
            vec![Dataset::slices(vec![dec!(75), dec!(25)], &["#a"], &["#b", "#c"])],
            ChartStyle::new(&palette, LegendPosition::Right, ValueFormat::Percent),
        );
        assert_eq!(spec.tooltips[0], vec!["Raised: 75%", "Remaining: 25%"]);
        assert_eq!(spec.datasets[0].border_color, vec!["#a", "#a"]);
        assert_eq!(spec.datasets[0].background_color, vec!["#b", "#c"]);
    }

    #[test]
    fn test_axis_builders() {
        let palette = Palette::white_panel();
        let axis = Axis::new(&palette, Some("Value"), ValueFormat::Millions)
            .without_grid()
            .from_zero();
        assert!(axis.grid_color.is_none());
        assert!(axis.begin_at_zero);
        assert_eq!(axis.title.as_deref(), Some("Value"));
    }

    #[test]
    fn test_spec_serializes_camel_case() {
        let palette = Palette::for_theme(Theme::Light);
        let spec = ChartSpec::new(
            ChartKind::Bar,
            vec!["Q1".into()],
            vec![Dataset::new("Rate", vec![dec!(3.5)], "#DC2626", "#EF4444")],
            ChartStyle::new(&palette, LegendPosition::Top, ValueFormat::Percent).titled("T"),
        );
        let json = serde_json::to_value(&spec).unwrap();
        assert_eq!(json["kind"], "bar");
        assert_eq!(json["datasets"][0]["backgroundColor"][0], "#EF4444");
        assert_eq!(json["style"]["legend"]["position"], "top");
        assert_eq!(json["style"]["title"], "T");
    }
}
