//! Chart specifications handed to the charting collaborator.
//!
//! The core decides what a chart shows and how its values read; an external
//! renderer only draws the resulting [`ChartSpec`].

pub mod format;
pub mod palette;
pub mod types;

pub use format::ValueFormat;
pub use palette::Palette;
pub use types::{
    Axis, ChartKind, ChartSpec, ChartStyle, Dataset, Legend, LegendPosition, PointStyle, Tooltip,
};
