//! Building blocks shared by the dashboard page models.

use serde::Serialize;
use venturehub_shared::types::{ActivityId, Theme};

use super::error::ViewError;
use super::types::{ActivityEntry, IconRef};
use crate::navigation::Route;
use crate::rotation::ChartVariant;

/// A dashboard that renders a page model for one active chart.
pub trait DashboardView: Send + Sync + 'static {
    /// Charts rotated in the view's chart slot.
    type Chart: ChartVariant;

    /// Rendered page model.
    type Page: Serialize + Send;

    /// Whether the user may pick the active chart directly.
    const SELECTABLE: bool;

    /// Renders the page with `active` in the chart slot.
    fn render(&self, active: Self::Chart, theme: Theme) -> Self::Page;

    /// Validates a selection request against this view.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::SelectionUnsupported` for timer-only views and
    /// `ViewError::UnknownChart` for keys the view does not offer.
    fn selection(key: &str) -> Result<Self::Chart, ViewError> {
        if !Self::SELECTABLE {
            return Err(ViewError::SelectionUnsupported);
        }
        parse_chart(key)
    }
}

/// Resolves a chart key.
///
/// # Errors
///
/// Returns `ViewError::UnknownChart` when no variant has that key.
pub fn parse_chart<V: ChartVariant>(key: &str) -> Result<V, ViewError> {
    V::from_key(key).ok_or_else(|| ViewError::UnknownChart(key.to_string()))
}

/// Labeled link to another view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    /// Link text.
    pub label: String,
    /// Destination.
    pub to: Route,
}

impl Link {
    /// Creates a link.
    #[must_use]
    pub fn new(label: &str, to: Route) -> Self {
        Self {
            label: label.to_string(),
            to,
        }
    }
}

/// Page title block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Header {
    /// Page title.
    pub title: String,
    /// Introductory text under the title.
    pub tagline: String,
}

impl Header {
    /// Creates a header.
    #[must_use]
    pub fn new(title: &str, tagline: &str) -> Self {
        Self {
            title: title.to_string(),
            tagline: tagline.to_string(),
        }
    }
}

/// Labeled count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Counter {
    /// What is counted.
    pub label: String,
    /// Formatted count.
    pub value: String,
}

impl Counter {
    /// Creates a counter.
    #[must_use]
    pub fn new(label: &str, value: String) -> Self {
        Self {
            label: label.to_string(),
            value,
        }
    }
}

/// Recent-activity section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivitySection {
    /// Section heading.
    pub heading: String,
    /// Feed lines, newest first.
    pub items: Vec<ActivityItem>,
    /// Link to the full feed.
    pub view_all: Link,
}

impl ActivitySection {
    /// "Recent Activity" section over `entries`.
    #[must_use]
    pub fn new(entries: &[ActivityEntry], view_all: Link) -> Self {
        Self {
            heading: "Recent Activity".to_string(),
            items: activity_items(entries),
            view_all,
        }
    }
}

/// Headline metric card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatCard {
    /// Card title.
    pub title: String,
    /// Headline value.
    pub value: String,
    /// Secondary line under the value.
    pub caption: String,
    /// Where the card leads.
    pub link: Route,
}

impl StatCard {
    /// Creates a card.
    #[must_use]
    pub fn new(title: &str, value: String, caption: String, link: Route) -> Self {
        Self {
            title: title.to_string(),
            value,
            caption,
            link,
        }
    }
}

/// Rendered activity feed line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityItem {
    /// Source entry.
    pub id: ActivityId,
    /// `"{type}: {description}"`.
    pub headline: String,
    /// Relative time.
    pub time: String,
    /// Icon.
    pub icon: IconRef,
}

/// Renders a feed in input order.
#[must_use]
pub fn activity_items(entries: &[ActivityEntry]) -> Vec<ActivityItem> {
    entries
        .iter()
        .map(|entry| ActivityItem {
            id: entry.id,
            headline: format!("{}: {}", entry.kind, entry.description),
            time: entry.time.clone(),
            icon: entry.icon,
        })
        .collect()
}

/// One selector button or indicator dot of a chart slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartTab {
    /// Chart key.
    pub key: &'static str,
    /// Button label.
    pub label: &'static str,
    /// Whether this chart is on display.
    pub active: bool,
}

/// One tab per variant, with exactly the `active` one flagged.
#[must_use]
pub fn chart_tabs<V: ChartVariant>(active: V) -> Vec<ChartTab> {
    V::ALL
        .iter()
        .map(|variant| ChartTab {
            key: variant.key(),
            label: variant.label(),
            active: *variant == active,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::types::{Glyph, Tint};
    use crate::rotation::variant::fixtures::Slide;

    #[test]
    fn test_chart_tabs_flag_active_only() {
        let tabs = chart_tabs(Slide::Second);
        assert_eq!(tabs.len(), 3);
        assert_eq!(tabs.iter().filter(|tab| tab.active).count(), 1);
        assert!(tabs[1].active);
        assert_eq!(tabs[1].key, "second");
    }

    #[test]
    fn test_parse_chart() {
        assert_eq!(parse_chart::<Slide>("third").unwrap(), Slide::Third);
        assert!(matches!(
            parse_chart::<Slide>("fourth"),
            Err(ViewError::UnknownChart(ref key)) if key == "fourth"
        ));
    }

    #[test]
    fn test_activity_headline() {
        let items = activity_items(&[ActivityEntry {
            id: ActivityId::new(9),
            kind: "Rating".into(),
            description: "Five stars".into(),
            time: "Yesterday".into(),
            icon: IconRef::new(Glyph::Star, Tint::Yellow),
        }]);
        assert_eq!(items[0].headline, "Rating: Five stars");
        assert_eq!(items[0].time, "Yesterday");
    }

    #[test]
    fn test_link_serializes_path() {
        let json = serde_json::to_value(Link::new("Manage Team", Route::ManageTeam)).unwrap();
        assert_eq!(json["to"], "/manage-team");
        assert_eq!(json["label"], "Manage Team");
    }
}
