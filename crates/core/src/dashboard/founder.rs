//! Founder dashboard page model.

use rust_decimal::Decimal;
use serde::Serialize;
use venturehub_shared::types::{Money, Theme};

use super::error::ViewError;
use super::roster::{AvatarSource, RosterSection, render_roster};
use super::types::{FounderSnapshot, TeamMember};
use super::view::{
    ActivitySection, ChartTab, Counter, DashboardView, Header, Link, StatCard, chart_tabs,
};
use crate::chart::{
    Axis, ChartKind, ChartSpec, ChartStyle, Dataset, LegendPosition, Palette, PointStyle, ValueFormat,
};
use crate::display;
use crate::navigation::Route;
use crate::rotation::ChartVariant;

/// Charts rotated in the fundraising momentum slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FounderChart {
    /// Monthly pitch views (line).
    PitchViews,
    /// Quarterly conversion rate (bar).
    ConversionRate,
    /// Raised versus remaining (doughnut).
    FundingProgress,
}

impl ChartVariant for FounderChart {
    const ALL: &'static [Self] = &[Self::PitchViews, Self::ConversionRate, Self::FundingProgress];

    fn key(self) -> &'static str {
        match self {
            Self::PitchViews => "pitchViews",
            Self::ConversionRate => "conversionRate",
            Self::FundingProgress => "fundingProgress",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::PitchViews => "Pitch Views",
            Self::ConversionRate => "Conversion Rate",
            Self::FundingProgress => "Funding Progress",
        }
    }
}

/// Fundraising momentum section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MomentumSection {
    /// Section heading.
    pub heading: String,
    /// Section description.
    pub description: String,
    /// "Funding Progress: 75.0%".
    pub progress_label: String,
    /// Progress bar fill, 0 to 100.
    pub bar_width_percent: Decimal,
    /// Raised-of-goal sentence.
    pub summary: String,
    /// Investor engagement counters.
    pub counters: Vec<Counter>,
    /// Chart selector buttons.
    pub tabs: Vec<ChartTab>,
    /// Active chart.
    pub chart: ChartSpec,
    /// Link to the full details.
    pub details: Link,
}

/// Pitch deck performance section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PitchSection {
    /// Section heading.
    pub heading: String,
    /// Section description.
    pub description: String,
    /// Conversion rate (`5.2%`).
    pub conversion_rate: String,
    /// Average rating (`4.5`).
    pub average_rating: String,
    /// Rating count (`(120 reviews)`).
    pub reviews: String,
    /// Deck management link.
    pub manage: Link,
}

/// Team overview section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamSection {
    /// Section heading.
    pub heading: String,
    /// Member cards or the empty state.
    pub roster: RosterSection,
    /// Team management link.
    pub manage: Link,
}

/// Founder resources section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceSection {
    /// Section heading.
    pub heading: String,
    /// Featured guides.
    pub links: Vec<Link>,
    /// Link to the full index.
    pub browse_all: Link,
}

/// Everything the founder dashboard shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FounderPage {
    /// Theme the page was rendered for.
    pub theme: Theme,
    /// Title block.
    pub header: Header,
    /// Headline cards.
    pub stats: Vec<StatCard>,
    /// Fundraising momentum.
    pub momentum: MomentumSection,
    /// Pitch deck performance.
    pub pitch: PitchSection,
    /// Team overview.
    pub team: TeamSection,
    /// Recent activity.
    pub activity: ActivitySection,
    /// Founder resources.
    pub resources: ResourceSection,
    /// Shortcut links.
    pub quick_actions: Vec<Link>,
}

/// Founder dashboard over a validated snapshot.
#[derive(Debug, Clone)]
pub struct FounderView {
    snapshot: FounderSnapshot,
    roster: Option<Vec<TeamMember>>,
    avatars: AvatarSource,
    funding_percent: Decimal,
    funding_remaining: Money,
}

impl FounderView {
    /// Builds the view.
    ///
    /// # Errors
    ///
    /// Returns a `ViewError` when the snapshot cannot be rendered: a
    /// non-positive or foreign-currency funding goal, amounts whose
    /// percentage or remainder leave the decimal range, misaligned series.
    pub fn new(
        snapshot: FounderSnapshot,
        roster: Option<Vec<TeamMember>>,
        avatars: AvatarSource,
    ) -> Result<Self, ViewError> {
        snapshot.validate()?;
        let funding_percent = snapshot.funding.percentage()?;
        let funding_remaining = snapshot.funding.remaining()?;
        Ok(Self {
            snapshot,
            roster,
            avatars,
            funding_percent,
            funding_remaining,
        })
    }

    /// Raised ÷ goal × 100, unrounded.
    #[must_use]
    pub fn funding_percent(&self) -> Decimal {
        self.funding_percent
    }

    /// Spec of one founder chart in `theme`.
    #[must_use]
    pub fn chart(&self, chart: FounderChart, theme: Theme) -> ChartSpec {
        let palette = Palette::for_theme(theme);
        match chart {
            FounderChart::PitchViews => {
                let series = &self.snapshot.pitch_views;
                ChartSpec::new(
                    ChartKind::Line,
                    series.labels.clone(),
                    vec![
                        Dataset::new("Pitch Views", series.values.clone(), "#4F46E5", "rgba(79, 70, 229, 0.2)")
                            .filled_curve(Decimal::new(4, 1))
                            .points(PointStyle::new(5, 7, "#4F46E5", "#fff")),
                    ],
                    ChartStyle::new(&palette, LegendPosition::Top, ValueFormat::Thousands)
                        .titled("Investor Engagement Over Time (Pitch Views)")
                        .with_axes(
                            Axis::new(&palette, Some("Month"), ValueFormat::Plain),
                            Axis::new(&palette, Some("Number of Views"), ValueFormat::Thousands),
                        ),
                )
            }
            FounderChart::ConversionRate => {
                let series = &self.snapshot.conversion_rates;
                ChartSpec::new(
                    ChartKind::Bar,
                    series.labels.clone(),
                    vec![Dataset::new("Conversion Rate (%)", series.values.clone(), "#DC2626", "#EF4444")],
                    ChartStyle::new(&palette, LegendPosition::Top, ValueFormat::Percent)
                        .titled("Pitch Deck Conversion Rate")
                        .with_axes(
                            Axis::new(&palette, Some("Quarter"), ValueFormat::Plain),
                            Axis::new(&palette, Some("Percentage"), ValueFormat::Percent),
                        ),
                )
            }
            FounderChart::FundingProgress => {
                let funding = &self.snapshot.funding;
                let borders: &[&'static str] = if theme.is_dark() {
                    &["#047857", "#4B5563"]
                } else {
                    &["#10B981", "#E5E7EB"]
                };
                ChartSpec::new(
                    ChartKind::Doughnut,
                    vec!["Raised".to_string(), "Remaining".to_string()],
                    vec![Dataset::slices(
                        vec![funding.raised.amount, self.funding_remaining.amount],
                        borders,
                        &["#10B981", "#E5E7EB"],
                    )],
                    ChartStyle::new(&palette, LegendPosition::Right, ValueFormat::Usd)
                        .titled("Funding Progress"),
                )
            }
        }
    }

    fn stats(&self) -> Vec<StatCard> {
        let funding = &self.snapshot.funding;
        let pitch = &self.snapshot.pitch;
        vec![
            StatCard::new(
                "Total Raised",
                display::money_millions(&funding.raised, 1),
                format!("of {} Goal", display::money_millions(&funding.goal, 0)),
                Route::FundraisingDetails,
            ),
            StatCard::new(
                "Pitch Views",
                display::group_thousands(Decimal::from(pitch.views)),
                format!("{} Downloads", display::group_thousands(Decimal::from(pitch.downloads))),
                Route::PitchAnalytics,
            ),
            StatCard::new(
                "New Messages",
                self.snapshot.unread_messages.to_string(),
                "From investors & partners".to_string(),
                Route::Messages,
            ),
            StatCard::new(
                "Next Deadline",
                display::short_date(funding.target_close_date),
                "Funding Round Close".to_string(),
                Route::Milestones,
            ),
        ]
    }

    fn momentum(&self, active: FounderChart, theme: Theme) -> MomentumSection {
        let funding = &self.snapshot.funding;
        MomentumSection {
            heading: "Fundraising Momentum".to_string(),
            description: "Visualize your funding progress and key investor engagement metrics."
                .to_string(),
            progress_label: format!(
                "Funding Progress: {}",
                display::percent(self.funding_percent, 1)
            ),
            bar_width_percent: self
                .funding_percent
                .clamp(Decimal::ZERO, Decimal::ONE_HUNDRED),
            summary: format!(
                "You've raised {} of your {} goal.",
                display::money(&funding.raised),
                display::money(&funding.goal)
            ),
            counters: vec![
                Counter::new("Investors Contacted", funding.investors_contacted.to_string()),
                Counter::new("Meetings Scheduled", funding.meetings_scheduled.to_string()),
                Counter::new("Commitments", funding.commitments.to_string()),
            ],
            tabs: chart_tabs(active),
            chart: self.chart(active, theme),
            details: Link::new("View Full Fundraising Details", Route::FundraisingDetails),
        }
    }

    fn pitch(&self) -> PitchSection {
        let pitch = &self.snapshot.pitch;
        PitchSection {
            heading: "Pitch Deck Performance".to_string(),
            description: "Insights into how your pitch is performing with potential investors."
                .to_string(),
            conversion_rate: format!("{}%", display::plain(pitch.conversion_rate)),
            average_rating: display::plain(pitch.avg_rating),
            reviews: format!("({} reviews)", pitch.total_ratings),
            manage: Link::new("Manage Pitch Decks", Route::ManagePitchDecks),
        }
    }
}

impl DashboardView for FounderView {
    type Chart = FounderChart;
    type Page = FounderPage;

    const SELECTABLE: bool = true;

    fn render(&self, active: FounderChart, theme: Theme) -> FounderPage {
        FounderPage {
            theme,
            header: Header::new(
                "Founder Hub",
                "Empowering your startup's journey. Here's your personalized overview and key actions to propel your vision forward.",
            ),
            stats: self.stats(),
            momentum: self.momentum(active, theme),
            pitch: self.pitch(),
            team: TeamSection {
                heading: "Team Overview".to_string(),
                roster: render_roster(self.roster.as_deref(), &self.avatars),
                manage: Link::new("Manage Team", Route::ManageTeam),
            },
            activity: ActivitySection::new(
                &self.snapshot.recent_activity,
                Link::new("View All Notifications", Route::Notifications),
            ),
            resources: ResourceSection {
                heading: "Resources for Founders".to_string(),
                links: vec![
                    Link::new("How to Craft a Winning Pitch Deck", Route::ResourcePitchDeck),
                    Link::new("Understanding Investor Due Diligence", Route::ResourceDueDiligence),
                    Link::new("Key Metrics for Early-Stage Startups", Route::ResourceKeyMetrics),
                ],
                browse_all: Link::new("Browse All Resources", Route::Resources),
            },
            quick_actions: vec![
                Link::new("Submit New Pitch Deck", Route::SubmitPitch),
                Link::new("Update Startup Profile", Route::Profile),
                Link::new("View Messages", Route::Messages),
                Link::new("Account Settings", Route::Settings),
            ],
        }
    }
}
