//! Investor dashboard page model.

use rust_decimal::Decimal;
use serde::Serialize;
use venturehub_shared::types::{CompanyId, Theme};

use super::error::ViewError;
use super::types::{InvestorSnapshot, PortfolioCompany};
use super::view::{ActivitySection, ChartTab, DashboardView, Header, Link, StatCard, chart_tabs};
use crate::chart::{Axis, ChartKind, ChartSpec, ChartStyle, Dataset, LegendPosition, Palette, ValueFormat};
use crate::display;
use crate::navigation::Route;
use crate::rotation::ChartVariant;

/// Charts rotated in the portfolio performance slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvestorChart {
    /// Monthly portfolio value (line).
    PortfolioValue,
    /// Industry breakdown (doughnut).
    IndustrySplit,
}

impl ChartVariant for InvestorChart {
    const ALL: &'static [Self] = &[Self::PortfolioValue, Self::IndustrySplit];

    fn key(self) -> &'static str {
        match self {
            Self::PortfolioValue => "portfolioValue",
            Self::IndustrySplit => "industrySplit",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::PortfolioValue => "Portfolio Value",
            Self::IndustrySplit => "Industry Split",
        }
    }
}

const INDUSTRY_COLORS: [&str; 5] = ["#3B82F6", "#EF4444", "#8B5CF6", "#F59E0B", "#6B7280"];

/// Column headings of the companies table.
pub const COMPANY_COLUMNS: [&str; 6] = [
    "Company",
    "Industry",
    "Stage",
    "Invested",
    "Current Value",
    "Next Round",
];

/// Portfolio performance section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PerformanceSection {
    /// Section heading.
    pub heading: String,
    /// Section description.
    pub description: String,
    /// Active chart.
    pub chart: ChartSpec,
    /// One dot per chart, the active one flagged.
    pub indicators: Vec<ChartTab>,
    /// Link to the full insights.
    pub insights: Link,
}

/// Row of the companies table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyRow {
    /// Company ID.
    pub id: CompanyId,
    /// Company name.
    pub company: String,
    /// Industry.
    pub industry: String,
    /// Funding stage.
    pub stage: String,
    /// Amount invested (`$1,500,000`).
    pub invested: String,
    /// Current stake value.
    pub current_value: String,
    /// Expected next round.
    pub next_round: String,
}

impl From<&PortfolioCompany> for CompanyRow {
    fn from(company: &PortfolioCompany) -> Self {
        Self {
            id: company.id,
            company: company.name.clone(),
            industry: company.industry.clone(),
            stage: company.stage.clone(),
            invested: display::money(&company.invested),
            current_value: display::money(&company.current),
            next_round: company.next_round.clone(),
        }
    }
}

/// Portfolio companies table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompaniesSection {
    /// Section heading.
    pub heading: String,
    /// Section description.
    pub description: String,
    /// Column headings.
    pub columns: Vec<&'static str>,
    /// One row per company, in snapshot order.
    pub rows: Vec<CompanyRow>,
    /// Link to the full list.
    pub view_all: Link,
}

/// Everything the investor dashboard shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestorPage {
    /// Theme the page was rendered for.
    pub theme: Theme,
    /// Title block.
    pub header: Header,
    /// Headline cards.
    pub stats: Vec<StatCard>,
    /// Portfolio performance.
    pub performance: PerformanceSection,
    /// Portfolio companies.
    pub companies: CompaniesSection,
    /// Recent activity.
    pub activity: ActivitySection,
    /// Shortcut links.
    pub quick_links: Vec<Link>,
}

/// Investor dashboard over a validated snapshot.
#[derive(Debug, Clone)]
pub struct InvestorView {
    snapshot: InvestorSnapshot,
}

impl InvestorView {
    /// Builds the view.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::SeriesMismatch` when a chart series is misaligned.
    pub fn new(snapshot: InvestorSnapshot) -> Result<Self, ViewError> {
        snapshot.validate()?;
        Ok(Self { snapshot })
    }

    /// Underlying snapshot.
    #[must_use]
    pub fn snapshot(&self) -> &InvestorSnapshot {
        &self.snapshot
    }

    /// Spec of one investor chart. Investor charts sit on white panels, so
    /// the palette does not follow the theme.
    #[must_use]
    pub fn chart(&self, chart: InvestorChart) -> ChartSpec {
        let palette = Palette::white_panel();
        match chart {
            InvestorChart::PortfolioValue => {
                let series = &self.snapshot.valuation_millions;
                ChartSpec::new(
                    ChartKind::Line,
                    series.labels.clone(),
                    vec![
                        Dataset::new(
                            "Portfolio Value",
                            series.values.clone(),
                            "#10B981",
                            "rgba(16, 185, 129, 0.1)",
                        )
                        .filled_curve(Decimal::new(4, 1)),
                    ],
                    ChartStyle::new(&palette, LegendPosition::Top, ValueFormat::UsdMillions)
                        .with_axes(
                            Axis::new(&palette, None, ValueFormat::Plain).without_grid(),
                            Axis::new(&palette, Some("Value (Millions $)"), ValueFormat::Millions)
                                .from_zero(),
                        ),
                )
            }
            InvestorChart::IndustrySplit => {
                let series = &self.snapshot.industry_split;
                ChartSpec::new(
                    ChartKind::Doughnut,
                    series.labels.clone(),
                    vec![Dataset::slices(series.values.clone(), &["#ffffff"], &INDUSTRY_COLORS).border_width(2)],
                    ChartStyle::new(&palette, LegendPosition::Right, ValueFormat::Percent),
                )
            }
        }
    }

    fn stats(&self) -> Vec<StatCard> {
        let portfolio = &self.snapshot.portfolio;
        let opportunities = &self.snapshot.opportunities;
        let deals = &self.snapshot.deal_flow;
        vec![
            StatCard::new(
                "Total Portfolio Value",
                display::money_millions(&portfolio.current_value, 1),
                format!("{} ROI", display::signed_percent(portfolio.roi, 1)),
                Route::Portfolio,
            ),
            StatCard::new(
                "Active Investments",
                portfolio.active_investments.to_string(),
                format!("{} Exited", portfolio.exited_investments),
                Route::ActivePortfolio,
            ),
            StatCard::new(
                "New Opportunities",
                opportunities.new_opportunities.to_string(),
                format!("{} Trending Startups", opportunities.trending_startups),
                Route::Opportunities,
            ),
            StatCard::new(
                "Active Deals",
                deals.active_deals.to_string(),
                format!("{} In Due Diligence", deals.due_diligence),
                Route::DealFlow,
            ),
        ]
    }
}

impl DashboardView for InvestorView {
    type Chart = InvestorChart;
    type Page = InvestorPage;

    const SELECTABLE: bool = false;

    fn render(&self, active: InvestorChart, theme: Theme) -> InvestorPage {
        InvestorPage {
            theme,
            header: Header::new(
                "Investor Hub",
                "Welcome back! Your personalized overview of investment opportunities and portfolio performance.",
            ),
            stats: self.stats(),
            performance: PerformanceSection {
                heading: "Overall Portfolio Performance".to_string(),
                description: "Track the aggregate growth and breakdown of your investments over time."
                    .to_string(),
                chart: self.chart(active),
                indicators: chart_tabs(active),
                insights: Link::new("View Full Portfolio Insights", Route::Portfolio),
            },
            companies: CompaniesSection {
                heading: "Your Portfolio Companies".to_string(),
                description: "An overview of your current active investments.".to_string(),
                columns: COMPANY_COLUMNS.to_vec(),
                rows: self.snapshot.companies.iter().map(CompanyRow::from).collect(),
                view_all: Link::new("View All Companies", Route::PortfolioCompanies),
            },
            activity: ActivitySection::new(
                &self.snapshot.recent_activity,
                Link::new("View All Activity", Route::Activity),
            ),
            quick_links: vec![
                Link::new("Profile", Route::Profile),
                Link::new("New Opportunity", Route::NewOpportunity),
                Link::new("Add Deals", Route::AddDeals),
                Link::new("Settings", Route::Settings),
                Link::new("Help & FAQ", Route::Faq),
            ],
        }
    }
}
