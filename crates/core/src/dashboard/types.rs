//! Dashboard snapshot types.
//!
//! A snapshot is the read-only data one render of a view works from.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use venturehub_shared::types::{ActivityId, CompanyId, MeetingId, Money, TeamMemberId};

use super::error::ViewError;
use crate::display::{self, FormatError};

/// Glyph of an icon reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Glyph {
    /// Eye.
    Eye,
    /// Speech bubble.
    Message,
    /// Star.
    Star,
    /// Clipboard with check mark.
    ClipboardCheck,
    /// Light bulb.
    Lightbulb,
    /// Dollar sign.
    Dollar,
    /// Bar chart.
    BarChart,
    /// Calendar.
    Calendar,
    /// Telephone.
    Phone,
    /// Group of people.
    Users,
    /// Award ribbon.
    Award,
}

/// Tint of an icon reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tint {
    /// Blue.
    Blue,
    /// Green.
    Green,
    /// Yellow.
    Yellow,
    /// Purple.
    Purple,
    /// Red.
    Red,
}

/// Icon shown next to an activity or meeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconRef {
    /// Glyph.
    pub glyph: Glyph,
    /// Tint.
    pub tint: Tint,
}

impl IconRef {
    /// Creates an icon reference.
    #[must_use]
    pub const fn new(glyph: Glyph, tint: Tint) -> Self {
        Self { glyph, tint }
    }
}

/// Fundraising status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundingProgress {
    /// Amount raised so far.
    pub raised: Money,
    /// Round target. Must be positive.
    pub goal: Money,
    /// Investors contacted.
    pub investors_contacted: u32,
    /// Meetings scheduled.
    pub meetings_scheduled: u32,
    /// Firm commitments.
    pub commitments: u32,
    /// Planned close of the round.
    pub target_close_date: NaiveDate,
}

impl FundingProgress {
    fn same_currency(&self) -> Result<(), FormatError> {
        if self.raised.currency == self.goal.currency {
            Ok(())
        } else {
            Err(FormatError::CurrencyMismatch {
                raised: self.raised.currency,
                goal: self.goal.currency,
            })
        }
    }

    /// Raised ÷ goal × 100.
    ///
    /// # Errors
    ///
    /// Returns `FormatError::ZeroGoal` when the goal is not positive,
    /// `FormatError::CurrencyMismatch` when raised and goal use different
    /// currencies, and `FormatError::Overflow` when the ratio is out of range.
    pub fn percentage(&self) -> Result<Decimal, FormatError> {
        self.same_currency()?;
        display::funding_percentage(self.raised.amount, self.goal.amount)
    }

    /// Goal minus raised.
    ///
    /// # Errors
    ///
    /// Returns `FormatError::CurrencyMismatch` for mixed currencies and
    /// `FormatError::Overflow` when the difference is out of range.
    pub fn remaining(&self) -> Result<Money, FormatError> {
        self.same_currency()?;
        self.goal
            .remaining_after(&self.raised)
            .ok_or(FormatError::Overflow("funding remaining"))
    }
}

/// Pitch deck engagement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PitchAnalytics {
    /// Deck views.
    pub views: u64,
    /// Deck downloads.
    pub downloads: u64,
    /// Conversion rate in percent.
    pub conversion_rate: Decimal,
    /// Average investor rating.
    pub avg_rating: Decimal,
    /// Number of ratings.
    pub total_ratings: u32,
}

/// Entry of a recent-activity feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEntry {
    /// Entry ID.
    pub id: ActivityId,
    /// Activity type ("Pitch View", "Investment").
    #[serde(rename = "type")]
    pub kind: String,
    /// What happened.
    pub description: String,
    /// Relative time ("2 hours ago").
    pub time: String,
    /// Icon.
    pub icon: IconRef,
}

/// Founder team member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    /// Member ID.
    pub id: TeamMemberId,
    /// Full name.
    pub name: String,
    /// Role in the team.
    pub role: String,
    /// Avatar image URL.
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Investor portfolio totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioStats {
    /// Current portfolio value.
    pub current_value: Money,
    /// Return on investment in percent.
    pub roi: Decimal,
    /// Investments still held.
    pub active_investments: u32,
    /// Investments exited.
    pub exited_investments: u32,
}

/// Investor opportunity counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpportunityStats {
    /// New opportunities.
    pub new_opportunities: u32,
    /// Trending startups.
    pub trending_startups: u32,
}

/// Investor deal-flow counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealFlowStats {
    /// Deals in progress.
    pub active_deals: u32,
    /// Deals in due diligence.
    pub due_diligence: u32,
}

/// Company held in the investor portfolio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioCompany {
    /// Company ID.
    pub id: CompanyId,
    /// Company name.
    pub name: String,
    /// Industry.
    pub industry: String,
    /// Funding stage.
    pub stage: String,
    /// Amount invested.
    pub invested: Money,
    /// Current value of the stake.
    pub current: Money,
    /// Expected next round ("Q4 2025", "N/A").
    pub next_round: String,
}

/// Upcoming investor meeting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingEntry {
    /// Meeting ID.
    pub id: MeetingId,
    /// Title.
    pub title: String,
    /// When ("Today, 2:00 PM").
    pub time: String,
    /// Where ("Zoom Call").
    pub location: String,
    /// Icon.
    pub icon: IconRef,
}

/// Labeled series feeding a chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Series {
    /// Point labels.
    pub labels: Vec<String>,
    /// Point values.
    pub values: Vec<Decimal>,
}

impl Series {
    /// Builds a series from label/value pairs.
    #[must_use]
    pub fn from_points(points: &[(&str, Decimal)]) -> Self {
        Self {
            labels: points.iter().map(|(label, _)| (*label).to_string()).collect(),
            values: points.iter().map(|(_, value)| *value).collect(),
        }
    }

    fn check(&self, series: &'static str) -> Result<(), ViewError> {
        if self.labels.len() == self.values.len() {
            Ok(())
        } else {
            Err(ViewError::SeriesMismatch {
                series,
                labels: self.labels.len(),
                values: self.values.len(),
            })
        }
    }
}

/// Everything the founder view renders except the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FounderSnapshot {
    /// Fundraising status.
    pub funding: FundingProgress,
    /// Pitch deck engagement.
    pub pitch: PitchAnalytics,
    /// Unread investor and partner messages.
    pub unread_messages: u32,
    /// Recent activity, newest first.
    pub recent_activity: Vec<ActivityEntry>,
    /// Pitch views per month.
    pub pitch_views: Series,
    /// Conversion rate per quarter, in percent.
    pub conversion_rates: Series,
}

impl FounderSnapshot {
    /// Checks the snapshot can be rendered.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::Format` for a non-positive goal and
    /// `ViewError::SeriesMismatch` for misaligned series.
    pub fn validate(&self) -> Result<(), ViewError> {
        self.funding.percentage()?;
        self.funding.remaining()?;
        self.pitch_views.check("pitchViews")?;
        self.conversion_rates.check("conversionRates")
    }
}

/// Everything the investor view works from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestorSnapshot {
    /// Portfolio totals.
    pub portfolio: PortfolioStats,
    /// Opportunity counters.
    pub opportunities: OpportunityStats,
    /// Deal-flow counters.
    pub deal_flow: DealFlowStats,
    /// Portfolio companies, in display order.
    pub companies: Vec<PortfolioCompany>,
    /// Recent activity, newest first.
    pub recent_activity: Vec<ActivityEntry>,
    /// Upcoming meetings. Carried with the snapshot; the page does not show them.
    #[serde(default)]
    pub upcoming_meetings: Vec<MeetingEntry>,
    /// Portfolio value per month, in millions.
    pub valuation_millions: Series,
    /// Share of the portfolio per industry, in percent.
    pub industry_split: Series,
}

impl InvestorSnapshot {
    /// Checks the snapshot can be rendered.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::SeriesMismatch` for misaligned series.
    pub fn validate(&self) -> Result<(), ViewError> {
        self.valuation_millions.check("valuationMillions")?;
        self.industry_split.check("industrySplit")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use venturehub_shared::types::Currency;

    fn funding(raised: i64, goal: i64) -> FundingProgress {
        FundingProgress {
            raised: Money::usd(raised),
            goal: Money::usd(goal),
            investors_contacted: 0,
            meetings_scheduled: 0,
            commitments: 0,
            target_close_date: NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
        }
    }

    #[test]
    fn test_funding_percentage_and_remaining() {
        let progress = funding(7_500_000, 10_000_000);
        assert_eq!(progress.percentage().unwrap(), dec!(75));
        assert_eq!(progress.remaining().unwrap(), Money::usd(2_500_000));
    }

    #[test]
    fn test_mixed_currencies_rejected() {
        let mut progress = funding(7_500_000, 10_000_000);
        progress.goal = Money::new(dec!(10000000), Currency::Eur);
        assert!(matches!(
            progress.percentage(),
            Err(FormatError::CurrencyMismatch {
                raised: Currency::Usd,
                goal: Currency::Eur
            })
        ));
        assert!(progress.remaining().is_err());
    }

    #[test]
    fn test_out_of_range_funding_is_an_error() {
        let mut progress = funding(0, 1);
        progress.raised = Money::new(Decimal::MAX, Currency::Usd);
        assert!(matches!(progress.percentage(), Err(FormatError::Overflow(_))));

        let mut progress = funding(1, 1);
        progress.goal = Money::new(Decimal::MAX, Currency::Usd);
        progress.raised = Money::new(Decimal::MIN, Currency::Usd);
        assert!(matches!(progress.remaining(), Err(FormatError::Overflow(_))));
    }

    #[test]
    fn test_zero_goal_has_no_percentage() {
        assert!(matches!(
            funding(1, 0).percentage(),
            Err(FormatError::ZeroGoal)
        ));
    }

    #[test]
    fn test_series_from_points() {
        let series = Series::from_points(&[("Q1", dec!(3.5)), ("Q2", dec!(4.0))]);
        assert_eq!(series.labels, vec!["Q1", "Q2"]);
        assert_eq!(series.values, vec![dec!(3.5), dec!(4.0)]);
        assert!(series.check("q").is_ok());
    }

    #[test]
    fn test_series_mismatch_detected() {
        let series = Series {
            labels: vec!["Jan".into()],
            values: vec![],
        };
        assert!(matches!(
            series.check("pitchViews"),
            Err(ViewError::SeriesMismatch { labels: 1, values: 0, .. })
        ));
    }

    #[test]
    fn test_activity_entry_wire_shape() {
        let entry: ActivityEntry = serde_json::from_value(serde_json::json!({
            "id": 1,
            "type": "Message",
            "description": "New message",
            "time": "1 hour ago",
            "icon": { "glyph": "message", "tint": "green" }
        }))
        .unwrap();
        assert_eq!(entry.kind, "Message");
        assert_eq!(entry.icon, IconRef::new(Glyph::Message, Tint::Green));
    }

    #[test]
    fn test_team_member_avatar_optional() {
        let member: TeamMember =
            serde_json::from_str(r#"{"id":1,"name":"Ada","role":"CTO"}"#).unwrap();
        assert!(member.avatar.is_none());
    }
}
