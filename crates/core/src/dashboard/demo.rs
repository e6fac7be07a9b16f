//! Built-in demo metrics for both dashboards.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use venturehub_shared::types::{ActivityId, CompanyId, MeetingId, Money};

use super::types::{
    ActivityEntry, DealFlowStats, FounderSnapshot, FundingProgress, Glyph, IconRef,
    InvestorSnapshot, MeetingEntry, OpportunityStats, PitchAnalytics, PortfolioCompany,
    PortfolioStats, Series, TeamMember, Tint,
};

/// Complete data set served by a metrics provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoData {
    /// Founder metrics.
    pub founder: FounderSnapshot,
    /// Founder team; `None` when the caller never supplied one.
    #[serde(default)]
    pub team: Option<Vec<TeamMember>>,
    /// Investor metrics.
    pub investor: InvestorSnapshot,
}

impl Default for DemoData {
    fn default() -> Self {
        Self {
            founder: founder_demo(),
            team: None,
            investor: investor_demo(),
        }
    }
}

fn activity(id: u32, kind: &str, description: &str, time: &str, glyph: Glyph, tint: Tint) -> ActivityEntry {
    ActivityEntry {
        id: ActivityId::new(id),
        kind: kind.to_string(),
        description: description.to_string(),
        time: time.to_string(),
        icon: IconRef::new(glyph, tint),
    }
}

fn tenths(value: i64) -> Decimal {
    Decimal::new(value, 1)
}

fn whole(value: i64) -> Decimal {
    Decimal::from(value)
}

/// Demo founder metrics.
#[must_use]
pub fn founder_demo() -> FounderSnapshot {
    FounderSnapshot {
        funding: FundingProgress {
            raised: Money::usd(7_500_000),
            goal: Money::usd(10_000_000),
            investors_contacted: 120,
            meetings_scheduled: 35,
            commitments: 5,
            target_close_date: NaiveDate::from_ymd_opt(2025, 12, 31).unwrap_or_default(),
        },
        pitch: PitchAnalytics {
            views: 2500,
            downloads: 850,
            conversion_rate: tenths(52),
            avg_rating: tenths(45),
            total_ratings: 120,
        },
        unread_messages: 7,
        recent_activity: vec![
            activity(1, "Pitch View", "Your pitch deck viewed by John Doe (Investor)", "2 mins ago", Glyph::Eye, Tint::Blue),
            activity(2, "Message", "New message from Jane Smith (Investor)", "1 hour ago", Glyph::Message, Tint::Green),
            activity(3, "Rating", "Your startup received a 5-star rating from Investor A", "Yesterday", Glyph::Star, Tint::Yellow),
            activity(4, "Profile Update", "Your startup profile was last updated", "3 days ago", Glyph::ClipboardCheck, Tint::Purple),
        ],
        pitch_views: Series::from_points(&[
            ("Jan", whole(500)),
            ("Feb", whole(700)),
            ("Mar", whole(1200)),
            ("Apr", whole(1500)),
            ("May", whole(2000)),
            ("Jun", whole(2500)),
            ("Jul", whole(2800)),
            ("Aug", whole(3100)),
        ]),
        conversion_rates: Series::from_points(&[
            ("Q1", tenths(35)),
            ("Q2", tenths(40)),
            ("Q3", tenths(52)),
            ("Q4", tenths(48)),
        ]),
    }
}

fn company(id: u32, name: &str, industry: &str, stage: &str, invested: i64, current: i64, next_round: &str) -> PortfolioCompany {
    PortfolioCompany {
        id: CompanyId::new(id),
        name: name.to_string(),
        industry: industry.to_string(),
        stage: stage.to_string(),
        invested: Money::usd(invested),
        current: Money::usd(current),
        next_round: next_round.to_string(),
    }
}

fn meeting(id: u32, title: &str, time: &str, location: &str, glyph: Glyph, tint: Tint) -> MeetingEntry {
    MeetingEntry {
        id: MeetingId::new(id),
        title: title.to_string(),
        time: time.to_string(),
        location: location.to_string(),
        icon: IconRef::new(glyph, tint),
    }
}

/// Demo investor metrics.
#[must_use]
pub fn investor_demo() -> InvestorSnapshot {
    InvestorSnapshot {
        portfolio: PortfolioStats {
            current_value: Money::usd(25_000_000),
            roi: tenths(185),
            active_investments: 12,
            exited_investments: 3,
        },
        opportunities: OpportunityStats {
            new_opportunities: 7,
            trending_startups: 3,
        },
        deal_flow: DealFlowStats {
            active_deals: 5,
            due_diligence: 2,
        },
        companies: vec![
            company(1, "InnovateX", "AI/ML", "Series A", 1_500_000, 2_200_000, "Q4 2025"),
            company(2, "BioGenetics", "Biotech", "Seed", 500_000, 650_000, "Q1 2026"),
            company(3, "FinTech Solutions", "FinTech", "Series B", 3_000_000, 4_100_000, "N/A"),
            company(4, "EduTech Platform", "EdTech", "Series A", 1_000_000, 1_300_000, "Q2 2026"),
        ],
        recent_activity: vec![
            activity(1, "New Deal", "Evaluated \"Quantum Leap Robotics\" pitch.", "2 hours ago", Glyph::Lightbulb, Tint::Purple),
            activity(2, "Investment", "Invested $500K in \"GreenHarvest Agriculture\".", "1 day ago", Glyph::Dollar, Tint::Green),
            activity(3, "Update", "\"InnovateX\" released Q2 earnings report.", "3 days ago", Glyph::BarChart, Tint::Blue),
            activity(4, "Meeting", "Scheduled follow-up with \"HealthLink MedTech\".", "5 days ago", Glyph::Calendar, Tint::Red),
        ],
        upcoming_meetings: vec![
            meeting(1, "Pitch: EcoInnovate", "Today, 2:00 PM", "Zoom Call", Glyph::Phone, Tint::Blue),
            meeting(2, "Portfolio Review: FinTech Solutions", "Tomorrow, 10:00 AM", "Office", Glyph::Users, Tint::Green),
            meeting(3, "Due Diligence: AI Insights", "Mon, Jul 29, 3:00 PM", "Online", Glyph::Award, Tint::Purple),
        ],
        valuation_millions: Series::from_points(&[
            ("Jan", whole(15)),
            ("Feb", whole(16)),
            ("Mar", whole(18)),
            ("Apr", whole(20)),
            ("May", whole(22)),
            ("Jun", whole(24)),
            ("Jul", whole(25)),
        ]),
        industry_split: Series::from_points(&[
            ("AI/ML", whole(35)),
            ("Biotech", whole(15)),
            ("FinTech", whole(25)),
            ("EdTech", whole(10)),
            ("Other", whole(15)),
        ]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_demo_snapshots_validate() {
        let data = DemoData::default();
        data.founder.validate().unwrap();
        data.investor.validate().unwrap();
        assert!(data.team.is_none());
    }

    #[test]
    fn test_demo_industry_split_sums_to_hundred() {
        let total: Decimal = investor_demo().industry_split.values.iter().sum();
        assert_eq!(total, dec!(100));
    }

    #[test]
    fn test_demo_data_json_roundtrip() {
        let data = DemoData::default();
        let json = serde_json::to_string(&data).unwrap();
        let back: DemoData = serde_json::from_str(&json).unwrap();
        assert_eq!(back, data);
    }
}
