//! Routes linked from the dashboards and the navigation collaborator.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::dashboard::error::ViewError;

/// Every destination a dashboard links to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Fundraising details.
    FundraisingDetails,
    /// Pitch analytics.
    PitchAnalytics,
    /// Message inbox.
    Messages,
    /// Milestones and deadlines.
    Milestones,
    /// Pitch deck management.
    ManagePitchDecks,
    /// Team management.
    ManageTeam,
    /// Notifications.
    Notifications,
    /// Founder resources index.
    Resources,
    /// Resource: crafting a pitch deck.
    ResourcePitchDeck,
    /// Resource: investor due diligence.
    ResourceDueDiligence,
    /// Resource: early-stage metrics.
    ResourceKeyMetrics,
    /// Pitch deck submission.
    SubmitPitch,
    /// Profile.
    Profile,
    /// Account settings.
    Settings,
    /// Portfolio overview.
    Portfolio,
    /// Active investments.
    ActivePortfolio,
    /// Investment opportunities.
    Opportunities,
    /// Deal flow.
    DealFlow,
    /// Portfolio company list.
    PortfolioCompanies,
    /// Activity log.
    Activity,
    /// New opportunity form.
    NewOpportunity,
    /// Deal entry.
    AddDeals,
    /// Help and FAQ.
    Faq,
}

impl Route {
    /// All routes.
    pub const ALL: [Self; 23] = [
        Self::FundraisingDetails,
        Self::PitchAnalytics,
        Self::Messages,
        Self::Milestones,
        Self::ManagePitchDecks,
        Self::ManageTeam,
        Self::Notifications,
        Self::Resources,
        Self::ResourcePitchDeck,
        Self::ResourceDueDiligence,
        Self::ResourceKeyMetrics,
        Self::SubmitPitch,
        Self::Profile,
        Self::Settings,
        Self::Portfolio,
        Self::ActivePortfolio,
        Self::Opportunities,
        Self::DealFlow,
        Self::PortfolioCompanies,
        Self::Activity,
        Self::NewOpportunity,
        Self::AddDeals,
        Self::Faq,
    ];

    /// URL path of the route.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::FundraisingDetails => "/fundraising-details",
            Self::PitchAnalytics => "/pitch-analytics",
            Self::Messages => "/messages",
            Self::Milestones => "/milestones",
            Self::ManagePitchDecks => "/manage-pitch-decks",
            Self::ManageTeam => "/manage-team",
            Self::Notifications => "/notifications",
            Self::Resources => "/resources",
            Self::ResourcePitchDeck => "/resources/pitch-deck",
            Self::ResourceDueDiligence => "/resources/due-diligence",
            Self::ResourceKeyMetrics => "/resources/key-metrics",
            Self::SubmitPitch => "/submit-pitch",
            Self::Profile => "/profile",
            Self::Settings => "/settings",
            Self::Portfolio => "/portfolio",
            Self::ActivePortfolio => "/portfolio/active",
            Self::Opportunities => "/opportunities",
            Self::DealFlow => "/deal-flow",
            Self::PortfolioCompanies => "/portfolio/companies",
            Self::Activity => "/activity",
            Self::NewOpportunity => "/new-opportunity",
            Self::AddDeals => "/add-deals",
            Self::Faq => "/faq",
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

impl std::str::FromStr for Route {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|route| route.path() == s)
            .ok_or_else(|| ViewError::UnknownRoute(s.to_string()))
    }
}

impl Serialize for Route {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.path())
    }
}

impl<'de> Deserialize<'de> for Route {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let path = String::deserialize(deserializer)?;
        path.parse().map_err(serde::de::Error::custom)
    }
}

/// Navigation collaborator: moves the user to another view.
pub trait Navigator: Send + Sync {
    /// Transitions to `route`.
    fn navigate(&self, route: Route);
}

/// Resolves `path` and hands it to `navigator`.
///
/// # Errors
///
/// Returns `ViewError::UnknownRoute` for a path no dashboard links to; the
/// navigator is not called.
pub fn follow(navigator: &dyn Navigator, path: &str) -> Result<Route, ViewError> {
    let route: Route = path.parse()?;
    navigator.navigate(route);
    Ok(route)
}
