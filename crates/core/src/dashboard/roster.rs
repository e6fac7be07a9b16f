//! Team roster section of the founder page.

use serde::Serialize;
use venturehub_shared::types::TeamMemberId;

use super::types::TeamMember;
use super::view::Link;
use crate::navigation::Route;

/// Style parameters appended to generated avatar URLs.
const AVATAR_STYLE: &str = "backgroundColor=008cff,00b4d8,48bfe3,64dfdf,80ffdb&backgroundType=squiggles,grid,dots&scale=90";

/// Generates avatar URLs for members without a picture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarSource {
    base_url: String,
}

impl AvatarSource {
    /// Avatar endpoint at `base_url`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// The member's own avatar, or one generated from the member's name.
    #[must_use]
    pub fn url_for(&self, member: &TeamMember) -> String {
        match &member.avatar {
            Some(url) if !url.is_empty() => url.clone(),
            _ => format!(
                "{}?seed={}&{AVATAR_STYLE}",
                self.base_url,
                urlencoding::encode(&member.name)
            ),
        }
    }
}

/// Rendered team member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberCard {
    /// Member ID.
    pub id: TeamMemberId,
    /// Full name.
    pub name: String,
    /// Role in the team.
    pub role: String,
    /// Avatar image URL.
    pub avatar_url: String,
}

/// Team overview content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum RosterSection {
    /// No members yet.
    #[serde(rename_all = "camelCase")]
    Empty {
        /// Empty-state text.
        prompt: String,
        /// Link to add the first member.
        call_to_action: Link,
    },
    /// At least one member.
    #[serde(rename_all = "camelCase")]
    Members {
        /// One card per member, in input order.
        cards: Vec<MemberCard>,
        /// Trailing add affordance.
        add_member: Link,
    },
}

impl RosterSection {
    /// Number of member cards.
    #[must_use]
    pub fn card_count(&self) -> usize {
        match self {
            Self::Empty { .. } => 0,
            Self::Members { cards, .. } => cards.len(),
        }
    }

    /// Number of empty-state prompts.
    #[must_use]
    pub fn prompt_count(&self) -> usize {
        usize::from(matches!(self, Self::Empty { .. }))
    }
}

/// Renders the roster. Absent and empty rosters both show the empty state.
#[must_use]
pub fn render_roster(team: Option<&[TeamMember]>, avatars: &AvatarSource) -> RosterSection {
    match team {
        Some(members) if !members.is_empty() => RosterSection::Members {
            cards: members
                .iter()
                .map(|member| MemberCard {
                    id: member.id,
                    name: member.name.clone(),
                    role: member.role.clone(),
                    avatar_url: avatars.url_for(member),
                })
                .collect(),
            add_member: Link::new("Add Member", Route::ManageTeam),
        },
        _ => RosterSection::Empty {
            prompt: "No team members added yet.".to_string(),
            call_to_action: Link::new(
                "Click here to add your first team member!",
                Route::ManageTeam,
            ),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const BASE: &str = "https://api.dicebear.com/7.x/initials/svg";

    fn member(id: u32, name: &str, avatar: Option<&str>) -> TeamMember {
        TeamMember {
            id: TeamMemberId::new(id),
            name: name.to_string(),
            role: "Engineer".to_string(),
            avatar: avatar.map(str::to_string),
        }
    }

    #[rstest]
    #[case(None)]
    #[case(Some(Vec::new()))]
    fn test_missing_or_empty_roster_prompts(#[case] team: Option<Vec<TeamMember>>) {
        let section = render_roster(team.as_deref(), &AvatarSource::new(BASE));
        assert_eq!(section.prompt_count(), 1);
        assert_eq!(section.card_count(), 0);
        let RosterSection::Empty { call_to_action, .. } = section else {
            panic!("expected empty state");
        };
        assert_eq!(call_to_action.to, Route::ManageTeam);
    }

    #[test]
    fn test_members_keep_input_order() {
        let team = vec![member(2, "Zoe", None), member(1, "Adam", None)];
        let section = render_roster(Some(&team), &AvatarSource::new(BASE));
        assert_eq!(section.card_count(), 2);
        assert_eq!(section.prompt_count(), 0);
        let RosterSection::Members { cards, add_member } = section else {
            panic!("expected member cards");
        };
        assert_eq!(cards[0].name, "Zoe");
        assert_eq!(cards[1].name, "Adam");
        assert_eq!(add_member.label, "Add Member");
    }

    #[test]
    fn test_avatar_fallback_encodes_name() {
        let url = AvatarSource::new(BASE).url_for(&member(1, "Ada Lovelace", None));
        assert!(url.starts_with(&format!("{BASE}?seed=Ada%20Lovelace&")));
        assert!(url.ends_with("scale=90"));
    }

    #[test]
    fn test_own_avatar_wins() {
        let url = AvatarSource::new(BASE).url_for(&member(1, "Ada", Some("https://img/ada.png")));
        assert_eq!(url, "https://img/ada.png");
    }

    #[test]
    fn test_section_wire_shape() {
        let json = serde_json::to_value(render_roster(None, &AvatarSource::new(BASE))).unwrap();
        assert_eq!(json["state"], "empty");
        assert_eq!(json["prompt"], "No team members added yet.");
        assert_eq!(json["callToAction"]["to"], "/manage-team");
    }
}
