//! Team roster models.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::error::{DashError, DashResult};
use crate::record::{Filterable, Record, RecordId, Searchable, UNKNOWN_BUCKET};

/// A team member card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: RecordId,
    pub name: String,
    pub role: String,
    pub status: Presence,
    pub stats: MemberStats,
    #[serde(default)]
    pub projects: Vec<ProjectTag>,
}

impl TeamMember {
    pub fn role_group(&self) -> RoleGroup {
        RoleGroup::from_role(&self.role)
    }

    pub fn initials(&self) -> String {
        super::initials(&self.name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberStats {
    pub projects: u32,
    pub tasks: u32,
    pub completed_pct: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectTag {
    pub name: String,
    pub color: String,
}

impl ProjectTag {
    pub fn new(name: &str, color: &str) -> Self {
        Self {
            name: name.to_string(),
            color: color.to_string(),
        }
    }
}

impl Record for TeamMember {
    const KIND: &'static str = "team_member";

    fn id(&self) -> RecordId {
        self.id
    }

    fn validate(&self) -> DashResult<()> {
        if self.name.trim().is_empty() {
            return Err(DashError::schema(Self::KIND, self.id, "name is empty"));
        }
        if self.status == Presence::Unknown {
            return Err(DashError::schema(Self::KIND, self.id, "status outside closed set"));
        }
        if self.stats.completed_pct > 100 {
            return Err(DashError::schema(
                Self::KIND,
                self.id,
                format!("completion {}% exceeds 100%", self.stats.completed_pct),
            ));
        }
        Ok(())
    }
}

impl Filterable for TeamMember {
    fn category(&self) -> &str {
        self.role_group().as_str()
    }
}

impl Searchable for TeamMember {
    const SEARCH_FIELDS: &'static [&'static str] = &["name", "role"];

    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        match name {
            "name" => Some(Cow::Borrowed(&self.name)),
            "role" => Some(Cow::Borrowed(&self.role)),
            "projects" => Some(Cow::Owned(
                self.projects.iter().map(|p| p.name.as_str()).collect::<Vec<_>>().join(" "),
            )),
            _ => None,
        }
    }
}

/// Presence indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Presence {
    Online,
    Away,
    Offline,
    #[serde(other)]
    Unknown,
}

impl Presence {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "online" => Self::Online,
            "away" => Self::Away,
            "offline" => Self::Offline,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Away => "away",
            Self::Offline => "offline",
            Self::Unknown => UNKNOWN_BUCKET,
        }
    }
}

/// Team filter bucket derived from a free-text role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoleGroup {
    Developers,
    Designers,
    Managers,
    Other,
}

impl RoleGroup {
    pub fn from_role(role: &str) -> Self {
        let role = role.to_lowercase();
        if role.contains("developer") || role.contains("engineer") {
            Self::Developers
        } else if role.contains("designer") {
            Self::Designers
        } else if role.contains("manager") {
            Self::Managers
        } else {
            Self::Other
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Developers => "developers",
            Self::Designers => "designers",
            Self::Managers => "managers",
            Self::Other => "other",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_groups() {
        assert_eq!(RoleGroup::from_role("Senior Developer"), RoleGroup::Developers);
        assert_eq!(RoleGroup::from_role("UI/UX Designer"), RoleGroup::Designers);
        assert_eq!(RoleGroup::from_role("Product Manager"), RoleGroup::Managers);
        assert_eq!(RoleGroup::from_role("Intern"), RoleGroup::Other);
    }
}
