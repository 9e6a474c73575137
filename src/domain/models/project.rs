use bson::oid::ObjectId;
use bson::DateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Active,
    Archived,
    Completed,
}

impl ProjectStatus {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "active" => Some(Self::Active),
            "archived" => Some(Self::Archived),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Archived => "archived",
            Self::Completed => "completed",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MemberRole {
    Manager,
    Contributor,
    Viewer,
}

impl MemberRole {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "manager" => Some(Self::Manager),
            "contributor" => Some(Self::Contributor),
            "viewer" => Some(Self::Viewer),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Manager => "manager",
            Self::Contributor => "contributor",
            Self::Viewer => "viewer",
        }
    }
}

/// A user's role-tagged association with a project. Owned by the project
/// document; no independent lifecycle.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Member {
    pub user_id: ObjectId,
    pub role: MemberRole,
    pub joined_at: DateTime,
}

impl Member {
    pub fn new(user_id: ObjectId, role: MemberRole) -> Self {
        Self {
            user_id,
            role,
            joined_at: DateTime::now(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct ProjectProgress {
    pub completion: f64,
    pub total_tasks: i64,
    pub completed_tasks: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub description: Option<String>,
    pub organization_id: ObjectId,
    pub owner_id: ObjectId,
    pub status: ProjectStatus,
    pub priority: String,
    pub start_date: Option<DateTime>,
    pub end_date: Option<DateTime>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub progress: ProjectProgress,
    /// Invariant: a user id appears at most once in this list.
    pub members: Vec<Member>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl Project {
    /// Creates an active project with zeroed progress and the owner seeded
    /// as the first member with the `manager` role.
    pub fn new(
        name: String,
        description: Option<String>,
        organization_id: ObjectId,
        owner_id: ObjectId,
        priority: String,
    ) -> Self {
        let now = DateTime::now();
        Self {
            id: ObjectId::new(),
            name,
            description,
            organization_id,
            owner_id,
            status: ProjectStatus::Active,
            priority,
            start_date: None,
            end_date: None,
            tags: Vec::new(),
            progress: ProjectProgress::default(),
            members: vec![Member::new(owner_id, MemberRole::Manager)],
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_member(&self, user_id: &ObjectId) -> bool {
        self.members.iter().any(|m| &m.user_id == user_id)
    }

    pub fn role_of(&self, user_id: &ObjectId) -> Option<MemberRole> {
        self.members.iter().find(|m| &m.user_id == user_id).map(|m| m.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_project_seeds_owner_as_manager() {
        let owner = ObjectId::new();
        let project = Project::new("Apollo".into(), None, ObjectId::new(), owner, "medium".into());

        assert_eq!(project.status, ProjectStatus::Active);
        assert_eq!(project.members.len(), 1);
        assert_eq!(project.members[0].user_id, owner);
        assert_eq!(project.members[0].role, MemberRole::Manager);
        assert_eq!(project.progress.total_tasks, 0);
        assert_eq!(project.progress.completed_tasks, 0);
    }

    #[test]
    fn membership_queries() {
        let owner = ObjectId::new();
        let other = ObjectId::new();
        let mut project = Project::new("Apollo".into(), None, ObjectId::new(), owner, "medium".into());
        project.members.push(Member::new(other, MemberRole::Viewer));

        assert!(project.is_member(&owner));
        assert_eq!(project.role_of(&other), Some(MemberRole::Viewer));
        assert_eq!(project.role_of(&ObjectId::new()), None);
    }

    #[test]
    fn role_parsing_rejects_unknown() {
        assert_eq!(MemberRole::parse("manager"), Some(MemberRole::Manager));
        assert_eq!(MemberRole::parse("admin"), None);
        assert_eq!(ProjectStatus::parse("archived"), Some(ProjectStatus::Archived));
        assert_eq!(ProjectStatus::parse("paused"), None);
    }
}
