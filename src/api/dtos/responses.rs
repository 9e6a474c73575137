use crate::domain::models::{
    comment::Comment, notification::Notification, organization::Organization,
    project::{Member, Project, ProjectProgress}, task::Task, user::User,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

// Documents never serialize to clients directly: these shapes convert
// ObjectIds to hex strings and BSON datetimes to RFC 3339.

#[derive(Serialize)]
pub struct UserOut {
    pub id: String,
    pub username: String,
    pub email: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
    pub organizations: Vec<String>,
}

impl From<User> for UserOut {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_hex(),
            username: user.username,
            email: user.email,
            is_active: user.is_active,
            created_at: user.created_at.to_chrono(),
            last_login: user.last_login.map(|d| d.to_chrono()),
            organizations: user.organizations.iter().map(|o| o.to_hex()).collect(),
        }
    }
}

#[derive(Serialize)]
pub struct OrganizationOut {
    pub id: String,
    pub name: String,
    pub owner_id: String,
    pub created_at: DateTime<Utc>,
}

impl From<Organization> for OrganizationOut {
    fn from(organization: Organization) -> Self {
        Self {
            id: organization.id.to_hex(),
            name: organization.name,
            owner_id: organization.owner_id.to_hex(),
            created_at: organization.created_at.to_chrono(),
        }
    }
}

#[derive(Serialize)]
pub struct MemberOut {
    pub user_id: String,
    pub role: String,
    pub joined_at: DateTime<Utc>,
}

impl From<&Member> for MemberOut {
    fn from(member: &Member) -> Self {
        Self {
            user_id: member.user_id.to_hex(),
            role: member.role.as_str().to_string(),
            joined_at: member.joined_at.to_chrono(),
        }
    }
}

#[derive(Serialize)]
pub struct ProjectOut {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub organization_id: String,
    pub owner_id: String,
    pub status: String,
    pub priority: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub tags: Vec<String>,
    pub progress: ProjectProgress,
    pub members: Vec<MemberOut>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Project> for ProjectOut {
    fn from(project: Project) -> Self {
        Self {
            id: project.id.to_hex(),
            name: project.name,
            description: project.description,
            organization_id: project.organization_id.to_hex(),
            owner_id: project.owner_id.to_hex(),
            status: project.status.as_str().to_string(),
            priority: project.priority,
            start_date: project.start_date.map(format_calendar_date),
            end_date: project.end_date.map(format_calendar_date),
            tags: project.tags,
            progress: project.progress,
            members: project.members.iter().map(MemberOut::from).collect(),
            created_at: project.created_at.to_chrono(),
            updated_at: project.updated_at.to_chrono(),
        }
    }
}

fn format_calendar_date(date: bson::DateTime) -> String {
    date.to_chrono().format("%Y-%m-%d").to_string()
}

#[derive(Serialize)]
pub struct TaskOut {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub project_id: String,
    pub creator_id: String,
    pub assignee_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Task> for TaskOut {
    fn from(task: Task) -> Self {
        Self {
            id: task.id.to_hex(),
            title: task.title,
            description: task.description,
            status: task.status,
            project_id: task.project_id.to_hex(),
            creator_id: task.creator_id.to_hex(),
            assignee_id: task.assignee_id.map(|a| a.to_hex()),
            created_at: task.created_at.to_chrono(),
            updated_at: task.updated_at.to_chrono(),
        }
    }
}

#[derive(Serialize)]
pub struct CommentOut {
    pub id: String,
    pub task_id: String,
    pub author_id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl From<Comment> for CommentOut {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.to_hex(),
            task_id: comment.task_id.to_hex(),
            author_id: comment.author_id.to_hex(),
            content: comment.content,
            created_at: comment.created_at.to_chrono(),
        }
    }
}

#[derive(Serialize)]
pub struct NotificationOut {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Notification> for NotificationOut {
    fn from(notification: Notification) -> Self {
        Self {
            id: notification.id.to_hex(),
            kind: notification.kind,
            title: notification.title,
            message: notification.message,
            is_read: notification.is_read,
            created_at: notification.created_at.to_chrono(),
        }
    }
}
