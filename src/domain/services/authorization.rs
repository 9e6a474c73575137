use crate::domain::models::project::{MemberRole, Project};
use crate::error::AppError;
use bson::oid::ObjectId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectAction {
    View,
    Update,
    Delete,
    AddMember,
    RemoveMember,
}

/// Central permission check for project operations. The owner is an implicit
/// authority even when absent from the member list.
pub fn authorize(project: &Project, user_id: &ObjectId, action: ProjectAction) -> Result<(), AppError> {
    if &project.owner_id == user_id {
        return Ok(());
    }

    let role = project.role_of(user_id);

    let allowed = match action {
        ProjectAction::View => role.is_some(),
        ProjectAction::Update
        | ProjectAction::AddMember
        | ProjectAction::RemoveMember => role == Some(MemberRole::Manager),
        ProjectAction::Delete => false,
    };

    if allowed {
        Ok(())
    } else {
        Err(AppError::Forbidden(forbidden_message(action).to_string()))
    }
}

fn forbidden_message(action: ProjectAction) -> &'static str {
    match action {
        ProjectAction::View => "Not a project member",
        ProjectAction::Update => "Only the owner or a manager can update this project",
        ProjectAction::Delete => "Only the project owner can delete this project",
        ProjectAction::AddMember => "Only the owner or a manager can add members",
        ProjectAction::RemoveMember => "Only the owner or a manager can remove members",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::project::Member;

    fn project_with(owner: ObjectId, extra: &[(ObjectId, MemberRole)]) -> Project {
        let mut project = Project::new("Apollo".into(), None, ObjectId::new(), owner, "medium".into());
        for (user_id, role) in extra {
            project.members.push(Member::new(*user_id, *role));
        }
        project
    }

    #[test]
    fn owner_may_do_everything() {
        let owner = ObjectId::new();
        let project = project_with(owner, &[]);

        for action in [
            ProjectAction::View,
            ProjectAction::Update,
            ProjectAction::Delete,
            ProjectAction::AddMember,
            ProjectAction::RemoveMember,
        ] {
            assert!(authorize(&project, &owner, action).is_ok());
        }
    }

    #[test]
    fn owner_keeps_authority_when_absent_from_member_list() {
        let owner = ObjectId::new();
        let mut project = project_with(owner, &[]);
        project.members.clear();

        assert!(authorize(&project, &owner, ProjectAction::Delete).is_ok());
        assert!(authorize(&project, &owner, ProjectAction::View).is_ok());
    }

    #[test]
    fn manager_may_administer_but_not_delete() {
        let manager = ObjectId::new();
        let project = project_with(ObjectId::new(), &[(manager, MemberRole::Manager)]);

        assert!(authorize(&project, &manager, ProjectAction::Update).is_ok());
        assert!(authorize(&project, &manager, ProjectAction::AddMember).is_ok());
        assert!(authorize(&project, &manager, ProjectAction::RemoveMember).is_ok());
        assert!(matches!(
            authorize(&project, &manager, ProjectAction::Delete),
            Err(AppError::Forbidden(_))
        ));
    }

    #[test]
    fn contributor_and_viewer_may_only_view() {
        let contributor = ObjectId::new();
        let viewer = ObjectId::new();
        let project = project_with(
            ObjectId::new(),
            &[(contributor, MemberRole::Contributor), (viewer, MemberRole::Viewer)],
        );

        for user in [&contributor, &viewer] {
            assert!(authorize(&project, user, ProjectAction::View).is_ok());
            for action in [ProjectAction::Update, ProjectAction::AddMember, ProjectAction::RemoveMember] {
                assert!(matches!(
                    authorize(&project, user, action),
                    Err(AppError::Forbidden(_))
                ));
            }
        }
    }

    #[test]
    fn non_member_is_denied_reads() {
        let project = project_with(ObjectId::new(), &[]);
        let stranger = ObjectId::new();

        assert!(matches!(
            authorize(&project, &stranger, ProjectAction::View),
            Err(AppError::Forbidden(_))
        ));
    }
}
