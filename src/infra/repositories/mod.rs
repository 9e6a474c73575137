pub mod mongo_comment_repo;
pub mod mongo_notification_repo;
pub mod mongo_organization_repo;
pub mod mongo_project_repo;
pub mod mongo_task_repo;
pub mod mongo_user_repo;

pub mod memory_comment_repo;
pub mod memory_notification_repo;
pub mod memory_organization_repo;
pub mod memory_project_repo;
pub mod memory_task_repo;
pub mod memory_user_repo;
