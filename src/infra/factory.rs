use std::sync::Arc;
use bson::doc;
use mongodb::options::IndexOptions;
use mongodb::{Client, Database, IndexModel};
use tracing::info;

use crate::config::Config;
use crate::domain::services::auth_service::AuthService;
use crate::infra::repositories::{
    memory_comment_repo::MemoryCommentRepo, memory_notification_repo::MemoryNotificationRepo,
    memory_organization_repo::MemoryOrganizationRepo, memory_project_repo::MemoryProjectRepo,
    memory_task_repo::MemoryTaskRepo, memory_user_repo::MemoryUserRepo,
    mongo_comment_repo::MongoCommentRepo, mongo_notification_repo::MongoNotificationRepo,
    mongo_organization_repo::MongoOrganizationRepo, mongo_project_repo::MongoProjectRepo,
    mongo_task_repo::MongoTaskRepo, mongo_user_repo::MongoUserRepo,
};
use crate::state::AppState;

pub async fn bootstrap_state(config: &Config) -> AppState {
    let auth_service = Arc::new(AuthService::new(config));

    let database_url = &config.database_url;
    if database_url.starts_with("mongodb://") || database_url.starts_with("mongodb+srv://") {
        info!("Initializing MongoDB connection...");

        let client = Client::with_uri_str(database_url)
            .await
            .expect("Failed to connect to MongoDB");
        let db = client.database(&config.database_name);

        ensure_indexes(&db).await;

        AppState {
            config: config.clone(),
            user_repo: Arc::new(MongoUserRepo::new(&db)),
            organization_repo: Arc::new(MongoOrganizationRepo::new(&db)),
            project_repo: Arc::new(MongoProjectRepo::new(&db)),
            task_repo: Arc::new(MongoTaskRepo::new(&db)),
            comment_repo: Arc::new(MongoCommentRepo::new(&db)),
            notification_repo: Arc::new(MongoNotificationRepo::new(&db)),
            auth_service,
        }
    } else {
        info!("Initializing in-memory repositories...");

        AppState {
            config: config.clone(),
            user_repo: Arc::new(MemoryUserRepo::new()),
            organization_repo: Arc::new(MemoryOrganizationRepo::new()),
            project_repo: Arc::new(MemoryProjectRepo::new()),
            task_repo: Arc::new(MemoryTaskRepo::new()),
            comment_repo: Arc::new(MemoryCommentRepo::new()),
            notification_repo: Arc::new(MemoryNotificationRepo::new()),
            auth_service,
        }
    }
}

async fn ensure_indexes(db: &Database) {
    let unique = |name: &str| IndexOptions::builder().unique(true).name(name.to_string()).build();
    let named = |name: &str| IndexOptions::builder().name(name.to_string()).build();

    let index = |keys: bson::Document, options: IndexOptions| {
        IndexModel::builder().keys(keys).options(options).build()
    };

    db.collection::<bson::Document>("users")
        .create_indexes(vec![
            index(doc! { "email": 1 }, unique("idx_users_email_unique")),
            index(doc! { "username": 1 }, unique("idx_users_username_unique")),
            index(doc! { "created_at": -1 }, named("idx_users_created_at")),
        ])
        .await
        .expect("Failed to create user indexes");

    db.collection::<bson::Document>("organizations")
        .create_indexes(vec![index(doc! { "owner_id": 1 }, named("idx_organizations_owner"))])
        .await
        .expect("Failed to create organization indexes");

    db.collection::<bson::Document>("projects")
        .create_indexes(vec![
            index(doc! { "organization_id": 1, "status": 1 }, named("idx_projects_org_status")),
            index(doc! { "owner_id": 1 }, named("idx_projects_owner")),
            index(doc! { "members.user_id": 1 }, named("idx_projects_members")),
        ])
        .await
        .expect("Failed to create project indexes");

    db.collection::<bson::Document>("tasks")
        .create_indexes(vec![index(doc! { "project_id": 1, "status": 1 }, named("idx_tasks_project_status"))])
        .await
        .expect("Failed to create task indexes");

    db.collection::<bson::Document>("comments")
        .create_indexes(vec![index(
            doc! { "task_id": 1, "created_at": -1 },
            named("idx_comments_task_created"),
        )])
        .await
        .expect("Failed to create comment indexes");

    db.collection::<bson::Document>("notifications")
        .create_indexes(vec![index(
            doc! { "recipient_id": 1, "created_at": -1 },
            named("idx_notifications_recipient_created"),
        )])
        .await
        .expect("Failed to create notification indexes");

    info!("MongoDB indexes ensured");
}
