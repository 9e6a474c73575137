use crate::domain::{models::organization::Organization, ports::OrganizationRepository};
use crate::error::AppError;
use async_trait::async_trait;
use bson::{doc, oid::ObjectId};
use mongodb::{Collection, Database};

pub struct MongoOrganizationRepo {
    organizations: Collection<Organization>,
}

impl MongoOrganizationRepo {
    pub fn new(db: &Database) -> Self {
        Self { organizations: db.collection("organizations") }
    }
}

#[async_trait]
impl OrganizationRepository for MongoOrganizationRepo {
    async fn create(&self, organization: &Organization) -> Result<Organization, AppError> {
        self.organizations.insert_one(organization).await?;
        Ok(organization.clone())
    }

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Organization>, AppError> {
        Ok(self.organizations.find_one(doc! { "_id": *id }).await?)
    }
}
