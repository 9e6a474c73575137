use crate::domain::{models::organization::Organization, ports::OrganizationRepository};
use crate::error::AppError;
use async_trait::async_trait;
use bson::oid::ObjectId;
use std::sync::RwLock;

#[derive(Default)]
pub struct MemoryOrganizationRepo {
    organizations: RwLock<Vec<Organization>>,
}

impl MemoryOrganizationRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrganizationRepository for MemoryOrganizationRepo {
    async fn create(&self, organization: &Organization) -> Result<Organization, AppError> {
        let mut organizations = self.organizations.write().unwrap_or_else(|e| e.into_inner());
        organizations.push(organization.clone());
        Ok(organization.clone())
    }

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Organization>, AppError> {
        let organizations = self.organizations.read().unwrap_or_else(|e| e.into_inner());
        Ok(organizations.iter().find(|o| &o.id == id).cloned())
    }
}
