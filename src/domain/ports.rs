use crate::domain::model::ServiceListResponse;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Matches services in every environment.
pub const ALL_ENVIRONMENTS: &str = "*";

#[async_trait]
pub trait ServiceCatalog: Send + Sync {
    async fn list_services(&self, filter_env: &str) -> Result<ServiceListResponse>;
}
