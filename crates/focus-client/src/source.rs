use async_trait::async_trait;
use focus_models::{ActivityItem, DashboardStats};

use crate::error::ClientError;
use crate::resource::Resource;

/// A place entities can be read from and written to.
///
/// Implemented by the remote API (behind a credential) and by the bundled
/// offline dataset. Both apply the same search policy, so callers see one
/// contract whichever source answers.
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn list<R: Resource>(&self, query: Option<&str>) -> Result<Vec<R::Entity>, ClientError>;

    async fn get<R: Resource>(&self, id: &R::Id) -> Result<Option<R::Entity>, ClientError>;

    async fn create<R: Resource>(&self, dto: R::Create) -> Result<R::Entity, ClientError>;

    async fn update<R: Resource>(
        &self,
        id: &R::Id,
        dto: R::Update,
    ) -> Result<R::Entity, ClientError>;

    async fn delete<R: Resource>(&self, id: &R::Id) -> Result<bool, ClientError>;

    async fn dashboard_stats(&self) -> Result<DashboardStats, ClientError>;

    async fn recent_activity(&self, limit: usize) -> Result<Vec<ActivityItem>, ClientError>;
}
