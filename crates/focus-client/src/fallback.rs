//! Offline answers from the bundled dataset.

use std::sync::Arc;

use async_trait::async_trait;
use focus_models::{ActivityItem, DashboardStats};
use tracing::debug;

use crate::dataset::FallbackDataset;
use crate::error::ClientError;
use crate::resource::Resource;
use crate::search::filter_by_query;
use crate::source::DataSource;

/// Read-only source over the shared offline dataset.
///
/// Writes return the record they would have produced but leave the dataset
/// untouched, so a created record never shows up in a later `list`.
#[derive(Debug, Clone)]
pub struct FallbackSource {
    dataset: Arc<FallbackDataset>,
}

impl FallbackSource {
    pub fn new(dataset: Arc<FallbackDataset>) -> Self {
        Self { dataset }
    }

    pub fn dataset(&self) -> &FallbackDataset {
        &self.dataset
    }

    fn find<R: Resource>(&self, id: &R::Id) -> Option<&R::Entity> {
        R::records(&self.dataset)
            .iter()
            .find(|entity| R::id(entity) == id)
    }
}

#[async_trait]
impl DataSource for FallbackSource {
    async fn list<R: Resource>(&self, query: Option<&str>) -> Result<Vec<R::Entity>, ClientError> {
        Ok(filter_by_query(R::records(&self.dataset), query))
    }

    async fn get<R: Resource>(&self, id: &R::Id) -> Result<Option<R::Entity>, ClientError> {
        Ok(self.find::<R>(id).cloned())
    }

    async fn create<R: Resource>(&self, dto: R::Create) -> Result<R::Entity, ClientError> {
        let entity = R::assemble(dto);
        debug!(resource = R::NAME, id = %R::id(&entity), "Assembled offline record");
        Ok(entity)
    }

    async fn update<R: Resource>(
        &self,
        id: &R::Id,
        dto: R::Update,
    ) -> Result<R::Entity, ClientError> {
        let current = self
            .find::<R>(id)
            .cloned()
            .ok_or_else(|| ClientError::not_found(R::NAME, id))?;
        Ok(R::merge(current, dto))
    }

    async fn delete<R: Resource>(&self, id: &R::Id) -> Result<bool, ClientError> {
        if R::STRICT_OFFLINE_DELETE && self.find::<R>(id).is_none() {
            return Err(ClientError::not_found(R::NAME, id));
        }
        Ok(true)
    }

    async fn dashboard_stats(&self) -> Result<DashboardStats, ClientError> {
        Ok(self.dataset.dashboard_stats)
    }

    async fn recent_activity(&self, limit: usize) -> Result<Vec<ActivityItem>, ClientError> {
        Ok(self.dataset.recent_activity(limit))
    }
}
