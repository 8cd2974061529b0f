use std::collections::HashMap;
use async_trait::async_trait;
use tracing::info;
use crate::assets::domain::AssetService;
use crate::assets::domain::model::AssetEntity;
use crate::assets::dto::AssetDto;
use crate::assets::repository::AssetRepository;
use crate::core::domain::Configuration;
use crate::core::library::{AssetStatus, LibraryError, LibraryResult};

pub(crate) struct AssetServiceImpl {
    branch_id: String,
    asset_repository: Box<dyn AssetRepository>,
}

impl AssetServiceImpl {
    pub(crate) fn new(config: &Configuration, asset_repository: Box<dyn AssetRepository>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            asset_repository,
        }
    }
}

#[async_trait]
impl AssetService for AssetServiceImpl {
    // new assets always enter circulation as available
    async fn add_asset(&self, asset: &AssetDto) -> LibraryResult<AssetDto> {
        if asset.title.trim().is_empty() {
            return Err(LibraryError::validation("asset title is required", Some("400".to_string())));
        }
        let mut entity = AssetEntity::from(asset);
        entity.version = 0;
        entity.asset_status = AssetStatus::Available;
        self.asset_repository.create(&entity).await?;
        info!(branch_id = self.branch_id.as_str(), asset_id = entity.asset_id.as_str(), "asset added");
        Ok(AssetDto::from(&entity))
    }

    async fn find_asset_by_id(&self, id: &str) -> LibraryResult<AssetDto> {
        self.asset_repository.get(id).await.map(|a| AssetDto::from(&a))
    }

    async fn find_all_assets(&self) -> LibraryResult<Vec<AssetDto>> {
        let res = self.asset_repository.query_all(&HashMap::new()).await?;
        Ok(res.iter().map(AssetDto::from).collect())
    }
}

impl From<&AssetEntity> for AssetDto {
    fn from(other: &AssetEntity) -> Self {
        Self {
            asset_id: other.asset_id.to_string(),
            version: other.version,
            title: other.title.to_string(),
            asset_status: other.asset_status,
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}

impl From<&AssetDto> for AssetEntity {
    fn from(other: &AssetDto) -> Self {
        Self {
            asset_id: other.asset_id.to_string(),
            version: other.version,
            title: other.title.to_string(),
            asset_status: other.asset_status,
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}
