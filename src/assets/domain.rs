pub mod model;
pub mod service;

use async_trait::async_trait;
use crate::assets::dto::AssetDto;
use crate::core::library::LibraryResult;

#[async_trait]
pub trait AssetService: Sync + Send {
    async fn add_asset(&self, asset: &AssetDto) -> LibraryResult<AssetDto>;
    async fn find_asset_by_id(&self, id: &str) -> LibraryResult<AssetDto>;
    async fn find_all_assets(&self) -> LibraryResult<Vec<AssetDto>>;
}
