use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::assets::domain::AssetService;
use crate::assets::dto::AssetDto;
use crate::core::command::{Command, CommandError};

pub struct AddAssetCommand {
    asset_service: Box<dyn AssetService>,
}

impl AddAssetCommand {
    pub fn new(asset_service: Box<dyn AssetService>) -> Self {
        Self {
            asset_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddAssetCommandRequest {
    pub title: String,
}

impl AddAssetCommandRequest {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AddAssetCommandResponse {
    pub asset: AssetDto,
}

impl AddAssetCommandResponse {
    pub fn new(asset: AssetDto) -> Self {
        Self {
            asset,
        }
    }
}

#[async_trait]
impl Command<AddAssetCommandRequest, AddAssetCommandResponse> for AddAssetCommand {
    async fn execute(&self, req: AddAssetCommandRequest) -> Result<AddAssetCommandResponse, CommandError> {
        let asset = AssetDto::new(req.title.as_str());
        self.asset_service.add_asset(&asset)
            .await.map_err(CommandError::from).map(AddAssetCommandResponse::new)
    }
}
