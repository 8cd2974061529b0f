use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::assets::domain::AssetService;
use crate::assets::dto::AssetDto;
use crate::core::command::{Command, CommandError};

pub struct GetAssetCommand {
    asset_service: Box<dyn AssetService>,
}

impl GetAssetCommand {
    pub fn new(asset_service: Box<dyn AssetService>) -> Self {
        Self {
            asset_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GetAssetCommandRequest {
    pub asset_id: String,
}

impl GetAssetCommandRequest {
    pub fn new(asset_id: &str) -> Self {
        Self {
            asset_id: asset_id.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GetAssetCommandResponse {
    pub asset: AssetDto,
}

impl GetAssetCommandResponse {
    pub fn new(asset: AssetDto) -> Self {
        Self {
            asset,
        }
    }
}

#[async_trait]
impl Command<GetAssetCommandRequest, GetAssetCommandResponse> for GetAssetCommand {
    async fn execute(&self, req: GetAssetCommandRequest) -> Result<GetAssetCommandResponse, CommandError> {
        self.asset_service.find_asset_by_id(req.asset_id.as_str())
            .await.map_err(CommandError::from).map(GetAssetCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use async_once::AsyncOnce;
    use lazy_static::lazy_static;
    use crate::assets::command::add_asset_cmd::{AddAssetCommand, AddAssetCommandRequest};
    use crate::assets::command::get_asset_cmd::{GetAssetCommand, GetAssetCommandRequest};
    use crate::assets::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    lazy_static! {
        static ref ADD_CMD : AsyncOnce<AddAssetCommand> = AsyncOnce::new(async {
                let svc = factory::create_asset_service(&Configuration::new("test"), RepositoryStore::Memory).await;
                AddAssetCommand::new(svc)
            });
        static ref GET_CMD : AsyncOnce<GetAssetCommand> = AsyncOnce::new(async {
                let svc = factory::create_asset_service(&Configuration::new("test"), RepositoryStore::Memory).await;
                GetAssetCommand::new(svc)
            });
    }

    #[tokio::test]
    async fn test_should_run_get_asset() {
        let add_cmd: &AddAssetCommand = ADD_CMD.get().await.clone();
        let get_cmd: &GetAssetCommand = GET_CMD.get().await.clone();
        let added = add_cmd.execute(AddAssetCommandRequest::new("test asset")).await.expect("should add asset");
        let res = get_cmd.execute(GetAssetCommandRequest::new(added.asset.asset_id.as_str())).await.expect("should get asset");
        assert_eq!(added.asset.asset_id, res.asset.asset_id);
    }

    #[tokio::test]
    async fn test_should_fail_get_missing_asset() {
        let get_cmd: &GetAssetCommand = GET_CMD.get().await.clone();
        let res = get_cmd.execute(GetAssetCommandRequest::new("missing")).await;
        assert!(matches!(res, Err(CommandError::NotFound { .. })));
    }
}
