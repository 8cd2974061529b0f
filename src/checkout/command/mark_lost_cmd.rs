use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::checkout::domain::CheckoutService;
use crate::core::command::{Command, CommandError};

pub struct MarkLostCommand {
    checkout_service: Box<dyn CheckoutService>,
}

impl MarkLostCommand {
    pub fn new(checkout_service: Box<dyn CheckoutService>) -> Self {
        Self {
            checkout_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct MarkLostCommandRequest {
    pub asset_id: String,
}

impl MarkLostCommandRequest {
    pub fn new(asset_id: &str) -> Self {
        Self {
            asset_id: asset_id.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MarkLostCommandResponse {
    pub asset_id: String,
    pub checked_out: bool,
}

#[async_trait]
impl Command<MarkLostCommandRequest, MarkLostCommandResponse> for MarkLostCommand {
    async fn execute(&self, req: MarkLostCommandRequest) -> Result<MarkLostCommandResponse, CommandError> {
        self.checkout_service.mark_lost(req.asset_id.as_str())
            .await.map_err(CommandError::from)?;
        let checked_out = self.checkout_service.is_checked_out(req.asset_id.as_str())
            .await.map_err(CommandError::from)?;
        Ok(MarkLostCommandResponse { asset_id: req.asset_id, checked_out })
    }
}

#[cfg(test)]
mod tests {
    use async_once::AsyncOnce;
    use lazy_static::lazy_static;
    use crate::assets::domain::AssetService;
    use crate::assets::dto::AssetDto;
    use crate::assets::factory::create_asset_service;
    use crate::checkout::command::mark_lost_cmd::{MarkLostCommand, MarkLostCommandRequest};
    use crate::checkout::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::library::AssetStatus;
    use crate::core::repository::RepositoryStore;

    lazy_static! {
        static ref SUT_CMD : AsyncOnce<MarkLostCommand> = AsyncOnce::new(async {
                let svc = factory::create_checkout_service(&Configuration::new("test"), RepositoryStore::Memory).await;
                MarkLostCommand::new(svc)
            });
    }

    #[tokio::test]
    async fn test_should_run_mark_lost() {
        let asset_svc = create_asset_service(&Configuration::new("test"), RepositoryStore::Memory).await;
        let asset = asset_svc.add_asset(&AssetDto::new("Stalker")).await.expect("should add asset");
        let cmd: &MarkLostCommand = SUT_CMD.get().await.clone();
        let res = cmd.execute(MarkLostCommandRequest::new(asset.asset_id.as_str())).await.expect("should mark lost");
        assert!(!res.checked_out);
        let loaded = asset_svc.find_asset_by_id(asset.asset_id.as_str()).await.expect("should get asset");
        assert_eq!(AssetStatus::Lost, loaded.asset_status);
    }

    #[tokio::test]
    async fn test_should_fail_mark_lost_of_missing_asset() {
        let cmd: &MarkLostCommand = SUT_CMD.get().await.clone();
        let res = cmd.execute(MarkLostCommandRequest::new("missing")).await;
        assert!(matches!(res, Err(CommandError::NotFound { .. })));
    }
}
