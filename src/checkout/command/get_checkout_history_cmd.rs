use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::checkout::domain::CheckoutService;
use crate::core::command::{Command, CommandError};
use crate::history::dto::CheckoutHistoryDto;

pub struct GetCheckoutHistoryCommand {
    checkout_service: Box<dyn CheckoutService>,
}

impl GetCheckoutHistoryCommand {
    pub fn new(checkout_service: Box<dyn CheckoutService>) -> Self {
        Self {
            checkout_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GetCheckoutHistoryCommandRequest {
    pub asset_id: String,
}

impl GetCheckoutHistoryCommandRequest {
    pub fn new(asset_id: &str) -> Self {
        Self {
            asset_id: asset_id.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GetCheckoutHistoryCommandResponse {
    pub asset_id: String,
    pub current_patron: String,
    pub history: Vec<CheckoutHistoryDto>,
}

#[async_trait]
impl Command<GetCheckoutHistoryCommandRequest, GetCheckoutHistoryCommandResponse> for GetCheckoutHistoryCommand {
    async fn execute(&self, req: GetCheckoutHistoryCommandRequest) -> Result<GetCheckoutHistoryCommandResponse, CommandError> {
        let current_patron = self.checkout_service.get_current_checkout_patron(req.asset_id.as_str())
            .await.map_err(CommandError::from)?;
        let history = self.checkout_service.get_checkout_history(req.asset_id.as_str())
            .await.map_err(CommandError::from)?;
        Ok(GetCheckoutHistoryCommandResponse { asset_id: req.asset_id, current_patron, history })
    }
}

#[cfg(test)]
mod tests {
    use async_once::AsyncOnce;
    use lazy_static::lazy_static;
    use crate::assets::domain::AssetService;
    use crate::checkout::domain::CheckoutService;
    use crate::patrons::domain::PatronService;
    use crate::assets::dto::AssetDto;
    use crate::assets::factory::create_asset_service;
    use crate::checkout::command::get_checkout_history_cmd::{GetCheckoutHistoryCommand, GetCheckoutHistoryCommandRequest};
    use crate::checkout::factory;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;
    use crate::patrons::dto::PatronDto;
    use crate::patrons::factory::create_patron_service;

    lazy_static! {
        static ref SUT_CMD : AsyncOnce<GetCheckoutHistoryCommand> = AsyncOnce::new(async {
                let svc = factory::create_checkout_service(&Configuration::new("test"), RepositoryStore::Memory).await;
                GetCheckoutHistoryCommand::new(svc)
            });
    }

    #[tokio::test]
    async fn test_should_run_get_checkout_history() {
        let config = Configuration::new("test");
        let asset = create_asset_service(&config, RepositoryStore::Memory).await
            .add_asset(&AssetDto::new("Ubik")).await.expect("should add asset");
        let patron = create_patron_service(&config, RepositoryStore::Memory).await
            .add_patron(&PatronDto::new("Joe", "Chip", "branch1")).await.expect("should add patron");
        let checkout_svc = factory::create_checkout_service(&config, RepositoryStore::Memory).await;
        checkout_svc.check_out_item(asset.asset_id.as_str(), patron.library_card_id.as_str()).await.expect("should check out");
        checkout_svc.check_in_item(asset.asset_id.as_str()).await.expect("should check in");
        checkout_svc.check_out_item(asset.asset_id.as_str(), patron.library_card_id.as_str()).await.expect("should check out");

        let cmd: &GetCheckoutHistoryCommand = SUT_CMD.get().await.clone();
        let res = cmd.execute(GetCheckoutHistoryCommandRequest::new(asset.asset_id.as_str())).await.expect("should get history");
        assert_eq!("Joe Chip", res.current_patron.as_str());
        assert_eq!(2, res.history.len());
        assert!(res.history[0].checked_in.is_open());
        assert!(!res.history[1].checked_in.is_open());
    }

    #[tokio::test]
    async fn test_should_get_empty_history_of_unknown_asset() {
        let cmd: &GetCheckoutHistoryCommand = SUT_CMD.get().await.clone();
        let res = cmd.execute(GetCheckoutHistoryCommandRequest::new("missing")).await.expect("should get history");
        assert!(res.history.is_empty());
        assert!(res.current_patron.is_empty());
    }
}
