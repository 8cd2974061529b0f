use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::checkout::domain::CheckoutService;
use crate::checkout::dto::CheckoutDto;
use crate::core::command::{Command, CommandError};

pub struct CheckOutItemCommand {
    checkout_service: Box<dyn CheckoutService>,
}

impl CheckOutItemCommand {
    pub fn new(checkout_service: Box<dyn CheckoutService>) -> Self {
        Self {
            checkout_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CheckOutItemCommandRequest {
    pub asset_id: String,
    pub library_card_id: String,
}

impl CheckOutItemCommandRequest {
    pub fn new(asset_id: &str, library_card_id: &str) -> Self {
        Self {
            asset_id: asset_id.to_string(),
            library_card_id: library_card_id.to_string(),
        }
    }
}

// checkout is the live checkout after the command, which belongs to another card
// when the asset was already out
#[derive(Debug, Serialize)]
pub struct CheckOutItemCommandResponse {
    pub asset_id: String,
    pub checkout: Option<CheckoutDto>,
}

#[async_trait]
impl Command<CheckOutItemCommandRequest, CheckOutItemCommandResponse> for CheckOutItemCommand {
    async fn execute(&self, req: CheckOutItemCommandRequest) -> Result<CheckOutItemCommandResponse, CommandError> {
        self.checkout_service.check_out_item(req.asset_id.as_str(), req.library_card_id.as_str())
            .await.map_err(CommandError::from)?;
        let checkout = self.checkout_service.get_latest_checkout(req.asset_id.as_str())
            .await.map_err(CommandError::from)?;
        Ok(CheckOutItemCommandResponse { asset_id: req.asset_id, checkout })
    }
}

#[cfg(test)]
mod tests {
    use async_once::AsyncOnce;
    use lazy_static::lazy_static;
    use crate::assets::domain::AssetService;
    use crate::patrons::domain::PatronService;
    use crate::assets::dto::AssetDto;
    use crate::assets::factory::create_asset_service;
    use crate::checkout::command::check_out_item_cmd::{CheckOutItemCommand, CheckOutItemCommandRequest};
    use crate::checkout::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;
    use crate::patrons::dto::PatronDto;
    use crate::patrons::factory::create_patron_service;

    lazy_static! {
        static ref SUT_CMD : AsyncOnce<CheckOutItemCommand> = AsyncOnce::new(async {
                let svc = factory::create_checkout_service(&Configuration::new("test"), RepositoryStore::Memory).await;
                CheckOutItemCommand::new(svc)
            });
    }

    async fn add_asset_and_card() -> (String, String) {
        let config = Configuration::new("test");
        let asset = create_asset_service(&config, RepositoryStore::Memory).await
            .add_asset(&AssetDto::new("Neuromancer")).await.expect("should add asset");
        let patron = create_patron_service(&config, RepositoryStore::Memory).await
            .add_patron(&PatronDto::new("Case", "Cowboy", "branch1")).await.expect("should add patron");
        (asset.asset_id, patron.library_card_id)
    }

    #[tokio::test]
    async fn test_should_run_check_out_item() {
        let cmd: &CheckOutItemCommand = SUT_CMD.get().await.clone();
        let (asset_id, card_id) = add_asset_and_card().await;
        let res = cmd.execute(CheckOutItemCommandRequest::new(asset_id.as_str(), card_id.as_str())).await.expect("should check out");
        assert_eq!(Some(card_id), res.checkout.map(|c| c.library_card_id));
    }

    #[tokio::test]
    async fn test_should_fail_check_out_of_missing_asset() {
        let cmd: &CheckOutItemCommand = SUT_CMD.get().await.clone();
        let res = cmd.execute(CheckOutItemCommandRequest::new("missing", "missing")).await;
        assert!(matches!(res, Err(CommandError::NotFound { .. })));
    }
}
