use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::checkout::domain::CheckoutService;
use crate::core::command::{Command, CommandError};
use crate::hold::dto::HoldDto;

pub struct PlaceHoldCommand {
    checkout_service: Box<dyn CheckoutService>,
}

impl PlaceHoldCommand {
    pub fn new(checkout_service: Box<dyn CheckoutService>) -> Self {
        Self {
            checkout_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PlaceHoldCommandRequest {
    pub asset_id: String,
    pub library_card_id: String,
}

impl PlaceHoldCommandRequest {
    pub fn new(asset_id: &str, library_card_id: &str) -> Self {
        Self {
            asset_id: asset_id.to_string(),
            library_card_id: library_card_id.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PlaceHoldCommandResponse {
    pub asset_id: String,
    pub holds: Vec<HoldDto>,
}

#[async_trait]
impl Command<PlaceHoldCommandRequest, PlaceHoldCommandResponse> for PlaceHoldCommand {
    async fn execute(&self, req: PlaceHoldCommandRequest) -> Result<PlaceHoldCommandResponse, CommandError> {
        self.checkout_service.place_hold(req.asset_id.as_str(), req.library_card_id.as_str())
            .await.map_err(CommandError::from)?;
        let holds = self.checkout_service.get_current_holds(req.asset_id.as_str())
            .await.map_err(CommandError::from)?;
        Ok(PlaceHoldCommandResponse { asset_id: req.asset_id, holds })
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
    use crate::checkout::command::place_hold_cmd::{PlaceHoldCommand, PlaceHoldCommandRequest};
    use crate::checkout::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::library::AssetStatus;
    use crate::core::repository::RepositoryStore;
    use crate::patrons::dto::PatronDto;
    use crate::patrons::factory::create_patron_service;

    lazy_static! {
        static ref SUT_CMD : AsyncOnce<PlaceHoldCommand> = AsyncOnce::new(async {
                let svc = factory::create_checkout_service(&Configuration::new("test"), RepositoryStore::Memory).await;
                PlaceHoldCommand::new(svc)
            });
    }

    #[tokio::test]
    async fn test_should_run_place_hold() {
        let config = Configuration::new("test");
        let asset_svc = create_asset_service(&config, RepositoryStore::Memory).await;
        let asset = asset_svc.add_asset(&AssetDto::new("Roadside Picnic")).await.expect("should add asset");
        let patron = create_patron_service(&config, RepositoryStore::Memory).await
            .add_patron(&PatronDto::new("Red", "Schuhart", "branch1")).await.expect("should add patron");
        let cmd: &PlaceHoldCommand = SUT_CMD.get().await.clone();

        let res = cmd.execute(PlaceHoldCommandRequest::new(asset.asset_id.as_str(), patron.library_card_id.as_str()))
            .await.expect("should place hold");
        assert_eq!(1, res.holds.len());
        let loaded = asset_svc.find_asset_by_id(asset.asset_id.as_str()).await.expect("should get asset");
        assert_eq!(AssetStatus::OnHold, loaded.asset_status);
    }

    #[tokio::test]
    async fn test_should_fail_place_hold_without_card() {
        let config = Configuration::new("test");
        let asset = create_asset_service(&config, RepositoryStore::Memory).await
            .add_asset(&AssetDto::new("Hard to Be a God")).await.expect("should add asset");
        let cmd: &PlaceHoldCommand = SUT_CMD.get().await.clone();
        let res = cmd.execute(PlaceHoldCommandRequest::new(asset.asset_id.as_str(), "missing")).await;
        assert!(matches!(res, Err(CommandError::NotFound { .. })));
    }
}
