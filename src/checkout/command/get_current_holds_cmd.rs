use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::checkout::domain::CheckoutService;
use crate::core::command::{Command, CommandError};
use crate::hold::dto::HoldDto;

pub struct GetCurrentHoldsCommand {
    checkout_service: Box<dyn CheckoutService>,
}

impl GetCurrentHoldsCommand {
    pub fn new(checkout_service: Box<dyn CheckoutService>) -> Self {
        Self {
            checkout_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GetCurrentHoldsCommandRequest {
    pub asset_id: String,
}

impl GetCurrentHoldsCommandRequest {
    pub fn new(asset_id: &str) -> Self {
        Self {
            asset_id: asset_id.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HoldView {
    pub hold: HoldDto,
    pub patron_name: String,
}

// holds in queue order, the first one is served on the next check-in
#[derive(Debug, Serialize)]
pub struct GetCurrentHoldsCommandResponse {
    pub asset_id: String,
    pub holds: Vec<HoldView>,
}

#[async_trait]
impl Command<GetCurrentHoldsCommandRequest, GetCurrentHoldsCommandResponse> for GetCurrentHoldsCommand {
    async fn execute(&self, req: GetCurrentHoldsCommandRequest) -> Result<GetCurrentHoldsCommandResponse, CommandError> {
        let holds = self.checkout_service.get_current_holds(req.asset_id.as_str())
            .await.map_err(CommandError::from)?;
        let mut views = vec![];
        for hold in holds {
            let patron_name = self.checkout_service.get_current_hold_patron_name(hold.hold_id.as_str())
                .await.map_err(CommandError::from)?;
            views.push(HoldView { hold, patron_name });
        }
        Ok(GetCurrentHoldsCommandResponse { asset_id: req.asset_id, holds: views })
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
    use crate::checkout::command::get_current_holds_cmd::{GetCurrentHoldsCommand, GetCurrentHoldsCommandRequest};
    use crate::checkout::factory;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;
    use crate::patrons::dto::PatronDto;
    use crate::patrons::factory::create_patron_service;

    lazy_static! {
        static ref SUT_CMD : AsyncOnce<GetCurrentHoldsCommand> = AsyncOnce::new(async {
                let svc = factory::create_checkout_service(&Configuration::new("test"), RepositoryStore::Memory).await;
                GetCurrentHoldsCommand::new(svc)
            });
    }

    #[tokio::test]
    async fn test_should_run_get_current_holds() {
        let config = Configuration::new("test");
        let asset = create_asset_service(&config, RepositoryStore::Memory).await
            .add_asset(&AssetDto::new("Blindsight")).await.expect("should add asset");
        let patron_svc = create_patron_service(&config, RepositoryStore::Memory).await;
        let first = patron_svc.add_patron(&PatronDto::new("Siri", "Keeton", "branch1")).await.expect("should add patron");
        let second = patron_svc.add_patron(&PatronDto::new("Jukka", "Sarasti", "branch1")).await.expect("should add patron");
        let checkout_svc = factory::create_checkout_service(&config, RepositoryStore::Memory).await;
        checkout_svc.place_hold(asset.asset_id.as_str(), first.library_card_id.as_str()).await.expect("should place hold");
        checkout_svc.place_hold(asset.asset_id.as_str(), second.library_card_id.as_str()).await.expect("should place hold");

        let cmd: &GetCurrentHoldsCommand = SUT_CMD.get().await.clone();
        let res = cmd.execute(GetCurrentHoldsCommandRequest::new(asset.asset_id.as_str())).await.expect("should get holds");
        assert_eq!(vec!["Siri Keeton".to_string(), "Jukka Sarasti".to_string()],
                   res.holds.iter().map(|h| h.patron_name.clone()).collect::<Vec<String>>());
    }

    #[tokio::test]
    async fn test_should_get_no_holds_of_unknown_asset() {
        let cmd: &GetCurrentHoldsCommand = SUT_CMD.get().await.clone();
        let res = cmd.execute(GetCurrentHoldsCommandRequest::new("missing")).await.expect("should get holds");
        assert!(res.holds.is_empty());
    }
}
