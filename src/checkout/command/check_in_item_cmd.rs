use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::checkout::domain::CheckoutService;
use crate::checkout::dto::CheckoutDto;
use crate::core::command::{Command, CommandError};

pub struct CheckInItemCommand {
    checkout_service: Box<dyn CheckoutService>,
}

impl CheckInItemCommand {
    pub fn new(checkout_service: Box<dyn CheckoutService>) -> Self {
        Self {
            checkout_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CheckInItemCommandRequest {
    pub asset_id: String,
}

impl CheckInItemCommandRequest {
    pub fn new(asset_id: &str) -> Self {
        Self {
            asset_id: asset_id.to_string(),
        }
    }
}

// checkout is set when the returned asset went straight to a waiting hold
#[derive(Debug, Serialize)]
pub struct CheckInItemCommandResponse {
    pub asset_id: String,
    pub checkout: Option<CheckoutDto>,
}

#[async_trait]
impl Command<CheckInItemCommandRequest, CheckInItemCommandResponse> for CheckInItemCommand {
    async fn execute(&self, req: CheckInItemCommandRequest) -> Result<CheckInItemCommandResponse, CommandError> {
        self.checkout_service.check_in_item(req.asset_id.as_str())
            .await.map_err(CommandError::from)?;
        let checkout = self.checkout_service.get_latest_checkout(req.asset_id.as_str())
            .await.map_err(CommandError::from)?;
        Ok(CheckInItemCommandResponse { asset_id: req.asset_id, checkout })
    }
}
