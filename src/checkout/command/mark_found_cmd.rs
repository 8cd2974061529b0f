use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::checkout::domain::CheckoutService;
use crate::core::command::{Command, CommandError};

pub struct MarkFoundCommand {
    checkout_service: Box<dyn CheckoutService>,
}

impl MarkFoundCommand {
    pub fn new(checkout_service: Box<dyn CheckoutService>) -> Self {
        Self {
            checkout_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct MarkFoundCommandRequest {
    pub asset_id: String,
}

impl MarkFoundCommandRequest {
    pub fn new(asset_id: &str) -> Self {
        Self {
            asset_id: asset_id.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MarkFoundCommandResponse {
    pub asset_id: String,
}

#[async_trait]
impl Command<MarkFoundCommandRequest, MarkFoundCommandResponse> for MarkFoundCommand {
    async fn execute(&self, req: MarkFoundCommandRequest) -> Result<MarkFoundCommandResponse, CommandError> {
        self.checkout_service.mark_found(req.asset_id.as_str())
            .await.map_err(CommandError::from).map(|_| MarkFoundCommandResponse { asset_id: req.asset_id })
    }
}
