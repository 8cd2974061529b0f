use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::patrons::domain::PatronService;
use crate::patrons::dto::BranchDto;

pub struct AddBranchCommand {
    patron_service: Box<dyn PatronService>,
}

impl AddBranchCommand {
    pub fn new(patron_service: Box<dyn PatronService>) -> Self {
        Self {
            patron_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddBranchCommandRequest {
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub telephone_number: String,
}

impl AddBranchCommandRequest {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            address: "".to_string(),
            telephone_number: "".to_string(),
        }
    }

    pub fn build_branch(&self) -> BranchDto {
        BranchDto {
            address: self.address.to_string(),
            telephone_number: self.telephone_number.to_string(),
            ..BranchDto::new(self.name.as_str())
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AddBranchCommandResponse {
    pub branch: BranchDto,
}

impl AddBranchCommandResponse {
    pub fn new(branch: BranchDto) -> Self {
        Self {
            branch,
        }
    }
}

#[async_trait]
impl Command<AddBranchCommandRequest, AddBranchCommandResponse> for AddBranchCommand {
    async fn execute(&self, req: AddBranchCommandRequest) -> Result<AddBranchCommandResponse, CommandError> {
        self.patron_service.add_branch(&req.build_branch())
            .await.map_err(CommandError::from).map(AddBranchCommandResponse::new)
    }
}
