use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::patrons::dto::PatronDto;
use crate::core::command::{Command, CommandError};
use crate::patrons::domain::PatronService;

pub struct AddPatronCommand {
    patron_service: Box<dyn PatronService>,
}

impl AddPatronCommand {
    pub fn new(patron_service: Box<dyn PatronService>) -> Self {
        Self {
            patron_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddPatronCommandRequest {
    pub first_name: String,
    pub last_name: String,
    pub home_library_branch_id: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub telephone_number: String,
}

impl AddPatronCommandRequest {
    pub fn new(first_name: &str, last_name: &str, home_library_branch_id: &str) -> Self {
        Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            home_library_branch_id: home_library_branch_id.to_string(),
            address: "".to_string(),
            telephone_number: "".to_string(),
        }
    }

    pub fn build_patron(&self) -> PatronDto {
        PatronDto {
            address: self.address.to_string(),
            telephone_number: self.telephone_number.to_string(),
            ..PatronDto::new(self.first_name.as_str(), self.last_name.as_str(), self.home_library_branch_id.as_str())
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AddPatronCommandResponse {
    pub patron: PatronDto,
}

impl AddPatronCommandResponse {
    pub fn new(patron: PatronDto) -> Self {
        Self {
            patron,
        }
    }
}

#[async_trait]
impl Command<AddPatronCommandRequest, AddPatronCommandResponse> for AddPatronCommand {
    async fn execute(&self, req: AddPatronCommandRequest) -> Result<AddPatronCommandResponse, CommandError> {
        let patron = req.build_patron();
        self.patron_service.add_patron(&patron)
            .await.map_err(CommandError::from).map(AddPatronCommandResponse::new)
    }
}
