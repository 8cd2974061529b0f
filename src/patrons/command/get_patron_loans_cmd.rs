use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::checkout::dto::CheckoutDto;
use crate::core::command::{Command, CommandError};
use crate::history::dto::CheckoutHistoryDto;
use crate::hold::dto::HoldDto;
use crate::patrons::domain::PatronService;

// GetPatronLoansCommand gathers what a patron currently has out, what they are
// waiting for and what they borrowed before.
pub struct GetPatronLoansCommand {
    patron_service: Box<dyn PatronService>,
}

impl GetPatronLoansCommand {
    pub fn new(patron_service: Box<dyn PatronService>) -> Self {
        Self {
            patron_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GetPatronLoansCommandRequest {
    pub patron_id: String,
}

impl GetPatronLoansCommandRequest {
    pub fn new(patron_id: &str) -> Self {
        Self {
            patron_id: patron_id.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GetPatronLoansCommandResponse {
    pub checkouts: Vec<CheckoutDto>,
    pub holds: Vec<HoldDto>,
    pub history: Vec<CheckoutHistoryDto>,
}

#[async_trait]
impl Command<GetPatronLoansCommandRequest, GetPatronLoansCommandResponse> for GetPatronLoansCommand {
    async fn execute(&self, req: GetPatronLoansCommandRequest) -> Result<GetPatronLoansCommandResponse, CommandError> {
        let patron_id = req.patron_id.as_str();
        let checkouts = self.patron_service.find_checkouts(patron_id).await.map_err(CommandError::from)?;
        let holds = self.patron_service.find_holds(patron_id).await.map_err(CommandError::from)?;
        let history = self.patron_service.find_checkout_history(patron_id).await.map_err(CommandError::from)?;
        Ok(GetPatronLoansCommandResponse { checkouts, holds, history })
    }
}

#[cfg(test)]
mod tests {
    use async_once::AsyncOnce;
    use lazy_static::lazy_static;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;
    use crate::patrons::command::add_patron_cmd::{AddPatronCommand, AddPatronCommandRequest};
    use crate::patrons::command::get_patron_loans_cmd::{GetPatronLoansCommand, GetPatronLoansCommandRequest};
    use crate::patrons::factory;

    lazy_static! {
        static ref ADD_CMD : AsyncOnce<AddPatronCommand> = AsyncOnce::new(async {
                let svc = factory::create_patron_service(&Configuration::new("test"), RepositoryStore::Memory).await;
                AddPatronCommand::new(svc)
            });
        static ref LOANS_CMD : AsyncOnce<GetPatronLoansCommand> = AsyncOnce::new(async {
                let svc = factory::create_patron_service(&Configuration::new("test"), RepositoryStore::Memory).await;
                GetPatronLoansCommand::new(svc)
            });
    }

    #[tokio::test]
    async fn test_should_run_get_patron_loans() {
        let add_cmd: &AddPatronCommand = ADD_CMD.get().await.clone();
        let loans_cmd: &GetPatronLoansCommand = LOANS_CMD.get().await.clone();
        let added = add_cmd.execute(AddPatronCommandRequest::new("Ada", "Lovelace", "branch1")).await.expect("should add patron");
        let res = loans_cmd.execute(GetPatronLoansCommandRequest::new(added.patron.patron_id.as_str())).await.expect("should get loans");
        assert!(res.checkouts.is_empty());
        assert!(res.holds.is_empty());
        assert!(res.history.is_empty());
    }

    #[tokio::test]
    async fn test_should_fail_loans_of_missing_patron() {
        let loans_cmd: &GetPatronLoansCommand = LOANS_CMD.get().await.clone();
        let res = loans_cmd.execute(GetPatronLoansCommandRequest::new("missing")).await;
        assert!(matches!(res, Err(CommandError::NotFound { .. })));
    }
}
