use axum::{
    extract::{Path, State},
    response::Json,
};
use serde_json::{Value};
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, ServerError};
use crate::patrons::command::add_branch_cmd::{AddBranchCommand, AddBranchCommandRequest, AddBranchCommandResponse};
use crate::patrons::command::add_patron_cmd::{AddPatronCommand, AddPatronCommandRequest, AddPatronCommandResponse};
use crate::patrons::command::get_patron_cmd::{GetPatronCommand, GetPatronCommandRequest, GetPatronCommandResponse};
use crate::patrons::command::get_patron_loans_cmd::{GetPatronLoansCommand, GetPatronLoansCommandRequest, GetPatronLoansCommandResponse};
use crate::patrons::domain::PatronService;
use crate::patrons::factory;

async fn build_service(state: AppState) -> Box<dyn PatronService> {
    factory::create_patron_service(&state.config, state.store).await
}

pub async fn add_branch(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<AddBranchCommandResponse>, ServerError> {
    let req: AddBranchCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let svc = build_service(state).await;
    let res = AddBranchCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub async fn add_patron(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<AddPatronCommandResponse>, ServerError> {
    let req: AddPatronCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let svc = build_service(state).await;
    let res = AddPatronCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub async fn find_patron_by_id(
    State(state): State<AppState>,
    Path(patron_id): Path<String>) -> Result<Json<GetPatronCommandResponse>, ServerError> {
    let req = GetPatronCommandRequest { patron_id };
    let svc = build_service(state).await;
    let res = GetPatronCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub async fn find_patron_loans(
    State(state): State<AppState>,
    Path(patron_id): Path<String>) -> Result<Json<GetPatronLoansCommandResponse>, ServerError> {
    let req = GetPatronLoansCommandRequest { patron_id };
    let svc = build_service(state).await;
    let res = GetPatronLoansCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}
