use axum::{
    extract::{Path, State},
    response::Json,
};
use serde_json::{Value};
use crate::checkout::command::check_in_item_cmd::{CheckInItemCommand, CheckInItemCommandRequest, CheckInItemCommandResponse};
use crate::checkout::command::check_out_item_cmd::{CheckOutItemCommand, CheckOutItemCommandRequest, CheckOutItemCommandResponse};
use crate::checkout::command::get_checkout_history_cmd::{GetCheckoutHistoryCommand, GetCheckoutHistoryCommandRequest, GetCheckoutHistoryCommandResponse};
use crate::checkout::command::get_current_holds_cmd::{GetCurrentHoldsCommand, GetCurrentHoldsCommandRequest, GetCurrentHoldsCommandResponse};
use crate::checkout::command::mark_found_cmd::{MarkFoundCommand, MarkFoundCommandRequest, MarkFoundCommandResponse};
use crate::checkout::command::mark_lost_cmd::{MarkLostCommand, MarkLostCommandRequest, MarkLostCommandResponse};
use crate::checkout::command::place_hold_cmd::{PlaceHoldCommand, PlaceHoldCommandRequest, PlaceHoldCommandResponse};
use crate::checkout::domain::CheckoutService;
use crate::checkout::factory;
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, ServerError};

async fn build_service(state: AppState) -> Box<dyn CheckoutService> {
    factory::create_checkout_service(&state.config, state.store).await
}

pub async fn check_out_item(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<CheckOutItemCommandResponse>, ServerError> {
    let req: CheckOutItemCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let svc = build_service(state).await;
    let res = CheckOutItemCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub async fn check_in_item(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<CheckInItemCommandResponse>, ServerError> {
    let req: CheckInItemCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let svc = build_service(state).await;
    let res = CheckInItemCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub async fn place_hold(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<PlaceHoldCommandResponse>, ServerError> {
    let req: PlaceHoldCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let svc = build_service(state).await;
    let res = PlaceHoldCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub async fn mark_lost(
    State(state): State<AppState>,
    Path(asset_id): Path<String>) -> Result<Json<MarkLostCommandResponse>, ServerError> {
    let req = MarkLostCommandRequest { asset_id };
    let svc = build_service(state).await;
    let res = MarkLostCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub async fn mark_found(
    State(state): State<AppState>,
    Path(asset_id): Path<String>) -> Result<Json<MarkFoundCommandResponse>, ServerError> {
    let req = MarkFoundCommandRequest { asset_id };
    let svc = build_service(state).await;
    let res = MarkFoundCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub async fn get_checkout_history(
    State(state): State<AppState>,
    Path(asset_id): Path<String>) -> Result<Json<GetCheckoutHistoryCommandResponse>, ServerError> {
    let req = GetCheckoutHistoryCommandRequest { asset_id };
    let svc = build_service(state).await;
    let res = GetCheckoutHistoryCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub async fn get_current_holds(
    State(state): State<AppState>,
    Path(asset_id): Path<String>) -> Result<Json<GetCurrentHoldsCommandResponse>, ServerError> {
    let req = GetCurrentHoldsCommandRequest { asset_id };
    let svc = build_service(state).await;
    let res = GetCurrentHoldsCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}
