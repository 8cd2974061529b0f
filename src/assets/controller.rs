use axum::{
    extract::{Path, State},
    response::Json,
};
use serde_json::{Value};
use crate::assets::command::add_asset_cmd::{AddAssetCommand, AddAssetCommandRequest, AddAssetCommandResponse};
use crate::assets::command::get_asset_cmd::{GetAssetCommand, GetAssetCommandRequest, GetAssetCommandResponse};
use crate::assets::domain::AssetService;
use crate::assets::factory;
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, ServerError};

async fn build_service(state: AppState) -> Box<dyn AssetService> {
    factory::create_asset_service(&state.config, state.store).await
}

pub async fn add_asset(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<AddAssetCommandResponse>, ServerError> {
    let req: AddAssetCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let svc = build_service(state).await;
    let res = AddAssetCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub async fn find_asset_by_id(
    State(state): State<AppState>,
    Path(asset_id): Path<String>) -> Result<Json<GetAssetCommandResponse>, ServerError> {
    let req = GetAssetCommandRequest { asset_id };
    let svc = build_service(state).await;
    let res = GetAssetCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}
