pub mod add_asset_cmd;
pub mod get_asset_cmd;
