use axum::{
    routing::{get, post},
    Router,
};
use lambda_http::{run, Error};
use lms::assets::controller::{add_asset, find_asset_by_id};
use lms::checkout::controller::{check_in_item, check_out_item, get_checkout_history, get_current_holds,
                                mark_found, mark_lost, place_hold};
use lms::core::controller::AppState;
use lms::core::repository::RepositoryStore;
use lms::utils::logs::setup_tracing;

const DEV_MODE: bool = true;

#[tokio::main]
async fn main() -> Result<(), Error> {
    setup_tracing();

    let state = if DEV_MODE {
        std::env::set_var("AWS_LAMBDA_FUNCTION_NAME", "_");
        std::env::set_var("AWS_LAMBDA_FUNCTION_MEMORY_SIZE", "4096");
        std::env::set_var("AWS_LAMBDA_FUNCTION_VERSION", "1");
        std::env::set_var("AWS_LAMBDA_RUNTIME_API", "http://[::]:9000/.rt");
        AppState::new("dev", RepositoryStore::from_env(RepositoryStore::LocalDynamoDB))
    } else {
        AppState::new("prod", RepositoryStore::from_env(RepositoryStore::DynamoDB))
    };

    let app = Router::new()
        .route("/assets", post(add_asset))
        .route("/assets/:id", get(find_asset_by_id))
        .route("/assets/:id/history", get(get_checkout_history))
        .route("/assets/:id/holds", get(get_current_holds))
        .route("/assets/:id/lost", post(mark_lost))
        .route("/assets/:id/found", post(mark_found))
        .route("/checkout", post(check_out_item))
        .route("/checkout/return", post(check_in_item))
        .route("/holds", post(place_hold))
        .with_state(state);

    run(app).await
}
