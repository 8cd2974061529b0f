use axum::{
    routing::{get, post},
    Router,
};
use lambda_http::{run, Error};
use lms::core::controller::AppState;
use lms::core::repository::RepositoryStore;
use lms::patrons::controller::{add_branch, add_patron, find_patron_by_id, find_patron_loans};
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
        .route("/branches", post(add_branch))
        .route("/patrons", post(add_patron))
        .route("/patrons/:id", get(find_patron_by_id))
        .route("/patrons/:id/loans", get(find_patron_loans))
        .with_state(state);

    run(app).await
}
