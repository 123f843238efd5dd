use std::{net::SocketAddr, sync::Arc};

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use shared::{
    domain::UserRecord,
    error::{ApiError, ErrorCode},
    protocol::{DeleteUserResponse, NewUser, UserUpdate, USERS_ROUTE},
};
use storage::Storage;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod api;
mod app_state;
mod config;

use api::{parse_user_id, ApiContext};
use app_state::AppState;
use config::load_settings;

type ApiResult<T> = Result<T, (StatusCode, Json<ApiError>)>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = load_settings();
    let database_url = settings.database_url;
    let storage = Storage::new(&database_url).await.map_err(|error| {
        error!(
            %database_url,
            %error,
            "failed to open SQLite database; verify parent directory exists and permissions are correct"
        );
        error
    })?;

    let state = AppState {
        api: ApiContext { storage },
    };
    let app = build_router(Arc::new(state));

    let addr: SocketAddr = settings.server_bind.parse()?;
    info!(%addr, "users service listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route(USERS_ROUTE, get(http_list_users).post(http_create_user))
        .route("/user/:user_id", get(http_get_user))
        .route(
            "/users/:user_id",
            axum::routing::put(http_update_user).delete(http_delete_user),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Validation => StatusCode::BAD_REQUEST,
        ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn reject(err: ApiError) -> (StatusCode, Json<ApiError>) {
    if err.code == ErrorCode::Internal {
        error!(message = %err.message, "users request failed");
    }
    (status_for(err.code), Json(err))
}

fn body_or_reject<T>(payload: Result<Json<T>, JsonRejection>) -> ApiResult<T> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| reject(ApiError::validation(rejection.body_text())))
}

async fn healthz(State(state): State<Arc<AppState>>) -> ApiResult<&'static str> {
    state
        .api
        .storage
        .health_check()
        .await
        .map_err(|e| reject(ApiError::internal(e.to_string())))?;
    Ok("ok")
}

async fn http_list_users(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<UserRecord>>> {
    api::list_users(&state.api).await.map(Json).map_err(reject)
}

async fn http_get_user(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<UserRecord>> {
    let user_id = parse_user_id(&user_id).map_err(reject)?;
    api::get_user(&state.api, user_id)
        .await
        .map(Json)
        .map_err(reject)
}

async fn http_create_user(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewUser>, JsonRejection>,
) -> ApiResult<Json<UserRecord>> {
    let user = body_or_reject(payload)?;
    api::create_user(&state.api, &user)
        .await
        .map(Json)
        .map_err(reject)
}

async fn http_update_user(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    payload: Result<Json<UserUpdate>, JsonRejection>,
) -> ApiResult<Json<UserRecord>> {
    let user_id = parse_user_id(&user_id).map_err(reject)?;
    let changes = body_or_reject(payload)?;
    api::update_user(&state.api, user_id, &changes)
        .await
        .map(Json)
        .map_err(reject)
}

async fn http_delete_user(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<DeleteUserResponse>> {
    let user_id = parse_user_id(&user_id).map_err(reject)?;
    api::delete_user(&state.api, user_id)
        .await
        .map(Json)
        .map_err(reject)
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
