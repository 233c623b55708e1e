use anyhow::Result;

use tracing::error;

use crate::views;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    middleware,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};

use super::{log_requests, state::*, RequestsLoggingLevel, ServerConfig};

async fn home() -> impl IntoResponse {
    Html(views::render_welcome())
}

async fn get_pet(
    State(directory): State<GuardedDirectoryStore>,
    Path(id): Path<u64>,
) -> Response {
    let Ok(id) = i64::try_from(id) else {
        return (StatusCode::NOT_FOUND, Html(views::render_not_found("pet"))).into_response();
    };
    match directory.get_resolved_pet(id) {
        Ok(Some(pet)) => Html(views::render_pet(&pet)).into_response(),
        Ok(None) => (StatusCode::NOT_FOUND, Html(views::render_not_found("pet"))).into_response(),
        Err(err) => {
            error!("Pet lookup failed: {}", err);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

async fn get_owner(
    State(directory): State<GuardedDirectoryStore>,
    Path(id): Path<u64>,
) -> Response {
    let Ok(id) = i64::try_from(id) else {
        return (StatusCode::NOT_FOUND, Html(views::render_not_found("owner"))).into_response();
    };
    match directory.get_resolved_owner(id) {
        Ok(Some(owner)) => Html(views::render_owner(&owner)).into_response(),
        Ok(None) => {
            (StatusCode::NOT_FOUND, Html(views::render_not_found("owner"))).into_response()
        }
        Err(err) => {
            error!("Owner lookup failed: {}", err);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub fn make_app(config: ServerConfig, directory_store: GuardedDirectoryStore) -> Router {
    let state = ServerState {
        config,
        directory_store,
    };

    Router::new()
        .route("/", get(home))
        .route("/pets/{id}", get(get_pet))
        .route("/owner/{id}", get(get_owner))
        .layer(middleware::from_fn_with_state(state.clone(), log_requests))
        .with_state(state)
}

pub async fn run_server(
    directory_store: GuardedDirectoryStore,
    requests_logging_level: RequestsLoggingLevel,
    port: u16,
) -> Result<()> {
    let config = ServerConfig {
        requests_logging_level,
        port,
    };
    let app = make_app(config, directory_store);

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port)).await?;

    Ok(axum::serve(listener, app).await?)
}
