use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use sea_orm::TransactionTrait;
use tracing::info;

use service::client_service;
use service::dto::ClientDto;
use service::errors::ServiceError;

use crate::errors::ApiError;
use crate::extract::AppJson;
use crate::routes::AppState;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<ClientDto>>, ApiError> {
    let clients = client_service::list_clients(&state.db).await?;
    info!(count = clients.len(), "list clients");
    Ok(Json(clients))
}

pub async fn get_by_id(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<ClientDto>, ApiError> {
    Ok(Json(client_service::get_client(&state.db, id).await?))
}

/// HEAD probe: 200 with empty body when the client exists, 404 otherwise.
pub async fn exists(State(state): State<AppState>, Path(id): Path<i32>) -> Result<StatusCode, ApiError> {
    if client_service::client_exists(&state.db, id).await? {
        Ok(StatusCode::OK)
    } else {
        Err(ApiError::NotFound(format!("Client not found with id: {}", id)))
    }
}

pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<ClientDto>,
) -> Result<(StatusCode, Json<ClientDto>), ApiError> {
    let created = state
        .db
        .transaction::<_, ClientDto, ServiceError>(|txn| {
            Box::pin(async move { client_service::create_client(txn, input).await })
        })
        .await?;
    info!(id = ?created.id, "created client");
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(input): AppJson<ClientDto>,
) -> Result<Json<ClientDto>, ApiError> {
    let updated = state
        .db
        .transaction::<_, ClientDto, ServiceError>(|txn| {
            Box::pin(async move { client_service::update_client(txn, id, input).await })
        })
        .await?;
    info!(id, "updated client");
    Ok(Json(updated))
}

pub async fn rename(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    new_name: String,
) -> Result<Json<ClientDto>, ApiError> {
    let updated = state
        .db
        .transaction::<_, ClientDto, ServiceError>(|txn| {
            Box::pin(async move { client_service::rename_client(txn, id, &new_name).await })
        })
        .await?;
    info!(id, "renamed client");
    Ok(Json(updated))
}

pub async fn remove(State(state): State<AppState>, Path(id): Path<i32>) -> Result<StatusCode, ApiError> {
    state
        .db
        .transaction::<_, (), ServiceError>(|txn| {
            Box::pin(async move { client_service::delete_client(txn, id).await })
        })
        .await?;
    info!(id, "deleted client");
    Ok(StatusCode::NO_CONTENT)
}
