use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use sea_orm::TransactionTrait;
use tracing::info;

use service::dto::ShopDto;
use service::errors::ServiceError;
use service::shop_service;

use crate::errors::ApiError;
use crate::extract::AppJson;
use crate::routes::AppState;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<ShopDto>>, ApiError> {
    let shops = shop_service::list_shops(&state.db).await?;
    info!(count = shops.len(), "list shops");
    Ok(Json(shops))
}

pub async fn get_by_id(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<ShopDto>, ApiError> {
    Ok(Json(shop_service::get_shop(&state.db, id).await?))
}

/// HEAD probe: 200 with empty body when the shop exists, 404 otherwise.
pub async fn exists(State(state): State<AppState>, Path(id): Path<i32>) -> Result<StatusCode, ApiError> {
    if shop_service::shop_exists(&state.db, id).await? {
        Ok(StatusCode::OK)
    } else {
        Err(ApiError::NotFound(format!("Shop not found with id: {}", id)))
    }
}

pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<ShopDto>,
) -> Result<(StatusCode, Json<ShopDto>), ApiError> {
    let created = state
        .db
        .transaction::<_, ShopDto, ServiceError>(|txn| {
            Box::pin(async move { shop_service::create_shop(txn, input).await })
        })
        .await?;
    info!(id = ?created.id, "created shop");
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(input): AppJson<ShopDto>,
) -> Result<Json<ShopDto>, ApiError> {
    let updated = state
        .db
        .transaction::<_, ShopDto, ServiceError>(|txn| {
            Box::pin(async move { shop_service::update_shop(txn, id, input).await })
        })
        .await?;
    info!(id, "updated shop");
    Ok(Json(updated))
}

pub async fn rename(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    new_name: String,
) -> Result<Json<ShopDto>, ApiError> {
    let updated = state
        .db
        .transaction::<_, ShopDto, ServiceError>(|txn| {
            Box::pin(async move { shop_service::rename_shop(txn, id, &new_name).await })
        })
        .await?;
    info!(id, "renamed shop");
    Ok(Json(updated))
}

pub async fn remove(State(state): State<AppState>, Path(id): Path<i32>) -> Result<StatusCode, ApiError> {
    state
        .db
        .transaction::<_, (), ServiceError>(|txn| {
            Box::pin(async move { shop_service::delete_shop(txn, id).await })
        })
        .await?;
    info!(id, "deleted shop");
    Ok(StatusCode::NO_CONTENT)
}
