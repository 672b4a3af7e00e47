use axum::extract::{Path, State};
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use sea_orm::TransactionTrait;
use tracing::info;

use service::catalog_service;
use service::dto::CatalogDto;
use service::errors::ServiceError;

use crate::errors::ApiError;
use crate::extract::AppJson;
use crate::routes::AppState;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<CatalogDto>>, ApiError> {
    let catalogs = catalog_service::list_catalogs(&state.db).await?;
    info!(count = catalogs.len(), "list catalogs");
    Ok(Json(catalogs))
}

pub async fn get_by_id(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<CatalogDto>, ApiError> {
    Ok(Json(catalog_service::get_catalog(&state.db, id).await?))
}

pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CatalogDto>,
) -> Result<(StatusCode, Json<CatalogDto>), ApiError> {
    let created = state
        .db
        .transaction::<_, CatalogDto, ServiceError>(|txn| {
            Box::pin(async move { catalog_service::create_catalog(txn, input).await })
        })
        .await?;
    info!(id = ?created.id, "created catalog");
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(input): AppJson<CatalogDto>,
) -> Result<Json<CatalogDto>, ApiError> {
    let updated = state
        .db
        .transaction::<_, CatalogDto, ServiceError>(|txn| {
            Box::pin(async move { catalog_service::update_catalog(txn, id, input).await })
        })
        .await?;
    info!(id, "updated catalog");
    Ok(Json(updated))
}

pub async fn remove(State(state): State<AppState>, Path(id): Path<i32>) -> Result<StatusCode, ApiError> {
    state
        .db
        .transaction::<_, (), ServiceError>(|txn| {
            Box::pin(async move { catalog_service::delete_catalog(txn, id).await })
        })
        .await?;
    info!(id, "deleted catalog");
    Ok(StatusCode::NO_CONTENT)
}

/// Stream the catalog's PDF from disk as an attachment.
pub async fn download(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Response, ApiError> {
    let catalog = catalog_service::get_catalog(&state.db, id).await?;
    let pdf_path = catalog.pdf_url.unwrap_or_default();
    let bytes = tokio::fs::read(&pdf_path)
        .await
        .map_err(|_| ApiError::NotFound(format!("Catalog file not found: {}", pdf_path)))?;
    let filename = std::path::Path::new(&pdf_path)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("catalog.pdf");
    info!(id, filename, "download catalog pdf");
    Ok((
        [
            (CONTENT_TYPE, "application/pdf".to_string()),
            (CONTENT_DISPOSITION, format!("attachment; filename=\"{}\"", filename)),
        ],
        bytes,
    )
        .into_response())
}
