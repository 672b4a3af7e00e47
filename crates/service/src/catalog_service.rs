use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, NotSet, Set};

use models::catalog::{self, Entity as CatalogEntity};

use crate::dto::{self, CatalogDto};
use crate::errors::ServiceError;

/// List all catalogs. Zero rows is reported as NotFound, matching the
/// historical behavior of this resource.
pub async fn list_catalogs<C: ConnectionTrait>(db: &C) -> Result<Vec<CatalogDto>, ServiceError> {
    let rows = CatalogEntity::find().all(db).await?;
    if rows.is_empty() {
        return Err(ServiceError::NotFound("No catalogs found".into()));
    }
    Ok(rows.iter().map(dto::catalog_to_dto).collect())
}

pub async fn get_catalog<C: ConnectionTrait>(db: &C, id: i32) -> Result<CatalogDto, ServiceError> {
    let found = CatalogEntity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("Catalog not found with id: {}", id)))?;
    Ok(dto::catalog_to_dto(&found))
}

pub async fn create_catalog<C: ConnectionTrait>(db: &C, input: CatalogDto) -> Result<CatalogDto, ServiceError> {
    let (Some(name), Some(pdf_url)) = (input.name.as_deref(), input.pdf_url.as_deref()) else {
        return Err(ServiceError::Validation("Invalid catalog data provided".into()));
    };
    catalog::validate_name(name)?;
    catalog::validate_pdf_url(pdf_url)?;
    let created = catalog::ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
        description: Set(input.description.clone()),
        pdf_url: Set(pdf_url.to_string()),
    }
    .insert(db)
    .await?;
    Ok(dto::catalog_to_dto(&created))
}

/// Full replace: every mutable field is overwritten from the DTO.
pub async fn update_catalog<C: ConnectionTrait>(db: &C, id: i32, input: CatalogDto) -> Result<CatalogDto, ServiceError> {
    let existing = CatalogEntity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("Catalog not found with id: {}", id)))?;
    let (Some(name), Some(pdf_url)) = (input.name.as_deref(), input.pdf_url.as_deref()) else {
        return Err(ServiceError::Validation("Invalid catalog data provided".into()));
    };
    catalog::validate_name(name)?;
    catalog::validate_pdf_url(pdf_url)?;
    let mut am: catalog::ActiveModel = existing.into();
    am.name = Set(name.to_string());
    am.description = Set(input.description.clone());
    am.pdf_url = Set(pdf_url.to_string());
    let updated = am.update(db).await?;
    Ok(dto::catalog_to_dto(&updated))
}

pub async fn delete_catalog<C: ConnectionTrait>(db: &C, id: i32) -> Result<(), ServiceError> {
    let res = CatalogEntity::delete_by_id(id).exec(db).await?;
    if res.rows_affected == 0 {
        return Err(ServiceError::NotFound(format!("Catalog not found with id: {}", id)));
    }
    Ok(())
}
