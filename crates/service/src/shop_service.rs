use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, NotSet, Set};

use models::shop::{self, Entity as ShopEntity};

use crate::dto::{self, ShopDto};
use crate::errors::ServiceError;

/// List all shops. Zero rows is reported as NotFound, matching the
/// historical behavior of this resource.
pub async fn list_shops<C: ConnectionTrait>(db: &C) -> Result<Vec<ShopDto>, ServiceError> {
    let rows = ShopEntity::find().all(db).await?;
    if rows.is_empty() {
        return Err(ServiceError::NotFound("No shops found".into()));
    }
    Ok(rows.iter().map(dto::shop_to_dto).collect())
}

pub async fn get_shop<C: ConnectionTrait>(db: &C, id: i32) -> Result<ShopDto, ServiceError> {
    let found = ShopEntity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("Shop not found with id: {}", id)))?;
    Ok(dto::shop_to_dto(&found))
}

pub async fn shop_exists<C: ConnectionTrait>(db: &C, id: i32) -> Result<bool, ServiceError> {
    Ok(ShopEntity::find_by_id(id).one(db).await?.is_some())
}

pub async fn create_shop<C: ConnectionTrait>(db: &C, input: ShopDto) -> Result<ShopDto, ServiceError> {
    let (Some(name), Some(address)) = (input.name.as_deref(), input.address.as_deref()) else {
        return Err(ServiceError::Validation("Invalid shop data provided".into()));
    };
    shop::validate_name(name)?;
    shop::validate_address(address)?;
    let created = shop::ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
        address: Set(address.to_string()),
    }
    .insert(db)
    .await?;
    Ok(dto::shop_to_dto(&created))
}

/// Full replace: every mutable field is overwritten from the DTO.
pub async fn update_shop<C: ConnectionTrait>(db: &C, id: i32, input: ShopDto) -> Result<ShopDto, ServiceError> {
    let existing = ShopEntity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("Shop not found with id: {}", id)))?;
    let (Some(name), Some(address)) = (input.name.as_deref(), input.address.as_deref()) else {
        return Err(ServiceError::Validation("Invalid shop data provided".into()));
    };
    shop::validate_name(name)?;
    shop::validate_address(address)?;
    let mut am: shop::ActiveModel = existing.into();
    am.name = Set(name.to_string());
    am.address = Set(address.to_string());
    let updated = am.update(db).await?;
    Ok(dto::shop_to_dto(&updated))
}

/// Name-only patch backing `PATCH /shops/{id}/updateName`.
pub async fn rename_shop<C: ConnectionTrait>(db: &C, id: i32, new_name: &str) -> Result<ShopDto, ServiceError> {
    let existing = ShopEntity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("Shop not found with id: {}", id)))?;
    shop::validate_name(new_name)?;
    let mut am: shop::ActiveModel = existing.into();
    am.name = Set(new_name.to_string());
    let updated = am.update(db).await?;
    Ok(dto::shop_to_dto(&updated))
}

pub async fn delete_shop<C: ConnectionTrait>(db: &C, id: i32) -> Result<(), ServiceError> {
    let res = ShopEntity::delete_by_id(id).exec(db).await?;
    if res.rows_affected == 0 {
        return Err(ServiceError::NotFound(format!("Shop not found with id: {}", id)));
    }
    Ok(())
}
