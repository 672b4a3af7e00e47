use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, Set};

use models::bike::{self, Entity as BikeEntity};
use models::shop::{self, Entity as ShopEntity};

use crate::dto::{self, BikeDto};
use crate::errors::ServiceError;

fn owner_or_db_error(b: &bike::Model, owner: Option<shop::Model>) -> Result<shop::Model, ServiceError> {
    // the FK guarantees the shop row; a miss here is store corruption
    owner.ok_or_else(|| ServiceError::Db(format!("bike {} references a missing shop", b.id)))
}

async fn resolve_shop<C: ConnectionTrait>(db: &C, input: &BikeDto) -> Result<shop::Model, ServiceError> {
    let Some(shop_name) = input.shop.as_deref() else {
        return Err(ServiceError::Validation("Invalid bike data provided".into()));
    };
    shop::find_by_name(db, shop_name)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("Shop not found with name: {}", shop_name)))
}

/// List all bikes with their shop names. An empty table is a normal result.
pub async fn list_bikes<C: ConnectionTrait>(db: &C) -> Result<Vec<BikeDto>, ServiceError> {
    let rows = BikeEntity::find().find_also_related(ShopEntity).all(db).await?;
    let mut out = Vec::with_capacity(rows.len());
    for (b, s) in &rows {
        let owner = owner_or_db_error(b, s.clone())?;
        out.push(dto::bike_to_dto(b, &owner));
    }
    Ok(out)
}

pub async fn get_bike<C: ConnectionTrait>(db: &C, id: i32) -> Result<BikeDto, ServiceError> {
    let (found, owner) = BikeEntity::find_by_id(id)
        .find_also_related(ShopEntity)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("Bike not found with id: {}", id)))?;
    let owner = owner_or_db_error(&found, owner)?;
    Ok(dto::bike_to_dto(&found, &owner))
}

pub async fn bike_exists<C: ConnectionTrait>(db: &C, id: i32) -> Result<bool, ServiceError> {
    Ok(BikeEntity::find_by_id(id).one(db).await?.is_some())
}

/// Create a bike after resolving its owning shop by name.
pub async fn create_bike<C: ConnectionTrait>(db: &C, input: BikeDto) -> Result<BikeDto, ServiceError> {
    let owner = resolve_shop(db, &input).await?;
    let (Some(name), Some(brand)) = (input.name.as_deref(), input.brand.as_deref()) else {
        return Err(ServiceError::Validation("Invalid bike data provided".into()));
    };
    bike::validate_name(name)?;
    bike::validate_brand(brand)?;
    let created = dto::bike_to_active_model(&input, &owner)?.insert(db).await?;
    Ok(dto::bike_to_dto(&created, &owner))
}

/// Full replace: name, brand and shop are all overwritten from the DTO.
pub async fn update_bike<C: ConnectionTrait>(db: &C, id: i32, input: BikeDto) -> Result<BikeDto, ServiceError> {
    let existing = BikeEntity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("Bike not found with id: {}", id)))?;
    let owner = resolve_shop(db, &input).await?;
    let (Some(name), Some(brand)) = (input.name.as_deref(), input.brand.as_deref()) else {
        return Err(ServiceError::Validation("Invalid bike data provided".into()));
    };
    bike::validate_name(name)?;
    bike::validate_brand(brand)?;
    let mut am: bike::ActiveModel = existing.into();
    am.name = Set(name.to_string());
    am.brand = Set(brand.to_string());
    am.shop_id = Set(owner.id);
    let updated = am.update(db).await?;
    Ok(dto::bike_to_dto(&updated, &owner))
}

/// Name-only patch backing `PATCH /bikes/{id}/updateName`.
pub async fn rename_bike<C: ConnectionTrait>(db: &C, id: i32, new_name: &str) -> Result<BikeDto, ServiceError> {
    let (existing, owner) = BikeEntity::find_by_id(id)
        .find_also_related(ShopEntity)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("Bike not found with id: {}", id)))?;
    let owner = owner_or_db_error(&existing, owner)?;
    bike::validate_name(new_name)?;
    let mut am: bike::ActiveModel = existing.into();
    am.name = Set(new_name.to_string());
    let updated = am.update(db).await?;
    Ok(dto::bike_to_dto(&updated, &owner))
}

pub async fn delete_bike<C: ConnectionTrait>(db: &C, id: i32) -> Result<(), ServiceError> {
    let res = BikeEntity::delete_by_id(id).exec(db).await?;
    if res.rows_affected == 0 {
        return Err(ServiceError::NotFound(format!("Bike not found with id: {}", id)));
    }
    Ok(())
}
