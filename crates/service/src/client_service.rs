use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, NotSet, Set};

use models::client::{self, Entity as ClientEntity};

use crate::dto::{self, ClientDto};
use crate::errors::ServiceError;

/// List all clients. Unlike shops and catalogs, an empty table is a normal
/// 200 response with an empty list.
pub async fn list_clients<C: ConnectionTrait>(db: &C) -> Result<Vec<ClientDto>, ServiceError> {
    let rows = ClientEntity::find().all(db).await?;
    Ok(rows.iter().map(dto::client_to_dto).collect())
}

pub async fn get_client<C: ConnectionTrait>(db: &C, id: i32) -> Result<ClientDto, ServiceError> {
    let found = ClientEntity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("Client not found with id: {}", id)))?;
    Ok(dto::client_to_dto(&found))
}

pub async fn client_exists<C: ConnectionTrait>(db: &C, id: i32) -> Result<bool, ServiceError> {
    Ok(ClientEntity::find_by_id(id).one(db).await?.is_some())
}

pub async fn create_client<C: ConnectionTrait>(db: &C, input: ClientDto) -> Result<ClientDto, ServiceError> {
    let (Some(name), Some(address)) = (input.name.as_deref(), input.address.as_deref()) else {
        return Err(ServiceError::Validation("Invalid client data provided".into()));
    };
    client::validate_name(name)?;
    client::validate_address(address)?;
    let created = client::ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
        address: Set(address.to_string()),
        age: Set(input.age.clone()),
    }
    .insert(db)
    .await?;
    Ok(dto::client_to_dto(&created))
}

/// Full replace: every mutable field is overwritten from the DTO.
pub async fn update_client<C: ConnectionTrait>(db: &C, id: i32, input: ClientDto) -> Result<ClientDto, ServiceError> {
    let existing = ClientEntity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("Client not found with id: {}", id)))?;
    let (Some(name), Some(address)) = (input.name.as_deref(), input.address.as_deref()) else {
        return Err(ServiceError::Validation("Invalid client data provided".into()));
    };
    client::validate_name(name)?;
    client::validate_address(address)?;
    let mut am: client::ActiveModel = existing.into();
    am.name = Set(name.to_string());
    am.address = Set(address.to_string());
    am.age = Set(input.age.clone());
    let updated = am.update(db).await?;
    Ok(dto::client_to_dto(&updated))
}

/// Name-only patch backing `PATCH /clients/{id}/updateName`.
pub async fn rename_client<C: ConnectionTrait>(db: &C, id: i32, new_name: &str) -> Result<ClientDto, ServiceError> {
    let existing = ClientEntity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("Client not found with id: {}", id)))?;
    client::validate_name(new_name)?;
    let mut am: client::ActiveModel = existing.into();
    am.name = Set(new_name.to_string());
    let updated = am.update(db).await?;
    Ok(dto::client_to_dto(&updated))
}

pub async fn delete_client<C: ConnectionTrait>(db: &C, id: i32) -> Result<(), ServiceError> {
    let res = ClientEntity::delete_by_id(id).exec(db).await?;
    if res.rows_affected == 0 {
        return Err(ServiceError::NotFound(format!("Client not found with id: {}", id)));
    }
    Ok(())
}
