use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, Set, TryIntoModel};

use models::bike::{self, Entity as BikeEntity};
use models::client::{self, Entity as ClientEntity};
use models::rental::{self, Entity as RentalEntity};
use models::shop::{self, Entity as ShopEntity};

use crate::dto::{self, RentalDto};
use crate::errors::ServiceError;

async fn resolve_client<C: ConnectionTrait>(db: &C, name: &str) -> Result<client::Model, ServiceError> {
    client::find_by_name(db, name)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("Client not found with name: {}", name)))
}

async fn resolve_bike<C: ConnectionTrait>(db: &C, id: i32) -> Result<bike::Model, ServiceError> {
    BikeEntity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("Bike not found with id: {}", id)))
}

async fn resolve_shop<C: ConnectionTrait>(db: &C, name: &str) -> Result<shop::Model, ServiceError> {
    shop::find_by_name(db, name)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("Shop not found with name: {}", name)))
}

/// Fetch the three rows a persisted rental references, for DTO flattening.
async fn load_refs<C: ConnectionTrait>(
    db: &C,
    r: &rental::Model,
) -> Result<(client::Model, bike::Model, shop::Model), ServiceError> {
    let renter = ClientEntity::find_by_id(r.client_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("Client not found with id: {}", r.client_id)))?;
    let rented = resolve_bike(db, r.bike_id).await?;
    let owner = ShopEntity::find_by_id(r.shop_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("Shop not found with id: {}", r.shop_id)))?;
    Ok((renter, rented, owner))
}

/// List all rentals. Zero rows is reported as NotFound, matching the
/// historical behavior of this resource.
pub async fn list_rentals<C: ConnectionTrait>(db: &C) -> Result<Vec<RentalDto>, ServiceError> {
    let rows = RentalEntity::find().all(db).await?;
    if rows.is_empty() {
        return Err(ServiceError::NotFound("No rentals found".into()));
    }
    let mut out = Vec::with_capacity(rows.len());
    for r in &rows {
        let (renter, rented, owner) = load_refs(db, r).await?;
        out.push(dto::rental_to_dto(r, &renter, &rented, &owner));
    }
    Ok(out)
}

pub async fn get_rental<C: ConnectionTrait>(db: &C, id: i32) -> Result<RentalDto, ServiceError> {
    let found = RentalEntity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("Rental not found with id: {}", id)))?;
    let (renter, rented, owner) = load_refs(db, &found).await?;
    Ok(dto::rental_to_dto(&found, &renter, &rented, &owner))
}

/// Create a rental. Both dates and all three references must be present;
/// resolution order is client by name, bike by id, shop by name, and nothing
/// is persisted until every reference has resolved.
pub async fn create_rental<C: ConnectionTrait>(db: &C, input: RentalDto) -> Result<RentalDto, ServiceError> {
    if input.start_date.is_none() || input.end_date.is_none() {
        return Err(ServiceError::Validation("Invalid rental data provided".into()));
    }
    let (Some(client_name), Some(bike_id), Some(shop_name)) =
        (input.client.as_deref(), input.bike, input.shop.as_deref())
    else {
        return Err(ServiceError::Validation("Invalid rental data provided".into()));
    };

    let renter = resolve_client(db, client_name).await?;
    let rented = resolve_bike(db, bike_id).await?;
    let owner = resolve_shop(db, shop_name).await?;

    let created = dto::rental_to_active_model(&input, &renter, &rented, &owner)?
        .insert(db)
        .await?;
    Ok(dto::rental_to_dto(&created, &renter, &rented, &owner))
}

/// Field-level partial update: each field is applied only when present in
/// the DTO, and every supplied reference must resolve before it replaces the
/// stored one. Absent fields keep their prior value. This intentionally
/// differs from the full-replace semantics of the other resources.
pub async fn update_rental<C: ConnectionTrait>(db: &C, id: i32, input: RentalDto) -> Result<RentalDto, ServiceError> {
    let existing = RentalEntity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("Rental not found with id: {}", id)))?;

    let mut am: rental::ActiveModel = existing.into();
    if let Some(start) = input.start_date {
        am.start_date = Set(start);
    }
    if let Some(end) = input.end_date {
        am.end_date = Set(end);
    }
    if let Some(price) = input.price {
        am.price = Set(Some(price));
    }
    if let Some(client_name) = input.client.as_deref() {
        let renter = resolve_client(db, client_name).await?;
        am.client_id = Set(renter.id);
    }
    if let Some(shop_name) = input.shop.as_deref() {
        let owner = resolve_shop(db, shop_name).await?;
        am.shop_id = Set(owner.id);
    }
    if let Some(bike_id) = input.bike {
        let rented = resolve_bike(db, bike_id).await?;
        am.bike_id = Set(rented.id);
    }

    // an all-empty DTO patches nothing; echo the stored row
    let updated = if am.is_changed() {
        am.update(db).await?
    } else {
        am.try_into_model().map_err(|e| ServiceError::Db(e.to_string()))?
    };
    let (renter, rented, owner) = load_refs(db, &updated).await?;
    Ok(dto::rental_to_dto(&updated, &renter, &rented, &owner))
}

pub async fn delete_rental<C: ConnectionTrait>(db: &C, id: i32) -> Result<(), ServiceError> {
    let res = RentalEntity::delete_by_id(id).exec(db).await?;
    if res.rows_affected == 0 {
        return Err(ServiceError::NotFound(format!("Rental not found with id: {}", id)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::{BikeDto, ClientDto, ShopDto};
    use crate::test_support::get_db;
    use crate::{bike_service, client_service, shop_service};
    use chrono::NaiveDate;
    use sea_orm::{ColumnTrait, PaginatorTrait, QueryFilter};

    fn shop_dto(name: &str) -> ShopDto {
        ShopDto { id: None, name: Some(name.into()), address: Some("Main St".into()) }
    }

    fn client_dto(name: &str) -> ClientDto {
        ClientDto {
            id: None,
            name: Some(name.into()),
            address: Some("Street river west, 4".into()),
            age: Some("25".into()),
        }
    }

    fn rental_dto(client: &str, bike: i32, shop: &str) -> RentalDto {
        RentalDto {
            id: None,
            client: Some(client.into()),
            bike: Some(bike),
            shop: Some(shop.into()),
            start_date: NaiveDate::from_ymd_opt(2024, 4, 1),
            end_date: NaiveDate::from_ymd_opt(2024, 4, 15),
            price: Some(50.0),
        }
    }

    #[tokio::test]
    async fn rental_crud_service() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() {
            return Ok(());
        }
        let db = get_db().await?;

        let shop_name = format!("svc_rental_shop_{}", std::process::id());
        let client_name = format!("svc_rental_client_{}", std::process::id());
        let s = shop_service::create_shop(&db, shop_dto(&shop_name)).await?;
        let c = client_service::create_client(&db, client_dto(&client_name)).await?;
        let b = bike_service::create_bike(
            &db,
            BikeDto {
                id: None,
                name: Some("Trek X".into()),
                brand: Some("Trek".into()),
                shop: Some(shop_name.clone()),
            },
        )
        .await?;

        let created = create_rental(&db, rental_dto(&client_name, b.id.unwrap(), &shop_name)).await?;
        assert_eq!(created.client.as_deref(), Some(client_name.as_str()));
        assert_eq!(created.bike, b.id);
        assert_eq!(created.price, Some(50.0));

        // partial update: only price changes, everything else is untouched
        let patched = update_rental(
            &db,
            created.id.unwrap(),
            RentalDto {
                id: None,
                client: None,
                bike: None,
                shop: None,
                start_date: None,
                end_date: None,
                price: Some(75.0),
            },
        )
        .await?;
        assert_eq!(patched.price, Some(75.0));
        assert_eq!(patched.start_date, created.start_date);
        assert_eq!(patched.end_date, created.end_date);
        assert_eq!(patched.client, created.client);
        assert_eq!(patched.bike, created.bike);
        assert_eq!(patched.shop, created.shop);

        // unknown client on update is NotFound and leaves the row unchanged
        let err = update_rental(
            &db,
            created.id.unwrap(),
            RentalDto {
                id: None,
                client: Some("NoSuchClient".into()),
                bike: None,
                shop: None,
                start_date: None,
                end_date: None,
                price: None,
            },
        )
        .await;
        assert!(matches!(err, Err(ServiceError::NotFound(_))));

        delete_rental(&db, created.id.unwrap()).await?;
        let gone = get_rental(&db, created.id.unwrap()).await;
        assert!(matches!(gone, Err(ServiceError::NotFound(_))));

        // cleanup
        bike_service::delete_bike(&db, b.id.unwrap()).await?;
        client_service::delete_client(&db, c.id.unwrap()).await?;
        shop_service::delete_shop(&db, s.id.unwrap()).await?;
        Ok(())
    }

    #[tokio::test]
    async fn rental_create_is_atomic_when_bike_is_missing() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() {
            return Ok(());
        }
        let db = get_db().await?;

        let shop_name = format!("svc_atomic_shop_{}", std::process::id());
        let client_name = format!("svc_atomic_client_{}", std::process::id());
        let s = shop_service::create_shop(&db, shop_dto(&shop_name)).await?;
        let c = client_service::create_client(&db, client_dto(&client_name)).await?;

        let err = create_rental(&db, rental_dto(&client_name, i32::MAX, &shop_name)).await;
        assert!(matches!(err, Err(ServiceError::NotFound(_))));

        // the client resolved but the bike did not; no row may reference the client
        let orphaned = RentalEntity::find()
            .filter(rental::Column::ClientId.eq(c.id.unwrap()))
            .count(&db)
            .await?;
        assert_eq!(orphaned, 0);

        client_service::delete_client(&db, c.id.unwrap()).await?;
        shop_service::delete_shop(&db, s.id.unwrap()).await?;
        Ok(())
    }

    #[tokio::test]
    async fn rental_create_requires_dates() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() {
            return Ok(());
        }
        let db = get_db().await?;

        let mut input = rental_dto("whoever", 1, "wherever");
        input.end_date = None;
        let err = create_rental(&db, input).await;
        assert!(matches!(err, Err(ServiceError::Validation(_))));
        Ok(())
    }
}
