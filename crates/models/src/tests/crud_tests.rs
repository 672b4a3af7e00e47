use anyhow::Result;
use chrono::NaiveDate;
use migration::MigratorTrait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, NotSet, Set};

use crate::db::connect;
use crate::{bike, client, rental, shop};

/// Setup test database with migrations
async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = connect().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

#[tokio::test]
async fn test_shop_crud() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }

    let db = setup_test_db().await?;

    let created = shop::ActiveModel {
        id: NotSet,
        name: Set("Carrefour".into()),
        address: Set("Main St".into()),
    }
    .insert(&db)
    .await?;
    assert!(created.id > 0);

    let found = shop::Entity::find_by_id(created.id).one(&db).await?;
    assert_eq!(found.as_ref().map(|s| s.name.as_str()), Some("Carrefour"));

    let by_name = shop::find_by_name(&db, "Carrefour").await?;
    assert!(by_name.is_some());
    let missing = shop::find_by_name(&db, "NoSuchShop").await?;
    assert!(missing.is_none());

    shop::Entity::delete_by_id(created.id).exec(&db).await?;
    let after = shop::Entity::find_by_id(created.id).one(&db).await?;
    assert!(after.is_none());
    Ok(())
}

#[tokio::test]
async fn test_rental_references() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }

    let db = setup_test_db().await?;

    let s = shop::ActiveModel {
        id: NotSet,
        name: Set("RentalShop".into()),
        address: Set("Pier 9".into()),
    }
    .insert(&db)
    .await?;
    let c = client::ActiveModel {
        id: NotSet,
        name: Set("Alan".into()),
        address: Set("Street river west, 4".into()),
        age: Set(Some("25".into())),
    }
    .insert(&db)
    .await?;
    let b = bike::ActiveModel {
        id: NotSet,
        name: Set("Trek X".into()),
        brand: Set("Trek".into()),
        shop_id: Set(s.id),
    }
    .insert(&db)
    .await?;

    let r = rental::ActiveModel {
        id: NotSet,
        client_id: Set(c.id),
        bike_id: Set(b.id),
        shop_id: Set(s.id),
        start_date: Set(NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()),
        end_date: Set(NaiveDate::from_ymd_opt(2024, 4, 15).unwrap()),
        price: Set(Some(50.0)),
    }
    .insert(&db)
    .await?;

    let (found, found_shop) = rental::Entity::find_by_id(r.id)
        .find_also_related(shop::Entity)
        .one(&db)
        .await?
        .expect("rental row");
    assert_eq!(found.client_id, c.id);
    assert_eq!(found_shop.map(|x| x.id), Some(s.id));

    // cleanup in FK order, rentals first
    rental::Entity::delete_by_id(r.id).exec(&db).await?;
    bike::Entity::delete_by_id(b.id).exec(&db).await?;
    client::Entity::delete_by_id(c.id).exec(&db).await?;
    shop::Entity::delete_by_id(s.id).exec(&db).await?;
    Ok(())
}
