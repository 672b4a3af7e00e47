//! Transfer objects and entity conversion.
//!
//! DTOs mirror their entities field for field except where relational
//! references are flattened: a bike carries its shop's name, a rental carries
//! the client name, bike id and shop name. Resolving those references back to
//! rows is the workflow's job, so the entity-direction converters take the
//! already-resolved models as inputs.

use chrono::NaiveDate;
use sea_orm::{NotSet, Set};
use serde::{Deserialize, Serialize};

use models::{bike, catalog, client, rental, shop};

use crate::errors::ServiceError;

/// Wire format for rental dates, `dd-MM-yyyy` as in `15-04-2024`.
pub mod rental_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%d-%m-%Y";

    pub fn serialize<S>(date: &Option<NaiveDate>, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(d) => s.serialize_str(&d.format(FORMAT).to_string()),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(d: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(d)? {
            Some(raw) => NaiveDate::parse_from_str(&raw, FORMAT)
                .map(Some)
                .map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopDto {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientDto {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub address: Option<String>,
    pub age: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BikeDto {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub brand: Option<String>,
    /// Name of the owning shop.
    pub shop: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogDto {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub pdf_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalDto {
    pub id: Option<i32>,
    /// Client name, resolved against the clients table.
    pub client: Option<String>,
    /// Bike id, resolved against the bikes table.
    pub bike: Option<i32>,
    /// Shop name, resolved against the shops table.
    pub shop: Option<String>,
    #[serde(default, with = "rental_date")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, with = "rental_date")]
    pub end_date: Option<NaiveDate>,
    pub price: Option<f64>,
}

pub fn shop_to_dto(m: &shop::Model) -> ShopDto {
    ShopDto {
        id: Some(m.id),
        name: Some(m.name.clone()),
        address: Some(m.address.clone()),
    }
}

pub fn client_to_dto(m: &client::Model) -> ClientDto {
    ClientDto {
        id: Some(m.id),
        name: Some(m.name.clone()),
        address: Some(m.address.clone()),
        age: m.age.clone(),
    }
}

pub fn bike_to_dto(m: &bike::Model, owner: &shop::Model) -> BikeDto {
    BikeDto {
        id: Some(m.id),
        name: Some(m.name.clone()),
        brand: Some(m.brand.clone()),
        shop: Some(owner.name.clone()),
    }
}

pub fn catalog_to_dto(m: &catalog::Model) -> CatalogDto {
    CatalogDto {
        id: Some(m.id),
        name: Some(m.name.clone()),
        description: m.description.clone(),
        pdf_url: Some(m.pdf_url.clone()),
    }
}

pub fn rental_to_dto(
    m: &rental::Model,
    renter: &client::Model,
    rented: &bike::Model,
    owner: &shop::Model,
) -> RentalDto {
    RentalDto {
        id: Some(m.id),
        client: Some(renter.name.clone()),
        bike: Some(rented.id),
        shop: Some(owner.name.clone()),
        start_date: Some(m.start_date),
        end_date: Some(m.end_date),
        price: m.price,
    }
}

/// Build a new bike row from its DTO and the resolved owning shop.
pub fn bike_to_active_model(dto: &BikeDto, owner: &shop::Model) -> Result<bike::ActiveModel, ServiceError> {
    let (Some(name), Some(brand)) = (dto.name.as_deref(), dto.brand.as_deref()) else {
        return Err(ServiceError::Validation("Invalid bike data provided".into()));
    };
    Ok(bike::ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
        brand: Set(brand.to_string()),
        shop_id: Set(owner.id),
    })
}

/// Build a new rental row from its DTO and the three resolved references.
pub fn rental_to_active_model(
    dto: &RentalDto,
    renter: &client::Model,
    rented: &bike::Model,
    owner: &shop::Model,
) -> Result<rental::ActiveModel, ServiceError> {
    let (Some(start_date), Some(end_date)) = (dto.start_date, dto.end_date) else {
        return Err(ServiceError::Validation("Invalid rental data provided".into()));
    };
    Ok(rental::ActiveModel {
        id: NotSet,
        client_id: Set(renter.id),
        bike_id: Set(rented.id),
        shop_id: Set(owner.id),
        start_date: Set(start_date),
        end_date: Set(end_date),
        price: Set(dto.price),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_shop() -> shop::Model {
        shop::Model { id: 7, name: "Carrefour".into(), address: "Main St".into() }
    }

    #[test]
    fn shop_round_trip_keeps_scalar_fields() {
        let dto = shop_to_dto(&sample_shop());
        assert_eq!(dto.id, Some(7));
        assert_eq!(dto.name.as_deref(), Some("Carrefour"));
        assert_eq!(dto.address.as_deref(), Some("Main St"));
    }

    #[test]
    fn bike_dto_flattens_shop_name() {
        let bike = bike::Model { id: 3, name: "Trek X".into(), brand: "Trek".into(), shop_id: 7 };
        let dto = bike_to_dto(&bike, &sample_shop());
        assert_eq!(dto.shop.as_deref(), Some("Carrefour"));
        assert_eq!(dto.brand.as_deref(), Some("Trek"));
    }

    #[test]
    fn rental_dto_uses_wire_date_format_and_camel_case() {
        let shop = sample_shop();
        let client = client::Model {
            id: 1,
            name: "Alan".into(),
            address: "Street river west, 4".into(),
            age: Some("25".into()),
        };
        let bike = bike::Model { id: 3, name: "Trek X".into(), brand: "Trek".into(), shop_id: 7 };
        let rental = rental::Model {
            id: 9,
            client_id: 1,
            bike_id: 3,
            shop_id: 7,
            start_date: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 4, 15).unwrap(),
            price: Some(50.0),
        };
        let json = serde_json::to_value(rental_to_dto(&rental, &client, &bike, &shop)).unwrap();
        assert_eq!(json["startDate"], "01-04-2024");
        assert_eq!(json["endDate"], "15-04-2024");
        assert_eq!(json["client"], "Alan");
        assert_eq!(json["bike"], 3);
        assert_eq!(json["shop"], "Carrefour");
        assert_eq!(json["price"], 50.0);
    }

    #[test]
    fn rental_dto_parses_wire_dates() {
        let dto: RentalDto = serde_json::from_str(
            r#"{"client":"Alan","bike":3,"shop":"Carrefour","startDate":"01-04-2024","endDate":"15-04-2024"}"#,
        )
        .unwrap();
        assert_eq!(dto.start_date, NaiveDate::from_ymd_opt(2024, 4, 1));
        assert_eq!(dto.end_date, NaiveDate::from_ymd_opt(2024, 4, 15));
        assert_eq!(dto.price, None);
    }

    #[test]
    fn rental_dto_rejects_bad_date() {
        let res = serde_json::from_str::<RentalDto>(r#"{"startDate":"2024-04-01"}"#);
        assert!(res.is_err());
    }

    #[test]
    fn rental_active_model_requires_both_dates() {
        let shop = sample_shop();
        let client = client::Model { id: 1, name: "Alan".into(), address: "x".into(), age: None };
        let bike = bike::Model { id: 3, name: "Trek X".into(), brand: "Trek".into(), shop_id: 7 };
        let dto = RentalDto {
            id: None,
            client: Some("Alan".into()),
            bike: Some(3),
            shop: Some("Carrefour".into()),
            start_date: Some(NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()),
            end_date: None,
            price: None,
        };
        assert!(rental_to_active_model(&dto, &client, &bike, &shop).is_err());
    }

    #[test]
    fn rental_active_model_maps_resolved_references() {
        let shop = sample_shop();
        let client = client::Model { id: 1, name: "Alan".into(), address: "x".into(), age: None };
        let bike = bike::Model { id: 3, name: "Trek X".into(), brand: "Trek".into(), shop_id: 7 };
        let dto = RentalDto {
            id: None,
            client: Some("Alan".into()),
            bike: Some(3),
            shop: Some("Carrefour".into()),
            start_date: NaiveDate::from_ymd_opt(2024, 4, 1),
            end_date: NaiveDate::from_ymd_opt(2024, 4, 15),
            price: Some(50.0),
        };
        let am = rental_to_active_model(&dto, &client, &bike, &shop).unwrap();
        assert_eq!(am.client_id.clone().unwrap(), 1);
        assert_eq!(am.bike_id.clone().unwrap(), 3);
        assert_eq!(am.shop_id.clone().unwrap(), 7);
        assert_eq!(am.price.clone().unwrap(), Some(50.0));
    }

    #[test]
    fn catalog_dto_uses_camel_case_pdf_url() {
        let m = catalog::Model {
            id: 2,
            name: "Bikes catalog".into(),
            description: None,
            pdf_url: "data/catalogs/bikes.pdf".into(),
        };
        let json = serde_json::to_value(catalog_to_dto(&m)).unwrap();
        assert_eq!(json["pdfUrl"], "data/catalogs/bikes.pdf");
    }
}
