use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{bike, client, shop};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "rentals")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub client_id: i32,
    pub bike_id: i32,
    pub shop_id: i32,
    pub start_date: Date,
    pub end_date: Date,
    pub price: Option<f64>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Client,
    Bike,
    Shop,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Client => Entity::belongs_to(client::Entity)
                .from(Column::ClientId)
                .to(client::Column::Id)
                .into(),
            Relation::Bike => Entity::belongs_to(bike::Entity)
                .from(Column::BikeId)
                .to(bike::Column::Id)
                .into(),
            Relation::Shop => Entity::belongs_to(shop::Entity)
                .from(Column::ShopId)
                .to(shop::Column::Id)
                .into(),
        }
    }
}

impl Related<client::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Client.def()
    }
}

impl Related<bike::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bike.def()
    }
}

impl Related<shop::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Shop.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
