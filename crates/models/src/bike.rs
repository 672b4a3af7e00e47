use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::shop;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "bikes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub brand: String,
    pub shop_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Shop,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Shop => Entity::belongs_to(shop::Entity)
                .from(Column::ShopId)
                .to(shop::Column::Id)
                .into(),
        }
    }
}

impl Related<shop::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Shop.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(name: &str) -> Result<(), ModelError> {
    if name.trim().len() < 3 {
        return Err(ModelError::Validation("name must be at least 3 characters long".into()));
    }
    Ok(())
}

pub fn validate_brand(brand: &str) -> Result<(), ModelError> {
    if brand.trim().is_empty() {
        return Err(ModelError::Validation("brand is required".into()));
    }
    Ok(())
}
