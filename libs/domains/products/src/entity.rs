use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::models::{Product, ProductInput};

/// Sea-ORM Entity for the products table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    #[sea_orm(column_type = "Double")]
    pub price: f64,
    pub stock: i32,
    pub category: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Product {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            price: model.price,
            stock: model.stock,
            category: model.category,
        }
    }
}

/// Insert model; the id is left to the database sequence.
impl From<ProductInput> for ActiveModel {
    fn from(input: ProductInput) -> Self {
        let stock = input.stock_or_default();
        ActiveModel {
            id: NotSet,
            name: Set(input.name),
            description: Set(input.description),
            price: Set(input.price.unwrap_or_default()),
            stock: Set(stock),
            category: Set(input.category),
        }
    }
}

impl ActiveModel {
    /// Full overwrite of every mutable column for `id`.
    pub fn replacing(id: i64, input: ProductInput) -> Self {
        ActiveModel {
            id: Set(id),
            ..input.into()
        }
    }
}
