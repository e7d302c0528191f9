use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::{
    entity,
    error::{ProductError, ProductResult},
    models::{Product, ProductInput},
    repository::ProductRepository,
};

/// SeaORM-backed [`ProductRepository`]
pub struct PgProductRepository {
    db: DatabaseConnection,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_where<F>(&self, filter: F) -> ProductResult<Vec<Product>>
    where
        F: sea_orm::sea_query::IntoCondition,
    {
        let models = entity::Entity::find()
            .filter(filter)
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn create(&self, input: ProductInput) -> ProductResult<Product> {
        let active_model: entity::ActiveModel = input.into();
        let model = active_model.insert(&self.db).await?;

        tracing::info!(product_id = model.id, "Created product");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: i64) -> ProductResult<Option<Product>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn list(&self) -> ProductResult<Vec<Product>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: i64, input: ProductInput) -> ProductResult<Product> {
        if entity::Entity::find_by_id(id).one(&self.db).await?.is_none() {
            return Err(ProductError::NotFound(id));
        }

        let model = entity::ActiveModel::replacing(id, input)
            .update(&self.db)
            .await
            .map_err(|e| match e {
                // Row removed between the lookup and the write
                DbErr::RecordNotUpdated => ProductError::NotFound(id),
                other => other.into(),
            })?;

        tracing::info!(product_id = id, "Updated product");
        Ok(model.into())
    }

    async fn delete(&self, id: i64) -> ProductResult<bool> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected > 0 {
            tracing::info!(product_id = id, "Deleted product");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn exists_by_id(&self, id: i64) -> ProductResult<bool> {
        Ok(entity::Entity::find_by_id(id).one(&self.db).await?.is_some())
    }

    async fn find_by_category(&self, category: &str) -> ProductResult<Vec<Product>> {
        self.find_where(entity::Column::Category.eq(category)).await
    }

    async fn find_by_price_between(&self, min: f64, max: f64) -> ProductResult<Vec<Product>> {
        self.find_where(entity::Column::Price.between(min, max)).await
    }

    async fn find_by_stock_less_than(&self, threshold: i32) -> ProductResult<Vec<Product>> {
        self.find_where(entity::Column::Stock.lt(threshold)).await
    }
}
