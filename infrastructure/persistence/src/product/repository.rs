use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductCatalogRepository;

use super::entity::ProductEntity;

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductCatalogRepository for ProductRepositoryPostgres {
    async fn find_by_barcode(&self, barcode: &str) -> Result<Option<Product>, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(
            "SELECT id, name, description, price, barcode, stock_quantity, min_stock_level FROM products WHERE barcode = $1 LIMIT 1",
        )
        .bind(barcode)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn save(&self, product: &Product) -> Result<(), RepositoryError> {
        let entity = ProductEntity::from_domain(product)?;

        sqlx::query(
            r#"INSERT INTO products (id, name, description, price, barcode, stock_quantity, min_stock_level)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                description = EXCLUDED.description,
                price = EXCLUDED.price,
                barcode = EXCLUDED.barcode,
                stock_quantity = EXCLUDED.stock_quantity,
                min_stock_level = EXCLUDED.min_stock_level"#,
        )
        .bind(&entity.id)
        .bind(&entity.name)
        .bind(&entity.description)
        .bind(&entity.price)
        .bind(&entity.barcode)
        .bind(entity.stock_quantity)
        .bind(entity.min_stock_level)
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }
}
