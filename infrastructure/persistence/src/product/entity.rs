use bigdecimal::BigDecimal;
use num_traits::{FromPrimitive, ToPrimitive};
use sqlx::FromRow;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::value_objects::ProductSource;

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub price: BigDecimal,
    pub barcode: String,
    pub stock_quantity: i64,
    pub min_stock_level: Option<i64>,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product {
            id: self.id,
            name: self.name,
            price: self.price.to_f64().unwrap_or_default(),
            barcode: self.barcode,
            stock_quantity: self.stock_quantity,
            description: self.description,
            min_stock_level: self.min_stock_level,
            source: ProductSource::LocalDatabase,
        }
    }

    pub fn from_domain(product: &Product) -> Result<Self, RepositoryError> {
        let price = BigDecimal::from_f64(product.price)
            .ok_or(RepositoryError::Persistence)?
            .round(2);

        Ok(Self {
            id: product.id.clone(),
            name: product.name.clone(),
            description: product.description.clone(),
            price,
            barcode: product.barcode.clone(),
            stock_quantity: product.stock_quantity,
            min_stock_level: product.min_stock_level,
        })
    }
}
