pub mod client;
pub mod open_food_facts;

pub use client::CatalogClient;
pub use open_food_facts::OpenFoodFactsResolver;
