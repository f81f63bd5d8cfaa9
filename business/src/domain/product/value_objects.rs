use serde::{Deserialize, Serialize};

/// Where a resolved product came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductSource {
    LocalDatabase,
    ExternalApi,
}

impl std::fmt::Display for ProductSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductSource::LocalDatabase => write!(f, "local_database"),
            ProductSource::ExternalApi => write!(f, "external_api"),
        }
    }
}

impl std::str::FromStr for ProductSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "local_database" => Ok(ProductSource::LocalDatabase),
            "external_api" => Ok(ProductSource::ExternalApi),
            _ => Err(format!("Invalid product source: {}", s)),
        }
    }
}
