use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum FoodDatabaseError {
    #[error("food database request failed: {0}")]
    Request(String),

    #[error("food database returned status {0}")]
    Status(u16),

    #[error("food database response could not be decoded: {0}")]
    Decode(String),
}

/// A search hit, already defaulted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSummary {
    pub name: String,
    pub brand: String,
    pub nutriscore: String,
}

impl ProductSummary {
    pub fn from_fields(
        name: Option<String>,
        brand: Option<String>,
        nutriscore: Option<String>,
    ) -> Self {
        Self {
            name: name.unwrap_or_else(|| "Unknown".to_owned()),
            brand: brand.unwrap_or_else(|| "Unknown".to_owned()),
            nutriscore: nutriscore.unwrap_or_else(|| "N/A".to_owned()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarcodeProduct {
    pub barcode: String,
    pub name: Option<String>,
    pub brand: Option<String>,
    pub nutriscore: Option<String>,
    pub ingredients: Option<String>,
}

/// Public product catalog queried by name or barcode.
#[async_trait::async_trait]
pub trait FoodDatabase: Send + Sync {
    async fn search_by_name(&self, text: &str) -> Result<Vec<ProductSummary>, FoodDatabaseError>;

    /// `Ok(None)` when the database does not know the barcode.
    async fn lookup_by_barcode(
        &self,
        code: &str,
    ) -> Result<Option<BarcodeProduct>, FoodDatabaseError>;
}
