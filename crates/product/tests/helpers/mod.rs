use std::sync::{
    Mutex,
    atomic::{AtomicUsize, Ordering},
};

use healthscan_product::{BarcodeProduct, FoodDatabase, FoodDatabaseError, ProductSummary};

/// In-memory stand-in for the public food database.
#[derive(Default)]
pub struct FakeFoodDatabase {
    pub products: Vec<ProductSummary>,
    pub barcodes: Vec<BarcodeProduct>,
    pub fail_with: Option<u16>,
    pub searches: AtomicUsize,
    pub last_search: Mutex<Option<String>>,
}

#[allow(dead_code)]
impl FakeFoodDatabase {
    pub fn with_products(count: usize) -> Self {
        Self {
            products: (0..count)
                .map(|i| ProductSummary::from_fields(Some(format!("alternative {i}")), None, None))
                .collect(),
            ..Default::default()
        }
    }

    pub fn failing(status: u16) -> Self {
        Self {
            fail_with: Some(status),
            ..Default::default()
        }
    }

    pub fn search_count(&self) -> usize {
        self.searches.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl FoodDatabase for FakeFoodDatabase {
    async fn search_by_name(&self, text: &str) -> Result<Vec<ProductSummary>, FoodDatabaseError> {
        self.searches.fetch_add(1, Ordering::SeqCst);
        *self.last_search.lock().unwrap() = Some(text.to_owned());

        if let Some(status) = self.fail_with {
            return Err(FoodDatabaseError::Status(status));
        }

        Ok(self.products.clone())
    }

    async fn lookup_by_barcode(
        &self,
        code: &str,
    ) -> Result<Option<BarcodeProduct>, FoodDatabaseError> {
        if let Some(status) = self.fail_with {
            return Err(FoodDatabaseError::Status(status));
        }

        Ok(self.barcodes.iter().find(|p| p.barcode == code).cloned())
    }
}
