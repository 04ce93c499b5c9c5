use std::sync::Arc;

use serde::Serialize;

use crate::{FoodDatabase, ProductFacts, ProductSummary, assess};

pub const DEFAULT_ALTERNATIVES_LIMIT: usize = 3;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RiskReport {
    pub harmful: bool,
    pub reason: String,
    pub alternatives: Vec<ProductSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Flags a product for a condition and suggests substitutes when it is harmful.
#[derive(Clone)]
pub struct Advisor {
    database: Arc<dyn FoodDatabase>,
    limit: usize,
}

impl Advisor {
    pub fn new(database: Arc<dyn FoodDatabase>) -> Self {
        Self {
            database,
            limit: DEFAULT_ALTERNATIVES_LIMIT,
        }
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// A failing food database never hides the local verdict; its message
    /// lands in [`RiskReport::error`] with no alternatives.
    #[tracing::instrument(skip(self, product), fields(product = %product.name))]
    pub async fn review(&self, product: &ProductFacts, condition: &str) -> RiskReport {
        let assessment = assess(product, condition);
        let mut report = RiskReport {
            harmful: assessment.harmful,
            reason: assessment.reason,
            ..Default::default()
        };

        if !report.harmful {
            return report;
        }

        match self.database.search_by_name(&product.name).await {
            Ok(mut alternatives) => {
                alternatives.truncate(self.limit);
                report.alternatives = alternatives;
            }
            Err(e) => {
                tracing::warn!(error = %e, "alternatives lookup failed");
                report.error = Some(e.to_string());
            }
        }

        report
    }
}
