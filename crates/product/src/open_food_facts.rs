use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use crate::{BarcodeProduct, FoodDatabase, FoodDatabaseError, ProductSummary};

pub const DEFAULT_BASE_URL: &str = "https://world.openfoodfacts.org";

#[derive(Debug, Clone)]
pub struct OpenFoodFactsSettings {
    pub base_url: String,
    pub user_agent: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub page_size: u32,
}

impl Default for OpenFoodFactsSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            user_agent: concat!("healthscan/", env!("CARGO_PKG_VERSION")).to_owned(),
            timeout: Duration::from_secs(10),
            connect_timeout: Duration::from_secs(5),
            page_size: 5,
        }
    }
}

#[derive(Debug, Clone)]
pub struct OpenFoodFactsClient {
    client: Client,
    base_url: String,
    page_size: u32,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    products: Vec<SearchProduct>,
}

#[derive(Debug, Deserialize)]
struct SearchProduct {
    product_name: Option<String>,
    brands: Option<String>,
    nutriscore_grade: Option<String>,
}

#[derive(Debug, Deserialize)]
struct BarcodeResponse {
    #[serde(default)]
    status: i64,
    product: Option<OffProduct>,
}

#[derive(Debug, Deserialize)]
struct OffProduct {
    product_name: Option<String>,
    brands: Option<String>,
    nutriscore_grade: Option<String>,
    ingredients_text: Option<String>,
}

impl OpenFoodFactsClient {
    pub fn new(settings: OpenFoodFactsSettings) -> Result<Self, FoodDatabaseError> {
        let client = Client::builder()
            .user_agent(settings.user_agent)
            .timeout(settings.timeout)
            .connect_timeout(settings.connect_timeout)
            .build()
            .map_err(|e| FoodDatabaseError::Request(e.to_string()))?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_owned(),
            page_size: settings.page_size,
        })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, FoodDatabaseError> {
        let response = request.send().await.map_err(|e| {
            tracing::warn!(error = %e, "open food facts request failed");
            FoodDatabaseError::Request(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, "open food facts returned an error status");
            return Err(FoodDatabaseError::Status(status.as_u16()));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| FoodDatabaseError::Decode(e.to_string()))
    }
}

#[async_trait::async_trait]
impl FoodDatabase for OpenFoodFactsClient {
    #[tracing::instrument(skip(self))]
    async fn search_by_name(&self, text: &str) -> Result<Vec<ProductSummary>, FoodDatabaseError> {
        let page_size = self.page_size.to_string();
        let request = self
            .client
            .get(format!("{}/cgi/search.pl", self.base_url))
            .query(&[
                ("search_terms", text),
                ("search_simple", "1"),
                ("json", "1"),
                ("page_size", page_size.as_str()),
            ]);

        let response: SearchResponse = self.get_json(request).await?;

        Ok(response
            .products
            .into_iter()
            .map(|p| ProductSummary::from_fields(p.product_name, p.brands, p.nutriscore_grade))
            .collect())
    }

    #[tracing::instrument(skip(self))]
    async fn lookup_by_barcode(
        &self,
        code: &str,
    ) -> Result<Option<BarcodeProduct>, FoodDatabaseError> {
        // the code lands in the request path
        if code.is_empty() || !code.bytes().all(|b| b.is_ascii_digit()) {
            return Ok(None);
        }

        let request = self
            .client
            .get(format!("{}/api/v0/product/{code}.json", self.base_url));

        let response: BarcodeResponse = self.get_json(request).await?;

        if response.status != 1 {
            return Ok(None);
        }

        Ok(response.product.map(|p| BarcodeProduct {
            barcode: code.to_owned(),
            name: p.product_name,
            brand: p.brands,
            nutriscore: p.nutriscore_grade,
            ingredients: p.ingredients_text,
        }))
    }
}
