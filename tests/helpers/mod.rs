#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use healthscan::{
    AppState,
    config::{
        Config, DatabaseConfig, FoodDatabaseConfig, JwtConfig, ObservabilityConfig, ServerConfig,
    },
};
use healthscan_product::{BarcodeProduct, FoodDatabase, FoodDatabaseError, ProductSummary};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::SqlitePool;
use temp_dir::TempDir;
use tower::ServiceExt;

#[derive(Default)]
pub struct FakeFoodDatabase {
    pub products: Vec<ProductSummary>,
    pub barcodes: Vec<BarcodeProduct>,
    pub fail_with: Option<u16>,
}

impl FakeFoodDatabase {
    pub fn with_products(count: usize) -> Self {
        Self {
            products: (0..count)
                .map(|i| {
                    ProductSummary::from_fields(
                        Some(format!("alternative {i}")),
                        Some("Brand".to_owned()),
                        Some("a".to_owned()),
                    )
                })
                .collect(),
            ..Default::default()
        }
    }

    pub fn with_barcode(mut self, barcode: &str, name: &str) -> Self {
        self.barcodes.push(BarcodeProduct {
            barcode: barcode.to_owned(),
            name: Some(name.to_owned()),
            brand: Some("Parle".to_owned()),
            nutriscore: Some("d".to_owned()),
            ingredients: Some("wheat flour, sugar".to_owned()),
        });
        self
    }

    pub fn failing(status: u16) -> Self {
        Self {
            fail_with: Some(status),
            ..Default::default()
        }
    }
}

#[async_trait::async_trait]
impl FoodDatabase for FakeFoodDatabase {
    async fn search_by_name(&self, _text: &str) -> Result<Vec<ProductSummary>, FoodDatabaseError> {
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

pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
    _dir: TempDir,
}

pub fn test_config(url: String) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_owned(),
            port: 3000,
        },
        database: DatabaseConfig {
            url,
            max_connections: 1,
        },
        jwt: JwtConfig {
            secret: "test_secret_key_minimum_32_characters_long".to_owned(),
            issuer: "healthscan".to_owned(),
            audience: "healthscan".to_owned(),
            expiration_days: 7,
        },
        food_database: FoodDatabaseConfig::default(),
        observability: ObservabilityConfig::default(),
    }
}

pub async fn setup_test_app(food_database: FakeFoodDatabase) -> anyhow::Result<TestApp> {
    let dir = TempDir::new()?;
    let url = format!("sqlite:{}", dir.child("db.sqlite3").display());
    let pool = healthscan::db::create_write_pool(&url).await?;
    healthscan::cli::run_migrations(&pool).await?;

    let state = AppState::new(
        test_config(url),
        pool.clone(),
        pool.clone(),
        Arc::new(food_database),
    );

    Ok(TestApp {
        router: healthscan::router(state),
        pool,
        _dir: dir,
    })
}

pub struct TestResponse {
    pub status: StatusCode,
    pub cookie: Option<String>,
    pub body: Value,
}

impl TestApp {
    pub async fn request(
        &self,
        method: &str,
        uri: &str,
        cookie: Option<&str>,
        body: Option<Value>,
    ) -> anyhow::Result<TestResponse> {
        let mut builder = Request::builder().method(method).uri(uri);

        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }

        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&body)?))?,
            None => builder.body(Body::empty())?,
        };

        let response = self.router.clone().oneshot(request).await?;
        let status = response.status();
        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.split(';').next())
            .map(str::to_owned);

        let bytes = response.into_body().collect().await?.to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)?
        };

        Ok(TestResponse {
            status,
            cookie,
            body,
        })
    }

    /// Signs up `name` and returns the session cookie.
    pub async fn signup(&self, name: &str) -> anyhow::Result<String> {
        let response = self
            .request(
                "POST",
                "/accounts/signup",
                None,
                Some(serde_json::json!({
                    "username": name,
                    "email": format!("{name}@healthscan.localhost"),
                    "password": "my_password",
                })),
            )
            .await?;

        anyhow::ensure!(response.body["success"] == true, "signup failed: {}", response.body);

        response
            .cookie
            .ok_or_else(|| anyhow::anyhow!("signup did not set a cookie"))
    }
}
