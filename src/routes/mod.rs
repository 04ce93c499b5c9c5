use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use healthscan_product::{Advisor, FoodDatabase};
use sqlx::SqlitePool;

mod accounts;
mod diet;
mod health;
mod products;
mod profile;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub command: healthscan_user::Command,
    pub read_db: SqlitePool,
    pub food_database: Arc<dyn FoodDatabase>,
    pub advisor: Advisor,
}

impl AppState {
    pub fn new(
        config: crate::config::Config,
        read_db: SqlitePool,
        write_db: SqlitePool,
        food_database: Arc<dyn FoodDatabase>,
    ) -> Self {
        let advisor =
            Advisor::new(food_database.clone()).limit(config.food_database.alternatives_limit);

        Self {
            config,
            command: healthscan_user::Command::new(read_db.clone(), write_db),
            read_db,
            food_database,
            advisor,
        }
    }
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .with_state(app_state.read_db.clone())
        .route("/accounts/signup", post(accounts::signup))
        .route("/accounts/login", post(accounts::login))
        .route("/accounts/logout", post(accounts::logout))
        .route("/accounts/profile", get(accounts::profile))
        .route("/accounts/health-profile", post(profile::save))
        .route("/accounts/health-summary", get(profile::summary))
        .route("/accounts/diet-plan", get(diet::plan))
        .route("/accounts/alternatives", post(products::alternatives))
        .route("/accounts/history", get(products::history))
        .route("/products/risk", post(products::risk))
        .route("/products/scan", post(products::scan))
        .with_state(app_state)
}
