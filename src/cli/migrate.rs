use anyhow::Result;
use sqlx_migrator::{Migrate, Plan};

use crate::config::Config;

pub async fn migrate(config: Config) -> Result<()> {
    let pool = crate::db::create_write_pool(&config.database.url).await?;

    run_migrations(&pool).await?;

    pool.close().await;

    Ok(())
}

pub async fn run_migrations(pool: &sqlx::SqlitePool) -> Result<()> {
    tracing::info!("Running database migrations...");

    let mut conn = pool.acquire().await?;
    healthscan_db::migrator()?
        .run(&mut conn, &Plan::apply_all())
        .await?;

    tracing::info!("Database migrations complete");

    Ok(())
}
