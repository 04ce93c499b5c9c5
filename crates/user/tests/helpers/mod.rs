use std::{path::PathBuf, str::FromStr};

use healthscan_user::{Command, RegisterInput};
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};

pub struct TestState {
    pub pool: SqlitePool,
}

impl TestState {
    pub fn command(&self) -> Command {
        Command::new(self.pool.clone(), self.pool.clone())
    }
}

pub async fn setup_test_state(path: PathBuf) -> anyhow::Result<TestState> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.display()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    let mut conn = pool.acquire().await?;
    healthscan_db::migrator()?
        .run(&mut conn, &Plan::apply_all())
        .await?;

    Ok(TestState { pool })
}

#[allow(dead_code)]
pub async fn create_user(state: &TestState, name: impl Into<String>) -> anyhow::Result<String> {
    let name = name.into();
    let id = state
        .command()
        .register(RegisterInput {
            username: name.to_owned(),
            email: format!("{name}@healthscan.localhost"),
            password: "my_password".to_owned(),
        })
        .await?;

    Ok(id)
}
