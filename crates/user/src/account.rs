use argon2::{
    Argon2, PasswordHash, PasswordVerifier,
    password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
};
use healthscan_db::table::User as UserTable;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Serialize;
use sqlx::{SqlitePool, prelude::FromRow};
use time::OffsetDateTime;
use ulid::Ulid;
use validator::Validate;

use crate::Command;

const INVALID_CREDENTIALS: &str = "Invalid username or password";

#[derive(Validate)]
pub struct RegisterInput {
    #[validate(length(min = 3, max = 30))]
    pub username: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8, max = 128))]
    pub password: String,
}

#[derive(Validate)]
pub struct LoginInput {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
}

#[derive(FromRow)]
struct UserRow {
    id: String,
    username: String,
    email: String,
    password: String,
}

enum FindType {
    Id(String),
    Username(String),
    Email(String),
}

async fn find_row(pool: &SqlitePool, find: FindType) -> healthscan_shared::Result<Option<UserRow>> {
    let mut statement = Query::select()
        .columns([
            UserTable::Id,
            UserTable::Username,
            UserTable::Email,
            UserTable::Password,
        ])
        .from(UserTable::Table)
        .limit(1)
        .to_owned();

    match find {
        FindType::Id(id) => statement.and_where(Expr::col(UserTable::Id).eq(id)),
        FindType::Username(username) => {
            statement.and_where(Expr::col(UserTable::Username).eq(username))
        }
        FindType::Email(email) => statement.and_where(Expr::col(UserTable::Email).eq(email)),
    };

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, UserRow, _>(&sql, values)
        .fetch_optional(pool)
        .await?)
}

pub async fn find(pool: &SqlitePool, id: impl Into<String>) -> healthscan_shared::Result<Option<User>> {
    Ok(find_row(pool, FindType::Id(id.into()))
        .await?
        .map(|row| User {
            id: row.id,
            username: row.username,
            email: row.email,
        }))
}

/// SQLite names the offending column, e.g. `UNIQUE constraint failed: user.email`.
fn duplicate_message(message: &str) -> &'static str {
    if message.contains("email") {
        "Email already registered"
    } else {
        "Username already exists"
    }
}

impl Command {
    #[tracing::instrument(skip_all, fields(username = %input.username))]
    pub async fn register(&self, input: RegisterInput) -> healthscan_shared::Result<String> {
        input.validate()?;

        if find_row(&self.read_db, FindType::Username(input.username.to_owned()))
            .await?
            .is_some()
        {
            healthscan_shared::user!("Username already exists");
        }

        if find_row(&self.read_db, FindType::Email(input.email.to_owned()))
            .await?
            .is_some()
        {
            healthscan_shared::user!("Email already registered");
        }

        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(input.password.as_bytes(), &salt)?
            .to_string();

        let id = Ulid::new().to_string();
        let statement = Query::insert()
            .into_table(UserTable::Table)
            .columns([
                UserTable::Id,
                UserTable::Username,
                UserTable::Email,
                UserTable::Password,
                UserTable::CreatedAt,
            ])
            .values_panic([
                id.to_owned().into(),
                input.username.into(),
                input.email.into(),
                password_hash.into(),
                OffsetDateTime::now_utc().unix_timestamp().into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        match sqlx::query_with(&sql, values).execute(&self.write_db).await {
            Ok(_) => {}
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                healthscan_shared::user!(duplicate_message(e.message()));
            }
            Err(e) => return Err(e.into()),
        }

        tracing::info!(user_id = %id, "account registered");

        Ok(id)
    }

    #[tracing::instrument(skip_all, fields(username = %input.username))]
    pub async fn login(&self, input: LoginInput) -> healthscan_shared::Result<User> {
        input.validate()?;

        let Some(row) = find_row(&self.read_db, FindType::Username(input.username)).await? else {
            healthscan_shared::user!(INVALID_CREDENTIALS);
        };

        let parsed_hash = PasswordHash::new(&row.password)?;

        if Argon2::default()
            .verify_password(input.password.as_bytes(), &parsed_hash)
            .is_err()
        {
            healthscan_shared::user!(INVALID_CREDENTIALS);
        }

        Ok(User {
            id: row.id,
            username: row.username,
            email: row.email,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_message_names_column() {
        assert_eq!(
            duplicate_message("UNIQUE constraint failed: user.email"),
            "Email already registered"
        );
        assert_eq!(
            duplicate_message("UNIQUE constraint failed: user.username"),
            "Username already exists"
        );
    }
}
