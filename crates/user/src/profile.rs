use healthscan_db::table::HealthProfile as HealthProfileTable;
use sea_query::{Expr, ExprTrait, OnConflict, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::{Deserialize, Serialize};
use sqlx::{SqlitePool, prelude::FromRow};
use time::OffsetDateTime;
use validator::Validate;

use crate::Command;

#[derive(Debug, Clone, Default, Validate, Deserialize)]
pub struct SaveProfileInput {
    #[serde(default)]
    #[validate(length(max = 500))]
    pub condition: String,
    #[serde(default)]
    #[validate(length(max = 500))]
    pub allergies: String,
    #[serde(default)]
    #[validate(length(max = 50))]
    pub diet: String,
    #[validate(range(min = 0.0, max = 500.0))]
    pub weight: Option<f64>,
    #[validate(range(min = 0.0, max = 300.0))]
    pub height: Option<f64>,
    #[validate(range(min = 0, max = 150))]
    pub age: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, FromRow)]
pub struct HealthProfile {
    pub user_id: String,
    pub condition: String,
    pub allergies: String,
    pub diet: String,
    pub weight: Option<f64>,
    pub height: Option<f64>,
    pub age: Option<i32>,
    pub updated_at: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthSummary {
    pub condition: String,
    pub allergies: String,
    pub diet: String,
}

fn or_default(value: &str, default: &str) -> String {
    if value.is_empty() {
        default.to_owned()
    } else {
        value.to_owned()
    }
}

impl HealthProfile {
    pub fn summary(&self) -> HealthSummary {
        HealthSummary {
            condition: or_default(&self.condition, "None"),
            allergies: or_default(&self.allergies, "None"),
            diet: or_default(&self.diet, "Not set"),
        }
    }
}

pub async fn load(
    pool: &SqlitePool,
    user_id: impl Into<String>,
) -> healthscan_shared::Result<Option<HealthProfile>> {
    let statement = Query::select()
        .columns([
            HealthProfileTable::UserId,
            HealthProfileTable::Condition,
            HealthProfileTable::Allergies,
            HealthProfileTable::Diet,
            HealthProfileTable::Weight,
            HealthProfileTable::Height,
            HealthProfileTable::Age,
            HealthProfileTable::UpdatedAt,
        ])
        .from(HealthProfileTable::Table)
        .and_where(Expr::col(HealthProfileTable::UserId).eq(user_id.into()))
        .limit(1)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, HealthProfile, _>(&sql, values)
        .fetch_optional(pool)
        .await?)
}

impl Command {
    /// Creates or replaces the profile of a user.
    #[tracing::instrument(skip(self, input))]
    pub async fn save_profile(
        &self,
        user_id: &str,
        input: SaveProfileInput,
    ) -> healthscan_shared::Result<()> {
        input.validate()?;

        let statement = Query::insert()
            .into_table(HealthProfileTable::Table)
            .columns([
                HealthProfileTable::UserId,
                HealthProfileTable::Condition,
                HealthProfileTable::Allergies,
                HealthProfileTable::Diet,
                HealthProfileTable::Weight,
                HealthProfileTable::Height,
                HealthProfileTable::Age,
                HealthProfileTable::UpdatedAt,
            ])
            .values_panic([
                user_id.into(),
                input.condition.into(),
                input.allergies.into(),
                input.diet.into(),
                input.weight.into(),
                input.height.into(),
                input.age.into(),
                OffsetDateTime::now_utc().unix_timestamp().into(),
            ])
            .on_conflict(
                OnConflict::column(HealthProfileTable::UserId)
                    .update_columns([
                        HealthProfileTable::Condition,
                        HealthProfileTable::Allergies,
                        HealthProfileTable::Diet,
                        HealthProfileTable::Weight,
                        HealthProfileTable::Height,
                        HealthProfileTable::Age,
                        HealthProfileTable::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.write_db).await?;

        Ok(())
    }
}
