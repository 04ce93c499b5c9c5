use sea_query::{ColumnDef, Table, TableCreateStatement, TableDropStatement};

use crate::table::HealthProfile;

pub struct CreateTable;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(HealthProfile::Table)
        .col(
            ColumnDef::new(HealthProfile::UserId)
                .string()
                .not_null()
                .string_len(26)
                .primary_key(),
        )
        .col(
            ColumnDef::new(HealthProfile::Condition)
                .text()
                .not_null()
                .default(""),
        )
        .col(
            ColumnDef::new(HealthProfile::Allergies)
                .text()
                .not_null()
                .default(""),
        )
        .col(
            ColumnDef::new(HealthProfile::Diet)
                .string()
                .not_null()
                .string_len(50)
                .default(""),
        )
        .col(ColumnDef::new(HealthProfile::Weight).double().null())
        .col(ColumnDef::new(HealthProfile::Height).double().null())
        .col(ColumnDef::new(HealthProfile::Age).integer().null())
        .col(
            ColumnDef::new(HealthProfile::UpdatedAt)
                .big_integer()
                .not_null(),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(HealthProfile::Table).to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateTable {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}
