use sea_query::{
    ColumnDef, Index, IndexCreateStatement, IndexDropStatement, Table, TableCreateStatement,
    TableDropStatement,
};

use crate::table::ScanHistory;

pub struct CreateTable;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(ScanHistory::Table)
        .col(
            ColumnDef::new(ScanHistory::Id)
                .string()
                .not_null()
                .string_len(26)
                .primary_key(),
        )
        .col(
            ColumnDef::new(ScanHistory::UserId)
                .string()
                .not_null()
                .string_len(26),
        )
        .col(
            ColumnDef::new(ScanHistory::Barcode)
                .string()
                .not_null()
                .string_len(50),
        )
        .col(
            ColumnDef::new(ScanHistory::ProductName)
                .string()
                .not_null()
                .string_len(255),
        )
        .col(
            ColumnDef::new(ScanHistory::ScannedAt)
                .big_integer()
                .not_null(),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(ScanHistory::Table).to_owned()
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

pub struct CreateUserIdx;

fn create_user_idx() -> IndexCreateStatement {
    Index::create()
        .name("idx_scan_history_user_scanned_at")
        .table(ScanHistory::Table)
        .col(ScanHistory::UserId)
        .col(ScanHistory::ScannedAt)
        .to_owned()
}

fn drop_user_idx() -> IndexDropStatement {
    Index::drop()
        .name("idx_scan_history_user_scanned_at")
        .table(ScanHistory::Table)
        .to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateUserIdx {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_user_idx().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_user_idx().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}
