use healthscan_db::table::ScanHistory;
use sea_query::{Expr, ExprTrait, Order, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Serialize;
use sqlx::{SqlitePool, prelude::FromRow};
use time::{OffsetDateTime, format_description::BorrowedFormatItem, macros::format_description};
use ulid::Ulid;

use crate::Command;

const TIME_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[day] [month repr:short] [year] [hour]:[minute]");

#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct ScanRecord {
    pub id: String,
    pub barcode: String,
    pub product_name: String,
    /// Unix time in milliseconds.
    pub scanned_at: i64,
}

impl ScanRecord {
    /// `07 Mar 2026 14:05`, in UTC.
    pub fn time_label(&self) -> String {
        OffsetDateTime::from_unix_timestamp_nanos(i128::from(self.scanned_at) * 1_000_000)
            .ok()
            .and_then(|at| at.format(TIME_FORMAT).ok())
            .unwrap_or_default()
    }
}

/// Scans of a user, newest first. Scans within the same millisecond keep no
/// particular order.
pub async fn list(
    pool: &SqlitePool,
    user_id: impl Into<String>,
) -> healthscan_shared::Result<Vec<ScanRecord>> {
    let statement = Query::select()
        .columns([
            ScanHistory::Id,
            ScanHistory::Barcode,
            ScanHistory::ProductName,
            ScanHistory::ScannedAt,
        ])
        .from(ScanHistory::Table)
        .and_where(Expr::col(ScanHistory::UserId).eq(user_id.into()))
        .order_by(ScanHistory::ScannedAt, Order::Desc)
        .order_by(ScanHistory::Id, Order::Desc)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, ScanRecord, _>(&sql, values)
        .fetch_all(pool)
        .await?)
}

fn unix_millis(at: OffsetDateTime) -> i64 {
    (at.unix_timestamp_nanos() / 1_000_000) as i64
}

impl Command {
    pub async fn record_scan(
        &self,
        user_id: &str,
        barcode: &str,
        product_name: &str,
    ) -> healthscan_shared::Result<String> {
        self.record_scan_at(user_id, barcode, product_name, OffsetDateTime::now_utc())
            .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn record_scan_at(
        &self,
        user_id: &str,
        barcode: &str,
        product_name: &str,
        scanned_at: OffsetDateTime,
    ) -> healthscan_shared::Result<String> {
        let id = Ulid::new().to_string();
        let statement = Query::insert()
            .into_table(ScanHistory::Table)
            .columns([
                ScanHistory::Id,
                ScanHistory::UserId,
                ScanHistory::Barcode,
                ScanHistory::ProductName,
                ScanHistory::ScannedAt,
            ])
            .values_panic([
                id.to_owned().into(),
                user_id.into(),
                barcode.into(),
                product_name.into(),
                unix_millis(scanned_at).into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.write_db).await?;

        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_label_format() {
        let record = ScanRecord {
            id: Ulid::new().to_string(),
            barcode: "8901063010406".to_owned(),
            product_name: "Marie Gold".to_owned(),
            // 2026-03-07 14:05:30 UTC
            scanned_at: 1_772_892_330_000,
        };

        assert_eq!(record.time_label(), "07 Mar 2026 14:05");
    }
}
