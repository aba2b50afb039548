use chrono::Utc;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use super::like_pattern;
use crate::models::Lookup;

pub async fn list<T: Lookup>(
    pool: &SqlitePool,
    search: Option<&str>,
) -> Result<Vec<T>, sqlx::Error> {
    let mut query: QueryBuilder<'_, Sqlite> =
        QueryBuilder::new(format!("SELECT * FROM {}", T::TABLE));

    if let Some(search) = search {
        query.push(format!(" WHERE {} LIKE ", T::COLUMN));
        query.push_bind(like_pattern(search));
        query.push(" ESCAPE '\\'");
    }
    query.push(" ORDER BY id");

    query.build_query_as::<T>().fetch_all(pool).await
}

pub async fn find<T: Lookup>(pool: &SqlitePool, id: i64) -> Result<Option<T>, sqlx::Error> {
    let sql = format!("SELECT * FROM {} WHERE id = ?", T::TABLE);
    sqlx::query_as::<_, T>(&sql).bind(id).fetch_optional(pool).await
}

pub async fn insert<T: Lookup>(pool: &SqlitePool, label: &str) -> Result<T, sqlx::Error> {
    let sql = format!(
        "INSERT INTO {} ({}, created_at, updated_at) VALUES (?, ?, ?) RETURNING *",
        T::TABLE,
        T::COLUMN
    );
    let now = Utc::now();
    sqlx::query_as::<_, T>(&sql)
        .bind(label)
        .bind(now)
        .bind(now)
        .fetch_one(pool)
        .await
}

/// Partial update: a `None` label keeps the stored value and only bumps
/// `updated_at`. Returns `None` when no row has this id.
pub async fn update<T: Lookup>(
    pool: &SqlitePool,
    id: i64,
    label: Option<&str>,
) -> Result<Option<T>, sqlx::Error> {
    let sql = format!(
        "UPDATE {table} SET {col} = COALESCE(?, {col}), updated_at = ? WHERE id = ? RETURNING *",
        table = T::TABLE,
        col = T::COLUMN
    );
    sqlx::query_as::<_, T>(&sql)
        .bind(label)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Returns whether a row was removed.
pub async fn delete<T: Lookup>(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let sql = format!("DELETE FROM {} WHERE id = ?", T::TABLE);
    let result = sqlx::query(&sql).bind(id).execute(pool).await?;
    Ok(result.rows_affected() > 0)
}
