use chrono::Utc;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use super::like_pattern;
use crate::models::{Employee, EmployeeFields};

pub async fn list(pool: &SqlitePool, search: Option<&str>) -> Result<Vec<Employee>, sqlx::Error> {
    let mut query: QueryBuilder<'_, Sqlite> = QueryBuilder::new("SELECT * FROM pegawai");

    if let Some(search) = search {
        query.push(" WHERE nama_pegawai LIKE ");
        query.push_bind(like_pattern(search));
        query.push(" ESCAPE '\\'");
    }
    query.push(" ORDER BY id");

    query.build_query_as::<Employee>().fetch_all(pool).await
}

pub async fn find(pool: &SqlitePool, id: i64) -> Result<Option<Employee>, sqlx::Error> {
    sqlx::query_as::<_, Employee>("SELECT * FROM pegawai WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn insert(
    pool: &SqlitePool,
    fields: &EmployeeFields,
    gambar: &str,
) -> Result<Employee, sqlx::Error> {
    let now = Utc::now();
    sqlx::query_as::<_, Employee>(
        r#"
        INSERT INTO pegawai (
            nama_pegawai, nik, jenis_pegawai_id, status_pegawai_id, unit, sub_unit,
            pendidikan_id, tgl_lahir, tpt_lahir, jenkel_id, agama_id, gambar,
            created_at, updated_at
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        RETURNING *
        "#,
    )
    .bind(&fields.nama_pegawai)
    .bind(&fields.nik)
    .bind(fields.jenis_pegawai_id)
    .bind(fields.status_pegawai_id)
    .bind(&fields.unit)
    .bind(&fields.sub_unit)
    .bind(fields.pendidikan_id)
    .bind(&fields.tgl_lahir)
    .bind(&fields.tpt_lahir)
    .bind(fields.jenkel_id)
    .bind(fields.agama_id)
    .bind(gambar)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await
}

/// Overwrites every scalar column and the image filename.
pub async fn update(
    pool: &SqlitePool,
    id: i64,
    fields: &EmployeeFields,
    gambar: &str,
) -> Result<Option<Employee>, sqlx::Error> {
    sqlx::query_as::<_, Employee>(
        r#"
        UPDATE pegawai SET
            nama_pegawai = ?, nik = ?, jenis_pegawai_id = ?, status_pegawai_id = ?,
            unit = ?, sub_unit = ?, pendidikan_id = ?, tgl_lahir = ?, tpt_lahir = ?,
            jenkel_id = ?, agama_id = ?, gambar = ?, updated_at = ?
        WHERE id = ?
        RETURNING *
        "#,
    )
    .bind(&fields.nama_pegawai)
    .bind(&fields.nik)
    .bind(fields.jenis_pegawai_id)
    .bind(fields.status_pegawai_id)
    .bind(&fields.unit)
    .bind(&fields.sub_unit)
    .bind(fields.pendidikan_id)
    .bind(&fields.tgl_lahir)
    .bind(&fields.tpt_lahir)
    .bind(fields.jenkel_id)
    .bind(fields.agama_id)
    .bind(gambar)
    .bind(Utc::now())
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Removes the row and hands back what was stored, so the caller can
/// clean up the image.
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<Option<Employee>, sqlx::Error> {
    sqlx::query_as::<_, Employee>("DELETE FROM pegawai WHERE id = ? RETURNING *")
        .bind(id)
        .fetch_optional(pool)
        .await
}
