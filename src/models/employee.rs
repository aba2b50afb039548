use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: i64,
    pub nama_pegawai: String,
    pub nik: String,
    pub jenis_pegawai_id: i64,
    pub status_pegawai_id: i64,
    pub unit: String,
    pub sub_unit: String,
    pub pendidikan_id: i64,
    pub tgl_lahir: String,
    pub tpt_lahir: String,
    pub jenkel_id: i64,
    pub agama_id: i64,
    /// Stored image filename, relative to the upload directory.
    pub gambar: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The writable scalar columns of an employee. Every update writes all of
/// them, so a field left out of a request ends up zeroed.
#[derive(Validate, Debug, Default, Clone, PartialEq)]
pub struct EmployeeFields {
    #[validate(length(min = 1, max = 255))]
    pub nama_pegawai: String,
    #[validate(length(max = 32))]
    pub nik: String,
    pub jenis_pegawai_id: i64,
    pub status_pegawai_id: i64,
    #[validate(length(max = 255))]
    pub unit: String,
    #[validate(length(max = 255))]
    pub sub_unit: String,
    pub pendidikan_id: i64,
    #[validate(custom = "validate_birth_date")]
    pub tgl_lahir: String,
    #[validate(length(max = 255))]
    pub tpt_lahir: String,
    pub jenkel_id: i64,
    pub agama_id: i64,
}

fn validate_birth_date(value: &str) -> Result<(), validator::ValidationError> {
    if value.is_empty() || NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok() {
        return Ok(());
    }
    Err(validator::ValidationError::new("tgl_lahir must be formatted as YYYY-MM-DD"))
}
