use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::lookup::{non_blank, Lookup};

#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EmployeeType {
    pub id: i64,
    pub jenis_pegawai: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Deserialize, Validate, Debug)]
pub struct EmployeeTypePayload {
    #[validate(length(max = 255))]
    pub jenis_pegawai: Option<String>,
}

impl Lookup for EmployeeType {
    const TABLE: &'static str = "jenis_pegawai";
    const COLUMN: &'static str = "jenis_pegawai";
    const DISPLAY_NAME: &'static str = "Jenis Pegawai";

    type Payload = EmployeeTypePayload;

    fn label(payload: &EmployeeTypePayload) -> Option<&str> {
        non_blank(&payload.jenis_pegawai)
    }
}
