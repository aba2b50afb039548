use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::lookup::{non_blank, Lookup};

#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EmploymentStatus {
    pub id: i64,
    pub status_pegawai: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Deserialize, Validate, Debug)]
pub struct EmploymentStatusPayload {
    #[validate(length(max = 255))]
    pub status_pegawai: Option<String>,
}

impl Lookup for EmploymentStatus {
    const TABLE: &'static str = "status_pegawai";
    const COLUMN: &'static str = "status_pegawai";
    const DISPLAY_NAME: &'static str = "Status Pegawai";

    type Payload = EmploymentStatusPayload;

    fn label(payload: &EmploymentStatusPayload) -> Option<&str> {
        non_blank(&payload.status_pegawai)
    }
}
