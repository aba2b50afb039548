use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::lookup::{non_blank, Lookup};

#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Gender {
    pub id: i64,
    pub jenis_kelamin: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Deserialize, Validate, Debug)]
pub struct GenderPayload {
    #[validate(length(max = 255))]
    pub jenis_kelamin: Option<String>,
}

impl Lookup for Gender {
    const TABLE: &'static str = "jenis_kelamin";
    const COLUMN: &'static str = "jenis_kelamin";
    const DISPLAY_NAME: &'static str = "Jenis Kelamin";

    type Payload = GenderPayload;

    fn label(payload: &GenderPayload) -> Option<&str> {
        non_blank(&payload.jenis_kelamin)
    }
}
