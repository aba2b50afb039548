use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::sqlite::SqliteRow;
use validator::Validate;

/// A single-label reference table (`id`, one text column, timestamps).
///
/// The generic handlers in `handlers::lookup` and the store in `db::lookup`
/// are written once against this trait. `TABLE` and `COLUMN` are spliced
/// into SQL, so implementors must only use fixed identifiers.
pub trait Lookup:
    for<'r> sqlx::FromRow<'r, SqliteRow> + Serialize + Send + Unpin + 'static
{
    const TABLE: &'static str;
    const COLUMN: &'static str;
    /// Human readable name used in response messages.
    const DISPLAY_NAME: &'static str;

    type Payload: DeserializeOwned + Validate + 'static;

    /// The submitted label, with blank values treated as absent.
    fn label(payload: &Self::Payload) -> Option<&str>;
}

pub(crate) fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
