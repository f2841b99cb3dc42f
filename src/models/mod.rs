pub use chrono::{DateTime, Utc};
pub use serde::{Deserialize, Serialize};

pub use crate::error::{Error, Result};
pub use serde_json::Value as JsonValue;

pub type UtcDateTime = DateTime<Utc>;
pub type JsonMap = serde_json::Map<String, JsonValue>;

/// Collection ids are database-assigned. Route segments arrive as text and
/// must parse before any query runs.
pub fn parse_id(raw: &str) -> Result<i64> {
  raw
    .parse()
    .map_err(|_| Error::MalformedId(raw.to_string()))
}

// Every collection is a table of (id, doc, created_at, updated_at) where doc
// is the JSONB document stored verbatim at create time. This macro generates
// the struct plus the operations whose SQL is identical across collections:
// find by id, shallow-merge update, delete. Creation and list queries differ
// per collection and live in each module.
macro_rules! collection_model {
  ($model:ident, $table:literal) => {
    #[derive(Debug, serde::Serialize, sqlx::FromRow)]
    #[serde(rename_all = "camelCase")]
    pub struct $model {
      pub id: i64,
      #[serde(flatten)]
      pub doc: JsonValue,
      pub created_at: UtcDateTime,
      #[serde(skip_serializing_if = "Option::is_none")]
      pub updated_at: Option<UtcDateTime>,
    }

    impl $model {
      pub async fn find(site: &Site, id: i64) -> Result<Self> {
        sqlx::query_as::<_, Self>(concat!(
          "SELECT id, doc, created_at, updated_at FROM ",
          $table,
          " WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&site.db)
        .await?
        .ok_or(Error::NotFound)
      }

      // Shallow merge: jsonb concatenation overwrites top-level keys
      // wholesale, nested values are replaced, not merged.
      pub async fn update(site: &Site, id: i64, changes: JsonMap) -> Result<Self> {
        sqlx::query_as::<_, Self>(concat!(
          "UPDATE ",
          $table,
          " SET doc = doc || $2, updated_at = now() \
           WHERE id = $1 \
           RETURNING id, doc, created_at, updated_at"
        ))
        .bind(id)
        .bind(JsonValue::Object(changes))
        .fetch_optional(&site.db)
        .await?
        .ok_or(Error::NotFound)
      }

      pub async fn delete(site: &Site, id: i64) -> Result<()> {
        let result = sqlx::query(concat!("DELETE FROM ", $table, " WHERE id = $1"))
          .bind(id)
          .execute(&site.db)
          .await?;

        if result.rows_affected() == 0 {
          return Err(Error::NotFound);
        }
        Ok(())
      }
    }
  };
}

pub mod application;
pub mod checkout;
pub mod review;
pub mod scholarship;
pub mod site;
pub mod user;

pub use application::*;
pub use checkout::*;
pub use review::*;
pub use scholarship::*;
pub use site::*;
pub use user::*;
