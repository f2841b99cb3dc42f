use super::*;

collection_model! { Application, "applications" }

impl Application {
  pub async fn all(site: &Site, email: Option<&str>) -> Result<Vec<Application>> {
    Ok(
      sqlx::query_as::<_, Application>(
        "SELECT id, doc, created_at, updated_at FROM applications \
         WHERE ($1::text IS NULL OR doc->>'email' = $1) \
         ORDER BY created_at DESC",
      )
      .bind(email)
      .fetch_all(&site.db)
      .await?,
    )
  }

  // One application per (email, scholarship) pair, enforced atomically by
  // the unique index behind the conditional insert.
  pub async fn create(site: &Site, doc: JsonMap) -> Result<Application> {
    sqlx::query_as::<_, Application>(
      "INSERT INTO applications (doc) VALUES ($1) \
       ON CONFLICT ((doc->>'email'), (doc->>'scholarshipId')) DO NOTHING \
       RETURNING id, doc, created_at, updated_at",
    )
    .bind(JsonValue::Object(doc))
    .fetch_optional(&site.db)
    .await?
    .ok_or(Error::AlreadyExists("application"))
  }

  /// Confirmation stamp written once the provider reports the session paid.
  /// A replayed verification merges the same keys again, so the operation is
  /// observably idempotent apart from the refreshed paidAt.
  pub async fn mark_paid(site: &Site, id: i64, session_id: &str) -> Result<Application> {
    let stamp = serde_json::json!({
      "paymentStatus": "paid",
      "paidAt": Utc::now().to_rfc3339(),
      "transactionId": session_id,
    });

    sqlx::query_as::<_, Application>(
      "UPDATE applications SET doc = doc || $2, updated_at = now() \
       WHERE id = $1 \
       RETURNING id, doc, created_at, updated_at",
    )
    .bind(id)
    .bind(stamp)
    .fetch_optional(&site.db)
    .await?
    .ok_or(Error::NotFound)
  }
}
