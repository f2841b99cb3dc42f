use super::*;

collection_model! { Review, "reviews" }

impl Review {
  pub async fn all(site: &Site, email: Option<&str>) -> Result<Vec<Review>> {
    Ok(
      sqlx::query_as::<_, Review>(
        "SELECT id, doc, created_at, updated_at FROM reviews \
         WHERE ($1::text IS NULL OR doc->>'email' = $1) \
         ORDER BY created_at DESC",
      )
      .bind(email)
      .fetch_all(&site.db)
      .await?,
    )
  }

  /// Reviews for one scholarship. The reference is the externally supplied
  /// identifier string carried in the document, matched as-is.
  pub async fn for_scholarship(site: &Site, scholarship_id: &str) -> Result<Vec<Review>> {
    Ok(
      sqlx::query_as::<_, Review>(
        "SELECT id, doc, created_at, updated_at FROM reviews \
         WHERE doc->>'scholarshipId' = $1 \
         ORDER BY created_at DESC",
      )
      .bind(scholarship_id)
      .fetch_all(&site.db)
      .await?,
    )
  }

  // Several reviews by the same user for the same scholarship are allowed.
  pub async fn create(site: &Site, doc: JsonMap) -> Result<Review> {
    Ok(
      sqlx::query_as::<_, Review>(
        "INSERT INTO reviews (doc) VALUES ($1) \
         RETURNING id, doc, created_at, updated_at",
      )
      .bind(JsonValue::Object(doc))
      .fetch_one(&site.db)
      .await?,
    )
  }
}
