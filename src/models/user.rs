use super::*;

collection_model! { User, "users" }

impl User {
  pub async fn all(site: &Site) -> Result<Vec<User>> {
    Ok(
      sqlx::query_as::<_, User>(
        "SELECT id, doc, created_at, updated_at FROM users ORDER BY created_at DESC",
      )
      .fetch_all(&site.db)
      .await?,
    )
  }

  // Uniqueness on email is enforced by the database, not by a prior read:
  // the conditional insert either returns the new row or nothing at all.
  pub async fn create(site: &Site, doc: JsonMap) -> Result<User> {
    sqlx::query_as::<_, User>(
      "INSERT INTO users (doc) VALUES ($1) \
       ON CONFLICT ((doc->>'email')) DO NOTHING \
       RETURNING id, doc, created_at, updated_at",
    )
    .bind(JsonValue::Object(doc))
    .fetch_optional(&site.db)
    .await?
    .ok_or(Error::AlreadyExists("user"))
  }

  pub async fn find_by_email(site: &Site, email: &str) -> Result<Option<User>> {
    Ok(
      sqlx::query_as::<_, User>(
        "SELECT id, doc, created_at, updated_at FROM users WHERE doc->>'email' = $1",
      )
      .bind(email)
      .fetch_optional(&site.db)
      .await?,
    )
  }

  pub fn role(&self) -> &str {
    self.doc.get("role").and_then(JsonValue::as_str).unwrap_or("student")
  }

  /// Role lookup used by GET /users/<email>: unknown users read as plain
  /// students rather than an error.
  pub async fn role_for(site: &Site, email: &str) -> Result<String> {
    let role = Self::find_by_email(site, email)
      .await?
      .map(|user| user.role().to_string())
      .unwrap_or_else(|| "student".to_string());
    Ok(role)
  }
}

#[cfg(test)]
mod test {
  use super::*;
  use serde_json::json;

  fn user(doc: JsonValue) -> User {
    User { id: 1, doc, created_at: Utc::now(), updated_at: None }
  }

  #[test]
  fn role_defaults_to_student() {
    assert_eq!(user(json!({ "email": "ada@example.com" })).role(), "student");
    assert_eq!(user(json!({ "role": "moderator" })).role(), "moderator");
    assert_eq!(user(json!({ "role": 7 })).role(), "student");
  }
}
