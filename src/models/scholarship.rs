use super::*;

collection_model! { Scholarship, "scholarships" }

#[derive(Debug, Default, FromForm)]
pub struct ScholarshipQuery {
  pub search: Option<String>,
  pub degree: Option<String>,
  pub category: Option<String>,
  pub country: Option<String>,
  pub sort: Option<String>,
  pub order: Option<String>,
}

impl Scholarship {
  pub async fn all(site: &Site, query: &ScholarshipQuery) -> Result<Vec<Scholarship>> {
    let sql = format!(
      "SELECT id, doc, created_at, updated_at FROM scholarships \
       WHERE ($1::text IS NULL \
          OR doc->>'scholarshipName' ILIKE '%' || $1 || '%' \
          OR doc->>'universityName' ILIKE '%' || $1 || '%' \
          OR doc->>'degree' ILIKE '%' || $1 || '%') \
         AND ($2::text IS NULL OR doc->>'degree' = $2) \
         AND ($3::text IS NULL OR doc->>'scholarshipCategory' = $3) \
         AND ($4::text IS NULL OR doc->>'universityCountry' = $4) \
       ORDER BY {}",
      order_by(query.sort.as_deref(), query.order.as_deref())
    );

    Ok(
      sqlx::query_as::<_, Scholarship>(&sql)
        .bind(query.search.as_deref())
        .bind(query.degree.as_deref())
        .bind(query.category.as_deref())
        .bind(query.country.as_deref())
        .fetch_all(&site.db)
        .await?,
    )
  }

  pub async fn create(site: &Site, doc: JsonMap) -> Result<Scholarship> {
    Ok(
      sqlx::query_as::<_, Scholarship>(
        "INSERT INTO scholarships (doc) VALUES ($1) \
         RETURNING id, doc, created_at, updated_at",
      )
      .bind(JsonValue::Object(doc))
      .fetch_one(&site.db)
      .await?,
    )
  }

  // Bulk seeding: one statement, one document per array element.
  pub async fn create_many(site: &Site, docs: Vec<JsonMap>) -> Result<Vec<Scholarship>> {
    Ok(
      sqlx::query_as::<_, Scholarship>(
        "INSERT INTO scholarships (doc) \
         SELECT value FROM jsonb_array_elements($1) \
         RETURNING id, doc, created_at, updated_at",
      )
      .bind(JsonValue::Array(docs.into_iter().map(JsonValue::Object).collect()))
      .fetch_all(&site.db)
      .await?,
    )
  }
}

// Sort keys are whitelisted; client input never reaches the SQL text.
// Sorting on the fee uses jsonb ordering so non-numeric documents cannot
// fail the query. The default is newest post first.
fn order_by(sort: Option<&str>, order: Option<&str>) -> String {
  let column = match sort {
    Some("applicationFees") => "doc->'applicationFees'",
    Some("scholarshipName") => "doc->>'scholarshipName'",
    _ => "created_at",
  };

  let direction = if order.map_or(false, |o| o.eq_ignore_ascii_case("asc")) {
    "ASC"
  } else {
    "DESC"
  };

  format!("{} {}", column, direction)
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn sort_keys_are_whitelisted() {
    assert_eq!(order_by(None, None), "created_at DESC");
    assert_eq!(order_by(Some("applicationFees"), Some("asc")), "doc->'applicationFees' ASC");
    assert_eq!(order_by(Some("scholarshipName"), Some("ASC")), "doc->>'scholarshipName' ASC");
    assert_eq!(order_by(Some("postDate"), Some("desc")), "created_at DESC");
    assert_eq!(order_by(Some("id; DROP TABLE scholarships"), None), "created_at DESC");
    assert_eq!(order_by(None, Some("sideways")), "created_at DESC");
  }
}
