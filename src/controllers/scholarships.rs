use super::*;

#[get("/?<query..>")]
pub async fn list(site: &State<Site>, query: ScholarshipQuery) -> JsonResult<Vec<Scholarship>> {
  Ok(Json(Scholarship::all(site, &query).await?))
}

#[get("/<id>")]
pub async fn show(site: &State<Site>, id: &str) -> JsonResult<Scholarship> {
  Ok(Json(Scholarship::find(site, parse_id(id)?).await?))
}

// Accepts a single document or an array of documents to seed in bulk.
#[post("/", data = "<body>")]
pub async fn create(site: &State<Site>, body: Json<JsonValue>) -> JsonResult<JsonValue> {
  match body.into_inner() {
    JsonValue::Object(doc) => {
      Ok(Json(serde_json::to_value(Scholarship::create(site, doc).await?)?))
    }
    JsonValue::Array(items) => {
      let docs = items
        .into_iter()
        .map(|item| match item {
          JsonValue::Object(doc) => Ok(doc),
          _ => Err(Error::validation("body", "array items must be objects")),
        })
        .collect::<Result<Vec<_>>>()?;
      Ok(Json(serde_json::to_value(Scholarship::create_many(site, docs).await?)?))
    }
    _ => Err(Error::validation("body", "expected an object or an array of objects")),
  }
}

#[patch("/<id>", data = "<changes>")]
pub async fn update(site: &State<Site>, id: &str, changes: Json<JsonMap>) -> JsonResult<Scholarship> {
  Ok(Json(Scholarship::update(site, parse_id(id)?, changes.into_inner()).await?))
}

#[delete("/<id>")]
pub async fn destroy(site: &State<Site>, id: &str) -> JsonResult<Value> {
  Scholarship::delete(site, parse_id(id)?).await?;
  Ok(Json(json![{ "deleted": true }]))
}
