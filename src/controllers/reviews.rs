use super::*;

#[get("/?<email>")]
pub async fn list(site: &State<Site>, email: Option<&str>) -> JsonResult<Vec<Review>> {
  Ok(Json(Review::all(site, email).await?))
}

// The path segment is a scholarship reference, not a review id: this lists
// every review left on that scholarship.
#[get("/<scholarship_id>")]
pub async fn for_scholarship(site: &State<Site>, scholarship_id: &str) -> JsonResult<Vec<Review>> {
  Ok(Json(Review::for_scholarship(site, scholarship_id).await?))
}

#[post("/", data = "<doc>")]
pub async fn create(site: &State<Site>, doc: Json<JsonMap>) -> JsonResult<Review> {
  Ok(Json(Review::create(site, doc.into_inner()).await?))
}

#[patch("/<id>", data = "<changes>")]
pub async fn update(site: &State<Site>, id: &str, changes: Json<JsonMap>) -> JsonResult<Review> {
  Ok(Json(Review::update(site, parse_id(id)?, changes.into_inner()).await?))
}

#[delete("/<id>")]
pub async fn destroy(site: &State<Site>, id: &str) -> JsonResult<Value> {
  Review::delete(site, parse_id(id)?).await?;
  Ok(Json(json![{ "deleted": true }]))
}
