use super::*;

#[get("/")]
pub async fn list(site: &State<Site>) -> JsonResult<Vec<User>> {
  Ok(Json(User::all(site).await?))
}

// Lookup is by email, not id, and resolves to a bare role: unknown or
// role-less users read as plain students.
#[get("/<email>")]
pub async fn role(site: &State<Site>, email: &str) -> JsonResult<Value> {
  Ok(Json(json![{ "role": User::role_for(site, email).await? }]))
}

#[post("/", data = "<doc>")]
pub async fn create(site: &State<Site>, doc: Json<JsonMap>) -> JsonResult<User> {
  Ok(Json(User::create(site, doc.into_inner()).await?))
}

#[patch("/<id>", data = "<changes>")]
pub async fn update(site: &State<Site>, id: &str, changes: Json<JsonMap>) -> JsonResult<User> {
  Ok(Json(User::update(site, parse_id(id)?, changes.into_inner()).await?))
}

#[delete("/<id>")]
pub async fn destroy(site: &State<Site>, id: &str) -> JsonResult<Value> {
  User::delete(site, parse_id(id)?).await?;
  Ok(Json(json![{ "deleted": true }]))
}
