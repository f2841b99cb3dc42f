use super::*;

#[get("/?<email>")]
pub async fn list(site: &State<Site>, email: Option<&str>) -> JsonResult<Vec<Application>> {
  Ok(Json(Application::all(site, email).await?))
}

#[get("/<id>")]
pub async fn show(site: &State<Site>, id: &str) -> JsonResult<Application> {
  Ok(Json(Application::find(site, parse_id(id)?).await?))
}

#[post("/", data = "<doc>")]
pub async fn create(site: &State<Site>, doc: Json<JsonMap>) -> JsonResult<Application> {
  Ok(Json(Application::create(site, doc.into_inner()).await?))
}

#[patch("/<id>", data = "<changes>")]
pub async fn update(site: &State<Site>, id: &str, changes: Json<JsonMap>) -> JsonResult<Application> {
  Ok(Json(Application::update(site, parse_id(id)?, changes.into_inner()).await?))
}

#[delete("/<id>")]
pub async fn destroy(site: &State<Site>, id: &str) -> JsonResult<Value> {
  Application::delete(site, parse_id(id)?).await?;
  Ok(Json(json![{ "deleted": true }]))
}
