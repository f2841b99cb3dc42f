use scholarstream::models::SiteSettings;

#[tokio::main]
async fn main() {
  let site = SiteSettings::load()
    .expect("Config could not be parsed")
    .into_site()
    .await
    .expect("Could not connect to the database");

  sqlx::migrate!()
    .run(&site.db)
    .await
    .expect("Migrations failed");
}
