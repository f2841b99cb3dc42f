#[macro_use]
extern crate rocket;

pub mod controllers;
pub mod error;
pub mod models;
pub mod test_support;

pub use controllers::*;

use models::SiteSettings;
use rocket::{fairing::AdHoc, Build, Rocket};

pub fn server() -> Rocket<Build> {
  rocket::build()
    .attach(AdHoc::try_on_ignite("ScholarStream site", |rocket| async {
      let settings = match rocket.figment().extract::<SiteSettings>() {
        Ok(settings) => settings,
        Err(e) => {
          error!("Config could not be parsed: {}", e);
          return Err(rocket);
        }
      };

      match settings.into_site().await {
        Ok(site) => Ok(rocket.manage(site)),
        Err(e) => {
          error!("Could not set up the site: {}", e);
          Err(rocket)
        }
      }
    }))
    .attach(cors())
    .mount(
      "/",
      routes![
        root,
        payments::create_checkout_session,
        payments::verify_payment
      ],
    )
    .mount(
      "/scholarships",
      routes![
        scholarships::list,
        scholarships::show,
        scholarships::create,
        scholarships::update,
        scholarships::destroy
      ],
    )
    .mount(
      "/users",
      routes![
        users::list,
        users::role,
        users::create,
        users::update,
        users::destroy
      ],
    )
    .mount(
      "/applications",
      routes![
        applications::list,
        applications::show,
        applications::create,
        applications::update,
        applications::destroy
      ],
    )
    .mount(
      "/reviews",
      routes![
        reviews::list,
        reviews::for_scholarship,
        reviews::create,
        reviews::update,
        reviews::destroy
      ],
    )
}

fn cors() -> rocket_cors::Cors {
  rocket_cors::CorsOptions::default()
    .to_cors()
    .expect("Default CORS options are valid")
}
