pub use rocket::{
  serde::json::{json, Json, Value},
  State,
};

pub use crate::{error::*, models::*};

pub type JsonResult<T> = Result<Json<T>>;

pub mod applications;
pub mod payments;
pub mod reviews;
pub mod scholarships;
pub mod users;

#[get("/")]
pub async fn root() -> &'static str {
  "Happy Server!"
}
