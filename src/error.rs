use rocket::{
  http::Status,
  request::Request,
  response::{self, Responder},
  serde::json::{json, Json},
  warn,
};

#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("Malformed id: {0}")]
  MalformedId(String),
  #[error("Invalid {field}: {message}")]
  Validation { field: String, message: String },
  #[error(transparent)]
  ValidationErrors(#[from] validator::ValidationErrors),
  #[error("{0} already exists")]
  AlreadyExists(&'static str),
  #[error("Not found")]
  NotFound,
  #[error("Checkout provider error: {0}")]
  Checkout(String),
  #[error(transparent)]
  Database(#[from] sqlx::Error),
  #[error(transparent)]
  Config(#[from] rocket::figment::Error),
  #[error(transparent)]
  JsonSerde(#[from] serde_json::Error),
  #[error(transparent)]
  IOError(#[from] std::io::Error),
}

impl From<reqwest::Error> for Error {
  fn from(err: reqwest::Error) -> Error {
    Error::Checkout(err.to_string())
  }
}

impl Error {
  pub fn validation(field: &str, message: &str) -> Error {
    Error::Validation {
      field: field.to_string(),
      message: message.to_string(),
    }
  }

  pub fn status(&self) -> Status {
    match self {
      Error::MalformedId(_)
      | Error::Validation { .. }
      | Error::ValidationErrors(_)
      | Error::Checkout(_) => Status::BadRequest,
      Error::AlreadyExists(_) => Status::Conflict,
      Error::NotFound | Error::Database(sqlx::Error::RowNotFound) => Status::NotFound,
      _ => Status::InternalServerError,
    }
  }
}

impl<'r> Responder<'r, 'static> for Error {
  fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
    let status = self.status();

    let body = if status == Status::InternalServerError {
      warn!("A wild error appeared: {:?}", &self);
      Json(json![{ "error": "Unexpected Error" }])
    } else {
      Json(json![{ "error": self.to_string() }])
    };

    (status, body).respond_to(request)
  }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn statuses_by_error_kind() {
    assert_eq!(Error::MalformedId("nope".into()).status(), Status::BadRequest);
    assert_eq!(Error::validation("userEmail", "is required").status(), Status::BadRequest);
    assert_eq!(Error::Checkout("card declined".into()).status(), Status::BadRequest);
    assert_eq!(Error::AlreadyExists("user").status(), Status::Conflict);
    assert_eq!(Error::NotFound.status(), Status::NotFound);
    assert_eq!(Error::Database(sqlx::Error::RowNotFound).status(), Status::NotFound);
    assert_eq!(Error::Database(sqlx::Error::PoolTimedOut).status(), Status::InternalServerError);
  }
}
