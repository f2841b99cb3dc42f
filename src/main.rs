#[macro_use]
extern crate rocket;

#[launch]
fn rocket() -> _ {
  scholarstream::server()
}
