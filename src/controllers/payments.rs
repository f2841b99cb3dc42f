use super::*;

#[post("/create-checkout-session", data = "<form>")]
pub async fn create_checkout_session(
  site: &State<Site>,
  form: Json<CheckoutSessionForm>,
) -> JsonResult<Value> {
  let request = form.into_inner().into_request()?;
  let session = site.checkout.create_session(&request).await?;
  Ok(Json(json![{ "url": session.url }]))
}

// Pull-based confirmation: the caller polls with the session id it was
// handed back by the hosted checkout page. Storage is only touched when the
// provider reports the session paid.
#[patch("/verify-payment/<session_id>")]
pub async fn verify_payment(site: &State<Site>, session_id: &str) -> JsonResult<Value> {
  let session = site.checkout.retrieve_session(session_id).await?;

  let application_ref = session
    .metadata
    .get("applicationId")
    .ok_or_else(|| Error::validation("session", "carries no application reference"))?;
  let application = Application::find(site, parse_id(application_ref)?).await?;

  if session.payment_status != PaymentStatus::Paid {
    return Ok(Json(json![{ "success": false }]));
  }

  let paid = Application::mark_paid(site, application.id, &session.id).await?;

  Ok(Json(json![{
    "success": true,
    "scholarshipName": paid.doc.get("scholarshipName"),
    "universityName": paid.doc.get("universityName"),
    "amountPaid": session.amount_paid(),
    "currency": session.currency,
  }]))
}
