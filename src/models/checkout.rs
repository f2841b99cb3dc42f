use super::*;
use rust_decimal::{prelude::ToPrimitive, Decimal};
use std::collections::HashMap;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CheckoutSettings {
  pub api_url: String,
  pub secret_key: String,
  pub success_url: String,
  pub cancel_url: String,
  pub currency: String,
}

/// Request body of POST /create-checkout-session. Fields are optional at the
/// serde layer so that absence surfaces as a 400 through the error taxonomy
/// instead of a parse failure.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSessionForm {
  pub application_fees: Option<Decimal>,
  pub scholarship_name: Option<String>,
  #[validate(email)]
  pub user_email: Option<String>,
  pub application_id: Option<String>,
}

/// A fully validated checkout request: amount already converted to the
/// provider's minor-unit integer representation.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentRequest {
  pub unit_amount: i64,
  pub product_name: String,
  pub customer_email: String,
  pub application_id: String,
}

impl CheckoutSessionForm {
  pub fn into_request(self) -> Result<PaymentRequest> {
    self.validate()?;

    let fees = self
      .application_fees
      .ok_or_else(|| Error::validation("applicationFees", "is required"))?;
    let product_name = self
      .scholarship_name
      .filter(|name| !name.trim().is_empty())
      .ok_or_else(|| Error::validation("scholarshipName", "is required"))?;
    let customer_email = self
      .user_email
      .ok_or_else(|| Error::validation("userEmail", "is required"))?;
    let application_id = self
      .application_id
      .filter(|id| !id.trim().is_empty())
      .ok_or_else(|| Error::validation("applicationId", "is required"))?;

    let unit_amount = (fees * Decimal::from(100))
      .round()
      .to_i64()
      .filter(|cents| *cents > 0)
      .ok_or_else(|| Error::validation("applicationFees", "is not a payable amount"))?;

    Ok(PaymentRequest { unit_amount, product_name, customer_email, application_id })
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
  Paid,
  Unpaid,
  NoPaymentRequired,
}

/// The provider's view of a hosted checkout session, as returned by both the
/// create and retrieve calls.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HostedSession {
  pub id: String,
  pub url: Option<String>,
  pub payment_status: PaymentStatus,
  #[serde(default)]
  pub metadata: HashMap<String, String>,
  pub amount_total: Option<i64>,
  pub currency: Option<String>,
}

impl HostedSession {
  pub fn amount_paid(&self) -> Option<f64> {
    self.amount_total.map(|cents| cents as f64 / 100.0)
  }
}

/// Thin client for the hosted checkout provider. Sessions are created with a
/// single line item; the application reference and payer email travel as
/// opaque session metadata and come back verbatim on retrieval.
pub struct CheckoutClient {
  http: reqwest::Client,
  settings: CheckoutSettings,
}

impl CheckoutClient {
  pub fn new(settings: CheckoutSettings) -> Self {
    Self { http: reqwest::Client::new(), settings }
  }

  pub async fn create_session(&self, request: &PaymentRequest) -> Result<HostedSession> {
    let params: Vec<(&str, String)> = vec![
      ("mode", "payment".to_string()),
      (
        "success_url",
        format!("{}?session_id={{CHECKOUT_SESSION_ID}}", self.settings.success_url),
      ),
      ("cancel_url", self.settings.cancel_url.clone()),
      ("customer_email", request.customer_email.clone()),
      ("line_items[0][quantity]", "1".to_string()),
      ("line_items[0][price_data][currency]", self.settings.currency.clone()),
      ("line_items[0][price_data][unit_amount]", request.unit_amount.to_string()),
      ("line_items[0][price_data][product_data][name]", request.product_name.clone()),
      ("metadata[applicationId]", request.application_id.clone()),
      ("metadata[userEmail]", request.customer_email.clone()),
    ];

    let response = self
      .http
      .post(format!("{}/checkout/sessions", self.settings.api_url))
      .bearer_auth(&self.settings.secret_key)
      .form(&params)
      .send()
      .await?;

    Self::read(response).await
  }

  pub async fn retrieve_session(&self, session_id: &str) -> Result<HostedSession> {
    let response = self
      .http
      .get(format!("{}/checkout/sessions/{}", self.settings.api_url, session_id))
      .bearer_auth(&self.settings.secret_key)
      .send()
      .await?;

    Self::read(response).await
  }

  async fn read(response: reqwest::Response) -> Result<HostedSession> {
    if !response.status().is_success() {
      let status = response.status();
      let body = response.text().await.unwrap_or_default();
      return Err(Error::Checkout(format!("provider responded {}: {}", status, body)));
    }

    Ok(response.json().await?)
  }
}

#[cfg(test)]
mod test {
  use super::*;
  use mockito::Matcher;
  use serde_json::json;

  fn form(body: serde_json::Value) -> CheckoutSessionForm {
    serde_json::from_value(body).expect("form parses")
  }

  fn settings(api_url: &str) -> CheckoutSettings {
    CheckoutSettings {
      api_url: api_url.to_string(),
      secret_key: "sk_test_example".to_string(),
      success_url: "http://example.com/payment/success".to_string(),
      cancel_url: "http://example.com/payment/cancel".to_string(),
      currency: "usd".to_string(),
    }
  }

  #[test]
  fn converts_fees_to_minor_units() {
    let request = form(json!({
      "applicationFees": "49.99",
      "scholarshipName": "Rhodes",
      "userEmail": "ada@example.com",
      "applicationId": "12",
    }))
    .into_request()
    .unwrap();

    assert_eq!(request.unit_amount, 4999);

    let request = form(json!({
      "applicationFees": 10,
      "scholarshipName": "Rhodes",
      "userEmail": "ada@example.com",
      "applicationId": "12",
    }))
    .into_request()
    .unwrap();

    assert_eq!(request.unit_amount, 1000);
  }

  #[test]
  fn rejects_missing_or_unpayable_fields() {
    let missing_fee = form(json!({
      "scholarshipName": "Rhodes",
      "userEmail": "ada@example.com",
      "applicationId": "12",
    }));
    assert!(matches!(missing_fee.into_request(), Err(Error::Validation { .. })));

    let zero_fee = form(json!({
      "applicationFees": 0,
      "scholarshipName": "Rhodes",
      "userEmail": "ada@example.com",
      "applicationId": "12",
    }));
    assert!(matches!(zero_fee.into_request(), Err(Error::Validation { .. })));

    let blank_name = form(json!({
      "applicationFees": 5,
      "scholarshipName": "  ",
      "userEmail": "ada@example.com",
      "applicationId": "12",
    }));
    assert!(matches!(blank_name.into_request(), Err(Error::Validation { .. })));

    let bad_email = form(json!({
      "applicationFees": 5,
      "scholarshipName": "Rhodes",
      "userEmail": "not-an-email",
      "applicationId": "12",
    }));
    assert!(matches!(bad_email.into_request(), Err(Error::ValidationErrors(_))));
  }

  #[tokio::test]
  async fn creates_a_hosted_session() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
      .mock("POST", "/checkout/sessions")
      .match_body(Matcher::AllOf(vec![
        Matcher::UrlEncoded("mode".into(), "payment".into()),
        Matcher::UrlEncoded("customer_email".into(), "ada@example.com".into()),
        Matcher::UrlEncoded("line_items[0][price_data][unit_amount]".into(), "4999".into()),
        Matcher::UrlEncoded("metadata[applicationId]".into(), "12".into()),
      ]))
      .with_body(
        json!({
          "id": "cs_test_123",
          "url": "https://checkout.example.com/pay/cs_test_123",
          "payment_status": "unpaid",
          "metadata": { "applicationId": "12", "userEmail": "ada@example.com" },
          "amount_total": 4999,
          "currency": "usd",
        })
        .to_string(),
      )
      .create_async()
      .await;

    let client = CheckoutClient::new(settings(&server.url()));
    let session = client
      .create_session(&PaymentRequest {
        unit_amount: 4999,
        product_name: "Rhodes".to_string(),
        customer_email: "ada@example.com".to_string(),
        application_id: "12".to_string(),
      })
      .await
      .unwrap();

    mock.assert_async().await;
    assert_eq!(session.url.as_deref(), Some("https://checkout.example.com/pay/cs_test_123"));
    assert_eq!(session.payment_status, PaymentStatus::Unpaid);
  }

  #[tokio::test]
  async fn retrieves_a_session_and_surfaces_provider_errors() {
    let mut server = mockito::Server::new_async().await;
    server
      .mock("GET", "/checkout/sessions/cs_test_123")
      .with_body(
        json!({
          "id": "cs_test_123",
          "url": null,
          "payment_status": "paid",
          "metadata": { "applicationId": "12" },
          "amount_total": 4999,
          "currency": "usd",
        })
        .to_string(),
      )
      .create_async()
      .await;
    server
      .mock("GET", "/checkout/sessions/cs_gone")
      .with_status(404)
      .with_body(r#"{"error": {"message": "No such checkout session"}}"#)
      .create_async()
      .await;

    let client = CheckoutClient::new(settings(&server.url()));

    let session = client.retrieve_session("cs_test_123").await.unwrap();
    assert_eq!(session.payment_status, PaymentStatus::Paid);
    assert_eq!(session.metadata.get("applicationId").unwrap(), "12");
    assert_eq!(session.amount_paid(), Some(49.99));

    let missing = client.retrieve_session("cs_gone").await;
    assert!(matches!(missing, Err(Error::Checkout(_))));
  }
}
