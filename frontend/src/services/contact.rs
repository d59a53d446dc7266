//! Contact form dispatch.

use gloo_net::http::Request;
use portfolio::contact::ContactRequest;
use portfolio::SubmitError;

/// POST the message to the email service.
///
/// Any non-2xx answer counts as a failure; the body is ignored.
pub async fn send_contact(endpoint: &str, request: &ContactRequest) -> Result<(), SubmitError> {
    log::info!("📤 Sending contact message");

    let response = Request::post(endpoint)
        .json(request)
        .map_err(|e| SubmitError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| SubmitError::Network(e.to_string()))?;

    if !response.ok() {
        log::error!("❌ Email service answered {}", response.status());
        return Err(SubmitError::Status(response.status()));
    }

    log::info!("✅ Contact message sent");
    Ok(())
}
