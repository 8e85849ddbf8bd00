use gloo_net::http::Request;
use portfolio_shared::{validation::ContactPayload, PortfolioDocument};
use serde::Serialize;

use crate::config;

/// Fetch the bilingual content document. Issued exactly once per session
/// by the provider; no retry, no refresh.
pub async fn fetch_portfolio_document() -> Result<PortfolioDocument, String> {
    let response = Request::get(config::CONTENT_URL)
        .send()
        .await
        .map_err(|e| format!("Network error: {:?}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let document: PortfolioDocument = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {:?}", e))?;

    // Fail closed on structural problems instead of rendering bad content.
    document
        .validate()
        .map_err(|e| format!("Document error: {}", e))?;

    Ok(document)
}

#[derive(Debug, Serialize)]
struct DeliveryRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a ContactPayload,
}

/// Hand one validated contact payload to the delivery provider.
///
/// Success or failure only; the provider gives no further contract.
pub async fn send_contact_message(payload: &ContactPayload) -> Result<(), String> {
    let request = DeliveryRequest {
        service_id: config::EMAILJS_SERVICE_ID,
        template_id: config::EMAILJS_TEMPLATE_ID,
        user_id: config::EMAILJS_PUBLIC_KEY,
        template_params: payload,
    };

    let response = Request::post(config::EMAILJS_SEND_URL)
        .header("Content-Type", "application/json")
        .json(&request)
        .map_err(|e| format!("Serialize error: {:?}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {:?}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    Ok(())
}
