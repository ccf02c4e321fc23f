use contracts::domain::a001_design::aggregate::Design;
use contracts::domain::a002_booking::aggregate::Booking;
use contracts::domain::a002_booking::draft::BookingDraft;
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, error_message};

/// `Ok(None)` when the design does not exist
pub async fn fetch_design(id: &str) -> Result<Option<Design>, String> {
    let url = api_url(&format!("/api/design/{}", urlencoding::encode(id)));
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if response.status() == 404 {
        return Ok(None);
    }
    if !response.ok() {
        return Err(error_message(response).await);
    }
    response
        .json::<Design>()
        .await
        .map(Some)
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn submit_booking(draft: &BookingDraft) -> Result<Booking, String> {
    let response = Request::post(&api_url("/api/booking"))
        .json(draft)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }
    response
        .json::<Booking>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
