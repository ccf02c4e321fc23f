use contracts::domain::a001_design::aggregate::{Design, DesignDto};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, bearer, error_message};

/// Upload a design (admin token required)
pub async fn create_design(dto: &DesignDto) -> Result<Design, String> {
    let mut request = Request::post(&api_url("/api/design"));
    if let Some(auth) = bearer() {
        request = request.header("Authorization", &auth);
    }
    let response = request
        .json(dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }
    response
        .json::<Design>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
