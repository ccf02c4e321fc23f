//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and turning error
//! responses into the message shown to the user.

use gloo_net::http::Response;
use serde::Deserialize;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/design/RN001");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// `Authorization` header value for the stored access token
pub fn bearer() -> Option<String> {
    crate::system::auth::storage::get_access_token().map(|t| format!("Bearer {}", t))
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Message for a failed response: the server's `message` when the body
/// carries one, otherwise a generic text for the status code.
pub async fn error_message(response: Response) -> String {
    let status = response.status();
    match response.json::<ErrorBody>().await {
        Ok(body) => body.message,
        Err(_) => status_message(status),
    }
}

fn status_message(status: u16) -> String {
    match status {
        401 => "Please log in again.".to_string(),
        403 => "Admin privileges required.".to_string(),
        404 => "Not found.".to_string(),
        _ => format!("Request failed ({})", status),
    }
}
