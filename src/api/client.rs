//! HTTP API Client
//!
//! Functions for communicating with the Earnest REST API. Every call is a
//! single attempt against a fixed path; failures surface immediately to
//! the caller as an [`ApiError`].

use std::fmt;

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::state::{DashboardMetrics, Employee, EmployeeDraft, PayrollRecord};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:5000/api";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let stored = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item("earnest_api_url").ok().flatten());

    stored
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
        .trim_end_matches('/')
        .to_string()
}

/// Typed failure for a single API call.
#[derive(Clone, Debug, PartialEq)]
pub enum ApiError {
    /// The request never produced a usable response.
    Network(String),
    /// The server answered with an error status and, when it supplied
    /// one, its `message` payload field.
    Server { status: u16, message: Option<String> },
}

impl ApiError {
    /// Server-supplied message text, if the failure carried one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Server { message: Some(message), .. } => Some(message),
            _ => None,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(detail) => write!(f, "Network error: {}", detail),
            ApiError::Server { status, message: Some(message) } => {
                write!(f, "Server error ({}): {}", status, message)
            }
            ApiError::Server { status, message: None } => write!(f, "Server error ({})", status),
        }
    }
}

/// Error payload shape shared by every endpoint.
#[derive(Deserialize)]
struct ServerMessage {
    #[serde(default)]
    message: Option<String>,
}

async fn rejection(response: Response) -> ApiError {
    let status = response.status();
    let message = response
        .json::<ServerMessage>()
        .await
        .ok()
        .and_then(|body| body.message);
    ApiError::Server { status, message }
}

async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = Request::get(&format!("{}{}", get_api_base(), path))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(rejection(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::Network(format!("Parse error: {}", e)))
}

async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    let response = Request::post(&format!("{}{}", get_api_base(), path))
        .json(body)
        .map_err(|e| ApiError::Network(format!("Request build error: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(rejection(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::Network(format!("Parse error: {}", e)))
}

// ============ Endpoints ============

#[derive(Serialize)]
struct LoginRequest {
    username: String,
    password: String,
}

/// Login payload: success carries the destination route, rejection a
/// message.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub dashboard_url: Option<String>,
}

/// Authenticate a user
pub async fn login(username: &str, password: &str) -> Result<LoginResponse, ApiError> {
    post_json(
        "/login",
        &LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        },
    )
    .await
}

/// Fetch the aggregate dashboard snapshot
pub async fn fetch_dashboard() -> Result<DashboardMetrics, ApiError> {
    get_json("/admin/dashboard").await
}

/// Fetch all employees
pub async fn fetch_employees() -> Result<Vec<Employee>, ApiError> {
    get_json("/admin/employees").await
}

/// Create an employee from the submitted draft; the server echoes the
/// stored record back
pub async fn create_employee(draft: &EmployeeDraft) -> Result<Employee, ApiError> {
    post_json("/employees", draft).await
}

/// Fetch all payroll records
pub async fn fetch_payroll() -> Result<Vec<PayrollRecord>, ApiError> {
    get_json("/payroll").await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefers_the_server_message() {
        let rejected = ApiError::Server {
            status: 401,
            message: Some("Invalid username or password".to_string()),
        };
        assert_eq!(rejected.to_string(), "Server error (401): Invalid username or password");
        assert_eq!(rejected.server_message(), Some("Invalid username or password"));

        let bare = ApiError::Server { status: 500, message: None };
        assert_eq!(bare.to_string(), "Server error (500)");
        assert_eq!(bare.server_message(), None);

        let network = ApiError::Network("connection refused".to_string());
        assert_eq!(network.to_string(), "Network error: connection refused");
        assert_eq!(network.server_message(), None);
    }

    #[test]
    fn login_response_tolerates_missing_fields() {
        let rejected: LoginResponse =
            serde_json::from_str(r#"{"message": "Invalid username or password"}"#).unwrap();
        assert_eq!(rejected.dashboard_url, None);
        assert_eq!(rejected.message.as_deref(), Some("Invalid username or password"));

        let success: LoginResponse = serde_json::from_str(
            r#"{"message": "Login successful", "role": "admin", "dashboard_url": "/admin_dashboard"}"#,
        )
        .unwrap();
        assert_eq!(success.dashboard_url.as_deref(), Some("/admin_dashboard"));
    }
}
