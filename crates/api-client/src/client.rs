use serde::de::DeserializeOwned;
use shared_types::{AppError, InventoryItem, LoginRequest, LoginResponse, Sale};

use crate::config::{api_base_url, join_url};

/// Stateless client for the SaleTap backend. Cheap to clone; holds only the
/// connection pool and the resolved base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Client against the configured backend origin.
    pub fn new() -> Self {
        Self::with_base_url(api_base_url())
    }

    /// Client against an explicit origin (tests, desktop overrides).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Exchange credentials for a bearer token and role claim.
    ///
    /// `POST {base}/auth/login` with a JSON body. No retry; any non-2xx
    /// answer surfaces the backend's own message where one is present.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, AppError> {
        let url = join_url(&self.base_url, "auth/login");
        let body = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        tracing::info!(username, "logging in");
        let response = self
            .http
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(|err| AppError::network(format!("Login request failed: {err}")))?;
        Self::decode(response).await
    }

    /// Fetch the sales report for an inclusive date range.
    ///
    /// `GET {base}/reports/sales?start_date=..&end_date=..` with a bearer
    /// token. Dates are `YYYY-MM-DD` strings; the caller validates them
    /// before dialing out.
    pub async fn sales_report(
        &self,
        token: &str,
        start_date: &str,
        end_date: &str,
    ) -> Result<Vec<Sale>, AppError> {
        let url = join_url(&self.base_url, "reports/sales");
        tracing::info!(start_date, end_date, "fetching sales report");
        let response = self
            .http
            .get(url)
            .bearer_auth(token)
            .query(&[("start_date", start_date), ("end_date", end_date)])
            .send()
            .await
            .map_err(|err| AppError::network(format!("Sales request failed: {err}")))?;
        Self::decode(response).await
    }

    /// Fetch the full inventory report.
    ///
    /// `GET {base}/reports/inventory` with a bearer token. Pagination is
    /// client-side; the backend returns the whole list.
    pub async fn inventory_report(&self, token: &str) -> Result<Vec<InventoryItem>, AppError> {
        let url = join_url(&self.base_url, "reports/inventory");
        tracing::info!("fetching inventory report");
        let response = self
            .http
            .get(url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|err| AppError::network(format!("Inventory request failed: {err}")))?;
        Self::decode(response).await
    }

    /// Decode a 2xx body, or turn a non-2xx response into an `AppError`.
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, AppError> {
        let status = response.status();
        if status.is_success() {
            response
                .json::<T>()
                .await
                .map_err(|err| AppError::internal(format!("Unexpected response body: {err}")))
        } else {
            let body = response.text().await.unwrap_or_default();
            let err = error_from_response(status.as_u16(), &body);
            tracing::warn!(status = status.as_u16(), %err, "backend rejected request");
            Err(err)
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Map a non-2xx status plus its body to an `AppError`, preferring the
/// backend's own message over a status-derived one.
fn error_from_response(status: u16, body: &str) -> AppError {
    let message = AppError::message_from_payload(body);
    match status {
        401 => AppError::unauthorized(message.unwrap_or_else(|| "Session is no longer valid".into())),
        403 => AppError::forbidden(message.unwrap_or_else(|| "You do not have access".into())),
        404 => AppError::not_found(message.unwrap_or_else(|| "Not found".into())),
        400..=499 => AppError::bad_request(message.unwrap_or_else(|| format!("Request rejected ({status})"))),
        _ => AppError::internal(message.unwrap_or_else(|| format!("Backend error ({status})"))),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use shared_types::AppErrorKind;

    use super::*;

    #[test]
    fn backend_message_wins_over_status_text() {
        let err = error_from_response(401, r#"{"message": "Token expired"}"#);
        assert_eq!(err.kind, AppErrorKind::Unauthorized);
        assert_eq!(err.message, "Token expired");
        assert!(err.is_auth_failure());
    }

    #[test]
    fn status_fallbacks_when_body_is_opaque() {
        let err = error_from_response(401, "<html>nope</html>");
        assert_eq!(err.kind, AppErrorKind::Unauthorized);
        assert_eq!(err.message, "Session is no longer valid");

        let err = error_from_response(503, "");
        assert_eq!(err.kind, AppErrorKind::InternalError);
        assert_eq!(err.message, "Backend error (503)");
    }

    #[test]
    fn client_error_statuses_map_by_code() {
        assert_eq!(error_from_response(403, "{}").kind, AppErrorKind::Forbidden);
        assert_eq!(error_from_response(404, "{}").kind, AppErrorKind::NotFound);
        assert_eq!(error_from_response(422, "{}").kind, AppErrorKind::BadRequest);
        assert_eq!(error_from_response(500, "{}").kind, AppErrorKind::InternalError);
    }

    #[test]
    fn detail_payloads_parse_too() {
        let err = error_from_response(400, r#"{"detail": "start_date is required"}"#);
        assert_eq!(err.message, "start_date is required");
    }
}
