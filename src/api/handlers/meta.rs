/*
 * Responsibility
 * - GET / (service 名と version の静的メタデータ)
 */
use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub service: &'static str,
    pub version: &'static str,
}

pub async fn root() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(ServiceInfo {
            service: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
        }),
    )
}

#[cfg(test)]
mod tests {
    use axum::{body::to_bytes, http::StatusCode, response::IntoResponse};
    use serde_json::Value;

    use super::*;

    #[tokio::test]
    async fn root_returns_service_metadata() {
        let res = root().await.into_response();
        assert_eq!(res.status(), StatusCode::OK);

        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["service"], "user-service");
        assert_eq!(body["version"], "0.1.0");
    }
}
