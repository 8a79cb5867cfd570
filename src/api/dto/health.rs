/*
 * Responsibility
 * - /db-health の response DTO
 * - status は常に入れる。result は成功時のみ
 */
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DbHealthResponse {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<PingResult>,
}

impl DbHealthResponse {
    pub fn ok(ok: i32) -> Self {
        Self {
            status: "db-ok",
            result: Some(PingResult { ok }),
        }
    }

    pub fn error(status: &'static str) -> Self {
        Self {
            status,
            result: None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PingResult {
    pub ok: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_body_includes_result() {
        let body = serde_json::to_value(DbHealthResponse::ok(1)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"status": "db-ok", "result": {"ok": 1}})
        );
    }

    #[test]
    fn error_body_omits_result() {
        let body = serde_json::to_value(DbHealthResponse::error("db-error")).unwrap();
        assert_eq!(body, serde_json::json!({"status": "db-error"}));
    }
}
