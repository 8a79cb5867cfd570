/*
 * Responsibility
 * - URL 構造を定義
 * - probe 系 (/healthz, /livez, /db-health) は orchestrator が叩くので root 直下
 */
use axum::{Router, routing::get};

use crate::state::AppState;

use crate::api::handlers::{
    health::{db_health, healthz, livez},
    meta::root,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/healthz", get(healthz))
        .route("/livez", get(livez))
        .route("/db-health", get(db_health))
}

#[cfg(test)]
mod tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use super::routes;
    use crate::state::AppState;

    fn app(state: AppState) -> Router {
        Router::new().merge(routes()).with_state(state)
    }

    async fn get(app: Router, uri: &str) -> axum::response::Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn healthz_is_routed() {
        let res = get(app(AppState::default()), "/healthz").await;
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn livez_is_routed() {
        let res = get(app(AppState::default()), "/livez").await;
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn root_is_routed() {
        let res = get(app(AppState::default()), "/").await;
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn db_health_without_config_is_unavailable() {
        let res = get(app(AppState::new(None)), "/db-health").await;
        assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let res = get(app(AppState::default()), "/nope").await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }
}
