pub mod health;

use axum::{
    routing::{get, put},
    Router,
};

use crate::aggregation::handlers as aggregation;
use crate::candidates::handlers as candidates;
use crate::catalog::handlers as catalog;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Dashboard
        .route("/api/v1/dashboard", get(aggregation::handle_dashboard))
        // Review form
        .route("/api/v1/candidates", get(candidates::handle_list_candidates))
        .route("/api/v1/candidates/:id", get(candidates::handle_get_candidate))
        .route(
            "/api/v1/candidates/:id/review",
            put(candidates::handle_save_review),
        )
        // Vivier
        .route("/api/v1/vivier", get(aggregation::handle_vivier))
        .route(
            "/api/v1/vivier/:title",
            get(aggregation::handle_vivier_position),
        )
        // Catalog browser
        .route("/api/v1/positions", get(catalog::handle_list_positions))
        .route(
            "/api/v1/positions/departments",
            get(catalog::handle_list_departments),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::candidates::generator::GenerationSettings;
    use crate::config::Config;
    use crate::session::MobilitySession;

    fn test_app() -> Router {
        let config = Config {
            port: 0,
            rust_log: "info".to_string(),
            seed: Some(12),
            full_wish_candidates: 15,
            interview_start: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
            interview_window_days: 17,
            dashboard_top_positions: 5,
        };
        let mut rng = StdRng::seed_from_u64(12);
        let session = MobilitySession::generate(&GenerationSettings::default(), &mut rng).unwrap();
        build_router(AppState::new(session, config))
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json_body) => builder
                .header("content-type", "application/json")
                .body(Body::from(json_body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, value)
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(&test_app(), Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_dashboard_uses_configured_top() {
        let (status, body) = send(&test_app(), Method::GET, "/api/v1/dashboard", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["metrics"]["candidates"], 20);
        assert_eq!(body["metrics"]["open_positions"], 35);
        assert_eq!(body["top_positions"].as_array().unwrap().len(), 5);

        let (_, body) = send(&test_app(), Method::GET, "/api/v1/dashboard?top=1", None).await;
        assert_eq!(body["top_positions"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_positions_filters() {
        let app = test_app();
        let (status, body) = send(&app, Method::GET, "/api/v1/positions", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 50);

        let (_, body) = send(
            &app,
            Method::GET,
            "/api/v1/positions?statuses=open,occupied",
            None,
        )
        .await;
        assert_eq!(body["count"], 50);

        let (_, body) = send(&app, Method::GET, "/api/v1/positions?departments=Juridique", None).await;
        assert_eq!(body["count"], 0);

        let (_, body) = send(
            &app,
            Method::GET,
            "/api/v1/positions?search=data&statuses=open",
            None,
        )
        .await;
        assert_eq!(body["count"], 1);
        assert_eq!(body["positions"][0]["title"], "Data Analyst");
    }

    #[tokio::test]
    async fn test_positions_bad_status_is_400() {
        let (status, body) =
            send(&test_app(), Method::GET, "/api/v1/positions?statuses=vacant", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_departments() {
        let (_, body) = send(&test_app(), Method::GET, "/api/v1/positions/departments", None).await;
        assert_eq!(body.as_array().unwrap().len(), 7);
    }

    #[tokio::test]
    async fn test_review_round_trip() {
        let app = test_app();
        let (_, list) = send(&app, Method::GET, "/api/v1/candidates", None).await;
        let id = list[0]["id"].as_str().unwrap().to_string();

        let (status, saved) = send(
            &app,
            Method::PUT,
            &format!("/api/v1/candidates/{id}/review"),
            Some(json!({ "status": "approved", "notes": "Mobilité validée" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(saved["review_status"], "approved");

        let (_, detail) = send(&app, Method::GET, &format!("/api/v1/candidates/{id}"), None).await;
        assert_eq!(detail["review_status"], "approved");
        assert_eq!(detail["notes"], "Mobilité validée");
        assert_eq!(detail["wishes"][0]["rank"], 1);

        let (_, approved) =
            send(&app, Method::GET, "/api/v1/candidates?status=approved", None).await;
        assert_eq!(approved.as_array().unwrap().len(), 1);
        let (_, pending) = send(&app, Method::GET, "/api/v1/candidates?status=pending", None).await;
        assert_eq!(pending.as_array().unwrap().len(), 19);
    }

    #[tokio::test]
    async fn test_review_unknown_candidate_is_404() {
        let (status, _) = send(
            &test_app(),
            Method::PUT,
            "/api/v1/candidates/00000000-0000-0000-0000-000000000000/review",
            Some(json!({ "status": "rejected" })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_review_invalid_status_is_rejected() {
        let app = test_app();
        let (_, list) = send(&app, Method::GET, "/api/v1/candidates", None).await;
        let id = list[0]["id"].as_str().unwrap().to_string();
        let (status, _) = send(
            &app,
            Method::PUT,
            &format!("/api/v1/candidates/{id}/review"),
            Some(json!({ "status": "maybe" })),
        )
        .await;
        assert!(status.is_client_error());
    }

    #[tokio::test]
    async fn test_vivier_views() {
        let app = test_app();
        let (_, all) = send(&app, Method::GET, "/api/v1/vivier", None).await;
        let all = all.as_array().unwrap().clone();
        assert_eq!(all.len(), 35);

        let (_, zero) = send(&app, Method::GET, "/api/v1/vivier?zero_only=true", None).await;
        let zero = zero.as_array().unwrap();
        assert!(zero.iter().all(|row| row["status"] == "zero" && row["count"] == 0));
        let expected_zero = all.iter().filter(|row| row["count"] == 0).count();
        assert_eq!(zero.len(), expected_zero);

        let (status, row) = send(&app, Method::GET, "/api/v1/vivier/Data%20Analyst", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(row["position"], "Data Analyst");

        let (status, _) = send(&app, Method::GET, "/api/v1/vivier/Graphiste", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
