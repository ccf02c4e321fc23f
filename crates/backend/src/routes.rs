use axum::{
    handler::Handler,
    http::{header, Method},
    middleware,
    routing::{get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::shared::state::AppState;
use crate::system::auth::middleware::{require_admin, require_auth};
use crate::system::middleware::request_logger::request_logger;
use crate::{handlers, system};

/// All application routes, with static frontend assets as fallback
pub fn configure_routes(state: AppState) -> Router {
    let admin_state = state.clone();
    let admin = move || middleware::from_fn_with_state(admin_state.clone(), require_admin);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION]);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // SYSTEM AUTH
        // ========================================
        .route("/api/system/auth/login", post(system::handlers::auth::login))
        .route("/api/system/auth/refresh", post(system::handlers::auth::refresh))
        .route("/api/system/auth/logout", post(system::handlers::auth::logout))
        .route(
            "/api/system/auth/me",
            get(system::handlers::auth::current_user)
                .route_layer(middleware::from_fn_with_state(state.clone(), require_auth)),
        )
        // ========================================
        // A001 DESIGN
        // ========================================
        .route(
            "/api/design",
            get(handlers::a001_design::list_all)
                .post(handlers::a001_design::create.layer(admin())),
        )
        .route("/api/design/:id", get(handlers::a001_design::get_by_id))
        // ========================================
        // A002 BOOKING
        // ========================================
        .route(
            "/api/booking",
            get(handlers::a002_booking::list_all).post(handlers::a002_booking::submit),
        )
        .route("/api/booking/:id", get(handlers::a002_booking::get_by_id))
        .route(
            "/api/booking/:id/status",
            put(handlers::a002_booking::update_status).route_layer(admin()),
        )
        .fallback_service(ServeDir::new("dist"))
        .layer(middleware::from_fn(request_logger))
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_design::service::insert_test_data;
    use crate::shared::data::db;
    use crate::shared::testing::{MemoryBookingStore, MemoryDesignStore};
    use crate::system::auth::jwt::JwtKeys;
    use crate::system::users::service as user_service;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use axum::response::Response;
    use contracts::domain::a001_design::aggregate::Design;
    use contracts::domain::a002_booking::aggregate::Booking;
    use contracts::system::auth::LoginResponse;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    const SECRET: &str = "router-test-secret";

    async fn state() -> (tempfile::TempDir, AppState) {
        let dir = tempfile::tempdir().unwrap();
        let conn = db::connect(&dir.path().join("router.db")).await.unwrap();
        db::ensure_schema(&conn).await.unwrap();

        let designs = MemoryDesignStore::default();
        insert_test_data(&designs).await.unwrap();

        let state = AppState {
            db: conn,
            designs: Arc::new(designs),
            bookings: Arc::new(MemoryBookingStore::default()),
            jwt: Arc::new(JwtKeys::new(SECRET)),
        };
        (dir, state)
    }

    fn token(is_admin: bool) -> String {
        JwtKeys::new(SECRET)
            .generate_access_token("u-1", "tester", is_admin)
            .unwrap()
    }

    fn request(method: &str, uri: &str, body: Option<Value>, bearer: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(t) = bearer {
            builder = builder.header("Authorization", format!("Bearer {t}"));
        }
        match body {
            Some(v) => builder
                .header("Content-Type", "application/json")
                .body(Body::from(v.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    async fn json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn gown_draft() -> Value {
        json!({
            "design_id": "RN001",
            "customer_name": "Sarah Johnson",
            "phone": "+1234567890",
            "extra_requirements": "Silk fabric, navy blue",
            "unit": "inches",
            "measurements": [
                {"name": "Bust", "value": "36"},
                {"name": "Waist", "value": "28"},
                {"name": "Hip", "value": "38"},
                {"name": "Length", "value": "58"},
                {"name": "Shoulder Width", "value": "15"}
            ]
        })
    }

    #[tokio::test]
    async fn test_search_designs() {
        let (_dir, state) = state().await;
        let app = configure_routes(state);

        let response = app
            .oneshot(request("GET", "/api/design?search=saree", None, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let designs: Vec<Design> = serde_json::from_value(json_body(response).await).unwrap();
        assert_eq!(designs.len(), 1);
        assert_eq!(designs[0].id.as_str(), "RN002");
    }

    #[tokio::test]
    async fn test_unknown_design_is_404() {
        let (_dir, state) = state().await;
        let response = configure_routes(state)
            .oneshot(request("GET", "/api/design/RN999", None, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_body(response).await["error"], "not_found");
    }

    #[tokio::test]
    async fn test_submit_booking() {
        let (_dir, state) = state().await;
        let app = configure_routes(state);

        let response = app
            .clone()
            .oneshot(request("POST", "/api/booking", Some(gown_draft()), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let booking: Booking = serde_json::from_value(json_body(response).await).unwrap();
        assert_eq!(booking.id.as_str(), "BK001");
        assert_eq!(booking.design_name, "Elegant Evening Gown");

        let response = app
            .oneshot(request("GET", "/api/booking", None, None))
            .await
            .unwrap();
        let list = json_body(response).await;
        assert_eq!(list.as_array().map(Vec::len), Some(1));
        assert_eq!(list[0]["status"], "Pending");
    }

    #[tokio::test]
    async fn test_submit_incomplete_booking_is_422() {
        let (_dir, state) = state().await;
        let mut draft = gown_draft();
        draft["phone"] = json!("");

        let response = configure_routes(state)
            .oneshot(request("POST", "/api/booking", Some(draft), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = json_body(response).await;
        assert_eq!(body["message"], "Please fill in all required fields.");
    }

    #[tokio::test]
    async fn test_unparsable_draft_gets_json_error() {
        let (_dir, state) = state().await;
        let app = configure_routes(state);

        let response = app
            .clone()
            .oneshot(request(
                "POST",
                "/api/booking",
                Some(json!({"design_id": "RN001", "phone": "1", "measurements": []})),
                None,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = json_body(response).await;
        assert_eq!(body["error"], "validation");
        assert!(body["message"].as_str().unwrap().contains("customer_name"));

        let list = app
            .oneshot(request("GET", "/api/booking", None, None))
            .await
            .unwrap();
        assert_eq!(json_body(list).await, json!([]));
    }

    #[tokio::test]
    async fn test_blank_path_id_is_400() {
        let (_dir, state) = state().await;
        let response = configure_routes(state)
            .oneshot(request("GET", "/api/booking/%20", None, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["error"], "invalid_argument");
    }

    #[tokio::test]
    async fn test_admin_routes_require_admin_token() {
        let (_dir, state) = state().await;
        let app = configure_routes(state);
        let design = json!({
            "name": "Linen Kurta",
            "category": "Casual",
            "measurements": ["Chest", "Length"]
        });

        let anonymous = app
            .clone()
            .oneshot(request("POST", "/api/design", Some(design.clone()), None))
            .await
            .unwrap();
        assert_eq!(anonymous.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(json_body(anonymous).await["error"], "unauthorized");

        let customer = token(false);
        let forbidden = app
            .clone()
            .oneshot(request("POST", "/api/design", Some(design.clone()), Some(customer.as_str())))
            .await
            .unwrap();
        assert_eq!(forbidden.status(), StatusCode::FORBIDDEN);
        let body = json_body(forbidden).await;
        assert_eq!(body["error"], "forbidden");
        assert_eq!(body["message"], "Admin privileges required");

        let admin = token(true);
        let created = app
            .oneshot(request("POST", "/api/design", Some(design), Some(admin.as_str())))
            .await
            .unwrap();
        assert_eq!(created.status(), StatusCode::CREATED);
        let body = json_body(created).await;
        assert_eq!(body["id"], "RN004");
        assert_eq!(body["image"], "/placeholder.svg");
    }

    #[tokio::test]
    async fn test_update_status() {
        let (_dir, state) = state().await;
        let app = configure_routes(state);
        let admin = token(true);

        app.clone()
            .oneshot(request("POST", "/api/booking", Some(gown_draft()), None))
            .await
            .unwrap();

        let invalid = app
            .clone()
            .oneshot(request(
                "PUT",
                "/api/booking/BK001/status",
                Some(json!({"status": "Archived"})),
                Some(admin.as_str()),
            ))
            .await
            .unwrap();
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);

        let missing = app
            .clone()
            .oneshot(request(
                "PUT",
                "/api/booking/BK999/status",
                Some(json!({"status": "Completed"})),
                Some(admin.as_str()),
            ))
            .await
            .unwrap();
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);

        let updated = app
            .oneshot(request(
                "PUT",
                "/api/booking/BK001/status",
                Some(json!({"status": "In Progress"})),
                Some(admin.as_str()),
            ))
            .await
            .unwrap();
        assert_eq!(updated.status(), StatusCode::OK);
        assert_eq!(json_body(updated).await["status"], "In Progress");
    }

    #[tokio::test]
    async fn test_login_and_me() {
        let (_dir, state) = state().await;
        user_service::create(&state.db, "admin", "needle", true)
            .await
            .unwrap();
        let app = configure_routes(state);

        let wrong = app
            .clone()
            .oneshot(request(
                "POST",
                "/api/system/auth/login",
                Some(json!({"username": "admin", "password": "thread"})),
                None,
            ))
            .await
            .unwrap();
        assert_eq!(wrong.status(), StatusCode::UNAUTHORIZED);

        let response = app
            .clone()
            .oneshot(request(
                "POST",
                "/api/system/auth/login",
                Some(json!({"username": "admin", "password": "needle"})),
                None,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let login: LoginResponse = serde_json::from_value(json_body(response).await).unwrap();
        assert!(login.user.is_admin);

        let me = app
            .oneshot(request("GET", "/api/system/auth/me", None, Some(login.access_token.as_str())))
            .await
            .unwrap();
        assert_eq!(me.status(), StatusCode::OK);
        assert_eq!(json_body(me).await["username"], "admin");
    }
}
