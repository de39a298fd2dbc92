use crate::services::auth_service::{self, LoginError, LoginRequest};
use crate::store::RecordStore;
use actix_web::{web, HttpResponse};

#[utoipa::path(
    post,
    path = "/login",
    tag = "Auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful"),
        (status = 400, description = "Missing username or password"),
        (status = 401, description = "Invalid username or password"),
        (status = 503, description = "Authentication data source unavailable"),
        (status = 500, description = "Unexpected internal error")
    )
)]
pub async fn login(store: web::Data<RecordStore>, body: web::Bytes) -> HttpResponse {
    log::info!("🔐 POST /login");

    let request: LoginRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(e) => {
            log::warn!("❌ Rejected login payload: {}", e);
            return HttpResponse::BadRequest().json(serde_json::json!({
                "message": "Missing username or password"
            }));
        }
    };

    match auth_service::authenticate(&store, &request) {
        Ok(full_name) => HttpResponse::Ok().json(serde_json::json!({
            "message": "Login successful",
            "user": full_name
        })),
        Err(LoginError::MissingCredentials) => {
            HttpResponse::BadRequest().json(serde_json::json!({
                "message": "Missing username or password"
            }))
        }
        Err(LoginError::Unavailable) => {
            HttpResponse::ServiceUnavailable().json(serde_json::json!({
                "message": "Authentication service is unavailable."
            }))
        }
        Err(LoginError::InvalidCredentials) => {
            log::warn!("❌ Failed login attempt");
            // Same body for unknown user and wrong password.
            HttpResponse::Unauthorized().json(serde_json::json!({
                "message": "Invalid username or password."
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Record;
    use actix_web::{http::StatusCode, test, App};
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    fn seeded_store(dir: &TempDir, records: &[(&str, &str, Option<&str>)]) -> RecordStore {
        let store = RecordStore::new(dir.path().join("users.csv"));
        for (email, password, full_name) in records {
            store
                .append(&Record {
                    email: email.to_string(),
                    password: password.to_string(),
                    full_name: full_name.map(str::to_string),
                    extra: BTreeMap::new(),
                })
                .unwrap();
        }
        store
    }

    async fn post(store: RecordStore, payload: String) -> (StatusCode, web::Bytes) {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(store))
                .route("/login", web::post().to(login)),
        )
        .await;

        let request = test::TestRequest::post()
            .uri("/login")
            .set_payload(payload)
            .to_request();
        let response = test::call_service(&app, request).await;
        let status = response.status();
        let body = test::read_body(response).await;
        (status, body)
    }

    fn credentials(username: &str, password: &str) -> String {
        serde_json::json!({ "username": username, "password": password }).to_string()
    }

    #[actix_web::test]
    async fn successful_login_returns_full_name() {
        let dir = TempDir::new().unwrap();
        let store = seeded_store(&dir, &[("a@b.com", "secret", Some("Ada Lovelace"))]);

        let (status, body) = post(store, credentials("a@b.com", "secret")).await;
        assert_eq!(status, StatusCode::OK);
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["message"], "Login successful");
        assert_eq!(body["user"], "Ada Lovelace");
    }

    #[actix_web::test]
    async fn login_without_full_name_returns_placeholder() {
        let dir = TempDir::new().unwrap();
        let store = seeded_store(&dir, &[("a@b.com", "secret", None)]);

        let (status, body) = post(store, credentials("a@b.com", "secret")).await;
        assert_eq!(status, StatusCode::OK);
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["user"], "User");
    }

    #[actix_web::test]
    async fn wrong_password_and_unknown_user_get_identical_responses() {
        let dir = TempDir::new().unwrap();
        let store = seeded_store(&dir, &[("a@b.com", "secret", None)]);
        let (wrong_status, wrong_body) = post(store, credentials("a@b.com", "nope")).await;

        let dir2 = TempDir::new().unwrap();
        let store = seeded_store(&dir2, &[("a@b.com", "secret", None)]);
        let (unknown_status, unknown_body) =
            post(store, credentials("ghost@b.com", "secret")).await;

        assert_eq!(wrong_status, StatusCode::UNAUTHORIZED);
        assert_eq!(unknown_status, StatusCode::UNAUTHORIZED);
        // Byte-identical bodies: a client cannot tell the two apart.
        assert_eq!(wrong_body, unknown_body);
    }

    #[actix_web::test]
    async fn absent_data_file_returns_503() {
        let dir = TempDir::new().unwrap();
        let store = RecordStore::new(dir.path().join("missing.csv"));

        let (status, body) = post(store, credentials("a@b.com", "secret")).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["message"], "Authentication service is unavailable.");
    }

    #[actix_web::test]
    async fn missing_credentials_return_400() {
        let dir = TempDir::new().unwrap();
        let store = seeded_store(&dir, &[("a@b.com", "secret", None)]);

        let (status, body) = post(store, r#"{"username":"a@b.com"}"#.to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["message"], "Missing username or password");
    }

    #[actix_web::test]
    async fn stored_whitespace_does_not_block_login() {
        let dir = TempDir::new().unwrap();
        let store = seeded_store(&dir, &[("  a@b.com ", "secret", Some("Ada"))]);

        let (status, _) = post(store, credentials("a@b.com", "secret")).await;
        assert_eq!(status, StatusCode::OK);
    }
}
