use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

/// Which of the two services is answering; registered as app data by each
/// binary so they report distinct names.
pub struct ServiceName(pub &'static str);

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: i64,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_check(name: web::Data<ServiceName>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        service: name.0.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().timestamp(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn reports_healthy_with_service_name() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(ServiceName("login-server")))
                .route("/health", web::get().to(health_check)),
        )
        .await;

        let request = test::TestRequest::get().uri("/health").to_request();
        let response: HealthResponse = test::call_and_read_body_json(&app, request).await;
        assert_eq!(response.status, "healthy");
        assert_eq!(response.service, "login-server");
    }
}
