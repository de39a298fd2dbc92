use crate::models::Record;
use crate::services::registration_service;
use crate::store::RecordStore;
use actix_web::{web, HttpResponse};

#[utoipa::path(
    post,
    path = "/save-data",
    tag = "Registration",
    request_body = Record,
    responses(
        (status = 200, description = "Registration data saved"),
        (status = 400, description = "Body is not a valid JSON registration record"),
        (status = 500, description = "Failed to persist the record")
    )
)]
pub async fn save_data(store: web::Data<RecordStore>, body: web::Bytes) -> HttpResponse {
    log::info!("📝 POST /save-data");

    // Parsed by hand instead of the Json extractor so the 400 body stays
    // under this handler's control.
    let record: Record = match serde_json::from_slice(&body) {
        Ok(record) => record,
        Err(e) => {
            log::warn!("❌ Rejected registration payload: {}", e);
            return HttpResponse::BadRequest().json(serde_json::json!({
                "error": "Invalid JSON data received"
            }));
        }
    };

    match registration_service::save_registration(&store, &record) {
        Ok(()) => {
            log::info!("✅ Registration data saved: {}", record.email);
            HttpResponse::Ok().json(serde_json::json!({
                "message": "Registration data saved successfully"
            }))
        }
        Err(e) => {
            // Full detail stays server-side; the client gets a generic body.
            log::error!("❌ Failed to save registration for {}: {}", record.email, e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Failed to save registration data"
            }))
        }
    }
}
