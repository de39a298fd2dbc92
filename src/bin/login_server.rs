use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::env;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use registration_service::api;
use registration_service::store::RecordStore;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // Get configuration from environment
    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "8000".to_string());
    let data_file = env::var("DATA_FILE").unwrap_or_else(|_| "registration_data.csv".to_string());

    log::info!("🚀 Starting Authentication Server...");
    log::info!("📄 User data will be read from: {}", data_file);

    let store = web::Data::new(RecordStore::new(&data_file));

    log::info!("🌐 Server starting on {}:{}", host, port);
    log::info!("📚 Swagger UI available at: http://{}:{}/swagger-ui/", host, port);

    // Start HTTP server
    HttpServer::new(move || {
        // Cross-origin requests are permitted unconditionally; the login
        // form is served from an arbitrary local origin.
        let cors = Cors::permissive();

        let openapi = api::swagger::LoginApiDoc::openapi();

        App::new()
            .app_data(store.clone())
            .app_data(web::Data::new(api::health::ServiceName("login-server")))
            .wrap(cors)
            .wrap(Logger::default())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi),
            )
            .route("/health", web::get().to(api::health::health_check))
            .route("/login", web::post().to(api::login::login))
    })
    .bind(format!("{}:{}", host, port))?
    .run()
    .await
}
