use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Registration Service API",
        version = "1.0.0",
        description = "Accepts registration records and appends them to the shared tabular data file."
    ),
    paths(
        crate::api::register::save_data,
        crate::api::health::health_check,
    ),
    components(
        schemas(
            crate::models::Record,
            crate::api::health::HealthResponse,
        )
    ),
    tags(
        (name = "Registration", description = "Registration intake endpoint. Records are appended to the data file in arrival order."),
        (name = "Health", description = "Health check endpoint for monitoring service status."),
    )
)]
pub struct RegistrationApiDoc;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Login Service API",
        version = "1.0.0",
        description = "Authenticates login attempts against the shared tabular data file."
    ),
    paths(
        crate::api::login::login,
        crate::api::health::health_check,
    ),
    components(
        schemas(
            crate::services::auth_service::LoginRequest,
            crate::api::health::HealthResponse,
        )
    ),
    tags(
        (name = "Auth", description = "Login endpoint. First matching record by insertion order wins."),
        (name = "Health", description = "Health check endpoint for monitoring service status."),
    )
)]
pub struct LoginApiDoc;
