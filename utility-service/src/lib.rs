pub mod config;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;

use utoipa::OpenApi;

pub use startup::{build_router, AppState, Application};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Utility Service API",
        description = "Demo utilities: increment a number, report the public IP, read environment variables"
    ),
    paths(
        handlers::app::index,
        handlers::app::health_check,
        handlers::app::readiness_check,
        handlers::app::metrics,
        handlers::math::do_math,
        handlers::ip::get_current_ip,
        handlers::env::get_environment_variable,
        handlers::demo::demo_all_functions,
    ),
    components(
        schemas(
            models::MathRequest,
            models::MathResponse,
            models::IpResponse,
            models::EnvVarRequest,
            models::EnvVarResponse,
            models::DemoResponse,
            service_core::error::ErrorResponse,
        )
    ),
    tags(
        (name = "Utilities", description = "Math, IP lookup and environment helpers"),
        (name = "Observability", description = "Service health and monitoring"),
    )
)]
pub struct ApiDoc;
