//! HTTP handlers for utility-service.

pub mod app;
pub mod demo;
pub mod env;
pub mod ip;
pub mod math;

pub use app::{health_check, index, metrics, not_found, readiness_check};
pub use demo::demo_all_functions;
pub use env::get_environment_variable;
pub use ip::get_current_ip;
pub use math::do_math;
