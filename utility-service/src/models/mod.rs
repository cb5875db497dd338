//! Request and response bodies for the utility endpoints.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct MathRequest {
    pub x: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct MathResponse {
    pub input: i64,
    pub result: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct IpResponse {
    pub ip: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct EnvVarRequest {
    pub var_name: String,
    #[serde(default)]
    pub default: Option<String>,
}

/// `value` is serialized as `null` when the variable is unset and no default
/// was supplied.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct EnvVarResponse {
    pub var_name: String,
    pub value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct DemoResponse {
    pub message: String,
    pub math_result: String,
    pub current_ip: String,
    pub secret_password_preview: String,
}
