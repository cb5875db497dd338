use serde::Deserialize;
use service_core::config::{self as core_config, ServerConfig, TelemetryConfig};
use service_core::error::AppError;

pub const DEFAULT_IP_ENDPOINT: &str = "https://api.ipify.org";
pub const DEFAULT_SECRET_VAR: &str = "SECRET_PASSWORD";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UtilityConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
    #[serde(default)]
    pub ip_lookup: IpLookupConfig,
    #[serde(default)]
    pub demo: DemoConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IpLookupConfig {
    #[serde(default = "default_ip_endpoint")]
    pub endpoint: String,
    /// Unset means the request may wait indefinitely for the upstream.
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

impl Default for IpLookupConfig {
    fn default() -> Self {
        Self {
            endpoint: default_ip_endpoint(),
            timeout_ms: None,
        }
    }
}

fn default_ip_endpoint() -> String {
    DEFAULT_IP_ENDPOINT.to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct DemoConfig {
    /// Environment variable previewed by `/demo`.
    #[serde(default = "default_secret_var")]
    pub secret_var: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            secret_var: default_secret_var(),
        }
    }
}

fn default_secret_var() -> String {
    DEFAULT_SECRET_VAR.to_string()
}

impl UtilityConfig {
    pub fn load() -> Result<Self, AppError> {
        core_config::load()
    }
}
