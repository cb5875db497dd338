#![allow(dead_code)]

use reqwest::{Client, Response};
use utility_service::config::UtilityConfig;
use utility_service::Application;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

pub struct TestApp {
    pub address: String,
    pub port: u16,
    /// Stands in for the public IP-echo service.
    pub ip_server: MockServer,
    client: Client,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with(|_| {}).await
    }

    /// Spawn with a config tweak applied after the test defaults.
    pub async fn spawn_with(customize: impl FnOnce(&mut UtilityConfig)) -> Self {
        let ip_server = MockServer::start().await;

        let mut config = UtilityConfig::default();
        config.server.host = "127.0.0.1".to_string();
        config.server.port = 0;
        config.ip_lookup.endpoint = ip_server.uri();
        customize(&mut config);

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for HTTP server to be ready by polling health endpoint
        let client = Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            ip_server,
            client,
        }
    }

    /// Make the IP-echo service answer with `body`.
    pub async fn mock_ip(&self, body: &str) {
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(&self.ip_server)
            .await;
    }

    /// Make the IP-echo service fail with `status`.
    pub async fn mock_ip_status(&self, status: u16) {
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.ip_server)
            .await;
    }

    pub async fn get(&self, path: &str) -> Response {
        self.client
            .get(format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_json(&self, path: &str, body: &serde_json::Value) -> Response {
        self.client
            .post(format!("{}{}", self.address, path))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_raw(&self, path: &str, body: &'static str) -> Response {
        self.client
            .post(format!("{}{}", self.address, path))
            .header("content-type", "application/json")
            .body(body)
            .send()
            .await
            .expect("Failed to execute request")
    }
}
