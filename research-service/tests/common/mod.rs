#![allow(dead_code)]

use research_service::config::{GeminiConfig, ResearchConfig};
use research_service::startup::Application;
use secrecy::Secret;
use service_core::config::Config;
use std::time::Duration;

pub const TEST_API_KEY: &str = "test-api-key";
pub const GENERATE_PATH: &str = "/v1beta/models/gemini-2.0-flash:generateContent";

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub client: reqwest::Client,
}

impl TestApp {
    /// Spawn the service with its generation API pointed at `gemini_base`.
    pub async fn spawn(gemini_base: &str) -> Self {
        Self::spawn_with_key(gemini_base, TEST_API_KEY).await
    }

    pub async fn spawn_with_key(gemini_base: &str, api_key: &str) -> Self {
        let config = ResearchConfig {
            common: Config {
                port: 0, // Random port
                ..Config::default()
            },
            gemini: GeminiConfig {
                api_url: format!("{}{}?key=", gemini_base, GENERATE_PATH),
                api_key: Secret::new(api_key.to_string()),
            },
        };

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        let client = reqwest::Client::new();

        // Wait for the server by polling the health endpoint
        for _ in 0..50 {
            if client
                .get(format!("{}/health", address))
                .send()
                .await
                .is_ok()
            {
                break;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }

        Self {
            address,
            port,
            client,
        }
    }

    pub async fn process(&self, body: serde_json::Value) -> reqwest::Response {
        self.client
            .post(format!("{}/api/research/process", self.address))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request")
    }
}
