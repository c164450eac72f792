pub mod config;
pub mod dto;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use crate::services::{provider::Provider, quiz_service::QuizService};
use reqwest::Client;
use std::time::Duration;

#[derive(Clone)]
pub struct AppState {
    pub quiz_service: QuizService,
}

impl AppState {
    pub fn new() -> Self {
        let config = crate::config::get_config();
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .unwrap();

        let provider = Provider::from_config(config, http_client);

        Self {
            quiz_service: QuizService::new(provider),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
