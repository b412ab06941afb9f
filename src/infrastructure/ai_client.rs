// src/infrastructure/ai_client.rs
use crate::application::AiApi;
use crate::constants::AI_BASE_PATH;
use crate::domain::{AiRequest, AiResponse, AiTool, DomainError};
use crate::infrastructure::http::{endpoint, fetch_json, parse_origin};
use anyhow::Result;
use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::instrument;

/// HTTP wrapper for `/api/ai/{tool}`: POST `{text}`, read `{result}`.
#[derive(Debug, Clone)]
pub struct AiClient {
    http: Client,
    origin: Url,
}

impl AiClient {
    pub fn new(http: Client, origin: &str) -> Result<Self> {
        Ok(Self {
            http,
            origin: parse_origin(origin)?,
        })
    }

    #[instrument(level = "debug", skip(self, text), fields(chars = text.chars().count()))]
    async fn post(&self, tool: AiTool, text: &str) -> Result<String, DomainError> {
        let segments: Vec<&str> = AI_BASE_PATH.iter().copied().chain([tool.endpoint()]).collect();
        let body = AiRequest {
            text: text.to_string(),
        };
        let response: AiResponse = fetch_json(
            "call AI tool",
            self.http.post(endpoint(&self.origin, &segments)).json(&body),
        )
        .await?;
        Ok(response.result)
    }
}

#[async_trait]
impl AiApi for AiClient {
    async fn summarize_text(&self, text: &str) -> Result<String, DomainError> {
        self.post(AiTool::Summarize, text).await
    }

    async fn generate_ideas(&self, topic: &str) -> Result<String, DomainError> {
        self.post(AiTool::Ideas, topic).await
    }

    async fn improve_text(&self, text: &str) -> Result<String, DomainError> {
        self.post(AiTool::Improve, text).await
    }

    async fn answer_question(&self, question: &str) -> Result<String, DomainError> {
        self.post(AiTool::Answer, question).await
    }
}
