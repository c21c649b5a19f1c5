//! [`PlanService`] backed by the Google Generative Language REST API.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{prompts, PlanService, ServiceError};
use crate::error::{FocusError, Result};
use crate::models::{
    AnalysisResult, PerformanceData, PlanContext, ProductivityPlan, StreakCelebration,
};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// HTTP client for Gemini `generateContent` calls.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    base_url: String,
    api_key: String,
    model: String,
    http_client: Client,
}

impl GeminiClient {
    /// Create a client builder
    pub fn builder() -> GeminiClientBuilder {
        GeminiClientBuilder::new()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends one request and returns the first candidate's text.
    async fn generate(
        &self,
        instruction: &str,
        prompt: String,
        schema: Option<Value>,
    ) -> std::result::Result<String, ServiceError> {
        let request = GenerateContentRequest {
            system_instruction: Content::system(instruction),
            contents: vec![Content::user(prompt)],
            generation_config: schema.map(|schema| GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: schema,
            }),
        };

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );
        debug!("POST {url}");

        let response = self
            .http_client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ServiceError::unavailable(format!("HTTP {status}: {body}")));
        }

        let body = response.json::<GenerateContentResponse>().await?;
        Ok(body.text())
    }

    /// Sends a structured request and parses the reply as JSON.
    async fn generate_json<T: DeserializeOwned>(
        &self,
        instruction: &str,
        prompt: String,
        schema: Value,
    ) -> std::result::Result<T, ServiceError> {
        let text = self.generate(instruction, prompt, Some(schema)).await?;
        parse_json(&text)
    }
}

/// Parses a model reply, rejecting empty text.
pub(crate) fn parse_json<T: DeserializeOwned>(text: &str) -> std::result::Result<T, ServiceError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ServiceError::malformed("empty response from model"));
    }
    serde_json::from_str(text).map_err(|e| {
        warn!("Failed to parse model response: {e}");
        ServiceError::from(e)
    })
}

fn prompt_error(e: FocusError) -> ServiceError {
    ServiceError::malformed(format!("failed to build prompt: {e}"))
}

#[async_trait]
impl PlanService for GeminiClient {
    async fn generate_plan(
        &self,
        context: &PlanContext,
    ) -> std::result::Result<ProductivityPlan, ServiceError> {
        let prompt = prompts::plan_prompt(context).map_err(prompt_error)?;
        self.generate_json(prompts::PLAN_INSTRUCTION, prompt, prompts::plan_schema())
            .await
    }

    async fn analyze_performance(
        &self,
        data: &PerformanceData,
    ) -> std::result::Result<AnalysisResult, ServiceError> {
        let prompt = prompts::analysis_prompt(data).map_err(prompt_error)?;
        self.generate_json(
            prompts::ANALYSIS_INSTRUCTION,
            prompt,
            prompts::analysis_schema(),
        )
        .await
    }

    async fn quick_reminder(
        &self,
        subject: &str,
        deadline: &str,
        task_title: &str,
    ) -> std::result::Result<String, ServiceError> {
        let prompt = prompts::reminder_prompt(subject, deadline, task_title);
        let text = self
            .generate(prompts::REMINDER_INSTRUCTION, prompt, None)
            .await?;
        Ok(text.trim().to_string())
    }

    async fn streak_celebration(
        &self,
        streak: u64,
    ) -> std::result::Result<StreakCelebration, ServiceError> {
        self.generate_json(
            prompts::CELEBRATION_INSTRUCTION,
            prompts::celebration_prompt(streak),
            prompts::celebration_schema(),
        )
        .await
    }
}

/// Builder for configuring a [`GeminiClient`].
#[derive(Debug, Clone, Default)]
pub struct GeminiClientBuilder {
    base_url: Option<String>,
    api_key: Option<String>,
    model: Option<String>,
    timeout: Option<Duration>,
}

impl GeminiClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the API root, e.g. to point at a proxy or a test server.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Per-request timeout, covering connect and body transfer.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the client.
    ///
    /// A missing API key is allowed; requests will then be rejected by the
    /// service and surface as [`ServiceError::Unavailable`].
    ///
    /// # Errors
    ///
    /// Returns `FocusError::Configuration` if the HTTP client cannot be
    /// created.
    pub fn build(self) -> Result<GeminiClient> {
        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let api_key = self.api_key.unwrap_or_default();
        if api_key.is_empty() {
            warn!("No API key configured; AI requests will fail");
        }

        let http_client = Client::builder()
            .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT))
            .build()
            .map_err(|e| FocusError::Configuration {
                message: format!("Failed to create HTTP client: {e}"),
            })?;

        Ok(GeminiClient {
            base_url,
            api_key,
            model: self.model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            http_client,
        })
    }
}

// Wire types for generateContent

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    system_instruction: Content,
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: Value,
}

#[derive(Debug, Serialize, Deserialize, Default)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

impl Content {
    fn system(text: &str) -> Self {
        Self {
            role: None,
            parts: vec![Part {
                text: Some(text.to_string()),
            }],
        }
    }

    fn user(text: String) -> Self {
        Self {
            role: Some("user".to_string()),
            parts: vec![Part { text: Some(text) }],
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Content,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate.
    fn text(&self) -> String {
        self.candidates
            .first()
            .map(|candidate| {
                candidate
                    .content
                    .parts
                    .iter()
                    .filter_map(|part| part.text.as_deref())
                    .collect()
            })
            .unwrap_or_default()
    }
}
