use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::{LLMConfig, entities::app_errors::CoreError},
    llm::ports::LLMClient,
};

#[derive(Debug, Clone)]
pub struct GeminiLLMClient {
    api_key: String,
    model_name: String,
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: ContentResponse,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    text: String,
}

impl GeminiLLMClient {
    pub fn new(config: &LLMConfig) -> Result<Self, CoreError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build Gemini HTTP client: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Self {
            api_key: config.gemini_api_key.clone(),
            model_name: config.gemini_model.clone(),
            base_url: config.gemini_base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    async fn call_gemini_api(&self, request: GeminiRequest) -> Result<String, CoreError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model_name
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Gemini API request failed: {}", e);
                CoreError::ExternalServiceError(format!("LLM API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Gemini API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "LLM API returned error: {}",
                status
            )));
        }

        let gemini_response: GeminiResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Gemini response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })?;

        gemini_response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or_else(|| CoreError::ExternalServiceError("No response from LLM".to_string()))
    }
}

impl LLMClient for GeminiLLMClient {
    async fn generate_with_text(
        &self,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> Result<String, CoreError> {
        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: Some(GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema,
            }),
        };

        self.call_gemini_api(request).await
    }
}
