use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{GenerateError, Generator, ProviderMetadata, SamplingParams};

/// Generator backed by a local Ollama instance
#[derive(Clone)]
pub struct OllamaGenerator {
    client: reqwest::Client,
    base_url: String,
    model: String,
    system_prompt: Option<String>,
}

impl OllamaGenerator {
    pub fn new(base_url: &str, model: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            system_prompt: None,
        }
    }

    pub fn with_system_prompt(mut self, system_prompt: impl Into<String>) -> Self {
        let system_prompt = system_prompt.into();
        self.system_prompt = (!system_prompt.is_empty()).then_some(system_prompt);
        self
    }

    /// Check that Ollama is reachable and the model is pulled
    pub async fn check_health(&self) -> Result<(), GenerateError> {
        let url = format!("{}/api/tags", self.base_url);
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(GenerateError::ApiError(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let tags: TagsResponse = response.json().await.map_err(|e| {
            GenerateError::ApiError(format!("Failed to parse response: {}", e))
        })?;

        if tags.models.iter().any(|m| self.is_listed_as(&m.name)) {
            tracing::info!("Ollama model {} is available", self.model);
            Ok(())
        } else {
            Err(GenerateError::ModelNotFound(self.model.clone()))
        }
    }

    /// Listed names carry a tag suffix, e.g. "llama3:8b-instruct-q4_0"
    fn is_listed_as(&self, name: &str) -> bool {
        name == self.model
            || name
                .strip_prefix(self.model.as_str())
                .is_some_and(|tag| tag.starts_with(':'))
    }

    fn request<'a>(&'a self, prompt: &'a str, params: &SamplingParams) -> GenerateRequest<'a> {
        GenerateRequest {
            model: &self.model,
            prompt,
            system: self.system_prompt.as_deref(),
            stream: false,
            options: GenerateOptions {
                temperature: params.temperature,
                num_predict: params.max_tokens,
            },
        }
    }
}

#[async_trait]
impl Generator for OllamaGenerator {
    async fn generate(
        &self,
        prompt: &str,
        params: &SamplingParams,
    ) -> Result<String, GenerateError> {
        let url = format!("{}/api/generate", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&self.request(prompt, params))
            .send()
            .await?;

        if response.status() == 404 {
            return Err(GenerateError::ModelNotFound(self.model.clone()));
        }

        if !response.status().is_success() {
            return Err(GenerateError::ApiError(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let body: GenerateResponse = response.json().await.map_err(|e| {
            GenerateError::ApiError(format!("Failed to parse response: {}", e))
        })?;

        if let Some(error) = body.error {
            return Err(GenerateError::ApiError(error));
        }

        Ok(body.response)
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "ollama".to_string(),
            model: self.model.clone(),
        }
    }
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<&'a str>,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Serialize)]
struct GenerateOptions {
    temperature: f32,
    num_predict: u32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
    error: Option<String>,
}

#[derive(Deserialize)]
struct TagsResponse {
    #[serde(default)]
    models: Vec<TagModel>,
}

#[derive(Deserialize)]
struct TagModel {
    name: String,
}
