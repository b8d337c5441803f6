mod ollama;

pub use ollama::OllamaGenerator;

/// Text generation provider interface
#[async_trait::async_trait]
pub trait Generator: Send + Sync {
    /// Complete `prompt` and return the raw generated text
    async fn generate(&self, prompt: &str, params: &SamplingParams)
    -> Result<String, GenerateError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingParams {
    pub max_tokens: u32,
    pub temperature: f32,
}

impl SamplingParams {
    pub fn new(max_tokens: u32, temperature: f32) -> Self {
        Self {
            max_tokens,
            temperature,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub model: String,
}

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Model not available: {0}")]
    ModelNotFound(String),
}
