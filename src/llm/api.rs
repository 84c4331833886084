use std::time::Duration;

use async_openai::{
    config::OpenAIConfig,
    error::{ApiError, OpenAIError},
    types::{
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequest,
        CreateChatCompletionRequestArgs, CreateChatCompletionResponse,
    },
    Client,
};

use crate::{
    config::{parse_llm_provider_model, LlmConfig},
    error::{Result, VitalogError},
    llm::provider::CompletionOptions,
};

const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
const OPENROUTER_BASE_URL: &str = "https://openrouter.ai/api/v1";
const OLLAMA_BASE_URL: &str = "http://localhost:11434/v1";
const LMSTUDIO_BASE_URL: &str = "http://localhost:1234/v1";

#[derive(Debug, Clone)]
struct ApiConfig {
    base_url: String,
    api_key: Option<String>,
    model: String,
    timeout_secs: u64,
    max_retries: u32,
}

#[derive(Clone)]
pub struct LlmApiClient {
    client: Client<OpenAIConfig>,
    config: ApiConfig,
}

impl LlmApiClient {
    pub fn new(config: &LlmConfig) -> Result<Self> {
        let api_config = ApiConfig::from_llm_config(config);

        let (provider, _) = parse_llm_provider_model(&config.model);
        let needs_api_key = !matches!(
            provider.to_lowercase().as_str(),
            "ollama" | "local" | "lmstudio"
        );

        if needs_api_key && api_config.api_key.is_none() {
            return Err(VitalogError::Llm(
                "API key required for this provider".to_string(),
            ));
        }

        let openai_config = OpenAIConfig::new()
            .with_api_base(api_config.base_url.clone())
            .with_api_key(api_config.api_key.clone().unwrap_or_default());

        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(api_config.timeout_secs))
            .build()
            .map_err(|error| {
                VitalogError::Llm(format!("Failed to create LLM HTTP client: {error}"))
            })?;

        // Cap async-openai's internal backoff at our timeout. Its default
        // max_elapsed_time retries 500s for up to 15 minutes, which would
        // hang a summary request far beyond the configured budget.
        let backoff = backoff::ExponentialBackoff {
            max_elapsed_time: Some(Duration::from_secs(api_config.timeout_secs)),
            ..Default::default()
        };

        let client = Client::with_config(openai_config)
            .with_http_client(http_client)
            .with_backoff(backoff);

        Ok(Self {
            client,
            config: api_config,
        })
    }

    pub async fn complete(
        &self,
        prompt: &str,
        options: Option<&CompletionOptions>,
    ) -> Result<String> {
        if prompt.trim().is_empty() {
            return Err(VitalogError::Validation(
                "Prompt cannot be empty".to_string(),
            ));
        }

        let mut last_error: Option<VitalogError> = None;

        for attempt in 0..=self.config.max_retries {
            if attempt > 0 {
                let delay_ms = 100 * 2_u64.pow(attempt - 1);
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            }

            let request = self.build_request(prompt, options)?;

            match self.client.chat().create(request).await {
                Ok(response) => return Self::extract_content(response),
                Err(error) => {
                    if let Some(rate_limit_error) = Self::rate_limit_error(&error) {
                        return Err(rate_limit_error);
                    }

                    if let Some(auth_error) = Self::auth_error(&error) {
                        return Err(auth_error);
                    }

                    let retryable = Self::is_retryable(&error);
                    let mapped_error = Self::map_openai_error(error);

                    if retryable && attempt < self.config.max_retries {
                        last_error = Some(mapped_error);
                        continue;
                    }

                    return Err(mapped_error);
                }
            }
        }

        Err(last_error
            .unwrap_or_else(|| VitalogError::Llm("LLM completion failed after retries".to_string())))
    }

    fn build_request(
        &self,
        prompt: &str,
        options: Option<&CompletionOptions>,
    ) -> Result<CreateChatCompletionRequest> {
        let messages = vec![ChatCompletionRequestUserMessageArgs::default()
            .content(prompt)
            .build()
            .map_err(|error| VitalogError::Validation(format!("Invalid user prompt: {error}")))?
            .into()];

        let mut request = CreateChatCompletionRequestArgs::default();
        request.model(self.config.model.clone()).messages(messages);

        if let Some(options) = options {
            if let Some(temperature) = options.temperature {
                request.temperature(temperature);
            }
            if let Some(max_tokens) = options.max_tokens {
                request.max_tokens(max_tokens);
            }
        }

        request.build().map_err(|error| {
            VitalogError::Validation(format!("Invalid LLM completion request: {error}"))
        })
    }

    fn extract_content(response: CreateChatCompletionResponse) -> Result<String> {
        let message = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| VitalogError::Llm("LLM response contained no choices".to_string()))?
            .message
            .content
            .unwrap_or_default();

        if message.trim().is_empty() {
            return Err(VitalogError::Llm(
                "LLM response contained empty content".to_string(),
            ));
        }

        Ok(message)
    }

    fn is_retryable(error: &OpenAIError) -> bool {
        match error {
            OpenAIError::ApiError(api_error) => {
                api_error.r#type.is_none() && api_error.code.is_none()
            }
            OpenAIError::Reqwest(reqwest_error) => reqwest_error
                .status()
                .map(|status| status.is_server_error())
                .unwrap_or(true),
            _ => false,
        }
    }

    fn rate_limit_error(error: &OpenAIError) -> Option<VitalogError> {
        match error {
            OpenAIError::Reqwest(reqwest_error)
                if reqwest_error.status() == Some(reqwest::StatusCode::TOO_MANY_REQUESTS) =>
            {
                Some(VitalogError::LlmRateLimit { retry_after: None })
            }
            OpenAIError::ApiError(api_error) if Self::is_rate_limit_api_error(api_error) => {
                Some(VitalogError::LlmRateLimit { retry_after: None })
            }
            _ => None,
        }
    }

    fn auth_error(error: &OpenAIError) -> Option<VitalogError> {
        match error {
            OpenAIError::Reqwest(reqwest_error)
                if reqwest_error.status() == Some(reqwest::StatusCode::UNAUTHORIZED)
                    || reqwest_error.status() == Some(reqwest::StatusCode::FORBIDDEN) =>
            {
                Some(VitalogError::Llm(format!(
                    "LLM authentication failed: {reqwest_error}"
                )))
            }
            OpenAIError::ApiError(api_error) if Self::is_auth_api_error(api_error) => Some(
                VitalogError::Llm(format!("LLM authentication failed: {api_error}")),
            ),
            _ => None,
        }
    }

    fn is_rate_limit_api_error(api_error: &ApiError) -> bool {
        let message = api_error.message.to_lowercase();
        let error_type = api_error.r#type.clone().unwrap_or_default().to_lowercase();
        let code = api_error.code.clone().unwrap_or_default().to_lowercase();

        message.contains("rate limit")
            || message.contains("too many requests")
            || error_type.contains("rate_limit")
            || code.contains("rate_limit")
            || code == "insufficient_quota"
    }

    fn is_auth_api_error(api_error: &ApiError) -> bool {
        let message = api_error.message.to_lowercase();
        let error_type = api_error.r#type.clone().unwrap_or_default().to_lowercase();
        let code = api_error.code.clone().unwrap_or_default().to_lowercase();

        message.contains("unauthorized")
            || message.contains("forbidden")
            || message.contains("authentication")
            || message.contains("invalid api key")
            || code.contains("invalid_api_key")
            || code.contains("authentication")
            || error_type.contains("authentication")
    }

    fn map_openai_error(error: OpenAIError) -> VitalogError {
        match error {
            OpenAIError::Reqwest(reqwest_error) => {
                VitalogError::Llm(format!("LLM request failed: {reqwest_error}"))
            }
            OpenAIError::ApiError(api_error) => {
                VitalogError::Llm(format!("LLM API error: {api_error}"))
            }
            OpenAIError::JSONDeserialize(err) => {
                VitalogError::Llm(format!("Failed to parse LLM response: {err}"))
            }
            OpenAIError::InvalidArgument(message) => VitalogError::Validation(message),
            other => VitalogError::Llm(other.to_string()),
        }
    }
}

impl ApiConfig {
    fn from_llm_config(config: &LlmConfig) -> Self {
        let (provider, model) = parse_llm_provider_model(&config.model);

        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| default_base_url(provider).to_string());

        let normalized_model = if provider.eq_ignore_ascii_case("local") {
            config.model.clone()
        } else {
            model.to_string()
        };

        Self {
            base_url,
            api_key: config.api_key.clone(),
            model: normalized_model,
            timeout_secs: config.timeout_secs,
            max_retries: config.max_retries,
        }
    }
}

fn default_base_url(provider: &str) -> &'static str {
    match provider.to_lowercase().as_str() {
        "openai" => OPENAI_BASE_URL,
        "openrouter" => OPENROUTER_BASE_URL,
        "ollama" => OLLAMA_BASE_URL,
        "lmstudio" => LMSTUDIO_BASE_URL,
        _ => OPENAI_BASE_URL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_llm_config() -> LlmConfig {
        LlmConfig {
            model: "ollama/llama3".to_string(),
            api_key: None,
            base_url: None,
            timeout_secs: 30,
            max_retries: 0,
        }
    }

    #[test]
    fn test_client_builds_without_api_key_for_local_providers() {
        let config = test_llm_config();
        assert!(LlmApiClient::new(&config).is_ok());
    }

    #[test]
    fn test_client_requires_api_key_for_hosted_providers() {
        let config = LlmConfig {
            model: "openai/gpt-4o".to_string(),
            ..test_llm_config()
        };
        let result = LlmApiClient::new(&config);
        assert!(matches!(result, Err(VitalogError::Llm(_))));
    }

    #[test]
    fn test_build_request_applies_options() {
        let config = test_llm_config();
        let client = LlmApiClient::new(&config).expect("client should be created");

        let options = CompletionOptions::deterministic(0.1, 2500);
        let request = client
            .build_request("test prompt", Some(&options))
            .expect("request should build");

        assert_eq!(request.temperature, Some(0.1));
        assert_eq!(request.max_tokens, Some(2500));
        assert_eq!(request.model, "llama3");
    }

    #[test]
    fn test_default_base_urls() {
        assert_eq!(default_base_url("openai"), OPENAI_BASE_URL);
        assert_eq!(default_base_url("openrouter"), OPENROUTER_BASE_URL);
        assert_eq!(default_base_url("ollama"), OLLAMA_BASE_URL);
        assert_eq!(default_base_url("lmstudio"), LMSTUDIO_BASE_URL);
    }
}
