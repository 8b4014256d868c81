// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// CLIENTE LLM
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//
// Trait e implementações para a capability de geração de texto.
// A capability é tratada como caixa-preta: um par (instrução de sistema,
// mensagem de usuário) entra, texto gerado ou falha sai.
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Erros da capability de geração
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// A API respondeu com status de erro
    #[error("API error: {0}")]
    ApiError(String),

    /// Limite de requisições atingido (HTTP 429)
    #[error("Rate limit exceeded")]
    RateLimitError,

    /// Resposta não pôde ser interpretada
    #[error("Invalid response format: {0}")]
    ParseError(String),

    /// Falha de rede/transporte
    #[error("Network error: {0}")]
    NetworkError(String),
}

/// Parâmetros de tuning enviados em cada chamada de geração.
///
/// Valores padrão calibrados para resumos determinísticos e fiéis:
/// temperatura baixa, nucleus mass alta, sem penalidades.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationTuning {
    /// Tamanho máximo da saída em tokens
    pub max_tokens: u32,
    /// Temperatura de amostragem
    pub temperature: f32,
    /// Massa de nucleus sampling (top-p)
    pub top_p: f32,
    /// Penalidade de frequência
    pub frequency_penalty: f32,
    /// Penalidade de presença
    pub presence_penalty: f32,
}

impl Default for GenerationTuning {
    fn default() -> Self {
        Self {
            max_tokens: 2000,
            temperature: 0.3,
            top_p: 0.9,
            frequency_penalty: 0.0,
            presence_penalty: 0.0,
        }
    }
}

/// Trait principal para a capability de geração.
///
/// Define a interface que qualquer provedor deve implementar, permitindo
/// substituição fácil entre provedores (OpenAI, local, mock de teste).
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Gera texto a partir de uma instrução de sistema e uma mensagem
    /// de usuário, com os parâmetros de tuning fornecidos.
    async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        tuning: &GenerationTuning,
    ) -> Result<String, LlmError>;
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// IMPLEMENTAÇÃO OPENAI
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
    top_p: f32,
    frequency_penalty: f32,
    presence_penalty: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

/// Cliente para a API chat-completions da OpenAI
pub struct OpenAiClient {
    api_key: String,
    model: String,
    base_url: String,
    client: reqwest::Client,
}

impl OpenAiClient {
    /// Cria um cliente com o modelo padrão (`gpt-4`).
    ///
    /// O transporte HTTP usa timeout de 120s; se o builder falhar (TLS
    /// indisponível no sistema), a falha é logada e o cliente cai no
    /// transporte padrão sem timeout em vez de abortar o processo.
    pub fn new(api_key: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .unwrap_or_else(|e| {
                log::warn!("⚠️ Falha ao construir transporte HTTP com timeout: {}", e);
                reqwest::Client::default()
            });

        Self {
            api_key,
            model: "gpt-4".into(),
            base_url: "https://api.openai.com/v1".into(),
            client,
        }
    }

    /// Sobrescreve o modelo usado nas chamadas
    pub fn with_model(mut self, model: &str) -> Self {
        self.model = model.into();
        self
    }

    /// Sobrescreve a URL base (proxies, endpoints compatíveis)
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').into();
        self
    }
}

#[async_trait]
impl ChatClient for OpenAiClient {
    async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        tuning: &GenerationTuning,
    ) -> Result<String, LlmError> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: user_prompt,
                },
            ],
            max_tokens: tuning.max_tokens,
            temperature: tuning.temperature,
            top_p: tuning.top_p,
            frequency_penalty: tuning.frequency_penalty,
            presence_penalty: tuning.presence_penalty,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| LlmError::NetworkError(e.to_string()))?;

        if response.status().as_u16() == 429 {
            return Err(LlmError::RateLimitError);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::ApiError(format!("HTTP {}: {}", status, body)));
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| LlmError::ParseError(e.to_string()))?;

        chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| LlmError::ParseError("response has no choices".into()))
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// IMPLEMENTAÇÃO MOCK PARA TESTES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Cliente mock para testes unitários e de integração.
///
/// Permite simular falhas seletivas: estilos cujo prompt de sistema
/// contém um dos fragmentos em `fail_if_system_contains` recebem
/// `LlmError::ApiError`; fragmentos em `empty_if_system_contains`
/// produzem resposta vazia (para exercitar o caminho EmptyOutput).
#[derive(Debug, Default)]
pub struct MockChatClient {
    /// Resposta devolvida nas chamadas bem sucedidas
    pub canned_response: String,
    /// Falha chamadas cujo system prompt contém um destes fragmentos
    pub fail_if_system_contains: Vec<String>,
    /// Devolve string vazia se o system prompt contém um destes fragmentos
    pub empty_if_system_contains: Vec<String>,
}

impl MockChatClient {
    /// Mock que sempre responde com o texto dado
    pub fn new(canned_response: impl Into<String>) -> Self {
        Self {
            canned_response: canned_response.into(),
            ..Default::default()
        }
    }

    /// Configura falha seletiva por fragmento do system prompt
    pub fn failing_on(mut self, fragment: impl Into<String>) -> Self {
        self.fail_if_system_contains.push(fragment.into());
        self
    }

    /// Configura resposta vazia seletiva por fragmento do system prompt
    pub fn empty_on(mut self, fragment: impl Into<String>) -> Self {
        self.empty_if_system_contains.push(fragment.into());
        self
    }
}

#[async_trait]
impl ChatClient for MockChatClient {
    async fn generate(
        &self,
        system_prompt: &str,
        _user_prompt: &str,
        _tuning: &GenerationTuning,
    ) -> Result<String, LlmError> {
        for fragment in &self.fail_if_system_contains {
            if system_prompt.contains(fragment.as_str()) {
                return Err(LlmError::ApiError(format!(
                    "mock failure triggered by '{}'",
                    fragment
                )));
            }
        }
        for fragment in &self.empty_if_system_contains {
            if system_prompt.contains(fragment.as_str()) {
                return Ok("   ".into());
            }
        }
        Ok(self.canned_response.clone())
    }
}
