// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// CONFIGURAÇÃO
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//
// Toda a configuração vem de variáveis de ambiente (com suporte a .env
// via dotenvy no binário). A validação acontece no load: o restante do
// sistema recebe uma AppConfig já válida.
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use thiserror::Error;

use crate::llm::GenerationTuning;

/// Erros de carga/validação de configuração
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Variável obrigatória ausente
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    /// Valor presente mas fora do domínio aceito
    #[error("Invalid value for {var}: {value} ({reason})")]
    InvalidValue {
        /// Nome da variável
        var: &'static str,
        /// Valor encontrado
        value: String,
        /// Por que foi rejeitado
        reason: &'static str,
    },
}

/// Configuração completa da aplicação.
///
/// Variáveis suportadas:
/// - `OPENAI_API_KEY`: chave da API (obrigatória)
/// - `OPENAI_MODEL`: modelo de chat (padrão: "gpt-4")
/// - `OPENAI_MAX_TOKENS`: limite de tokens de saída (padrão: 2000)
/// - `OPENAI_TEMPERATURE`: temperatura de amostragem (padrão: 0.3)
/// - `MAX_FILE_SIZE_MB`: tamanho máximo de arquivo aceito (padrão: 50)
/// - `CACHE_ENABLED`: liga/desliga o cache do extrator (padrão: true)
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Chave da API OpenAI
    pub api_key: String,
    /// Modelo de chat
    pub model: String,
    /// Parâmetros de geração efetivos
    pub tuning: GenerationTuning,
    /// Tamanho máximo de arquivo em MB
    pub max_file_size_mb: u64,
    /// Cache de extração habilitado
    pub cache_enabled: bool,
}

/// Carrega e valida a configuração a partir do ambiente.
///
/// Valores efetivos são logados (a chave nunca é). Falha apenas quando
/// a chave está ausente ou algum override é inválido; variáveis
/// ausentes caem nos padrões.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    let api_key = std::env::var("OPENAI_API_KEY")
        .ok()
        .filter(|k| !k.trim().is_empty())
        .ok_or(ConfigError::MissingVar("OPENAI_API_KEY"))?;

    let model =
        std::env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4".to_string());

    let mut tuning = GenerationTuning::default();

    if let Ok(raw) = std::env::var("OPENAI_MAX_TOKENS") {
        let max_tokens = raw.parse::<u32>().ok().filter(|v| *v > 0).ok_or_else(|| {
            ConfigError::InvalidValue {
                var: "OPENAI_MAX_TOKENS",
                value: raw.clone(),
                reason: "expected a positive integer",
            }
        })?;
        tuning.max_tokens = max_tokens;
    }

    if let Ok(raw) = std::env::var("OPENAI_TEMPERATURE") {
        let temperature = raw
            .parse::<f32>()
            .ok()
            .filter(|v| (0.0..=2.0).contains(v))
            .ok_or_else(|| ConfigError::InvalidValue {
                var: "OPENAI_TEMPERATURE",
                value: raw.clone(),
                reason: "expected a float in [0.0, 2.0]",
            })?;
        tuning.temperature = temperature;
    }

    let max_file_size_mb = match std::env::var("MAX_FILE_SIZE_MB") {
        Ok(raw) => raw.parse::<u64>().ok().filter(|v| *v > 0).ok_or_else(|| {
            ConfigError::InvalidValue {
                var: "MAX_FILE_SIZE_MB",
                value: raw.clone(),
                reason: "expected a positive integer",
            }
        })?,
        Err(_) => 50,
    };

    let cache_enabled = match std::env::var("CACHE_ENABLED") {
        Ok(raw) => parse_bool(&raw).ok_or_else(|| ConfigError::InvalidValue {
            var: "CACHE_ENABLED",
            value: raw.clone(),
            reason: "expected true/false",
        })?,
        Err(_) => true,
    };

    log::info!("📦 OPENAI_MODEL={}", model);
    log::info!(
        "📦 OPENAI_MAX_TOKENS={} | OPENAI_TEMPERATURE={}",
        tuning.max_tokens,
        tuning.temperature
    );
    log::info!(
        "📦 MAX_FILE_SIZE_MB={} | CACHE_ENABLED={}",
        max_file_size_mb,
        cache_enabled
    );

    Ok(AppConfig {
        api_key,
        model,
        tuning,
        max_file_size_mb,
        cache_enabled,
    })
}

/// Interpreta booleanos no estilo .env (case-insensitive)
fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().trim() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool_accepted_forms() {
        assert_eq!(parse_bool("true"), Some(true));
        assert_eq!(parse_bool("TRUE"), Some(true));
        assert_eq!(parse_bool("1"), Some(true));
        assert_eq!(parse_bool("on"), Some(true));
        assert_eq!(parse_bool("false"), Some(false));
        assert_eq!(parse_bool("0"), Some(false));
        assert_eq!(parse_bool("off"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
        assert_eq!(parse_bool(""), None);
    }

    // load_app_config lê o ambiente do processo, que é compartilhado
    // entre testes rodando em paralelo. O parse puro é validado aqui;
    // o load completo é exercitado no teste de integração.
}
