//! # Meeting Styler
//!
//! Este crate implementa um pipeline de extração de documentos e síntese
//! multi-estilo: recebe um documento (PDF, DOCX/DOC, TXT) ou texto bruto,
//! normaliza para texto plano e produz quatro reescritas independentes
//! via um modelo de linguagem, agregando tudo em um único resultado.
//!
//! ## Arquitetura Principal
//!
//! O sistema é composto por 4 pilares:
//!
//! ### 1. Extrator de Formatos (`extractor`)
//! Converte arquivos suportados em texto plano:
//! - PDF página a página (páginas ilegíveis são puladas, não fatais)
//! - DOCX/DOC com parágrafos e células de tabela
//! - TXT com cadeia de fallback de encodings (utf-8 → utf-16 → latin-1 → cp1252)
//! - Cache de slot único keyed por caminho
//!
//! ### 2. Catálogo de Estilos (`styles`)
//! 4 estilos fechados de resumo, cada um com seu prompt de sistema:
//! - **Didactic**: material de treinamento estruturado
//! - **Client**: comunicação comercial para clientes
//! - **Developers**: handoff técnico para o time de desenvolvimento
//! - **Management**: sumário executivo orientado a decisão
//!
//! ### 3. Orquestrador de Síntese (`orchestrator`)
//! Fan-out do texto para os estilos requisitados, na ordem do catálogo,
//! com isolamento de falhas por estilo e estatísticas acumuladas.
//!
//! ### 4. Capability de Geração (`llm`)
//! Seam assíncrono (`ChatClient`) com implementação OpenAI real e mock
//! determinístico para testes.
//!
//! ## Exemplo de Uso
//!
//! ```rust,ignore
//! use meeting_styler::prelude::*;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = Arc::new(OpenAiClient::new("sk-...".to_string()));
//!     let orchestrator = StyleOrchestrator::new(client);
//!     let result = orchestrator.process_all("meeting transcript...").await.unwrap();
//!     println!("{}", result.management.as_text());
//! }
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

/// Tipos fundamentais compartilhados por todo o sistema.
///
/// Define as estruturas de resultado:
/// - [`StyleOutcome`]: desfecho de um estilo (gerado, falha, não requisitado)
/// - [`ProcessingResult`]: agregado dos quatro slots + metadados
/// - [`ProcessingMetadata`]: medidas do input e trilha de erros
/// - [`StatsSnapshot`]: contadores acumulados com taxa de sucesso
pub mod types;

/// Catálogo fechado de estilos de resumo.
///
/// Contém o enum [`SummaryStyle`], os prompts de sistema de cada estilo
/// e o catálogo estático imutável consultado pelo orquestrador.
pub mod styles;

/// Extração de documentos para texto plano.
///
/// Contém o [`DocumentExtractor`] com:
/// - Despacho por extensão (.pdf, .docx, .doc, .txt)
/// - Guarda de tamanho máximo de arquivo
/// - Cache de slot único keyed por caminho
/// - Descritor [`FileInfo`] que nunca falha
pub mod extractor;

/// Capability de geração de texto.
///
/// Define a trait `ChatClient` e implementações:
/// - OpenAI (chat completions)
/// - Mock determinístico para testes
pub mod llm;

/// Orquestrador de síntese multi-estilo.
///
/// Contém o [`StyleOrchestrator`], as precondições de entrada
/// (comprimento mínimo, estilos válidos) e as estatísticas de
/// processamento com contadores atômicos.
pub mod orchestrator;

/// Configuração via variáveis de ambiente.
///
/// Variáveis suportadas:
/// - `OPENAI_API_KEY`: chave da API (obrigatória)
/// - `OPENAI_MODEL`: modelo de chat (padrão: "gpt-4")
/// - `OPENAI_MAX_TOKENS`: limite de tokens (padrão: 2000)
/// - `OPENAI_TEMPERATURE`: temperatura (padrão: 0.3)
/// - `MAX_FILE_SIZE_MB`: tamanho máximo de arquivo (padrão: 50)
/// - `CACHE_ENABLED`: cache do extrator (padrão: true)
pub mod config;

// Re-exports principais
pub use config::{load_app_config, AppConfig, ConfigError};
pub use extractor::{DocumentExtractor, ExtractorError, FileFormat, FileInfo};
pub use llm::{ChatClient, GenerationTuning, LlmError, MockChatClient, OpenAiClient};
pub use orchestrator::{ProcessError, StyleOrchestrator};
pub use styles::{StyleCatalog, SummaryStyle};
pub use types::{ProcessingMetadata, ProcessingResult, StatsSnapshot, StyleOutcome};

/// Versão da biblioteca.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude com imports comuns para uso rápido.
///
/// Importar tudo de uma vez:
/// ```rust,ignore
/// use meeting_styler::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::{load_app_config, AppConfig};
    pub use crate::extractor::{DocumentExtractor, ExtractorError, FileFormat, FileInfo};
    pub use crate::llm::{ChatClient, GenerationTuning, LlmError, MockChatClient, OpenAiClient};
    pub use crate::orchestrator::{ProcessError, StyleOrchestrator};
    pub use crate::styles::{StyleCatalog, SummaryStyle};
    pub use crate::types::{ProcessingMetadata, ProcessingResult, StatsSnapshot, StyleOutcome};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
