// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// TIPOS COMPARTILHADOS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use chrono::{DateTime, Utc};
use serde_json::{json, Map, Value};
use std::fmt;

use crate::styles::SummaryStyle;

/// Resultado individual de um estilo dentro de um processamento.
///
/// Cada um dos quatro slots do [`ProcessingResult`] carrega exatamente
/// uma destas variantes. Um slot `Failed` é distinguível de um slot
/// `NotRequested`: o primeiro representa uma tentativa que falhou, o
/// segundo um estilo que nunca foi tentado.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleOutcome {
    /// Texto gerado com sucesso (já com trim aplicado)
    Generated(String),
    /// Tentativa falhou; carrega a mensagem legível do erro
    Failed(String),
    /// Estilo não fazia parte do subconjunto requisitado
    NotRequested,
}

impl StyleOutcome {
    /// Retorna true se o slot contém texto gerado com sucesso
    pub fn is_generated(&self) -> bool {
        matches!(self, Self::Generated(_))
    }

    /// Retorna true se o slot representa uma falha
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Representação textual do slot, no formato consumido pelas
    /// camadas externas (CLI/web): texto verbatim para sucesso,
    /// string etiquetada para falha ou estilo não requisitado.
    pub fn as_text(&self) -> String {
        match self {
            Self::Generated(text) => text.clone(),
            Self::Failed(msg) => format!("[ERROR] {}", msg),
            Self::NotRequested => "[NOT REQUESTED] Style not requested".to_string(),
        }
    }
}

impl fmt::Display for StyleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_text())
    }
}

/// Metadados de um processamento.
#[derive(Debug, Clone)]
pub struct ProcessingMetadata {
    /// Comprimento do texto de entrada em caracteres
    pub input_length: usize,
    /// Número de palavras (tokens separados por whitespace)
    pub input_words: usize,
    /// Estilos efetivamente tentados, na ordem do catálogo
    pub styles_processed: Vec<SummaryStyle>,
    /// Mensagens legíveis das falhas por estilo (vazio se tudo ok)
    pub processing_errors: Vec<String>,
    /// Timestamp do processamento
    pub processed_at: DateTime<Utc>,
}

/// Resultado agregado de um processamento completo.
///
/// Invariante: os quatro slots estão SEMPRE presentes, independente de
/// quantos estilos foram requisitados. Imutável após construção.
#[derive(Debug, Clone)]
pub struct ProcessingResult {
    /// Resumo em estilo didático/formativo
    pub didactic: StyleOutcome,
    /// Comunicação profissional para clientes
    pub client: StyleOutcome,
    /// Tasks e informações para o time de desenvolvimento
    pub developers: StyleOutcome,
    /// Resumo executivo para management
    pub management: StyleOutcome,
    /// Texto original processado
    pub original_text: String,
    /// Metadados do processamento
    pub metadata: ProcessingMetadata,
}

impl ProcessingResult {
    /// Acessa o slot correspondente a um estilo
    pub fn outcome(&self, style: SummaryStyle) -> &StyleOutcome {
        match style {
            SummaryStyle::Didactic => &self.didactic,
            SummaryStyle::Client => &self.client,
            SummaryStyle::Developers => &self.developers,
            SummaryStyle::Management => &self.management,
        }
    }

    /// Número de slots gerados com sucesso
    pub fn success_count(&self) -> usize {
        SummaryStyle::ALL
            .iter()
            .filter(|s| self.outcome(**s).is_generated())
            .count()
    }

    /// Serializa o resultado como um mapeamento plano de chaves string
    /// para valores string/array, consumido pelas camadas CLI/web.
    pub fn to_flat_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        for style in SummaryStyle::ALL {
            map.insert(style.as_str().to_string(), json!(self.outcome(style).as_text()));
        }
        map.insert("original_text".into(), json!(self.original_text));
        map.insert("input_length".into(), json!(self.metadata.input_length));
        map.insert("input_words".into(), json!(self.metadata.input_words));
        map.insert(
            "styles_processed".into(),
            json!(self
                .metadata
                .styles_processed
                .iter()
                .map(|s| s.as_str())
                .collect::<Vec<_>>()),
        );
        map.insert("processing_errors".into(), json!(self.metadata.processing_errors));
        map.insert("processed_at".into(), json!(self.metadata.processed_at.to_rfc3339()));
        map
    }
}

/// Snapshot imutável das estatísticas de processamento.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatsSnapshot {
    /// Total de tentativas de geração
    pub total_requests: u64,
    /// Tentativas bem sucedidas
    pub successful_requests: u64,
    /// Tentativas que falharam
    pub failed_requests: u64,
    /// Taxa de sucesso: successes/total (0.0 se total == 0)
    pub success_rate: f64,
}
