// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// ORQUESTRADOR DE SÍNTESE
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//
// Faz fan-out de um texto de entrada para N transformações de estilo
// independentes, isola falhas por estilo e agrega tudo em um
// ProcessingResult com estatísticas acumuladas.
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;

use crate::llm::{ChatClient, GenerationTuning};
use crate::styles::{fill_user_prompt, StyleCatalog, SummaryStyle};
use crate::types::{ProcessingMetadata, ProcessingResult, StatsSnapshot, StyleOutcome};

/// Comprimento mínimo do texto de entrada (após trim), em caracteres
pub const MIN_INPUT_CHARS: usize = 50;

/// Acima deste comprimento o processamento prossegue com aviso de
/// risco de truncamento pelos limites da capability
pub const MAX_INPUT_CHARS_ADVISORY: usize = 50_000;

/// Erros de precondição do orquestrador.
///
/// Ambos são fatais e abortam ANTES de qualquer chamada de geração.
/// Falhas por estilo nunca aparecem aqui: são capturadas nos slots do
/// resultado.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Texto de entrada abaixo do mínimo após trim
    #[error("Input text too short: {length} chars after trim (minimum: {MIN_INPUT_CHARS})")]
    InputTooShort {
        /// Comprimento do texto após trim
        length: usize,
    },

    /// Um ou mais identificadores de estilo desconhecidos
    #[error("Invalid styles: [{}] (supported: didactic, client, developers, management)", .0.join(", "))]
    InvalidStyles(Vec<String>),
}

/// Contadores acumulados de tentativas de geração.
///
/// Owned pelo orquestrador, nunca globais. Os contadores são atômicos
/// para que os incrementos permaneçam corretos caso as invocações por
/// estilo venham a ser paralelizadas.
#[derive(Debug, Default)]
pub struct ProcessingStats {
    total_requests: AtomicU64,
    successful_requests: AtomicU64,
    failed_requests: AtomicU64,
}

impl ProcessingStats {
    fn record_attempt(&self) {
        self.total_requests.fetch_add(1, Ordering::Relaxed);
    }

    fn record_success(&self) {
        self.successful_requests.fetch_add(1, Ordering::Relaxed);
    }

    fn record_failure(&self) {
        self.failed_requests.fetch_add(1, Ordering::Relaxed);
    }

    /// Snapshot imutável dos contadores, com taxa de sucesso derivada
    pub fn snapshot(&self) -> StatsSnapshot {
        let total = self.total_requests.load(Ordering::Relaxed);
        let successes = self.successful_requests.load(Ordering::Relaxed);
        let failures = self.failed_requests.load(Ordering::Relaxed);

        StatsSnapshot {
            total_requests: total,
            successful_requests: successes,
            failed_requests: failures,
            success_rate: if total > 0 {
                successes as f64 / total as f64
            } else {
                0.0
            },
        }
    }

    /// Zera todos os contadores
    pub fn reset(&self) {
        self.total_requests.store(0, Ordering::Relaxed);
        self.successful_requests.store(0, Ordering::Relaxed);
        self.failed_requests.store(0, Ordering::Relaxed);
    }
}

/// Orquestrador que gera os resumos especializados.
///
/// Consome texto extraído (ou bruto) mais um subconjunto de estilos
/// requisitados, invoca a capability de geração uma vez por estilo na
/// ordem do catálogo e agrega os resultados. Uma falha em um estilo
/// NUNCA aborta o batch: o slot correspondente fica etiquetado como
/// erro e os demais estilos continuam.
pub struct StyleOrchestrator {
    client: Arc<dyn ChatClient>,
    tuning: GenerationTuning,
    stats: ProcessingStats,
}

impl StyleOrchestrator {
    /// Cria um orquestrador com o tuning padrão
    pub fn new(client: Arc<dyn ChatClient>) -> Self {
        Self {
            client,
            tuning: GenerationTuning::default(),
            stats: ProcessingStats::default(),
        }
    }

    /// Sobrescreve os parâmetros de tuning
    pub fn with_tuning(mut self, tuning: GenerationTuning) -> Self {
        self.tuning = tuning;
        self
    }

    /// Processa texto gerando resumos em todos os quatro estilos
    pub async fn process_all(&self, text: &str) -> Result<ProcessingResult, ProcessError> {
        self.process(text, &SummaryStyle::ALL).await
    }

    /// Valida identificadores textuais de estilo e processa.
    ///
    /// Identificadores desconhecidos abortam com
    /// [`ProcessError::InvalidStyles`] nomeando TODOS os ofensores de
    /// uma vez, antes de qualquer chamada de geração.
    pub async fn process_named(
        &self,
        text: &str,
        style_names: &[String],
    ) -> Result<ProcessingResult, ProcessError> {
        let mut styles = Vec::new();
        let mut invalid = Vec::new();

        for name in style_names {
            match SummaryStyle::from_name(name) {
                Some(style) => styles.push(style),
                None => invalid.push(name.clone()),
            }
        }

        if !invalid.is_empty() {
            return Err(ProcessError::InvalidStyles(invalid));
        }

        self.process(text, &styles).await
    }

    /// Processa texto gerando resumos no subconjunto de estilos dado.
    ///
    /// Uma vez que as precondições passam, a chamada SEMPRE retorna um
    /// [`ProcessingResult`] — mesmo que todos os estilos falhem
    /// individualmente. Os quatro slots do resultado estão sempre
    /// populados; estilos fora do subconjunto recebem o sentinel
    /// "não requisitado".
    pub async fn process(
        &self,
        text: &str,
        requested: &[SummaryStyle],
    ) -> Result<ProcessingResult, ProcessError> {
        let trimmed_len = text.trim().chars().count();
        if trimmed_len < MIN_INPUT_CHARS {
            return Err(ProcessError::InputTooShort { length: trimmed_len });
        }

        let input_length = text.chars().count();
        if input_length > MAX_INPUT_CHARS_ADVISORY {
            log::warn!(
                "⚠️ Texto muito longo ({} chars): possível truncamento pelo limite de tokens",
                input_length
            );
        }

        let user_prompt = fill_user_prompt(text);

        let mut outcomes: [StyleOutcome; 4] = [
            StyleOutcome::NotRequested,
            StyleOutcome::NotRequested,
            StyleOutcome::NotRequested,
            StyleOutcome::NotRequested,
        ];
        let mut styles_processed = Vec::new();
        let mut processing_errors = Vec::new();

        // Execução na ordem do catálogo, independente da ordem do
        // subconjunto requisitado
        for (slot, style) in SummaryStyle::ALL.into_iter().enumerate() {
            if !requested.contains(&style) {
                continue;
            }

            log::info!("🖊️ Gerando resumo em estilo: {}", style);
            styles_processed.push(style);
            self.stats.record_attempt();

            let definition = StyleCatalog::definition(style);
            let outcome = self
                .client
                .generate(definition.system_prompt, &user_prompt, &self.tuning)
                .await;

            outcomes[slot] = match outcome {
                Ok(generated) if !generated.trim().is_empty() => {
                    self.stats.record_success();
                    StyleOutcome::Generated(generated.trim().to_string())
                }
                Ok(_) => {
                    self.stats.record_failure();
                    let msg = format!("Generation for style '{}' returned empty output", style);
                    log::warn!("⚠️ {}", msg);
                    processing_errors.push(msg.clone());
                    StyleOutcome::Failed(msg)
                }
                Err(e) => {
                    self.stats.record_failure();
                    let msg = format!("Generation failed for style '{}': {}", style, e);
                    log::warn!("⚠️ {}", msg);
                    processing_errors.push(msg.clone());
                    StyleOutcome::Failed(msg)
                }
            };
        }

        let [didactic, client, developers, management] = outcomes;

        Ok(ProcessingResult {
            didactic,
            client,
            developers,
            management,
            original_text: text.to_string(),
            metadata: ProcessingMetadata {
                input_length,
                input_words: text.split_whitespace().count(),
                styles_processed,
                processing_errors,
                processed_at: Utc::now(),
            },
        })
    }

    /// Snapshot das estatísticas acumuladas
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    /// Zera as estatísticas acumuladas
    pub fn reset_stats(&self) {
        self.stats.reset();
    }
}
