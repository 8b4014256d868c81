// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// TABELA ESTÁTICA DO CATÁLOGO
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use once_cell::sync::Lazy;

use super::prompts;
use super::SummaryStyle;

/// Definição imutável de um estilo: identificador + instrução de sistema.
///
/// As definições são construídas uma única vez no início do processo e
/// nunca criadas ou destruídas em runtime.
#[derive(Debug, Clone, Copy)]
pub struct StyleDefinition {
    /// Estilo ao qual esta definição pertence
    pub style: SummaryStyle,
    /// Instrução de sistema enviada à capability de geração
    pub system_prompt: &'static str,
}

static CATALOG: Lazy<[StyleDefinition; 4]> = Lazy::new(|| {
    [
        StyleDefinition {
            style: SummaryStyle::Didactic,
            system_prompt: prompts::DIDACTIC_SYSTEM,
        },
        StyleDefinition {
            style: SummaryStyle::Client,
            system_prompt: prompts::CLIENT_SYSTEM,
        },
        StyleDefinition {
            style: SummaryStyle::Developers,
            system_prompt: prompts::DEVELOPERS_SYSTEM,
        },
        StyleDefinition {
            style: SummaryStyle::Management,
            system_prompt: prompts::MANAGEMENT_SYSTEM,
        },
    ]
});

/// Acesso read-only ao catálogo de estilos.
pub struct StyleCatalog;

impl StyleCatalog {
    /// Retorna a definição de um estilo.
    ///
    /// Total por construção: a posição no array segue a ordem das
    /// variantes, então todo `SummaryStyle` indexa exatamente a sua
    /// entrada.
    pub fn definition(style: SummaryStyle) -> &'static StyleDefinition {
        let definition = match style {
            SummaryStyle::Didactic => &CATALOG[0],
            SummaryStyle::Client => &CATALOG[1],
            SummaryStyle::Developers => &CATALOG[2],
            SummaryStyle::Management => &CATALOG[3],
        };
        debug_assert_eq!(definition.style, style);
        definition
    }

    /// Todas as definições, na ordem canônica do catálogo
    pub fn all() -> &'static [StyleDefinition] {
        &*CATALOG
    }
}
