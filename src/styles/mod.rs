// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// CATÁLOGO DE ESTILOS DE RESUMO
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

mod catalog;
mod prompts;

pub use catalog::{StyleCatalog, StyleDefinition};
pub use prompts::fill_user_prompt;

use std::fmt;

/// Enumeração fechada dos quatro estilos de resumo suportados.
///
/// O conjunto de estilos é fixo: adicionar um estilo é uma mudança de
/// schema (nova variante + prompt no catálogo), nunca uma operação de
/// runtime. A ordem das variantes é a ordem canônica do catálogo, usada
/// também como ordem de execução pelo orquestrador.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SummaryStyle {
    /// Formato didático/formativo, estruturado para aprendizado
    Didactic,
    /// Comunicação business-friendly para clientes
    Client,
    /// Task breakdown acionável para o time de desenvolvimento
    Developers,
    /// Resumo executivo estratégico para management
    Management,
}

impl SummaryStyle {
    /// Todos os estilos, na ordem canônica do catálogo
    pub const ALL: [SummaryStyle; 4] = [
        SummaryStyle::Didactic,
        SummaryStyle::Client,
        SummaryStyle::Developers,
        SummaryStyle::Management,
    ];

    /// Identificador textual do estilo
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Didactic => "didactic",
            Self::Client => "client",
            Self::Developers => "developers",
            Self::Management => "management",
        }
    }

    /// Converte um identificador textual em estilo (case-insensitive).
    ///
    /// Retorna `None` para identificadores desconhecidos; a validação
    /// agregada (reportando TODOS os ids inválidos de uma vez) fica a
    /// cargo do orquestrador.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "didactic" => Some(Self::Didactic),
            "client" => Some(Self::Client),
            "developers" => Some(Self::Developers),
            "management" => Some(Self::Management),
            _ => None,
        }
    }
}

impl fmt::Display for SummaryStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_has_four_styles_in_catalog_order() {
        assert_eq!(SummaryStyle::ALL.len(), 4);
        assert_eq!(SummaryStyle::ALL[0], SummaryStyle::Didactic);
        assert_eq!(SummaryStyle::ALL[3], SummaryStyle::Management);
    }

    #[test]
    fn test_from_name_roundtrip() {
        for style in SummaryStyle::ALL {
            assert_eq!(SummaryStyle::from_name(style.as_str()), Some(style));
        }
    }

    #[test]
    fn test_from_name_case_insensitive() {
        assert_eq!(SummaryStyle::from_name("DIDACTIC"), Some(SummaryStyle::Didactic));
        assert_eq!(SummaryStyle::from_name(" Client "), Some(SummaryStyle::Client));
    }

    #[test]
    fn test_from_name_unknown() {
        assert_eq!(SummaryStyle::from_name("poetic"), None);
        assert_eq!(SummaryStyle::from_name(""), None);
    }
}
