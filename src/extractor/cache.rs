// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// CACHE DE SLOT ÚNICO
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use std::path::Path;

use super::ExtractedText;

/// Cache de capacidade 1, chaveado por igualdade estrita de path.
///
/// Retém apenas a extração bem sucedida mais recente. Um lookup com
/// path diferente do armazenado é sempre um miss; armazenar uma nova
/// entrada sobrescreve a anterior. A semântica é por path, nunca por
/// conteúdo: o arquivo pode mudar no disco e o cache continua
/// devolvendo o texto da primeira leitura até que outro path seja
/// requisitado.
#[derive(Debug, Default)]
pub struct SingleSlotCache {
    entry: Option<ExtractedText>,
}

impl SingleSlotCache {
    /// Cria um cache vazio
    pub fn new() -> Self {
        Self::default()
    }

    /// Retorna a entrada armazenada se o path coincide exatamente
    pub fn get(&self, path: &Path) -> Option<&ExtractedText> {
        self.entry.as_ref().filter(|e| e.source == path)
    }

    /// Armazena uma extração, descartando a entrada anterior
    pub fn store(&mut self, extracted: ExtractedText) {
        self.entry = Some(extracted);
    }

    /// Esvazia o cache
    pub fn clear(&mut self) {
        self.entry = None;
    }

    /// Retorna true se há uma entrada armazenada
    pub fn is_populated(&self) -> bool {
        self.entry.is_some()
    }
}
