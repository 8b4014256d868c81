// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// EXTRATOR DE DOCUMENTOS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//
// Conversão de arquivos (PDF, DOCX, DOC, TXT) em texto plano, com
// fallback de encoding para TXT, tolerância a falhas parciais em PDF
// e cache de slot único chaveado por path.
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

mod cache;
mod docx;
mod pdf;
mod txt;

pub use cache::SingleSlotCache;

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::Serialize;
use thiserror::Error;

/// Limite padrão de tamanho de arquivo em MB
const DEFAULT_MAX_FILE_SIZE_MB: u64 = 50;

/// Erros de extração. Todos são fatais para o arquivo em questão.
#[derive(Debug, Error)]
pub enum ExtractorError {
    /// O path não existe no sistema de arquivos
    #[error("File not found: {0}")]
    NotFound(PathBuf),

    /// Extensão fora do conjunto suportado {.pdf, .docx, .doc, .txt}
    #[error("Unsupported file format: '{0}' (supported: .pdf, .docx, .doc, .txt)")]
    UnsupportedFormat(String),

    /// A extração não produziu nenhum conteúdo não-whitespace
    #[error("No extractable text in {0} (empty, protected or scanned document)")]
    ExtractionEmpty(PathBuf),

    /// Nenhum encoding da cadeia de fallback decodificou o arquivo
    #[error("Could not decode {0} with any supported encoding (utf-8, utf-16, latin-1, cp1252)")]
    DecodingFailure(PathBuf),

    /// Arquivo excede o limite configurado
    #[error("File too large: {size} bytes (max: {max})")]
    FileTooLarge {
        /// Tamanho do arquivo em bytes
        size: u64,
        /// Limite configurado em bytes
        max: u64,
    },

    /// Falha ao abrir/parsear o PDF (corrompido, mal-formado)
    #[error("PDF extraction failed: {0}")]
    PdfError(String),

    /// Falha ao parsear o DOCX/DOC
    #[error("DOCX extraction failed: {0}")]
    DocxError(String),

    /// Erro de I/O do sistema de arquivos
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Formatos de arquivo suportados pelo extrator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// Documento PDF, extraído página a página
    Pdf,
    /// Documento Word moderno (Office Open XML)
    Docx,
    /// Documento Word legado, roteado pelo parser DOCX
    Doc,
    /// Texto puro com fallback de encoding
    Txt,
}

impl FileFormat {
    /// Detecta o formato pela extensão (case-insensitive).
    ///
    /// Retorna `None` para extensões desconhecidas ou paths sem extensão.
    pub fn from_path(path: &Path) -> Option<Self> {
        match lowercase_extension(path).as_str() {
            ".pdf" => Some(Self::Pdf),
            ".docx" => Some(Self::Docx),
            ".doc" => Some(Self::Doc),
            ".txt" => Some(Self::Txt),
            _ => None,
        }
    }
}

/// Extensão em minúsculas com ponto (".pdf"), ou string vazia
fn lowercase_extension(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e.to_lowercase()))
        .unwrap_or_default()
}

/// Texto extraído de um arquivo, com metadados da origem.
///
/// Invariante: `text` nunca é vazio; uma extração que produziria texto
/// vazio falha com [`ExtractorError::ExtractionEmpty`] em vez de
/// retornar uma instância vazia.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedText {
    /// Path de origem
    pub source: PathBuf,
    /// Extensão em minúsculas (ex: ".pdf")
    pub extension: String,
    /// Texto plano extraído
    pub text: String,
    /// Tamanho do arquivo original em bytes
    pub size_bytes: u64,
}

/// Descritor de arquivo retornado por [`DocumentExtractor::file_info`].
///
/// Puro e infalível: arquivo inexistente produz tamanho zero e
/// `exists == false`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileInfo {
    /// Nome do arquivo (último componente do path)
    pub filename: String,
    /// Extensão em minúsculas
    pub extension: String,
    /// Tamanho em bytes (0 se não existe)
    pub size_bytes: u64,
    /// Tamanho em MB, arredondado para 2 casas decimais
    pub size_mb: f64,
    /// Se o path existe
    pub exists: bool,
    /// Se a extensão pertence ao conjunto suportado
    pub is_supported: bool,
}

/// Extrator de documentos com cache de slot único.
///
/// Thread-safe: o cache interno é protegido por `Mutex`, então a mesma
/// instância pode ser compartilhada via `Arc`. Requisições concorrentes
/// para paths diferentes nunca recebem o resultado do path errado — o
/// lookup é por igualdade estrita de path e qualquer mismatch força uma
/// leitura fresca.
pub struct DocumentExtractor {
    cache: Mutex<SingleSlotCache>,
    cache_enabled: bool,
    max_file_size: u64,
}

impl DocumentExtractor {
    /// Cria um extrator com o cache habilitado ou não.
    ///
    /// A flag é autoritativa: com `false` o slot nunca é escrito nem
    /// consultado e toda chamada relê o arquivo.
    pub fn new(cache_enabled: bool) -> Self {
        Self {
            cache: Mutex::new(SingleSlotCache::new()),
            cache_enabled,
            max_file_size: DEFAULT_MAX_FILE_SIZE_MB * 1024 * 1024,
        }
    }

    /// Sobrescreve o limite de tamanho de arquivo em MB
    pub fn with_max_size_mb(mut self, max_mb: u64) -> Self {
        self.max_file_size = max_mb * 1024 * 1024;
        self
    }

    /// Verifica se o formato do arquivo é suportado.
    ///
    /// True sse a extensão em minúsculas pertence a
    /// {.pdf, .docx, .doc, .txt}. Paths sem extensão retornam false.
    pub fn is_supported(path: impl AsRef<Path>) -> bool {
        FileFormat::from_path(path.as_ref()).is_some()
    }

    /// Extrai texto plano de um arquivo.
    ///
    /// Chamadas repetidas para o MESMO path retornam o texto em cache
    /// sem reler o arquivo (contrato de idempotência, não otimização);
    /// qualquer path diferente força uma leitura fresca e sobrescreve o
    /// slot.
    ///
    /// # Erros
    ///
    /// - [`ExtractorError::UnsupportedFormat`] — extensão desconhecida
    /// - [`ExtractorError::NotFound`] — path inexistente
    /// - [`ExtractorError::FileTooLarge`] — acima do limite configurado
    /// - [`ExtractorError::ExtractionEmpty`] — nenhum conteúdo não-whitespace
    /// - [`ExtractorError::DecodingFailure`] — TXT indecodificável
    pub fn extract(&self, path: impl AsRef<Path>) -> Result<ExtractedText, ExtractorError> {
        let path = path.as_ref();

        if self.cache_enabled {
            let cache = self.cache.lock().unwrap_or_else(|e| e.into_inner());
            if let Some(hit) = cache.get(path) {
                log::info!("♻️ Cache hit: {}", path.display());
                return Ok(hit.clone());
            }
        }

        let format = FileFormat::from_path(path)
            .ok_or_else(|| ExtractorError::UnsupportedFormat(lowercase_extension(path)))?;

        if !path.exists() {
            return Err(ExtractorError::NotFound(path.to_path_buf()));
        }

        let size_bytes = std::fs::metadata(path)?.len();
        if size_bytes > self.max_file_size {
            return Err(ExtractorError::FileTooLarge {
                size: size_bytes,
                max: self.max_file_size,
            });
        }

        let text = match format {
            FileFormat::Pdf => pdf::extract_pdf(path)?,
            FileFormat::Docx | FileFormat::Doc => docx::extract_docx(path)?,
            FileFormat::Txt => txt::extract_txt(path)?,
        };

        let extracted = ExtractedText {
            source: path.to_path_buf(),
            extension: lowercase_extension(path),
            text,
            size_bytes,
        };

        if self.cache_enabled {
            let mut cache = self.cache.lock().unwrap_or_else(|e| e.into_inner());
            cache.store(extracted.clone());
        }

        Ok(extracted)
    }

    /// Retorna informações sobre um arquivo.
    ///
    /// Nunca falha e nunca usa o cache: arquivo inexistente produz
    /// tamanho zero e `exists == false`.
    pub fn file_info(path: impl AsRef<Path>) -> FileInfo {
        let path = path.as_ref();
        let size_bytes = std::fs::metadata(path).map(|m| m.len()).unwrap_or(0);
        let size_mb = (size_bytes as f64 / (1024.0 * 1024.0) * 100.0).round() / 100.0;

        FileInfo {
            filename: path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or_default()
                .to_string(),
            extension: lowercase_extension(path),
            size_bytes,
            size_mb,
            exists: path.exists(),
            is_supported: Self::is_supported(path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, bytes: &[u8]) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(bytes).unwrap();
        path
    }

    #[test]
    fn test_is_supported_known_extensions() {
        assert!(DocumentExtractor::is_supported("meeting.pdf"));
        assert!(DocumentExtractor::is_supported("meeting.DOCX"));
        assert!(DocumentExtractor::is_supported("notes.doc"));
        assert!(DocumentExtractor::is_supported("notes.TXT"));
    }

    #[test]
    fn test_is_supported_rejects_others() {
        assert!(!DocumentExtractor::is_supported("image.png"));
        assert!(!DocumentExtractor::is_supported("data.csv"));
        assert!(!DocumentExtractor::is_supported("no_extension"));
        assert!(!DocumentExtractor::is_supported(""));
    }

    #[test]
    fn test_extract_unsupported_format() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "data.csv", b"a,b,c");
        let extractor = DocumentExtractor::new(true);

        let err = extractor.extract(&path).unwrap_err();
        assert!(matches!(err, ExtractorError::UnsupportedFormat(ext) if ext == ".csv"));
    }

    #[test]
    fn test_extract_not_found() {
        let extractor = DocumentExtractor::new(true);
        let err = extractor.extract("/nonexistent/meeting.txt").unwrap_err();
        assert!(matches!(err, ExtractorError::NotFound(_)));
    }

    #[test]
    fn test_extract_txt_utf8() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "notes.txt", "ata da reunião de quinta".as_bytes());
        let extractor = DocumentExtractor::new(true);

        let extracted = extractor.extract(&path).unwrap();
        assert_eq!(extracted.text, "ata da reunião de quinta");
        assert_eq!(extracted.extension, ".txt");
        assert_eq!(extracted.source, path);
        assert!(extracted.size_bytes > 0);
    }

    #[test]
    fn test_extract_txt_latin1_fallback() {
        let dir = TempDir::new().unwrap();
        // "café" em latin-1: inválido como UTF-8
        let path = write_file(&dir, "legacy.txt", &[0x63, 0x61, 0x66, 0xE9]);
        let extractor = DocumentExtractor::new(true);

        let extracted = extractor.extract(&path).unwrap();
        assert_eq!(extracted.text, "café");
    }

    #[test]
    fn test_extract_txt_whitespace_only_fails() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "blank.txt", b"   \n\t  ");
        let extractor = DocumentExtractor::new(true);

        let err = extractor.extract(&path).unwrap_err();
        assert!(matches!(err, ExtractorError::DecodingFailure(_)));
    }

    #[test]
    fn test_extract_file_too_large() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "big.txt", &vec![b'a'; 2048]);
        let extractor = DocumentExtractor::new(true).with_max_size_mb(0);

        let err = extractor.extract(&path).unwrap_err();
        assert!(matches!(err, ExtractorError::FileTooLarge { .. }));
    }

    #[test]
    fn test_cache_is_path_keyed_not_content_keyed() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "cached.txt", b"conteudo original");
        let extractor = DocumentExtractor::new(true);

        let first = extractor.extract(&path).unwrap();
        assert_eq!(first.text, "conteudo original");

        // Mutar o arquivo: o mesmo path deve devolver o texto antigo
        std::fs::write(&path, b"conteudo alterado").unwrap();
        let second = extractor.extract(&path).unwrap();
        assert_eq!(second.text, "conteudo original");

        // Path diferente força leitura fresca e invalida o slot
        let other = write_file(&dir, "other.txt", b"outro arquivo");
        let third = extractor.extract(&other).unwrap();
        assert_eq!(third.text, "outro arquivo");

        // Voltando ao primeiro path: slot foi sobrescrito, lê o novo conteúdo
        let fourth = extractor.extract(&path).unwrap();
        assert_eq!(fourth.text, "conteudo alterado");
    }

    #[test]
    fn test_cache_disabled_always_rereads() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "nocache.txt", b"primeira versao");
        let extractor = DocumentExtractor::new(false);

        assert_eq!(extractor.extract(&path).unwrap().text, "primeira versao");

        std::fs::write(&path, b"segunda versao").unwrap();
        assert_eq!(extractor.extract(&path).unwrap().text, "segunda versao");
    }

    #[test]
    fn test_file_info_existing() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "report.pdf", b"%PDF-1.4 fake");

        let info = DocumentExtractor::file_info(&path);
        assert_eq!(info.filename, "report.pdf");
        assert_eq!(info.extension, ".pdf");
        assert!(info.exists);
        assert!(info.is_supported);
        assert_eq!(info.size_bytes, 13);
    }

    #[test]
    fn test_file_info_missing_never_fails() {
        let info = DocumentExtractor::file_info("/nonexistent/ghost.xyz");
        assert_eq!(info.size_bytes, 0);
        assert_eq!(info.size_mb, 0.0);
        assert!(!info.exists);
        assert!(!info.is_supported);
        assert_eq!(info.extension, ".xyz");
    }

    #[test]
    fn test_file_info_size_mb_rounding() {
        let dir = TempDir::new().unwrap();
        // 1.5 MB exatos
        let path = write_file(&dir, "half.txt", &vec![b'x'; 1_572_864]);
        let info = DocumentExtractor::file_info(&path);
        assert_eq!(info.size_mb, 1.5);
    }

    #[test]
    fn test_extract_corrupt_pdf() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "broken.pdf", b"not a pdf at all");
        let extractor = DocumentExtractor::new(true);

        let err = extractor.extract(&path).unwrap_err();
        assert!(matches!(err, ExtractorError::PdfError(_)));
    }

    #[test]
    fn test_extract_corrupt_docx() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "broken.docx", b"not a zip archive");
        let extractor = DocumentExtractor::new(true);

        let err = extractor.extract(&path).unwrap_err();
        assert!(matches!(err, ExtractorError::DocxError(_)));
    }
}
