// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// EXTRAÇÃO DE TXT COM FALLBACK DE ENCODING
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use std::path::Path;

use super::ExtractorError;

/// Extrai texto de um arquivo TXT tentando uma cadeia fixa de encodings.
///
/// Cadeia, em ordem: utf-8, utf-16, latin-1, cp1252. Vence o primeiro
/// encoding que decodifica sem erro E produz conteúdo não vazio após
/// trim. Se nenhum passa, falha com
/// [`ExtractorError::DecodingFailure`].
pub(super) fn extract_txt(path: &Path) -> Result<String, ExtractorError> {
    let bytes = std::fs::read(path)?;

    for (name, decoded) in [
        ("utf-8", decode_utf8(&bytes)),
        ("utf-16", decode_utf16(&bytes)),
        ("latin-1", decode_latin1(&bytes)),
        ("cp1252", decode_cp1252(&bytes)),
    ] {
        if let Some(content) = decoded {
            let trimmed = content.trim();
            if !trimmed.is_empty() {
                log::info!(
                    "✅ TXT decodificado com {}: {} chars de {}",
                    name,
                    trimmed.len(),
                    path.display()
                );
                return Ok(trimmed.to_string());
            }
        }
    }

    Err(ExtractorError::DecodingFailure(path.to_path_buf()))
}

fn decode_utf8(bytes: &[u8]) -> Option<String> {
    std::str::from_utf8(bytes).ok().map(str::to_string)
}

fn decode_utf16(bytes: &[u8]) -> Option<String> {
    // Sem BOM não há como distinguir UTF-16 de encodings de byte único:
    // qualquer sequência par de bytes latin-1 decodificaria como lixo
    // CJK e sequestraria a cadeia antes do passo latin-1. Só tenta
    // quando o BOM está presente; ele decide a endianness.
    if !(bytes.starts_with(&[0xFF, 0xFE]) || bytes.starts_with(&[0xFE, 0xFF])) {
        return None;
    }
    let (decoded, _, had_errors) = encoding_rs::UTF_16LE.decode(bytes);
    if had_errors {
        None
    } else {
        Some(decoded.into_owned())
    }
}

fn decode_latin1(bytes: &[u8]) -> Option<String> {
    // latin-1 mapeia cada byte para o code point de mesmo valor e
    // portanto nunca falha.
    Some(bytes.iter().map(|&b| char::from(b)).collect())
}

fn decode_cp1252(bytes: &[u8]) -> Option<String> {
    let (decoded, _, had_errors) = encoding_rs::WINDOWS_1252.decode(bytes);
    if had_errors {
        None
    } else {
        Some(decoded.into_owned())
    }
}
