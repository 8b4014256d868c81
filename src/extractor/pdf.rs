// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// EXTRAÇÃO DE PDF
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use std::path::Path;

use lopdf::Document;

use super::ExtractorError;

/// Extrai texto de um PDF página a página.
///
/// Uma página cuja extração falha é pulada (logada em `warn!`, nunca
/// fatal) e o processamento continua com as páginas restantes. Páginas
/// que contêm apenas whitespace também são descartadas. As páginas
/// sobreviventes são concatenadas com quebras de linha.
///
/// Não há fração mínima de páginas legíveis: o documento só falha com
/// [`ExtractorError::ExtractionEmpty`] quando NENHUMA página produz
/// texto (cobre PDFs protegidos, escaneados ou sem camada de texto).
pub(super) fn extract_pdf(path: &Path) -> Result<String, ExtractorError> {
    let document = Document::load(path)
        .map_err(|e| ExtractorError::PdfError(format!("failed to open {}: {}", path.display(), e)))?;

    let pages = document.get_pages();
    log::info!("📄 Extraindo PDF: {} ({} páginas)", path.display(), pages.len());

    let mut surviving_pages: Vec<String> = Vec::new();

    for page_number in pages.keys() {
        match document.extract_text(&[*page_number]) {
            Ok(page_text) => {
                let trimmed = page_text.trim();
                if !trimmed.is_empty() {
                    surviving_pages.push(trimmed.to_string());
                }
            }
            Err(e) => {
                log::warn!("⚠️ Falha na página {}: {} (pulando)", page_number, e);
                continue;
            }
        }
    }

    let extracted = surviving_pages.join("\n");

    if extracted.trim().is_empty() {
        return Err(ExtractorError::ExtractionEmpty(path.to_path_buf()));
    }

    log::info!(
        "✅ PDF extraído: {}/{} páginas legíveis, {} chars",
        surviving_pages.len(),
        pages.len(),
        extracted.len()
    );

    Ok(extracted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Object, Stream};
    use tempfile::TempDir;

    enum SecondPage {
        None,
        Blank,
        // Contents aponta para um objeto inexistente
        Broken,
    }

    // Monta um PDF mínimo com uma página de texto e, opcionalmente, uma
    // segunda página vazia ou com content stream irrecuperável
    fn build_pdf(path: &Path, second_page: SecondPage) {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 24.into()]),
                Operation::new("Td", vec![100.into(), 600.into()]),
                Operation::new("Tj", vec![Object::string_literal("ata da reuniao")]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().unwrap(),
        ));
        let text_page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });

        let mut kids = vec![text_page_id.into()];
        match second_page {
            SecondPage::None => {}
            SecondPage::Blank => {
                let blank_content_id = doc.add_object(Stream::new(dictionary! {}, Vec::new()));
                let blank_page_id = doc.add_object(dictionary! {
                    "Type" => "Page",
                    "Parent" => pages_id,
                    "Contents" => blank_content_id,
                });
                kids.push(blank_page_id.into());
            }
            SecondPage::Broken => {
                let broken_page_id = doc.add_object(dictionary! {
                    "Type" => "Page",
                    "Parent" => pages_id,
                    "Contents" => Object::Reference((9999, 0)),
                });
                kids.push(broken_page_id.into());
            }
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc.save(path).unwrap();
    }

    #[test]
    fn test_extract_single_text_page() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("single.pdf");
        build_pdf(&path, SecondPage::None);

        let text = extract_pdf(&path).unwrap();
        assert!(text.contains("ata da reuniao"));
    }

    #[test]
    fn test_blank_page_is_skipped_not_fatal() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mixed.pdf");
        build_pdf(&path, SecondPage::Blank);

        // A página sem conteúdo não aparece e não derruba a extração
        let text = extract_pdf(&path).unwrap();
        assert!(text.contains("ata da reuniao"));
        assert!(!text.contains('\n'));
    }

    #[test]
    fn test_failing_page_is_skipped_not_fatal() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("parcial.pdf");
        build_pdf(&path, SecondPage::Broken);

        // A página cujo content stream não resolve é pulada; o texto da
        // página legível ainda é devolvido
        let text = extract_pdf(&path).unwrap();
        assert!(text.contains("ata da reuniao"));
        assert!(!text.contains('\n'));
    }

    #[test]
    fn test_unparseable_pdf_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("garbage.pdf");
        std::fs::write(&path, b"definitely not a pdf").unwrap();

        assert!(matches!(
            extract_pdf(&path),
            Err(ExtractorError::PdfError(_))
        ));
    }
}
