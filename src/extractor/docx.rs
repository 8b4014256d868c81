// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// EXTRAÇÃO DE DOCX/DOC
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use std::path::Path;

use docx_rs::{
    DocumentChild, ParagraphChild, RunChild, TableCellContent, TableChild, TableRowChild,
};

use super::ExtractorError;

/// Extrai texto de um documento DOCX/DOC.
///
/// Ordem de concatenação: primeiro os parágrafos não vazios na ordem do
/// documento, depois as células de tabela não vazias em ordem row-major,
/// tabela por tabela. Resultado vazio falha com
/// [`ExtractorError::ExtractionEmpty`].
pub(super) fn extract_docx(path: &Path) -> Result<String, ExtractorError> {
    let bytes = std::fs::read(path)?;

    let docx = docx_rs::read_docx(&bytes)
        .map_err(|e| ExtractorError::DocxError(format!("failed to parse {}: {}", path.display(), e)))?;

    let mut blocks: Vec<String> = Vec::new();

    // Passo 1: parágrafos do corpo, na ordem do documento
    for child in &docx.document.children {
        if let DocumentChild::Paragraph(paragraph) = child {
            let text = paragraph_text(&paragraph.children);
            if !text.trim().is_empty() {
                blocks.push(text.trim().to_string());
            }
        }
    }

    // Passo 2: células de tabela, row-major, tabela por tabela
    for child in &docx.document.children {
        if let DocumentChild::Table(table) = child {
            for row in &table.rows {
                let TableChild::TableRow(row) = row;
                for cell in &row.cells {
                    let TableRowChild::TableCell(cell) = cell;
                    let mut cell_text = String::new();
                    for content in &cell.children {
                        if let TableCellContent::Paragraph(paragraph) = content {
                            cell_text.push_str(&paragraph_text(&paragraph.children));
                            cell_text.push(' ');
                        }
                    }
                    if !cell_text.trim().is_empty() {
                        blocks.push(cell_text.trim().to_string());
                    }
                }
            }
        }
    }

    let extracted = blocks.join("\n");

    if extracted.trim().is_empty() {
        return Err(ExtractorError::ExtractionEmpty(path.to_path_buf()));
    }

    log::info!(
        "✅ DOCX extraído: {} blocos, {} chars de {}",
        blocks.len(),
        extracted.len(),
        path.display()
    );

    Ok(extracted)
}

/// Concatena o texto dos runs de um parágrafo (inclui hyperlinks)
fn paragraph_text(children: &[ParagraphChild]) -> String {
    let mut text = String::new();
    for child in children {
        match child {
            ParagraphChild::Run(run) => {
                for run_child in &run.children {
                    if let RunChild::Text(t) = run_child {
                        text.push_str(&t.text);
                    }
                }
            }
            ParagraphChild::Hyperlink(link) => {
                for inner in &link.children {
                    if let ParagraphChild::Run(run) = inner {
                        for run_child in &run.children {
                            if let RunChild::Text(t) = run_child {
                                text.push_str(&t.text);
                            }
                        }
                    }
                }
            }
            _ => {}
        }
    }
    text
}
