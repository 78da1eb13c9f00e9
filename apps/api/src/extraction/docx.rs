use docx_rs::{
    read_docx, DocumentChild, InsertChild, Paragraph, ParagraphChild, Run, RunChild,
    StructuredDataTag, StructuredDataTagChild, Table, TableCellContent, TableChild, TableRowChild,
};

use super::ExtractError;

/// Converts a DOCX body to plain text: one line per paragraph, table cells in row order.
///
/// Content controls, hyperlinks and tracked insertions are read through, so every
/// visible run of text in the body ends up in the output.
pub fn extract_docx_text(bytes: &[u8]) -> Result<String, ExtractError> {
    let docx = read_docx(bytes)?;

    let mut lines = Vec::new();
    for child in &docx.document.children {
        match child {
            DocumentChild::Paragraph(p) => lines.push(paragraph_text(p)),
            DocumentChild::Table(table) => collect_table(table, &mut lines),
            DocumentChild::StructuredDataTag(sdt) => collect_block_sdt(sdt, &mut lines),
            _ => {}
        }
    }

    Ok(lines.join("\n"))
}

#[allow(irrefutable_let_patterns)]
fn collect_table(table: &Table, lines: &mut Vec<String>) {
    for row in &table.rows {
        let TableChild::TableRow(row) = row else { continue };
        for cell in &row.cells {
            let TableRowChild::TableCell(cell) = cell else { continue };
            for content in &cell.children {
                match content {
                    TableCellContent::Paragraph(p) => lines.push(paragraph_text(p)),
                    TableCellContent::Table(nested) => collect_table(nested, lines),
                    TableCellContent::StructuredDataTag(sdt) => collect_block_sdt(sdt, lines),
                    _ => {}
                }
            }
        }
    }
}

/// A block-level content control. Loose runs inside it form one line.
fn collect_block_sdt(sdt: &StructuredDataTag, lines: &mut Vec<String>) {
    let mut loose = String::new();
    for child in &sdt.children {
        match child {
            StructuredDataTagChild::Run(run) => push_run(run, &mut loose),
            StructuredDataTagChild::Paragraph(p) => lines.push(paragraph_text(p)),
            StructuredDataTagChild::Table(table) => collect_table(table, lines),
            StructuredDataTagChild::StructuredDataTag(nested) => collect_block_sdt(nested, lines),
            _ => {}
        }
    }
    if !loose.is_empty() {
        lines.push(loose);
    }
}

fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut text = String::new();
    push_inline(&paragraph.children, &mut text);
    text
}

fn push_inline(children: &[ParagraphChild], text: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => push_run(run, text),
            ParagraphChild::Hyperlink(link) => push_inline(&link.children, text),
            ParagraphChild::Insert(insert) => {
                for inserted in &insert.children {
                    if let InsertChild::Run(run) = inserted {
                        push_run(run, text);
                    }
                }
            }
            ParagraphChild::StructuredDataTag(sdt) => push_inline_sdt(sdt, text),
            _ => {}
        }
    }
}

fn push_inline_sdt(sdt: &StructuredDataTag, text: &mut String) {
    for child in &sdt.children {
        match child {
            StructuredDataTagChild::Run(run) => push_run(run, text),
            StructuredDataTagChild::StructuredDataTag(nested) => push_inline_sdt(nested, text),
            _ => {}
        }
    }
}

fn push_run(run: &Run, text: &mut String) {
    for run_child in &run.children {
        match run_child {
            RunChild::Text(t) => text.push_str(&t.text),
            RunChild::Tab(_) => text.push('\t'),
            RunChild::Break(_) => text.push('\n'),
            _ => {}
        }
    }
}
