use std::io::Cursor;

use docx_rs::{
    AlignmentType, BreakType, Docx, Paragraph, Run, RunFonts, Style, StyleType, Table, TableCell,
    TableRow,
};

use crate::error::ExportError;
use crate::styles::ReportStyles;

/// Generate a DOCX document from rendered report Markdown.
///
/// Supported subset:
/// - `#`, `##`, `###` headings
/// - `- item` bullets
/// - `| a | b |` pipe tables; the first row is the header and `|---|`
///   separator rows are dropped
/// - `**bold**` inline runs
/// - `---` or `***` page breaks
/// - a line starting with `\\` is literal text, without the backslash
/// - anything else is a body paragraph
pub fn generate_docx(rendered: &str, styles: &ReportStyles) -> Result<Vec<u8>, ExportError> {
    let mut docx = Docx::new()
        .add_style(heading_style("Heading1", "heading 1", styles.heading1_size))
        .add_style(heading_style("Heading2", "heading 2", styles.heading2_size))
        .add_style(heading_style("Heading3", "heading 3", styles.heading3_size));

    let mut table: Vec<Vec<String>> = Vec::new();

    for line in rendered.lines() {
        let trimmed = line.trim();

        if trimmed.starts_with('|') {
            if !is_separator_row(trimmed) {
                table.push(split_row(trimmed));
            }
            continue;
        }
        if !table.is_empty() {
            docx = docx.add_table(build_table(&std::mem::take(&mut table), styles));
        }

        if trimmed.is_empty() {
            docx = docx.add_paragraph(Paragraph::new());
        } else if let Some(text) = trimmed.strip_prefix('\\') {
            docx = docx.add_paragraph(
                Paragraph::new()
                    .align(AlignmentType::Left)
                    .add_run(text_run(text, styles.body_size, styles)),
            );
        } else if let Some(text) = trimmed.strip_prefix("### ") {
            docx = docx.add_paragraph(heading_paragraph(text, "Heading3", styles));
        } else if let Some(text) = trimmed.strip_prefix("## ") {
            docx = docx.add_paragraph(heading_paragraph(text, "Heading2", styles));
        } else if let Some(text) = trimmed.strip_prefix("# ") {
            docx = docx.add_paragraph(heading_paragraph(text, "Heading1", styles));
        } else if let Some(text) = trimmed.strip_prefix("- ") {
            docx = docx.add_paragraph(bullet_paragraph(text, styles));
        } else if trimmed == "---" || trimmed == "***" {
            docx = docx.add_paragraph(
                Paragraph::new().add_run(Run::new().add_break(BreakType::Page)),
            );
        } else {
            docx = docx.add_paragraph(body_paragraph(trimmed, styles));
        }
    }

    if !table.is_empty() {
        docx = docx.add_table(build_table(&table, styles));
    }

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| ExportError::Docx(e.to_string()))?;

    Ok(buf.into_inner())
}

fn heading_style(style_id: &str, name: &str, size_pt: usize) -> Style {
    Style::new(style_id, StyleType::Paragraph)
        .name(name)
        .size(size_pt * 2) // OOXML uses half-points
}

fn heading_paragraph(text: &str, style_id: &str, styles: &ReportStyles) -> Paragraph {
    Paragraph::new().style(style_id).add_run(
        Run::new()
            .add_text(text)
            .color(&styles.accent_color)
            .fonts(RunFonts::new().ascii(&styles.heading_font)),
    )
}

fn bullet_paragraph(text: &str, styles: &ReportStyles) -> Paragraph {
    let bullet_run = text_run("\u{2022} ", styles.body_size, styles);

    let mut para = Paragraph::new()
        .align(AlignmentType::Left)
        .add_run(bullet_run);

    for run in parse_inline(text, styles.body_size, styles) {
        para = para.add_run(run);
    }

    para
}

fn body_paragraph(text: &str, styles: &ReportStyles) -> Paragraph {
    let mut para = Paragraph::new().align(AlignmentType::Left);
    for run in parse_inline(text, styles.body_size, styles) {
        para = para.add_run(run);
    }
    para
}

fn is_separator_row(line: &str) -> bool {
    split_row(line)
        .iter()
        .all(|cell| !cell.is_empty() && cell.chars().all(|c| c == '-' || c == ':'))
}

fn split_row(line: &str) -> Vec<String> {
    line.trim_matches('|')
        .split('|')
        .map(|cell| cell.trim().to_string())
        .collect()
}

fn build_table(rows: &[Vec<String>], styles: &ReportStyles) -> Table {
    let rows = rows
        .iter()
        .enumerate()
        .map(|(idx, cells)| {
            let header = idx == 0;
            TableRow::new(
                cells
                    .iter()
                    .map(|text| {
                        let mut run = text_run(text, styles.table_size, styles);
                        if header {
                            run = run.bold();
                        }
                        TableCell::new().add_paragraph(Paragraph::new().add_run(run))
                    })
                    .collect(),
            )
        })
        .collect();
    Table::new(rows)
}

fn text_run(text: &str, size_pt: usize, styles: &ReportStyles) -> Run {
    Run::new()
        .add_text(text)
        .size(size_pt * 2)
        .fonts(RunFonts::new().ascii(&styles.body_font))
}

/// Parse simple inline formatting: **bold** segments.
fn parse_inline(text: &str, size_pt: usize, styles: &ReportStyles) -> Vec<Run> {
    let mut runs = Vec::new();
    let mut remaining = text;

    while let Some(start) = remaining.find("**") {
        let before = &remaining[..start];
        if !before.is_empty() {
            runs.push(text_run(before, size_pt, styles));
        }

        let after_start = &remaining[start + 2..];
        if let Some(end) = after_start.find("**") {
            runs.push(text_run(&after_start[..end], size_pt, styles).bold());
            remaining = &after_start[end + 2..];
        } else {
            // Unclosed marker: keep the rest verbatim.
            runs.push(text_run(remaining, size_pt, styles));
            return runs;
        }
    }

    if !remaining.is_empty() {
        runs.push(text_run(remaining, size_pt, styles));
    }

    runs
}
