use serde::Serialize;
use tera::{Context, Tera};

use crate::docx::generate_docx;
use crate::error::ExportError;
use crate::report::{ClinicalReport, PatientReport};
use crate::styles::ReportStyles;

const CLINICAL_REPORT_TEMPLATE: &str = include_str!("templates/clinical_report.md.tera");
const PATIENT_REPORT_TEMPLATE: &str = include_str!("templates/patient_report.md.tera");

/// Output document type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Markdown,
    Docx,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Markdown => "md",
            Self::Docx => "docx",
        }
    }
}

/// Render a Tera template with any serializable context.
///
/// The `template_content` is the raw template string (Jinja2 syntax).
/// The context's fields become the template variables.
pub fn render_template<T: Serialize>(
    template_name: &str,
    template_content: &str,
    context: &T,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(context)?;
    let context =
        Context::from_value(value).map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    Ok(rendered)
}

pub fn render_clinical_report(report: &ClinicalReport) -> Result<String, ExportError> {
    render_template("clinical_report.md", CLINICAL_REPORT_TEMPLATE, report)
}

pub fn render_patient_report(report: &PatientReport) -> Result<String, ExportError> {
    render_template("patient_report.md", PATIENT_REPORT_TEMPLATE, report)
}

/// Turn rendered Markdown into document bytes.
pub fn export(
    markdown: &str,
    format: ExportFormat,
    styles: &ReportStyles,
) -> Result<Vec<u8>, ExportError> {
    let bytes = match format {
        ExportFormat::Markdown => markdown.as_bytes().to_vec(),
        ExportFormat::Docx => generate_docx(markdown, styles)?,
    };
    tracing::debug!(?format, bytes = bytes.len(), "exported report");
    Ok(bytes)
}
