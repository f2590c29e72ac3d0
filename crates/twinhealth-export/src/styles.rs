use serde::{Deserialize, Serialize};

/// Typography and colour for exported reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportStyles {
    /// Font for body text and table cells.
    pub body_font: String,

    /// Font for headings.
    pub heading_font: String,

    /// Body text size in points.
    pub body_size: usize,

    /// Table cell text size in points.
    pub table_size: usize,

    pub heading1_size: usize,
    pub heading2_size: usize,
    pub heading3_size: usize,

    /// Heading colour as RRGGBB hex.
    pub accent_color: String,
}

impl Default for ReportStyles {
    fn default() -> Self {
        Self {
            body_font: "Helvetica".to_string(),
            heading_font: "Helvetica".to_string(),
            body_size: 10,
            table_size: 9,
            heading1_size: 18,
            heading2_size: 12,
            heading3_size: 11,
            accent_color: "2196F3".to_string(),
        }
    }
}
