//! Document generation parameters.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Output format of a generated document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    /// PDF document.
    #[default]
    Pdf,
    /// Word document.
    Docx,
    /// HTML page.
    Html,
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pdf => write!(f, "pdf"),
            Self::Docx => write!(f, "docx"),
            Self::Html => write!(f, "html"),
        }
    }
}

/// Parameters for rendering a document from a template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateDocumentParams {
    /// Template to render.
    pub template_id: String,

    /// Output format.
    pub format: DocumentFormat,

    /// Template variables.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<Map<String, Value>>,

    /// Whether to email the rendered document.
    pub send_email: bool,

    /// Recipient when `send_email` is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_to: Option<String>,
}

impl GenerateDocumentParams {
    /// Creates parameters rendering the template as PDF without email.
    #[must_use]
    pub fn new(template_id: impl Into<String>) -> Self {
        Self {
            template_id: template_id.into(),
            format: DocumentFormat::default(),
            variables: None,
            send_email: false,
            email_to: None,
        }
    }

    /// Sets the output format.
    #[must_use]
    pub fn with_format(mut self, format: DocumentFormat) -> Self {
        self.format = format;
        self
    }

    /// Sets the template variables.
    #[must_use]
    pub fn with_variables(mut self, variables: Map<String, Value>) -> Self {
        self.variables = Some(variables);
        self
    }

    /// Emails the rendered document to `email_to`.
    #[must_use]
    pub fn with_email(mut self, email_to: impl Into<String>) -> Self {
        self.send_email = true;
        self.email_to = Some(email_to.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_generate_document_defaults() {
        let params = GenerateDocumentParams::new("tpl-1");
        let value = serde_json::to_value(&params).expect("serialize");
        assert_eq!(
            value,
            json!({"template_id": "tpl-1", "format": "pdf", "send_email": false})
        );
    }

    #[test]
    fn test_generate_document_with_email() {
        let mut variables = Map::new();
        variables.insert("student_name".to_string(), json!("Ada"));
        let params = GenerateDocumentParams::new("tpl-1")
            .with_format(DocumentFormat::Docx)
            .with_variables(variables)
            .with_email("ada@example.com");
        let value = serde_json::to_value(&params).expect("serialize");
        assert_eq!(value["format"], json!("docx"));
        assert_eq!(value["send_email"], json!(true));
        assert_eq!(value["email_to"], json!("ada@example.com"));
        assert_eq!(value["variables"]["student_name"], json!("Ada"));
    }
}
