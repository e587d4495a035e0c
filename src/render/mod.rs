//! Renderer module: format dispatch over [`DocumentationWriter`].

pub mod json;
pub mod xml;

use crate::error::{DocError, Result};
use crate::traversal::{write_request, DocumentRequest, DocumentationWriter};
use std::fmt;
use std::io::Write;
use std::str::FromStr;

/// Knobs shared by all renderers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Pretty-print with this many spaces per level. `None` writes compact output.
    pub indent: Option<usize>,
    /// Prefix XML output with `<?xml version="1.0" encoding="UTF-8"?>`.
    pub xml_declaration: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Xml,
    Json,
}

impl Format {
    pub fn file_extension(&self) -> &'static str {
        match self {
            Format::Xml => "xml",
            Format::Json => "json",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_extension())
    }
}

impl FromStr for Format {
    type Err = DocError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "xml" => Ok(Format::Xml),
            "json" => Ok(Format::Json),
            _ => Err(DocError::UnknownFormat(s.to_string())),
        }
    }
}

/// Create a renderer for `format` writing into `sink`.
pub fn create_renderer<'a, W>(
    format: Format,
    sink: W,
    options: &RenderOptions,
) -> Box<dyn DocumentationWriter + 'a>
where
    W: Write + 'a,
{
    match format {
        Format::Xml => Box::new(xml::XmlRenderer::new(sink, options)),
        Format::Json => Box::new(json::JsonRenderer::new(sink, options)),
    }
}

/// Render one request into an in-memory buffer.
pub fn render_to_vec(
    format: Format,
    request: &DocumentRequest,
    options: &RenderOptions,
) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    {
        let mut renderer = create_renderer(format, &mut buf, options);
        write_request(renderer.as_mut(), request)?;
    }
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_formats() {
        assert_eq!("xml".parse::<Format>().unwrap(), Format::Xml);
        assert_eq!("json".parse::<Format>().unwrap(), Format::Json);
        let err = "yaml".parse::<Format>().unwrap_err();
        assert!(err.to_string().contains("unknown format: yaml"));
    }

    #[test]
    fn render_request_to_buffer() {
        let request = DocumentRequest::new(crate::model::ExtensionComponent::new(
            "org.x.Rule",
            crate::model::ComponentKind::FlowAnalysisRule,
        ));
        let bytes = render_to_vec(Format::Xml, &request, &RenderOptions::default()).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "<extension><name>org.x.Rule</name><type>FLOW_ANALYSIS_RULE</type><tags></tags></extension>"
        );
    }
}
