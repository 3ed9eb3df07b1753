//! File export descriptors
//!
//! The crate never touches the filesystem. An [`ExportedFile`] carries the
//! suggested file name, the MIME type and the document text; writing it out
//! is left to the caller's save-as layer.

use std::fmt;
use std::str::FromStr;

use crate::errors::RenderError;
use crate::model::FretboardModel;
use crate::render::{RenderOptions, render_dxf, render_svg};

/// Vector formats a model can be exported to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Svg,
    Dxf,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 2] = [ExportFormat::Svg, ExportFormat::Dxf];

    pub fn file_name(self) -> &'static str {
        match self {
            ExportFormat::Svg => "fretboard.svg",
            ExportFormat::Dxf => "fretboard.dxf",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            ExportFormat::Svg => "image/svg+xml",
            ExportFormat::Dxf => "application/dxf",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Svg => "svg",
            ExportFormat::Dxf => "dxf",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "svg" => Ok(ExportFormat::Svg),
            "dxf" => Ok(ExportFormat::Dxf),
            other => Err(format!("unknown export format: {other}")),
        }
    }
}

/// A rendered document ready to be saved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub file_name: &'static str,
    pub mime_type: &'static str,
    pub contents: String,
}

/// Render `model` at real size in its own unit.
pub fn export_model(model: &FretboardModel, format: ExportFormat) -> Result<ExportedFile, RenderError> {
    let contents = match format {
        ExportFormat::Svg => render_svg(model, &RenderOptions::export(model.unit))?,
        ExportFormat::Dxf => render_dxf(model, model.unit)?,
    };
    crate::log::debug!(%format, bytes = contents.len(), "exported model");
    Ok(ExportedFile {
        file_name: format.file_name(),
        mime_type: format.mime_type(),
        contents,
    })
}
