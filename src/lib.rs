//! Fretboard layout generator
//!
//! Computes fret positions for a scale length with the equal-temperament rule,
//! builds the drawing of a fretboard (nut and fret slots, inlays, optional
//! alignment ticks) and renders it as SVG or DXF at real size.
//!
//! ```
//! use fretboard::{Fretboard, FretboardForm};
//!
//! let form = FretboardForm {
//!     scale: "648".into(),
//!     scale_units: "mm".into(),
//!     frets: "24".into(),
//!     ..FretboardForm::default()
//! };
//! let board = fretboard::fretboard(&form).unwrap();
//! assert_eq!(board.positions.len(), 25);
//! assert!(board.svg(&fretboard::RenderOptions::preview()).unwrap().starts_with("<svg"));
//! ```

pub mod errors;
pub mod export;
pub mod frets;
pub mod log;
pub mod model;
pub mod params;
pub mod render;
pub mod table;
pub mod types;

pub use errors::{RenderError, ValidationError};
pub use export::{ExportFormat, ExportedFile, export_model};
pub use frets::compute_fret_positions;
pub use model::{FretboardModel, Layer, Primitive, build_fretboard_model};
pub use params::{
    FretboardForm, FretboardParams, InlayStyle, LayoutParameters, Orientation, ScaleParameters,
    SlotStyle,
};
pub use render::{RenderOptions, Surface, render_dxf, render_model, render_svg};
pub use table::FretTable;
pub use types::{Length, Unit};

/// A generated fretboard: positions, drawing and the unit to present them in
#[derive(Debug, Clone, PartialEq)]
pub struct Fretboard {
    pub params: FretboardParams,
    /// Distances from the nut, in millimetres; `positions[0]` is the zero line
    pub positions: Vec<Length>,
    pub model: FretboardModel,
}

impl Fretboard {
    /// Run the calculator and the geometry builder. Every call starts from scratch.
    pub fn generate(params: &FretboardParams) -> Self {
        let scale = &params.scale;
        let positions =
            compute_fret_positions(scale.scale_length, scale.fret_count, scale.include_bridge);
        let model = build_fretboard_model(&positions, scale.fret_count, &params.layout);
        Self {
            params: *params,
            positions,
            model,
        }
    }

    pub fn display_unit(&self) -> Unit {
        self.params.display_unit
    }

    /// Fret distances in the display unit
    pub fn table(&self) -> FretTable {
        FretTable::new(&self.positions, self.display_unit())
    }

    pub fn svg(&self, options: &RenderOptions) -> Result<String, RenderError> {
        render_svg(&self.model, options)
    }

    pub fn dxf(&self, unit: Unit) -> Result<String, RenderError> {
        render_dxf(&self.model, unit)
    }

    pub fn export(&self, format: ExportFormat) -> Result<ExportedFile, RenderError> {
        export_model(&self.model, format)
    }
}

/// Validate form input and generate the fretboard it describes.
///
/// Returns the fretboard on success, or an error with diagnostics.
pub fn fretboard(form: &FretboardForm) -> Result<Fretboard, miette::Report> {
    let params = form.validate()?;
    Ok(Fretboard::generate(&params))
}
