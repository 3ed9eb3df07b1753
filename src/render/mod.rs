//! Drawing a fretboard model
//!
//! This module is organized into submodules:
//! - `svg`: SVG document surface
//! - `dxf`: ASCII DXF surface
//!
//! A [`Surface`] receives primitives already mapped into drawing space. The
//! [`Projection`] does that mapping: display scale, margin, Y flip for Y-down
//! surfaces, and optional pixel snapping for crisp on-screen lines.

pub mod dxf;
pub mod svg;

pub use dxf::{DxfSurface, render_dxf};
pub use svg::{SvgSurface, render_svg};

use glam::{DVec2, dvec2};

use crate::errors::RenderError;
use crate::model::{FretboardModel, Layer, Shape};
use crate::types::{BoxMm, Length, PtMm, Scaler, Unit};

/// Stroke width of exported drawings, in millimetres
const EXPORT_STROKE_MM: f64 = 0.1;

/// Something primitives can be drawn onto
pub trait Surface {
    /// Whether the surface's Y axis points down (SVG, canvas) or up (DXF)
    fn y_down(&self) -> bool {
        true
    }

    /// Called once before any layer, with the drawing size in drawing units
    fn begin(&mut self, size: DVec2) -> std::fmt::Result;

    fn begin_layer(&mut self, layer: Layer) -> std::fmt::Result;

    fn line(&mut self, from: DVec2, to: DVec2) -> std::fmt::Result;

    /// Axis-aligned rectangle given by its minimum corner and size
    fn rect(&mut self, min: DVec2, size: DVec2) -> std::fmt::Result;

    fn circle(&mut self, center: DVec2, radius: f64) -> std::fmt::Result;

    fn end_layer(&mut self) -> std::fmt::Result {
        Ok(())
    }

    fn finish(&mut self) -> std::fmt::Result {
        Ok(())
    }
}

/// How a model is mapped onto a surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    /// Drawing units per millimetre
    pub display_scale: f64,
    /// Stroke width in drawing units
    pub stroke_width: f64,
    /// Blank border around the drawing, in drawing units (Y-down surfaces only)
    pub margin: f64,
    /// Snap axis-aligned lines to pixel centres (`floor(v) + 0.5`)
    pub pixel_snap: bool,
    /// Physical unit of the drawing units, if any
    pub document_unit: Option<Unit>,
}

impl RenderOptions {
    /// On-screen preview: two pixels per millimetre, one-pixel strokes
    pub fn preview() -> Self {
        Self {
            display_scale: 2.0,
            stroke_width: 1.0,
            margin: 10.0,
            pixel_snap: true,
            document_unit: None,
        }
    }

    /// Real-size output expressed in `unit`
    pub fn export(unit: Unit) -> Self {
        let display_scale = unit.from_millimeters(1.0);
        Self {
            display_scale,
            stroke_width: EXPORT_STROKE_MM * display_scale,
            margin: 0.0,
            pixel_snap: false,
            document_unit: Some(unit),
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::preview()
    }
}

/// Model space → drawing space
#[derive(Debug, Clone, Copy)]
pub struct Projection {
    scaler: Scaler,
    /// Drawing-space translation applied after scaling
    offset: DVec2,
    y_down: bool,
    pixel_snap: bool,
    /// Overall drawing size
    size: DVec2,
}

impl Projection {
    pub fn new(scaler: Scaler, bounds: &BoxMm, options: &RenderOptions, y_down: bool) -> Self {
        let size = dvec2(
            scaler.px(bounds.width()) + 2.0 * options.margin,
            scaler.px(bounds.height()) + 2.0 * options.margin,
        );
        // Y-down surfaces get the top-left of the bounds at (margin, margin);
        // Y-up surfaces keep model coordinates so the nut stays at the origin.
        let offset = if y_down {
            dvec2(
                options.margin - scaler.px(bounds.min.x),
                options.margin + scaler.px(bounds.max.y),
            )
        } else {
            DVec2::ZERO
        };
        Self {
            scaler,
            offset,
            y_down,
            pixel_snap: options.pixel_snap,
            size,
        }
    }

    pub fn size(&self) -> DVec2 {
        self.size
    }

    pub fn distance(&self, l: Length) -> f64 {
        self.scaler.px(l)
    }

    pub fn point(&self, p: PtMm) -> DVec2 {
        let x = self.scaler.px(p.x) + self.offset.x;
        let y = if self.y_down {
            self.offset.y - self.scaler.px(p.y)
        } else {
            self.scaler.px(p.y) + self.offset.y
        };
        dvec2(x, y)
    }

    /// Endpoints of a segment, snapped when the segment is axis-aligned
    pub fn line(&self, from: PtMm, to: PtMm) -> (DVec2, DVec2) {
        let mut a = self.point(from);
        let mut b = self.point(to);
        if self.pixel_snap {
            if a.x == b.x {
                a.x = snap(a.x);
                b.x = a.x;
            }
            if a.y == b.y {
                a.y = snap(a.y);
                b.y = a.y;
            }
        }
        (a, b)
    }

    /// Minimum corner and size of the rectangle spanned by two opposite corners
    pub fn rect(&self, corner: PtMm, opposite: PtMm) -> (DVec2, DVec2) {
        let a = self.point(corner);
        let b = self.point(opposite);
        (a.min(b), (b - a).abs())
    }
}

fn snap(v: f64) -> f64 {
    v.floor() + 0.5
}

/// Draw every primitive of `model` onto `surface`, slots first.
pub fn render_model(
    model: &FretboardModel,
    options: &RenderOptions,
    surface: &mut dyn Surface,
) -> Result<(), RenderError> {
    let scaler = Scaler::try_new(options.display_scale).map_err(|reason| {
        RenderError::InvalidScale {
            value: options.display_scale,
            reason,
        }
    })?;

    if model.is_empty() {
        return Err(RenderError::EmptyModel);
    }
    if !model.is_finite() {
        crate::log::warn!(primitives = model.len(), "model contains non-finite geometry");
        return Err(RenderError::InvalidBounds);
    }

    let bounds = model.bounds();
    let projection = Projection::new(scaler, &bounds, options, surface.y_down());

    crate::log::debug!(
        min_x = bounds.min.x.0,
        min_y = bounds.min.y.0,
        max_x = bounds.max.x.0,
        max_y = bounds.max.y.0,
        width = projection.size().x,
        height = projection.size().y,
        "render bounds"
    );

    surface.begin(projection.size())?;
    for layer in Layer::ALL {
        let primitives = model.layer(layer);
        if primitives.is_empty() {
            continue;
        }
        surface.begin_layer(layer)?;
        for primitive in primitives {
            primitive.render(&projection, surface)?;
        }
        surface.end_layer()?;
    }
    surface.finish()?;
    Ok(())
}

/// Format a number like C's %g (6 significant figures, trailing zeros trimmed).
pub(crate) fn fmt_num(value: f64) -> String {
    fmt_num_precision(value, 6)
}

/// Format a number with 10 significant figures, trailing zeros trimmed.
pub(crate) fn fmt_num_hi(value: f64) -> String {
    fmt_num_precision(value, 10)
}

fn fmt_num_precision(value: f64, sig_figs: i32) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    let abs_val = value.abs();
    let magnitude = abs_val.log10().floor() as i32;
    let scale = 10_f64.powi(sig_figs - 1 - magnitude);
    let rounded = (value * scale).round() / scale;

    let decimals = (sig_figs - 1 - magnitude).max(0) as usize;
    let s = format!("{:.prec$}", rounded, prec = decimals);
    if !s.contains('.') {
        return s;
    }
    let s = s.trim_end_matches('0');
    let s = s.trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}
