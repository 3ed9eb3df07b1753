//! ASCII DXF generation
//!
//! Writes the minimal group-code stream CAD/CAM tools accept: a HEADER with
//! `$INSUNITS`, then LINE and CIRCLE entities on one layer per model layer.
//! DXF is Y-up, so coordinates are model coordinates scaled into the target unit.

use std::fmt::Write;

use glam::{DVec2, dvec2};

use super::{RenderOptions, Surface, fmt_num_hi, render_model};
use crate::errors::RenderError;
use crate::model::{FretboardModel, Layer};
use crate::types::Unit;

#[derive(Debug)]
pub struct DxfSurface {
    out: String,
    unit: Unit,
    layer: &'static str,
}

impl DxfSurface {
    pub fn new(unit: Unit) -> Self {
        Self {
            out: String::new(),
            unit,
            layer: "0",
        }
    }

    pub fn into_string(self) -> String {
        self.out
    }

    fn group(&mut self, code: u16, value: impl std::fmt::Display) -> std::fmt::Result {
        writeln!(self.out, "{code}")?;
        writeln!(self.out, "{value}")
    }

    fn coord(&mut self, code: u16, value: f64) -> std::fmt::Result {
        self.group(code, fmt_num_hi(value))
    }
}

impl Surface for DxfSurface {
    fn y_down(&self) -> bool {
        false
    }

    fn begin(&mut self, _size: DVec2) -> std::fmt::Result {
        self.group(0, "SECTION")?;
        self.group(2, "HEADER")?;
        self.group(9, "$INSUNITS")?;
        self.group(70, self.unit.dxf_code())?;
        self.group(0, "ENDSEC")?;
        self.group(0, "SECTION")?;
        self.group(2, "ENTITIES")
    }

    fn begin_layer(&mut self, layer: Layer) -> std::fmt::Result {
        self.layer = layer.name();
        Ok(())
    }

    fn line(&mut self, from: DVec2, to: DVec2) -> std::fmt::Result {
        self.group(0, "LINE")?;
        self.group(8, self.layer)?;
        self.coord(10, from.x)?;
        self.coord(20, from.y)?;
        self.coord(11, to.x)?;
        self.coord(21, to.y)
    }

    fn rect(&mut self, min: DVec2, size: DVec2) -> std::fmt::Result {
        let corners = [
            min,
            dvec2(min.x + size.x, min.y),
            min + size,
            dvec2(min.x, min.y + size.y),
        ];
        for i in 0..corners.len() {
            self.line(corners[i], corners[(i + 1) % corners.len()])?;
        }
        Ok(())
    }

    fn circle(&mut self, center: DVec2, radius: f64) -> std::fmt::Result {
        self.group(0, "CIRCLE")?;
        self.group(8, self.layer)?;
        self.coord(10, center.x)?;
        self.coord(20, center.y)?;
        self.coord(40, radius)
    }

    fn end_layer(&mut self) -> std::fmt::Result {
        self.layer = "0";
        Ok(())
    }

    fn finish(&mut self) -> std::fmt::Result {
        self.group(0, "ENDSEC")?;
        self.group(0, "EOF")
    }
}

/// Render a model to an ASCII DXF drawing expressed in `unit`
pub fn render_dxf(model: &FretboardModel, unit: Unit) -> Result<String, RenderError> {
    let mut surface = DxfSurface::new(unit);
    render_model(model, &RenderOptions::export(unit), &mut surface)?;
    Ok(surface.into_string())
}
