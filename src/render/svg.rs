//! SVG generation

use std::fmt::Write;

use glam::DVec2;

use super::{RenderOptions, Surface, fmt_num, render_model};
use crate::errors::RenderError;
use crate::model::{FretboardModel, Layer};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Accumulates an SVG document, one `<g>` per layer
#[derive(Debug)]
pub struct SvgSurface {
    out: String,
    stroke_width: f64,
    unit_suffix: &'static str,
}

impl SvgSurface {
    pub fn new(options: &RenderOptions) -> Self {
        Self {
            out: String::new(),
            stroke_width: options.stroke_width,
            unit_suffix: options.document_unit.map_or("", |unit| unit.suffix()),
        }
    }

    pub fn into_string(self) -> String {
        self.out
    }
}

impl Surface for SvgSurface {
    fn begin(&mut self, size: DVec2) -> std::fmt::Result {
        let (w, h) = (fmt_num(size.x), fmt_num(size.y));
        writeln!(
            self.out,
            r#"<svg xmlns="{SVG_NS}" width="{w}{unit}" height="{h}{unit}" viewBox="0 0 {w} {h}">"#,
            unit = self.unit_suffix,
        )
    }

    fn begin_layer(&mut self, layer: Layer) -> std::fmt::Result {
        writeln!(
            self.out,
            r#"  <g id="{}" fill="none" stroke="black" stroke-width="{}">"#,
            layer.name(),
            fmt_num(self.stroke_width)
        )
    }

    fn line(&mut self, from: DVec2, to: DVec2) -> std::fmt::Result {
        writeln!(
            self.out,
            r#"    <line x1="{}" y1="{}" x2="{}" y2="{}"/>"#,
            fmt_num(from.x),
            fmt_num(from.y),
            fmt_num(to.x),
            fmt_num(to.y)
        )
    }

    fn rect(&mut self, min: DVec2, size: DVec2) -> std::fmt::Result {
        writeln!(
            self.out,
            r#"    <rect x="{}" y="{}" width="{}" height="{}"/>"#,
            fmt_num(min.x),
            fmt_num(min.y),
            fmt_num(size.x),
            fmt_num(size.y)
        )
    }

    fn circle(&mut self, center: DVec2, radius: f64) -> std::fmt::Result {
        writeln!(
            self.out,
            r#"    <circle cx="{}" cy="{}" r="{}"/>"#,
            fmt_num(center.x),
            fmt_num(center.y),
            fmt_num(radius)
        )
    }

    fn end_layer(&mut self) -> std::fmt::Result {
        writeln!(self.out, "  </g>")
    }

    fn finish(&mut self) -> std::fmt::Result {
        writeln!(self.out, "</svg>")
    }
}

/// Render a model to an SVG document
pub fn render_svg(model: &FretboardModel, options: &RenderOptions) -> Result<String, RenderError> {
    let mut surface = SvgSurface::new(options);
    render_model(model, options, &mut surface)?;
    Ok(surface.into_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CircleShape, CrosshairShape, LineShape, RectShape};
    use crate::types::{Length, Unit, pmm};

    fn small_model() -> FretboardModel {
        FretboardModel {
            slots: vec![
                LineShape::new(pmm(0.0, 0.0), pmm(0.0, 75.0)).into(),
                RectShape::new(pmm(10.0, 0.0), Length(0.5), Length(75.0)).into(),
            ],
            markers: vec![CircleShape::new(pmm(20.0, 37.5), Length(3.0)).into()],
            unit: Unit::Millimeter,
        }
    }

    #[test]
    fn export_document() {
        let svg = render_svg(&small_model(), &RenderOptions::export(Unit::Millimeter)).unwrap();
        insta::assert_snapshot!(svg, @r#"
        <svg xmlns="http://www.w3.org/2000/svg" width="23mm" height="75mm" viewBox="0 0 23 75">
          <g id="slots" fill="none" stroke="black" stroke-width="0.1">
            <line x1="0" y1="75" x2="0" y2="0"/>
            <rect x="10" y="0" width="0.5" height="75"/>
          </g>
          <g id="markers" fill="none" stroke="black" stroke-width="0.1">
            <circle cx="20" cy="37.5" r="3"/>
          </g>
        </svg>
        "#);
    }

    #[test]
    fn preview_has_pixel_dimensions() {
        let svg = render_svg(&small_model(), &RenderOptions::preview()).unwrap();
        assert!(svg.starts_with(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="66" height="170" viewBox="0 0 66 170">"#
        ));
        assert!(svg.contains(r#"<line x1="10.5" y1="160" x2="10.5" y2="10"/>"#));
        assert!(svg.contains(r#"<circle cx="50" cy="85" r="6"/>"#));
    }

    #[test]
    fn crosshair_is_two_lines() {
        let model = FretboardModel {
            slots: Vec::new(),
            markers: vec![CrosshairShape::new(pmm(0.0, 0.0), Length(3.0)).into()],
            unit: Unit::Millimeter,
        };
        let svg = render_svg(&model, &RenderOptions::export(Unit::Millimeter)).unwrap();
        assert_eq!(svg.matches("<line").count(), 2);
        assert!(svg.contains(r#"<line x1="0" y1="3" x2="6" y2="3"/>"#));
        assert!(svg.contains(r#"<line x1="3" y1="6" x2="3" y2="0"/>"#));
        assert!(!svg.contains(r#"id="slots""#));
    }

    #[test]
    fn inch_document_unit() {
        let svg = render_svg(&small_model(), &RenderOptions::export(Unit::Inch)).unwrap();
        assert!(svg.contains(r#"height="2.95276in""#), "{svg}");
    }
}
