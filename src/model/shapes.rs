//! Geometric primitives of a fretboard model
//!
//! Each primitive is its own value type that knows how to:
//! - Report its bounding box
//! - Produce a copy of itself turned by −90° about the origin
//! - Draw itself onto a [`Surface`]

use enum_dispatch::enum_dispatch;

use crate::render::{Projection, Surface};
use crate::types::{BoxMm, Length, Offset, PtMm};

/// Common behavior for all primitives
#[enum_dispatch]
pub trait Shape {
    /// Axis-aligned bounding box in model space
    fn bounds(&self) -> BoxMm;

    /// True when every coordinate and dimension is a finite number
    fn is_finite(&self) -> bool;

    /// The same primitive rotated by −90° about the origin
    fn quarter_turn_cw(&self) -> Primitive;

    /// Draw onto a surface through the given projection
    fn render(&self, projection: &Projection, surface: &mut dyn Surface) -> std::fmt::Result;
}

/// A tagged geometric primitive
#[enum_dispatch(Shape)]
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Line(LineShape),
    Rectangle(RectShape),
    Circle(CircleShape),
    Crosshair(CrosshairShape),
}

// ============================================================================
// Shape Types
// ============================================================================

/// A straight segment between two points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineShape {
    pub from: PtMm,
    pub to: PtMm,
}

impl LineShape {
    pub fn new(from: PtMm, to: PtMm) -> Self {
        Self { from, to }
    }
}

impl Shape for LineShape {
    fn bounds(&self) -> BoxMm {
        let mut bounds = BoxMm::new();
        bounds.expand_point(self.from);
        bounds.expand_point(self.to);
        bounds
    }

    fn is_finite(&self) -> bool {
        self.from.is_finite() && self.to.is_finite()
    }

    fn quarter_turn_cw(&self) -> Primitive {
        LineShape::new(self.from.quarter_turn_cw(), self.to.quarter_turn_cw()).into()
    }

    fn render(&self, projection: &Projection, surface: &mut dyn Surface) -> std::fmt::Result {
        let (from, to) = projection.line(self.from, self.to);
        surface.line(from, to)
    }
}

/// An axis-aligned rectangle; `origin` is the corner with the smallest coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectShape {
    pub origin: PtMm,
    pub width: Length,
    pub height: Length,
}

impl RectShape {
    pub fn new(origin: PtMm, width: Length, height: Length) -> Self {
        Self {
            origin,
            width,
            height,
        }
    }

    /// Corner opposite `origin`
    pub fn far_corner(&self) -> PtMm {
        self.origin + Offset::new(self.width, self.height)
    }
}

impl Shape for RectShape {
    fn bounds(&self) -> BoxMm {
        let mut bounds = BoxMm::new();
        bounds.expand_point(self.origin);
        bounds.expand_point(self.far_corner());
        bounds
    }

    fn is_finite(&self) -> bool {
        self.origin.is_finite() && self.width.is_finite() && self.height.is_finite()
    }

    fn quarter_turn_cw(&self) -> Primitive {
        // (x0, y0)..(x0 + w, y0 + h) maps to (y0, -x0 - w)..(y0 + h, -x0)
        let origin = PtMm::new(self.origin.y, -(self.origin.x + self.width));
        RectShape::new(origin, self.height, self.width).into()
    }

    fn render(&self, projection: &Projection, surface: &mut dyn Surface) -> std::fmt::Result {
        let (min, size) = projection.rect(self.origin, self.far_corner());
        surface.rect(min, size)
    }
}

/// A circle, used for dot inlays
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleShape {
    pub center: PtMm,
    pub radius: Length,
}

impl CircleShape {
    pub fn new(center: PtMm, radius: Length) -> Self {
        Self { center, radius }
    }
}

impl Shape for CircleShape {
    fn bounds(&self) -> BoxMm {
        square_bounds(self.center, self.radius)
    }

    fn is_finite(&self) -> bool {
        self.center.is_finite() && self.radius.is_finite()
    }

    fn quarter_turn_cw(&self) -> Primitive {
        CircleShape::new(self.center.quarter_turn_cw(), self.radius).into()
    }

    fn render(&self, projection: &Projection, surface: &mut dyn Surface) -> std::fmt::Result {
        surface.circle(projection.point(self.center), projection.distance(self.radius))
    }
}

/// Two perpendicular segments of half-length `radius` crossing at `center`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrosshairShape {
    pub center: PtMm,
    pub radius: Length,
}

impl CrosshairShape {
    pub fn new(center: PtMm, radius: Length) -> Self {
        Self { center, radius }
    }

    /// The horizontal and vertical arms
    pub fn arms(&self) -> [LineShape; 2] {
        let dx = Offset::new(self.radius, Length::ZERO);
        let dy = Offset::new(Length::ZERO, self.radius);
        [
            LineShape::new(self.center - dx, self.center + dx),
            LineShape::new(self.center - dy, self.center + dy),
        ]
    }
}

impl Shape for CrosshairShape {
    fn bounds(&self) -> BoxMm {
        square_bounds(self.center, self.radius)
    }

    fn is_finite(&self) -> bool {
        self.center.is_finite() && self.radius.is_finite()
    }

    fn quarter_turn_cw(&self) -> Primitive {
        CrosshairShape::new(self.center.quarter_turn_cw(), self.radius).into()
    }

    fn render(&self, projection: &Projection, surface: &mut dyn Surface) -> std::fmt::Result {
        for arm in self.arms() {
            arm.render(projection, surface)?;
        }
        Ok(())
    }
}

fn square_bounds(center: PtMm, radius: Length) -> BoxMm {
    let r = Offset::new(radius, radius);
    let mut bounds = BoxMm::new();
    bounds.expand_point(center - r);
    bounds.expand_point(center + r);
    bounds
}

// ============================================================================
// Tests
// ============================================================================
