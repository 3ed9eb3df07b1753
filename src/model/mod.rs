//! Fretboard geometry model
//!
//! This module is organized into submodules:
//! - `defaults`: fixed board dimensions
//! - `shapes`: the primitives a model is made of
//!
//! [`build_fretboard_model`] turns a fret position sequence and layout
//! parameters into a fresh [`FretboardModel`]. It is a pure function: nothing
//! is cached and no model is ever edited in place.

pub mod defaults;
pub mod shapes;

pub use shapes::{CircleShape, CrosshairShape, LineShape, Primitive, RectShape, Shape};

use crate::frets::FRETS_PER_OCTAVE;
use crate::params::{InlayStyle, LayoutParameters, Orientation, SlotStyle};
use crate::types::{BoxMm, Length, Offset, PtMm, Unit};

use defaults::{ALIGNMENT_MARK_GAP, ALIGNMENT_MARK_LENGTH, BOARD_HEIGHT, SLOT_WIDTH};

/// Which part of the drawing a primitive belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    /// Nut and fret slots
    Slots,
    /// Inlays and alignment ticks
    Markers,
}

impl Layer {
    pub const ALL: [Layer; 2] = [Layer::Slots, Layer::Markers];

    pub fn name(self) -> &'static str {
        match self {
            Layer::Slots => "slots",
            Layer::Markers => "markers",
        }
    }
}

/// A complete fretboard drawing
#[derive(Debug, Clone, PartialEq)]
pub struct FretboardModel {
    pub slots: Vec<Primitive>,
    pub markers: Vec<Primitive>,
    /// Linear unit of every coordinate
    pub unit: Unit,
}

impl FretboardModel {
    pub fn layer(&self, layer: Layer) -> &[Primitive] {
        match layer {
            Layer::Slots => &self.slots,
            Layer::Markers => &self.markers,
        }
    }

    /// All primitives, slots first
    pub fn primitives(&self) -> impl Iterator<Item = (Layer, &Primitive)> {
        Layer::ALL
            .into_iter()
            .flat_map(move |layer| self.layer(layer).iter().map(move |p| (layer, p)))
    }

    pub fn len(&self) -> usize {
        self.slots.len() + self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_finite(&self) -> bool {
        self.primitives().all(|(_, p)| p.is_finite())
    }

    pub fn bounds(&self) -> BoxMm {
        let mut bounds = BoxMm::new();
        for (_, primitive) in self.primitives() {
            bounds.expand_bbox(&primitive.bounds());
        }
        bounds
    }

    /// The whole model rotated by −90° about the origin
    pub fn rotated_cw(&self) -> FretboardModel {
        FretboardModel {
            slots: self.slots.iter().map(Shape::quarter_turn_cw).collect(),
            markers: self.markers.iter().map(Shape::quarter_turn_cw).collect(),
            unit: self.unit,
        }
    }
}

/// Build the drawing for a fret position sequence.
///
/// `positions[0]` is the zero line at the nut and `positions[1..=fret_count]`
/// are the frets; anything after that is the bridge. Every entry gets a slot,
/// an extra slot sits `nut_width` outside the zero line, octave frets get
/// alignment ticks when enabled, and inlays sit halfway back to the previous
/// fret. The bridge gets neither inlays nor ticks.
pub fn build_fretboard_model(
    positions: &[Length],
    fret_count: u32,
    layout: &LayoutParameters,
) -> FretboardModel {
    let mut slots = Vec::with_capacity(positions.len() + 1);
    let mut markers = Vec::new();

    slots.push(slot(-layout.nut_width, layout.slot_style));
    slots.extend(positions.iter().map(|&x| slot(x, layout.slot_style)));

    let fretted = &positions[..positions.len().min(fret_count as usize + 1)];

    if layout.alignment_markers {
        for (i, &x) in fretted.iter().enumerate() {
            if i as u32 % FRETS_PER_OCTAVE == 0 {
                markers.extend(alignment_ticks(x));
            }
        }
    }

    let radius = layout.inlay_width / 2.0;
    for (i, pair) in fretted.windows(2).enumerate() {
        let fret_number = (i as u32 + 1) % FRETS_PER_OCTAVE;
        let (previous, current) = (pair[0], pair[1]);
        // Back from the fret wire by half the preceding interval
        let x = current - (current - previous) / 2.0;
        for y in inlay_rows(fret_number) {
            markers.push(inlay(PtMm::new(x, y), radius, layout.inlay_style));
        }
    }

    crate::log::debug!(
        frets = positions.len(),
        slots = slots.len(),
        markers = markers.len(),
        "built fretboard model"
    );

    let model = FretboardModel {
        slots,
        markers,
        unit: Unit::Millimeter,
    };

    match layout.orientation {
        Orientation::Landscape => model,
        Orientation::Portrait => model.rotated_cw(),
    }
}

fn slot(x: Length, style: SlotStyle) -> Primitive {
    match style {
        SlotStyle::Line => {
            LineShape::new(PtMm::new(x, Length::ZERO), PtMm::new(x, BOARD_HEIGHT)).into()
        }
        SlotStyle::Rectangle => RectShape::new(
            PtMm::new(x - SLOT_WIDTH / 2.0, Length::ZERO),
            SLOT_WIDTH,
            BOARD_HEIGHT,
        )
        .into(),
    }
}

fn alignment_ticks(x: Length) -> [Primitive; 2] {
    let tick = Offset::new(Length::ZERO, ALIGNMENT_MARK_LENGTH);
    let below = PtMm::new(x, -ALIGNMENT_MARK_GAP);
    let above = PtMm::new(x, BOARD_HEIGHT + ALIGNMENT_MARK_GAP);
    [
        LineShape::new(below - tick, below).into(),
        LineShape::new(above, above + tick).into(),
    ]
}

/// Vertical inlay positions for a fret number within the octave
fn inlay_rows(fret_number: u32) -> Vec<Length> {
    match fret_number {
        3 | 5 | 7 | 9 => vec![BOARD_HEIGHT / 2.0],
        0 => vec![BOARD_HEIGHT / 4.0, BOARD_HEIGHT * 3.0 / 4.0],
        _ => Vec::new(),
    }
}

fn inlay(center: PtMm, radius: Length, style: InlayStyle) -> Primitive {
    match style {
        InlayStyle::Dot => CircleShape::new(center, radius).into(),
        InlayStyle::Crosshair => CrosshairShape::new(center, radius).into(),
    }
}
