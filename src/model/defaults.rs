//! Fixed board dimensions (millimetres)

use crate::types::Length;

/// Height of the board drawing, nut edge to nut edge across the strings
pub const BOARD_HEIGHT: Length = Length::mm(75.0);

/// Width of a fret slot when slots are drawn as rectangles
pub const SLOT_WIDTH: Length = Length::mm(0.5);

/// Clearance between a board edge and its alignment tick
pub const ALIGNMENT_MARK_GAP: Length = Length::mm(2.0);

/// Length of an alignment tick
pub const ALIGNMENT_MARK_LENGTH: Length = Length::mm(5.0);
