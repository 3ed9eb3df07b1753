//! Fret distance table
//!
//! Distances from the nut for every fret, in the user's display unit,
//! laid out four to a row.

use std::fmt;

use crate::types::{Length, Unit};

/// One fret and its distance from the nut, in the table's unit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FretDistance {
    pub fret: usize,
    pub distance: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FretTable {
    entries: Vec<FretDistance>,
    unit: Unit,
}

impl FretTable {
    pub const COLUMNS: usize = 4;

    /// Build the table from a position sequence; the zero line at index 0 is skipped.
    pub fn new(positions: &[Length], unit: Unit) -> Self {
        let entries = positions
            .iter()
            .enumerate()
            .skip(1)
            .map(|(fret, &x)| FretDistance {
                fret,
                distance: x.in_unit(unit),
            })
            .collect();
        Self { entries, unit }
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn entries(&self) -> &[FretDistance] {
        &self.entries
    }

    pub fn rows(&self) -> impl Iterator<Item = &[FretDistance]> {
        self.entries.chunks(Self::COLUMNS)
    }
}

impl fmt::Display for FretDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>3}: {:>8.3}", self.fret, self.distance)
    }
}

impl fmt::Display for FretTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Fret distances from nut ({})", self.unit)?;
        for row in self.rows() {
            for (i, entry) in row.iter().enumerate() {
                if i > 0 {
                    f.write_str("  ")?;
                }
                write!(f, "{entry}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frets::compute_fret_positions;

    #[test]
    fn skips_zero_line() {
        let positions = compute_fret_positions(Length::mm(648.0), 5, false);
        let table = FretTable::new(&positions, Unit::Millimeter);
        assert_eq!(table.entries().len(), 5);
        assert_eq!(table.entries()[0].fret, 1);
        assert_eq!(table.rows().count(), 2);
    }

    #[test]
    fn millimetre_table() {
        let positions = compute_fret_positions(Length::mm(648.0), 5, false);
        let table = FretTable::new(&positions, Unit::Millimeter);
        insta::assert_snapshot!(table.to_string(), @r"
        Fret distances from nut (mm)
          1:   36.369    2:   70.698    3:  103.099    4:  133.682
          5:  162.549
        ");
    }

    #[test]
    fn inch_table_converts() {
        let positions = compute_fret_positions(Length::from_unit(25.5, Unit::Inch), 2, true);
        let table = FretTable::new(&positions, Unit::Inch);
        let text = table.to_string();
        assert!(text.starts_with("Fret distances from nut (in)\n"));
        assert!(text.contains("  1:    1.431"));
        assert!(text.contains("  3:   25.500"));
    }

    #[test]
    fn empty_sequence() {
        let table = FretTable::new(&[Length::ZERO], Unit::Millimeter);
        assert_eq!(table.rows().count(), 0);
        assert_eq!(table.to_string(), "Fret distances from nut (mm)\n");
    }
}
