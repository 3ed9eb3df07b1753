//! Fret positions on an equal-tempered scale.

use crate::types::Length;

/// Frets per octave in twelve-tone equal temperament
pub const FRETS_PER_OCTAVE: u32 = 12;

/// Distance from the nut to fret `index` on a scale of `scale_length`.
///
/// `L − L / 2^(i/12)`. Index 0 is the nut itself and always yields zero.
pub fn fret_distance(scale_length: Length, index: u32) -> Length {
    let divisor = 2f64.powf(f64::from(index) / f64::from(FRETS_PER_OCTAVE));
    scale_length - scale_length / divisor
}

/// Distances from the nut for frets `0..=fret_count`.
///
/// With `include_bridge`, one extra entry equal to `scale_length` is appended
/// for the saddle. Values are unrounded; the caller validates its inputs.
pub fn compute_fret_positions(
    scale_length: Length,
    fret_count: u32,
    include_bridge: bool,
) -> Vec<Length> {
    let extra = usize::from(include_bridge);
    let mut positions = Vec::with_capacity(fret_count as usize + 1 + extra);
    positions.extend((0..=fret_count).map(|i| fret_distance(scale_length, i)));
    if include_bridge {
        positions.push(scale_length);
    }
    positions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(positions: &[Length]) -> Vec<f64> {
        positions.iter().map(|p| p.raw()).collect()
    }

    #[test]
    fn nut_is_zero() {
        let positions = compute_fret_positions(Length(650.0), 22, false);
        assert_eq!(positions[0], Length::ZERO);
    }

    #[test]
    fn zero_frets_is_just_the_nut() {
        assert_eq!(compute_fret_positions(Length(650.0), 0, false), vec![Length::ZERO]);
    }

    #[test]
    fn strictly_increasing_and_below_scale() {
        for (scale, frets) in [(648.0, 24), (610.0, 1), (863.6, 36), (1.0, 100)] {
            let positions = compute_fret_positions(Length(scale), frets, false);
            assert_eq!(positions.len(), frets as usize + 1);
            for pair in positions.windows(2) {
                assert!(pair[0] < pair[1], "{pair:?} not increasing for {scale}/{frets}");
            }
            assert!(positions[frets as usize].raw() < scale);
        }
    }

    #[test]
    fn twelfth_fret_is_half_scale() {
        let positions = compute_fret_positions(Length(650.0), 12, false);
        assert!((positions[12].raw() - 325.0).abs() < 1e-6);
    }

    #[test]
    fn twenty_fourth_fret_is_three_quarters() {
        let positions = compute_fret_positions(Length(648.0), 24, false);
        assert!((positions[12].raw() - 324.0).abs() < 1e-6);
        assert!((positions[24].raw() - 486.0).abs() < 1e-6);
    }

    #[test]
    fn first_fret_on_25_5_inch_scale() {
        let positions = compute_fret_positions(Length(648.0), 24, false);
        assert!((positions[1].raw() - 36.37).abs() < 0.01, "{}", positions[1].raw());
    }

    #[test]
    fn bridge_is_appended_exactly() {
        let positions = compute_fret_positions(Length(648.0), 20, true);
        assert_eq!(positions.len(), 22);
        assert_eq!(positions[21], Length(648.0));
        assert!(positions[20] < positions[21]);
    }

    #[test]
    fn deterministic() {
        let a = compute_fret_positions(Length(628.65), 21, true);
        let b = compute_fret_positions(Length(628.65), 21, true);
        assert_eq!(raw(&a), raw(&b));
    }

    #[test]
    fn negative_scale_does_not_panic() {
        let positions = compute_fret_positions(Length(-100.0), 3, false);
        assert_eq!(positions.len(), 4);
    }
}
