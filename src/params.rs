//! Layout parameters and the form layer that produces them.
//!
//! The geometry core only ever sees [`FretboardParams`], already normalised to
//! millimetres. [`FretboardForm`] is the raw, stringly-typed input a UI hands
//! over; [`FretboardForm::validate`] is the one place user input is checked.

use std::fmt;
use std::str::FromStr;

use crate::errors::ValidationError;
use crate::types::{Length, Unit};

/// How nut and fret slots are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlotStyle {
    /// Zero-width line across the board
    #[default]
    Line,
    /// Rectangle of the fixed slot width, centred on the fret
    Rectangle,
}

/// How inlay markers are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InlayStyle {
    #[default]
    Dot,
    Crosshair,
}

/// Final orientation of the drawing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Nut on the left, bridge to the right
    #[default]
    Landscape,
    /// Landscape turned by −90° about the nut
    Portrait,
}

impl FromStr for SlotStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "line" | "lines" => Ok(SlotStyle::Line),
            "slot" | "slots" | "rect" | "rectangle" => Ok(SlotStyle::Rectangle),
            other => Err(other.to_string()),
        }
    }
}

impl FromStr for InlayStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dot" | "dots" | "circle" => Ok(InlayStyle::Dot),
            "crosshair" | "cross" => Ok(InlayStyle::Crosshair),
            other => Err(other.to_string()),
        }
    }
}

impl FromStr for Orientation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "landscape" | "horizontal" => Ok(Orientation::Landscape),
            "portrait" | "vertical" => Ok(Orientation::Portrait),
            other => Err(other.to_string()),
        }
    }
}

impl fmt::Display for SlotStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SlotStyle::Line => "line",
            SlotStyle::Rectangle => "slot",
        })
    }
}

impl fmt::Display for InlayStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            InlayStyle::Dot => "dot",
            InlayStyle::Crosshair => "crosshair",
        })
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Orientation::Landscape => "landscape",
            Orientation::Portrait => "portrait",
        })
    }
}

/// Inputs of the fret position calculator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleParameters {
    pub scale_length: Length,
    pub fret_count: u32,
    /// Append the saddle position after the last fret
    pub include_bridge: bool,
}

/// Inputs of the geometry builder besides the fret positions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParameters {
    /// Offset of the outer nut edge from the zero line
    pub nut_width: Length,
    /// Inlay diameter (dots) or span (crosshairs)
    pub inlay_width: Length,
    pub slot_style: SlotStyle,
    pub inlay_style: InlayStyle,
    pub alignment_markers: bool,
    pub orientation: Orientation,
}

impl Default for LayoutParameters {
    fn default() -> Self {
        Self {
            nut_width: Length::mm(3.0),
            inlay_width: Length::mm(6.0),
            slot_style: SlotStyle::default(),
            inlay_style: InlayStyle::default(),
            alignment_markers: false,
            orientation: Orientation::default(),
        }
    }
}

/// Fully normalised parameter record
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FretboardParams {
    pub scale: ScaleParameters,
    pub layout: LayoutParameters,
    /// Unit used when presenting distances back to the user
    pub display_unit: Unit,
}

impl Default for FretboardParams {
    fn default() -> Self {
        Self {
            scale: ScaleParameters {
                scale_length: Length::from_unit(25.5, Unit::Inch),
                fret_count: 22,
                include_bridge: false,
            },
            layout: LayoutParameters::default(),
            display_unit: Unit::Millimeter,
        }
    }
}

/// Raw values as typed into the input form
#[derive(Debug, Clone, PartialEq)]
pub struct FretboardForm {
    pub scale: String,
    pub scale_units: String,
    pub frets: String,
    pub nut: String,
    pub nut_units: String,
    pub inlay: String,
    pub inlay_units: String,
    pub slot_style: String,
    pub inlay_style: String,
    pub orientation: String,
    pub display_units: String,
    pub alignment_markers: bool,
    pub bridge_location: bool,
}

impl Default for FretboardForm {
    fn default() -> Self {
        Self {
            scale: "25.5".to_string(),
            scale_units: "inches".to_string(),
            frets: "22".to_string(),
            nut: "3".to_string(),
            nut_units: "mm".to_string(),
            inlay: "6".to_string(),
            inlay_units: "mm".to_string(),
            slot_style: "line".to_string(),
            inlay_style: "dot".to_string(),
            orientation: "landscape".to_string(),
            display_units: "mm".to_string(),
            alignment_markers: false,
            bridge_location: false,
        }
    }
}

const UNIT_OPTIONS: &str = "mm, inches";

/// Largest fret count the form accepts (three octaves)
pub const MAX_FRET_COUNT: u32 = 36;

impl FretboardForm {
    /// Check every field and normalise lengths to millimetres.
    ///
    /// Fields are checked in form order and the first failure is returned.
    pub fn validate(&self) -> Result<FretboardParams, ValidationError> {
        let scale_unit = parse_option::<Unit>("scale units", &self.scale_units, UNIT_OPTIONS)?;
        let scale_length = parse_length("scale length", &self.scale, scale_unit)?;
        let fret_count = parse_count("fret count", &self.frets)?;
        let nut_unit = parse_option::<Unit>("nut units", &self.nut_units, UNIT_OPTIONS)?;
        let nut_width = parse_length("nut width", &self.nut, nut_unit)?;
        let inlay_unit = parse_option::<Unit>("inlay units", &self.inlay_units, UNIT_OPTIONS)?;
        let inlay_width = parse_length("inlay width", &self.inlay, inlay_unit)?;
        let slot_style = parse_option("slot style", &self.slot_style, "line, slot")?;
        let inlay_style = parse_option("inlay style", &self.inlay_style, "dot, crosshair")?;
        let orientation =
            parse_option("orientation", &self.orientation, "landscape, portrait")?;
        let display_unit = parse_option("display units", &self.display_units, UNIT_OPTIONS)?;

        Ok(FretboardParams {
            scale: ScaleParameters {
                scale_length,
                fret_count,
                include_bridge: self.bridge_location,
            },
            layout: LayoutParameters {
                nut_width,
                inlay_width,
                slot_style,
                inlay_style,
                alignment_markers: self.alignment_markers,
                orientation,
            },
            display_unit,
        })
    }
}

fn non_empty<'a>(field: &'static str, raw: &'a str) -> Result<&'a str, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Err(ValidationError::MissingField { field })
    } else {
        Ok(trimmed)
    }
}

fn parse_length(field: &'static str, raw: &str, unit: Unit) -> Result<Length, ValidationError> {
    let text = non_empty(field, raw)?;
    let value: f64 = text.parse().map_err(|_| ValidationError::NotNumeric {
        field,
        value: text.to_string(),
    })?;
    if !value.is_finite() {
        return Err(ValidationError::NotNumeric {
            field,
            value: text.to_string(),
        });
    }
    if value <= 0.0 {
        return Err(ValidationError::NotPositive { field, value });
    }
    Ok(Length::from_unit(value, unit))
}

fn parse_count(field: &'static str, raw: &str) -> Result<u32, ValidationError> {
    let text = non_empty(field, raw)?;
    let too_large = || ValidationError::TooLarge {
        field,
        value: text.to_string(),
        max: MAX_FRET_COUNT,
    };
    if let Ok(count) = text.parse::<u32>() {
        return match count {
            0 => Err(ValidationError::NotPositive { field, value: 0.0 }),
            count if count > MAX_FRET_COUNT => Err(too_large()),
            count => Ok(count),
        };
    }

    // Not a plain unsigned integer: work out which rule it breaks.
    match text.parse::<f64>() {
        Ok(value) if !value.is_finite() => Err(ValidationError::NotNumeric {
            field,
            value: text.to_string(),
        }),
        Ok(value) if value <= 0.0 => Err(ValidationError::NotPositive { field, value }),
        Ok(value) if value > f64::from(MAX_FRET_COUNT) => Err(too_large()),
        Ok(_) => Err(ValidationError::NotInteger {
            field,
            value: text.to_string(),
        }),
        Err(_) => Err(ValidationError::NotNumeric {
            field,
            value: text.to_string(),
        }),
    }
}

fn parse_option<T: FromStr>(
    field: &'static str,
    raw: &str,
    expected: &'static str,
) -> Result<T, ValidationError> {
    let text = non_empty(field, raw)?;
    text.parse().map_err(|_| ValidationError::UnknownOption {
        field,
        value: text.to_string(),
        expected,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_form_is_valid() {
        let params = FretboardForm::default().validate().unwrap();
        assert!((params.scale.scale_length.raw() - 647.7).abs() < 1e-9);
        assert_eq!(params.scale.fret_count, 22);
        assert_eq!(params.layout.nut_width, Length(3.0));
        assert_eq!(params.layout.inlay_width, Length(6.0));
        assert_eq!(params.layout.slot_style, SlotStyle::Line);
        assert_eq!(params.display_unit, Unit::Millimeter);
    }

    #[test]
    fn default_form_matches_default_params() {
        assert_eq!(FretboardForm::default().validate(), Ok(FretboardParams::default()));
    }

    #[test]
    fn fret_count_is_capped() {
        let form = FretboardForm {
            frets: "4294967296".to_string(),
            ..FretboardForm::default()
        };
        assert_eq!(
            form.validate(),
            Err(ValidationError::TooLarge {
                field: "fret count",
                value: "4294967296".to_string(),
                max: MAX_FRET_COUNT,
            })
        );

        let form = FretboardForm {
            frets: "37".to_string(),
            ..FretboardForm::default()
        };
        assert!(matches!(form.validate(), Err(ValidationError::TooLarge { max: 36, .. })));

        let form = FretboardForm {
            frets: "36".to_string(),
            ..FretboardForm::default()
        };
        assert_eq!(form.validate().map(|p| p.scale.fret_count), Ok(36));

        let form = FretboardForm {
            frets: "36.5".to_string(),
            ..FretboardForm::default()
        };
        assert!(matches!(form.validate(), Err(ValidationError::TooLarge { .. })));
    }

    #[test]
    fn inch_fields_are_normalised() {
        let form = FretboardForm {
            nut: "0.125".to_string(),
            nut_units: "inches".to_string(),
            inlay: "0.25".to_string(),
            inlay_units: "in".to_string(),
            ..FretboardForm::default()
        };
        let params = form.validate().unwrap();
        assert!((params.layout.nut_width.raw() - 3.175).abs() < 1e-9);
        assert!((params.layout.inlay_width.raw() - 6.35).abs() < 1e-9);
    }

    #[test]
    fn options_and_flags_are_carried() {
        let form = FretboardForm {
            slot_style: "slot".to_string(),
            inlay_style: "Crosshair".to_string(),
            orientation: "portrait".to_string(),
            display_units: "inches".to_string(),
            alignment_markers: true,
            bridge_location: true,
            ..FretboardForm::default()
        };
        let params = form.validate().unwrap();
        assert_eq!(params.layout.slot_style, SlotStyle::Rectangle);
        assert_eq!(params.layout.inlay_style, InlayStyle::Crosshair);
        assert_eq!(params.layout.orientation, Orientation::Portrait);
        assert_eq!(params.display_unit, Unit::Inch);
        assert!(params.layout.alignment_markers);
        assert!(params.scale.include_bridge);
    }

    #[test]
    fn empty_field_is_missing() {
        let form = FretboardForm {
            scale: "   ".to_string(),
            ..FretboardForm::default()
        };
        assert_eq!(
            form.validate(),
            Err(ValidationError::MissingField { field: "scale length" })
        );
    }

    #[test]
    fn garbage_is_not_numeric() {
        let form = FretboardForm {
            nut: "three".to_string(),
            ..FretboardForm::default()
        };
        assert_eq!(
            form.validate(),
            Err(ValidationError::NotNumeric {
                field: "nut width",
                value: "three".to_string()
            })
        );
    }

    #[test]
    fn nan_is_not_numeric() {
        let form = FretboardForm {
            inlay: "NaN".to_string(),
            ..FretboardForm::default()
        };
        let err = form.validate().unwrap_err();
        assert_eq!(err.field(), "inlay width");
        assert!(matches!(err, ValidationError::NotNumeric { .. }));
    }

    #[test]
    fn non_positive_values_are_rejected() {
        let form = FretboardForm {
            scale: "-650".to_string(),
            ..FretboardForm::default()
        };
        assert_eq!(
            form.validate(),
            Err(ValidationError::NotPositive {
                field: "scale length",
                value: -650.0
            })
        );

        let form = FretboardForm {
            frets: "0".to_string(),
            ..FretboardForm::default()
        };
        assert_eq!(
            form.validate(),
            Err(ValidationError::NotPositive {
                field: "fret count",
                value: 0.0
            })
        );
    }

    #[test]
    fn fret_count_must_be_whole() {
        let form = FretboardForm {
            frets: "21.5".to_string(),
            ..FretboardForm::default()
        };
        assert_eq!(
            form.validate(),
            Err(ValidationError::NotInteger {
                field: "fret count",
                value: "21.5".to_string()
            })
        );

        let form = FretboardForm {
            frets: "-2".to_string(),
            ..FretboardForm::default()
        };
        assert!(matches!(
            form.validate(),
            Err(ValidationError::NotPositive { field: "fret count", .. })
        ));
    }

    #[test]
    fn unknown_option_names_choices() {
        let form = FretboardForm {
            slot_style: "groove".to_string(),
            ..FretboardForm::default()
        };
        let err = form.validate().unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnknownOption {
                field: "slot style",
                value: "groove".to_string(),
                expected: "line, slot"
            }
        );
        assert_eq!(err.to_string(), "unknown slot style: \"groove\"");
    }

    #[test]
    fn enum_display_round_trips_through_parse() {
        for style in [SlotStyle::Line, SlotStyle::Rectangle] {
            assert_eq!(style.to_string().parse::<SlotStyle>(), Ok(style));
        }
        for style in [InlayStyle::Dot, InlayStyle::Crosshair] {
            assert_eq!(style.to_string().parse::<InlayStyle>(), Ok(style));
        }
        for orientation in [Orientation::Landscape, Orientation::Portrait] {
            assert_eq!(orientation.to_string().parse::<Orientation>(), Ok(orientation));
        }
    }
}
