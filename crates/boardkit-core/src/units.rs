//! Unit conversion utilities
//!
//! All lengths are stored in inches. Centimeters and millimeters exist only
//! at presentation time: values are converted on the way out for display and
//! on the way in when the user types a length.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const CM_PER_INCH: f64 = 2.54;
const MM_PER_INCH: f64 = 25.4;

/// Display unit for lengths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    /// Inches (canonical storage unit)
    #[default]
    Inches,
    /// Centimeters
    Centimeters,
    /// Millimeters
    Millimeters,
}

impl LengthUnit {
    /// All units in selector order.
    pub const ALL: [LengthUnit; 3] = [
        LengthUnit::Inches,
        LengthUnit::Centimeters,
        LengthUnit::Millimeters,
    ];

    /// Convert a canonical value (inches) into this unit.
    pub fn from_inches(self, inches: f64) -> f64 {
        match self {
            Self::Inches => inches,
            Self::Centimeters => inches_to_cm(inches),
            Self::Millimeters => inches_to_mm(inches),
        }
    }

    /// Convert a value expressed in this unit back to inches.
    pub fn to_inches(self, value: f64) -> f64 {
        match self {
            Self::Inches => value,
            Self::Centimeters => cm_to_inches(value),
            Self::Millimeters => mm_to_inches(value),
        }
    }

    /// Short unit label ("in", "cm" or "mm")
    pub fn label(self) -> &'static str {
        match self {
            Self::Inches => "in",
            Self::Centimeters => "cm",
            Self::Millimeters => "mm",
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inches => write!(f, "inches"),
            Self::Centimeters => write!(f, "centimeters"),
            Self::Millimeters => write!(f, "millimeters"),
        }
    }
}

impl FromStr for LengthUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "inches" | "inch" | "in" | "\"" => Ok(Self::Inches),
            "centimeters" | "centimetres" | "cm" => Ok(Self::Centimeters),
            "millimeters" | "millimetres" | "mm" => Ok(Self::Millimeters),
            _ => Err(format!("Unknown unit: {}", s)),
        }
    }
}

pub fn inches_to_cm(inches: f64) -> f64 {
    inches * CM_PER_INCH
}

pub fn cm_to_inches(cm: f64) -> f64 {
    cm / CM_PER_INCH
}

pub fn inches_to_mm(inches: f64) -> f64 {
    inches * MM_PER_INCH
}

pub fn mm_to_inches(mm: f64) -> f64 {
    mm / MM_PER_INCH
}

/// Format a length for display
///
/// * `value_in` - Value in inches
/// * `unit` - Target display unit
pub fn format_dimension(value_in: f64, unit: LengthUnit) -> String {
    match unit {
        LengthUnit::Inches => format!("{:.3}\"", value_in),
        LengthUnit::Centimeters => format!("{:.2} cm", inches_to_cm(value_in)),
        LengthUnit::Millimeters => format!("{:.1} mm", inches_to_mm(value_in)),
    }
}

/// Parse a length string typed in `unit` and return inches
///
/// Inches accept decimal values and mixed fractions ("1 1/2", "3/4").
pub fn parse_length(input: &str, unit: LengthUnit) -> Result<f64, String> {
    let input = input.trim().trim_end_matches('"').trim();
    if input.is_empty() {
        return Err("Empty length".to_string());
    }

    let value = match unit {
        LengthUnit::Inches if input.contains('/') => parse_fraction(input)?,
        _ => input.parse::<f64>().map_err(|e| e.to_string())?,
    };

    if !value.is_finite() {
        return Err(format!("Not a finite length: {}", input));
    }
    Ok(unit.to_inches(value))
}

fn parse_fraction(input: &str) -> Result<f64, String> {
    // A leading sign applies to the whole mixed number
    let (sign, input) = match input.strip_prefix('-') {
        Some(rest) => (-1.0, rest.trim_start()),
        None => (1.0, input),
    };

    let mut total = 0.0;
    for part in input.split_whitespace() {
        if part.starts_with(['-', '+']) {
            return Err("Sign only allowed at the start".to_string());
        }
        if part.contains('/') {
            let frac_parts: Vec<&str> = part.split('/').collect();
            if frac_parts.len() != 2 {
                return Err("Invalid fraction format".to_string());
            }
            let num = frac_parts[0]
                .parse::<f64>()
                .map_err(|_| "Invalid numerator")?;
            let den = frac_parts[1]
                .parse::<f64>()
                .map_err(|_| "Invalid denominator")?;
            if den == 0.0 {
                return Err("Division by zero".to_string());
            }
            total += num / den;
        } else {
            total += part.parse::<f64>().map_err(|_| "Invalid number part")?;
        }
    }
    Ok(sign * total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_mixed_fraction() {
        assert_eq!(parse_length("-1 1/2", LengthUnit::Inches), Ok(-1.5));
        assert_eq!(parse_length("-3/4", LengthUnit::Inches), Ok(-0.75));
        assert_eq!(parse_length("1 1/2", LengthUnit::Inches), Ok(1.5));
        assert!(parse_length("1 -1/2", LengthUnit::Inches).is_err());
    }

    #[test]
    fn test_format_dimension() {
        assert_eq!(format_dimension(5.5, LengthUnit::Inches), "5.500\"");
        assert_eq!(format_dimension(1.0, LengthUnit::Centimeters), "2.54 cm");
        assert_eq!(format_dimension(1.0, LengthUnit::Millimeters), "25.4 mm");
        assert_eq!(format_dimension(-0.5, LengthUnit::Inches), "-0.500\"");
    }

    #[test]
    fn test_unit_conversion() {
        assert_eq!(LengthUnit::Millimeters.from_inches(2.0), 50.8);
        assert!((LengthUnit::Millimeters.to_inches(50.8) - 2.0).abs() < 1e-12);
        assert_eq!(LengthUnit::Inches.to_inches(3.25), 3.25);
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_length("1.5", LengthUnit::Inches).unwrap(), 1.5);
        assert_eq!(parse_length("1.5\"", LengthUnit::Inches).unwrap(), 1.5);
        assert!((parse_length("25.4", LengthUnit::Millimeters).unwrap() - 1.0).abs() < 1e-12);
        assert!((parse_length("5.08", LengthUnit::Centimeters).unwrap() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_parse_fraction() {
        assert_eq!(parse_length("1 1/2", LengthUnit::Inches).unwrap(), 1.5);
        assert_eq!(parse_length("3/4", LengthUnit::Inches).unwrap(), 0.75);
        assert_eq!(parse_length("  2  1/4  ", LengthUnit::Inches).unwrap(), 2.25);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(parse_length("", LengthUnit::Inches).is_err());
        assert!(parse_length("abc", LengthUnit::Millimeters).is_err());
        assert!(parse_length("1/0", LengthUnit::Inches).is_err());
        assert!(parse_length("1/2/3", LengthUnit::Inches).is_err());
        assert!(parse_length("inf", LengthUnit::Centimeters).is_err());
    }

    #[test]
    fn test_unit_from_str() {
        assert_eq!("cm".parse::<LengthUnit>().unwrap(), LengthUnit::Centimeters);
        assert_eq!("Inches".parse::<LengthUnit>().unwrap(), LengthUnit::Inches);
        assert_eq!("mm".parse::<LengthUnit>().unwrap(), LengthUnit::Millimeters);
        assert!("furlong".parse::<LengthUnit>().is_err());
    }

    #[test]
    fn test_unit_labels() {
        assert_eq!(LengthUnit::Inches.label(), "in");
        assert_eq!(LengthUnit::Centimeters.label(), "cm");
        assert_eq!(LengthUnit::Millimeters.label(), "mm");
    }
}
