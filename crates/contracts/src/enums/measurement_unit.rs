use serde::{Deserialize, Serialize};
use std::fmt;

/// Unit the customer entered measurements in
///
/// Only a tag carried with the booking; values are never converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementUnit {
    #[default]
    Inches,
    #[serde(alias = "cm")]
    Centimeters,
}

impl MeasurementUnit {
    pub fn code(&self) -> &'static str {
        match self {
            MeasurementUnit::Inches => "inches",
            MeasurementUnit::Centimeters => "centimeters",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MeasurementUnit::Inches => "Inches",
            MeasurementUnit::Centimeters => "Centimeters",
        }
    }

    /// Abbreviation shown next to measurement labels
    pub fn short_label(&self) -> &'static str {
        match self {
            MeasurementUnit::Inches => "in",
            MeasurementUnit::Centimeters => "cm",
        }
    }

    pub fn all() -> [MeasurementUnit; 2] {
        [MeasurementUnit::Inches, MeasurementUnit::Centimeters]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "inches" | "in" => Some(MeasurementUnit::Inches),
            "centimeters" | "cm" => Some(MeasurementUnit::Centimeters),
            _ => None,
        }
    }
}

impl fmt::Display for MeasurementUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
