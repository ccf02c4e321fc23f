use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Booking lifecycle status
///
/// Any status may be set from any other; the order of `all()` is only the
/// display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BookingStatus {
    #[serde(rename = "Pending")]
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Completed")]
    Completed,
}

/// Rejected status value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid booking status: '{0}'. Expected one of: Pending, In Progress, Completed")]
pub struct StatusError(pub String);

impl BookingStatus {
    /// Wire and display name
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "Pending",
            BookingStatus::InProgress => "In Progress",
            BookingStatus::Completed => "Completed",
        }
    }

    /// CSS modifier used for status badges
    pub fn badge_class(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "badge--pending",
            BookingStatus::InProgress => "badge--in-progress",
            BookingStatus::Completed => "badge--completed",
        }
    }

    /// All statuses in lifecycle order
    pub fn all() -> [BookingStatus; 3] {
        [
            BookingStatus::Pending,
            BookingStatus::InProgress,
            BookingStatus::Completed,
        ]
    }
}

impl Default for BookingStatus {
    fn default() -> Self {
        BookingStatus::Pending
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = StatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "pending" => Ok(BookingStatus::Pending),
            "in progress" | "in_progress" | "inprogress" => Ok(BookingStatus::InProgress),
            "completed" => Ok(BookingStatus::Completed),
            _ => Err(StatusError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_known_values() {
        assert_eq!("Pending".parse::<BookingStatus>(), Ok(BookingStatus::Pending));
        assert_eq!(
            " in progress ".parse::<BookingStatus>(),
            Ok(BookingStatus::InProgress)
        );
        assert_eq!("COMPLETED".parse::<BookingStatus>(), Ok(BookingStatus::Completed));
    }

    #[test]
    fn test_parse_rejects_unknown_values() {
        let err = "Archived".parse::<BookingStatus>().unwrap_err();
        assert_eq!(err, StatusError("Archived".to_string()));
        assert!("".parse::<BookingStatus>().is_err());
    }

    #[test]
    fn test_wire_names() {
        let json = serde_json::to_string(&BookingStatus::InProgress).unwrap();
        assert_eq!(json, "\"In Progress\"");
        let parsed: BookingStatus = serde_json::from_str("\"Completed\"").unwrap();
        assert_eq!(parsed, BookingStatus::Completed);
    }
}
