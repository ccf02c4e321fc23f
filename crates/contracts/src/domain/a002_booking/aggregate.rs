use serde::{Deserialize, Serialize};

use super::draft::{BookingDraft, DraftError, MeasurementForm};
use crate::domain::a001_design::aggregate::{Design, DesignId};
use crate::domain::common::{AggregateId, AggregateRoot, EntityMetadata};
use crate::enums::{BookingStatus, MeasurementUnit};

// ============================================================================
// ID Type
// ============================================================================

/// Booking reference code, e.g. "BK001"
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingId(pub String);

impl BookingId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AggregateId for BookingId {
    fn from_string(s: &str) -> Result<Self, String> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("Booking id cannot be empty".into());
        }
        Ok(BookingId(trimmed.to_string()))
    }
}

impl std::fmt::Display for BookingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Submitted booking request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: BookingId,
    pub design_id: DesignId,
    /// Copied from the design at submission time
    pub design_name: String,
    pub customer_name: String,
    pub phone: String,
    pub extra_requirements: String,
    pub unit: MeasurementUnit,
    /// Measurement snapshot as submitted
    pub measurements: MeasurementForm,
    pub status: BookingStatus,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Booking {
    /// Package a draft for `design` into a new `Pending` booking.
    ///
    /// The draft must be submittable and its measurement keys must be exactly
    /// the design's measurement list.
    pub fn from_draft(
        id: BookingId,
        design: &Design,
        draft: BookingDraft,
    ) -> Result<Self, DraftError> {
        draft.validate()?;
        if draft.design_id != design.id || !draft.measurements.matches_design(design) {
            return Err(DraftError::DesignMismatch(design.id.clone()));
        }

        Ok(Self {
            id,
            design_id: design.id.clone(),
            design_name: design.name.clone(),
            customer_name: draft.customer_name,
            phone: draft.phone,
            extra_requirements: draft.extra_requirements,
            unit: draft.unit,
            measurements: draft.measurements,
            status: BookingStatus::Pending,
            metadata: EntityMetadata::new(),
        })
    }

    /// Set a new status, returning the previous one
    pub fn set_status(&mut self, status: BookingStatus) -> BookingStatus {
        let previous = self.status;
        self.status = status;
        self.metadata.touch();
        self.metadata.increment_version();
        previous
    }
}

impl AggregateRoot for Booking {
    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "booking"
    }

    fn id_prefix() -> &'static str {
        "BK"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Admin request to change a booking's status.
///
/// `status` stays a raw string so unknown values reach the service and are
/// rejected there as an invalid argument.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStatusDto {
    pub status: String,
}

/// Bookings sharing one status
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingGroup {
    pub status: BookingStatus,
    pub bookings: Vec<Booking>,
}

/// Group bookings by status in lifecycle order. Empty groups are left out;
/// order inside a group is the input order.
pub fn group_by_status(bookings: &[Booking]) -> Vec<BookingGroup> {
    BookingStatus::all()
        .into_iter()
        .filter_map(|status| {
            let members: Vec<Booking> = bookings
                .iter()
                .filter(|b| b.status == status)
                .cloned()
                .collect();
            (!members.is_empty()).then_some(BookingGroup {
                status,
                bookings: members,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn gown() -> Design {
        Design {
            id: DesignId::new("RN001"),
            name: "Elegant Evening Gown".into(),
            category: "Evening Wear".into(),
            image: "/placeholder.svg".into(),
            measurements: ["Bust", "Waist", "Hip", "Length", "Shoulder Width"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            metadata: EntityMetadata::new(),
        }
    }

    fn sarah_draft(design: &Design) -> BookingDraft {
        let mut draft = BookingDraft::for_design(design);
        draft.customer_name = "Sarah".into();
        draft.phone = "123".into();
        draft.unit = MeasurementUnit::Centimeters;
        for (i, name) in design.measurements.iter().enumerate() {
            draft.measurements.set(name, format!("{}", 80 + i));
        }
        draft
    }

    #[test]
    fn test_from_draft_creates_pending_booking() {
        let design = gown();
        let booking =
            Booking::from_draft(BookingId::new("BK001"), &design, sarah_draft(&design)).unwrap();

        assert_eq!(booking.status, BookingStatus::Pending);
        assert_eq!(booking.design_id, DesignId::new("RN001"));
        assert_eq!(booking.design_name, "Elegant Evening Gown");
        assert_eq!(booking.unit, MeasurementUnit::Centimeters);
        assert_eq!(
            booking.measurements.keys().collect::<Vec<_>>(),
            vec!["Bust", "Waist", "Hip", "Length", "Shoulder Width"]
        );
        assert_eq!(booking.measurements.get("Hip"), Some("82"));
    }

    #[test]
    fn test_from_draft_rejects_incomplete_draft() {
        let design = gown();
        let mut draft = sarah_draft(&design);
        draft.phone = " ".into();
        assert!(matches!(
            Booking::from_draft(BookingId::new("BK001"), &design, draft),
            Err(DraftError::MissingRequiredField(_))
        ));
    }

    #[test]
    fn test_from_draft_rejects_foreign_measurements() {
        let design = gown();
        let mut draft = sarah_draft(&design);
        draft.measurements = vec![("Chest".to_string(), "40".to_string())]
            .into_iter()
            .collect();
        assert_eq!(
            Booking::from_draft(BookingId::new("BK001"), &design, draft),
            Err(DraftError::DesignMismatch(DesignId::new("RN001")))
        );
    }

    #[test]
    fn test_set_status_any_direction() {
        let design = gown();
        let mut booking =
            Booking::from_draft(BookingId::new("BK001"), &design, sarah_draft(&design)).unwrap();

        assert_eq!(booking.set_status(BookingStatus::Completed), BookingStatus::Pending);
        assert_eq!(booking.set_status(BookingStatus::Pending), BookingStatus::Completed);
        assert_eq!(booking.metadata.version, 2);
    }

    #[test]
    fn test_group_by_status() {
        let design = gown();
        let make = |id: &str, status: BookingStatus| {
            let mut b =
                Booking::from_draft(BookingId::new(id), &design, sarah_draft(&design)).unwrap();
            b.status = status;
            b
        };
        let bookings = vec![
            make("BK001", BookingStatus::Completed),
            make("BK002", BookingStatus::Pending),
            make("BK003", BookingStatus::Completed),
        ];

        let groups = group_by_status(&bookings);
        let summary: Vec<(BookingStatus, Vec<&str>)> = groups
            .iter()
            .map(|g| (g.status, g.bookings.iter().map(|b| b.id.as_str()).collect()))
            .collect();
        assert_eq!(
            summary,
            vec![
                (BookingStatus::Pending, vec!["BK002"]),
                (BookingStatus::Completed, vec!["BK001", "BK003"]),
            ]
        );
    }
}
