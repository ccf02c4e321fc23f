//! Booking draft: the measurement form generated from a design and the
//! rules that decide when it can be submitted.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::a001_design::aggregate::{Design, DesignId};
use crate::enums::MeasurementUnit;

// ============================================================================
// Measurement form
// ============================================================================

/// One measurement field and the value typed into it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasurementEntry {
    pub name: String,
    pub value: String,
}

/// Ordered `field name -> value` mapping.
///
/// Built from a design, so its key set is exactly the design's measurement
/// list in the design's order. Values are free text.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MeasurementForm {
    entries: Vec<MeasurementEntry>,
}

impl MeasurementForm {
    /// Seed a form for `design`: one entry per declared measurement, each "".
    pub fn for_design(design: &Design) -> Self {
        Self {
            entries: design
                .measurements
                .iter()
                .map(|name| MeasurementEntry {
                    name: name.clone(),
                    value: String::new(),
                })
                .collect(),
        }
    }

    /// Update the value of an existing field. Unknown names are refused so
    /// the key set never drifts from the design.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> bool {
        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(entry) => {
                entry.value = value.into();
                true
            }
            None => false,
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.value.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn entries(&self) -> &[MeasurementEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names whose value is blank after trimming, in form order
    pub fn missing(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter(|e| e.value.trim().is_empty())
            .map(|e| e.name.clone())
            .collect()
    }

    /// True when the keys are exactly the design's measurements, in order
    pub fn matches_design(&self, design: &Design) -> bool {
        self.entries.len() == design.measurements.len()
            && self
                .entries
                .iter()
                .zip(&design.measurements)
                .all(|(entry, name)| &entry.name == name)
    }
}

impl FromIterator<(String, String)> for MeasurementForm {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(name, value)| MeasurementEntry { name, value })
                .collect(),
        }
    }
}

// ============================================================================
// Draft
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    CustomerName,
    Phone,
}

/// First reason a draft cannot be submitted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("Please fill in all required fields.")]
    MissingRequiredField(RequiredField),
    #[error("Please provide all required measurements.")]
    MissingMeasurements { fields: Vec<String> },
    #[error("Measurements do not match the fields required by design {0}.")]
    DesignMismatch(DesignId),
}

/// In-progress booking form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingDraft {
    pub design_id: DesignId,
    pub customer_name: String,
    pub phone: String,
    #[serde(default)]
    pub extra_requirements: String,
    #[serde(default)]
    pub unit: MeasurementUnit,
    pub measurements: MeasurementForm,
}

impl BookingDraft {
    /// Empty draft bound to `design`
    pub fn for_design(design: &Design) -> Self {
        Self {
            design_id: design.id.clone(),
            customer_name: String::new(),
            phone: String::new(),
            extra_requirements: String::new(),
            unit: MeasurementUnit::default(),
            measurements: MeasurementForm::for_design(design),
        }
    }

    /// Bind the draft to `design`. Measurements are re-seeded only when the
    /// design identity changes; customer fields and the unit are kept.
    pub fn rebind(&mut self, design: &Design) {
        if self.design_id != design.id {
            self.design_id = design.id.clone();
            self.measurements = MeasurementForm::for_design(design);
        }
    }

    /// Check the draft in order: customer name, phone, measurements.
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.customer_name.trim().is_empty() {
            return Err(DraftError::MissingRequiredField(RequiredField::CustomerName));
        }
        if self.phone.trim().is_empty() {
            return Err(DraftError::MissingRequiredField(RequiredField::Phone));
        }
        let missing = self.measurements.missing();
        if !missing.is_empty() {
            return Err(DraftError::MissingMeasurements { fields: missing });
        }
        Ok(())
    }

    pub fn is_submittable(&self) -> bool {
        self.validate().is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::EntityMetadata;
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

    fn blouse() -> Design {
        Design {
            id: DesignId::new("RN002"),
            name: "Traditional Saree Blouse".into(),
            category: "Traditional".into(),
            image: "/placeholder.svg".into(),
            measurements: ["Bust", "Waist", "Blouse Length", "Sleeve Length"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            metadata: EntityMetadata::new(),
        }
    }

    fn filled_draft() -> BookingDraft {
        let design = gown();
        let mut draft = BookingDraft::for_design(&design);
        draft.customer_name = "Sarah".into();
        draft.phone = "123".into();
        for name in &design.measurements {
            draft.measurements.set(name, "30");
        }
        draft
    }

    #[test]
    fn test_form_keys_follow_design() {
        let design = gown();
        let form = MeasurementForm::for_design(&design);
        assert_eq!(form.keys().collect::<Vec<_>>(), design.measurements);
        assert!(form.entries().iter().all(|e| e.value.is_empty()));
        assert!(form.matches_design(&design));
    }

    #[test]
    fn test_set_refuses_unknown_field() {
        let mut form = MeasurementForm::for_design(&gown());
        assert!(form.set("Bust", "36"));
        assert!(!form.set("Inseam", "30"));
        assert_eq!(form.get("Bust"), Some("36"));
        assert_eq!(form.get("Inseam"), None);
        assert_eq!(form.len(), 5);
    }

    #[test]
    fn test_rebind_reseeds_only_for_other_design() {
        let mut draft = filled_draft();
        draft.rebind(&gown());
        assert!(draft.is_submittable());

        draft.rebind(&blouse());
        assert_eq!(draft.design_id, DesignId::new("RN002"));
        assert_eq!(draft.customer_name, "Sarah");
        assert_eq!(
            draft.measurements.keys().collect::<Vec<_>>(),
            vec!["Bust", "Waist", "Blouse Length", "Sleeve Length"]
        );
        assert_eq!(draft.measurements.missing().len(), 4);
    }

    #[test]
    fn test_filled_draft_is_submittable() {
        assert_eq!(filled_draft().validate(), Ok(()));
    }

    #[test]
    fn test_validation_order() {
        let mut draft = filled_draft();
        draft.customer_name = "   ".into();
        draft.phone = String::new();
        draft.measurements.set("Hip", "");
        assert_eq!(
            draft.validate(),
            Err(DraftError::MissingRequiredField(RequiredField::CustomerName))
        );

        draft.customer_name = "Sarah".into();
        assert_eq!(
            draft.validate(),
            Err(DraftError::MissingRequiredField(RequiredField::Phone))
        );

        draft.phone = "+1 555".into();
        assert_eq!(
            draft.validate(),
            Err(DraftError::MissingMeasurements {
                fields: vec!["Hip".into()]
            })
        );
    }

    #[test]
    fn test_whitespace_measurement_is_blank() {
        let mut draft = filled_draft();
        draft.measurements.set("Length", " \t ");
        assert!(!draft.is_submittable());
    }

    #[test]
    fn test_any_text_counts_as_measurement() {
        let mut draft = filled_draft();
        draft.measurements.set("Length", "about sixty");
        draft.phone = "call me".into();
        assert!(draft.is_submittable());
    }

    #[test]
    fn test_messages_name_the_category() {
        assert_eq!(
            DraftError::MissingRequiredField(RequiredField::Phone).to_string(),
            "Please fill in all required fields."
        );
        assert_eq!(
            DraftError::MissingMeasurements { fields: vec![] }.to_string(),
            "Please provide all required measurements."
        );
    }

    #[test]
    fn test_draft_json_shape() {
        let draft = filled_draft();
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["design_id"], "RN001");
        assert_eq!(json["unit"], "inches");
        assert_eq!(json["measurements"][0]["name"], "Bust");
    }
}
