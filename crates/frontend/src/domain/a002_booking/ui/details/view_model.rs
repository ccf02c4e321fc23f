use super::model;
use contracts::domain::a001_design::aggregate::Design;
use contracts::domain::a002_booking::aggregate::Booking;
use contracts::domain::a002_booking::draft::BookingDraft;
use contracts::enums::MeasurementUnit;
use leptos::prelude::*;

/// Where the design lookup stands
#[derive(Clone, Debug, PartialEq)]
pub enum DesignState {
    Loading,
    NotFound,
    Failed(String),
    Ready(Design),
}

/// Draft for `design`, keeping what was typed when the same design is shown again
fn bind_draft(current: Option<BookingDraft>, design: &Design) -> BookingDraft {
    match current {
        Some(mut draft) => {
            draft.rebind(design);
            draft
        }
        None => BookingDraft::for_design(design),
    }
}

/// ViewModel for the booking form
#[derive(Clone, Copy)]
pub struct BookDesignViewModel {
    pub design: RwSignal<DesignState>,
    pub draft: RwSignal<Option<BookingDraft>>,
    pub error: RwSignal<Option<String>>,
    pub submitting: RwSignal<bool>,
    pub submitted: RwSignal<Option<Booking>>,
}

impl BookDesignViewModel {
    pub fn new() -> Self {
        Self {
            design: RwSignal::new(DesignState::Loading),
            draft: RwSignal::new(None),
            error: RwSignal::new(None),
            submitting: RwSignal::new(false),
            submitted: RwSignal::new(None),
        }
    }

    pub fn load(&self, design_id: String) {
        let this = *self;
        this.design.set(DesignState::Loading);
        wasm_bindgen_futures::spawn_local(async move {
            match model::fetch_design(&design_id).await {
                Ok(Some(design)) => {
                    this.draft.update(|d| *d = Some(bind_draft(d.take(), &design)));
                    this.design.set(DesignState::Ready(design));
                }
                Ok(None) => this.design.set(DesignState::NotFound),
                Err(e) => this.design.set(DesignState::Failed(e)),
            }
        });
    }

    pub fn update_draft(&self, f: impl FnOnce(&mut BookingDraft)) {
        self.draft.update(|d| {
            if let Some(draft) = d.as_mut() {
                f(draft);
            }
        });
    }

    pub fn set_unit(&self, code: &str) {
        if let Some(unit) = MeasurementUnit::from_code(code) {
            self.update_draft(|d| d.unit = unit);
        }
    }

    pub fn set_measurement(&self, name: &str, value: String) {
        self.update_draft(|d| {
            d.measurements.set(name, value);
        });
    }

    pub fn unit(&self) -> MeasurementUnit {
        self.draft
            .with(|d| d.as_ref().map(|d| d.unit))
            .unwrap_or_default()
    }

    /// Validate, then submit once; ignored while a submission is in flight
    pub fn submit_command(&self) {
        if self.submitting.get_untracked() {
            return;
        }
        let Some(draft) = self.draft.get_untracked() else {
            return;
        };
        if let Err(e) = draft.validate() {
            self.error.set(Some(e.to_string()));
            return;
        }

        self.error.set(None);
        self.submitting.set(true);

        let this = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match model::submit_booking(&draft).await {
                Ok(booking) => {
                    log::info!("Booking {} submitted", booking.id);
                    this.submitted.set(Some(booking));
                    this.draft.set(None);
                }
                Err(e) => this.error.set(Some(e)),
            }
            this.submitting.set(false);
        });
    }
}

impl Default for BookDesignViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_design::aggregate::DesignId;
    use contracts::domain::common::EntityMetadata;

    fn design(id: &str, measurements: &[&str]) -> Design {
        Design {
            id: DesignId::new(id),
            name: "Test".into(),
            category: "Test".into(),
            image: "/placeholder.svg".into(),
            measurements: measurements.iter().map(|m| m.to_string()).collect(),
            metadata: EntityMetadata::new(),
        }
    }

    #[test]
    fn test_same_design_keeps_typed_values() {
        let gown = design("RN001", &["Bust", "Waist"]);
        let mut draft = bind_draft(None, &gown);
        draft.customer_name = "Sarah".into();
        draft.measurements.set("Bust", "36");

        let again = bind_draft(Some(draft), &gown);
        assert_eq!(again.measurements.get("Bust"), Some("36"));
        assert_eq!(again.customer_name, "Sarah");
    }

    #[test]
    fn test_other_design_reseeds_measurements() {
        let gown = design("RN001", &["Bust", "Waist"]);
        let suit = design("RN003", &["Chest"]);
        let mut draft = bind_draft(None, &gown);
        draft.customer_name = "Sarah".into();
        draft.measurements.set("Bust", "36");

        let rebound = bind_draft(Some(draft), &suit);
        assert_eq!(rebound.measurements.keys().collect::<Vec<_>>(), vec!["Chest"]);
        assert_eq!(rebound.measurements.get("Chest"), Some(""));
        assert_eq!(rebound.customer_name, "Sarah");
    }
}
