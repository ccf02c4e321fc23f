use super::model;
use contracts::domain::a001_design::aggregate::DesignDto;
use leptos::prelude::*;

fn blank_form() -> DesignDto {
    DesignDto {
        measurements: vec![String::new()],
        ..Default::default()
    }
}

/// Drop row `idx` unless it is the last one left
fn remove_row(rows: &mut Vec<String>, idx: usize) -> bool {
    if rows.len() <= 1 || idx >= rows.len() {
        return false;
    }
    rows.remove(idx);
    true
}

/// ViewModel for the design upload form
#[derive(Clone, Copy)]
pub struct DesignUploadViewModel {
    pub form: RwSignal<DesignDto>,
    pub error: RwSignal<Option<String>>,
    pub notice: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl DesignUploadViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(blank_form()),
            error: RwSignal::new(None),
            notice: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn add_measurement(&self) {
        self.form.update(|f| f.measurements.push(String::new()));
    }

    pub fn remove_measurement(&self, idx: usize) {
        self.form.update(|f| {
            remove_row(&mut f.measurements, idx);
        });
    }

    pub fn set_measurement(&self, idx: usize, value: String) {
        self.form.update(|f| {
            if let Some(row) = f.measurements.get_mut(idx) {
                *row = value;
            }
        });
    }

    pub fn can_remove(&self) -> bool {
        self.form.with(|f| f.measurements.len() > 1)
    }

    /// Validate locally, then upload
    pub fn save_command(&self) {
        if self.saving.get_untracked() {
            return;
        }
        let current = self.form.get_untracked();
        if let Err(e) = current.clone().normalize_and_validate() {
            self.error.set(Some(e.to_string()));
            return;
        }

        self.error.set(None);
        self.notice.set(None);
        self.saving.set(true);

        let this = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match model::create_design(&current).await {
                Ok(design) => {
                    log::info!("Design {} uploaded", design.id);
                    this.notice.set(Some(format!(
                        "Design \"{}\" uploaded as {}.",
                        design.name, design.id
                    )));
                    this.form.set(blank_form());
                }
                Err(e) => this.error.set(Some(e)),
            }
            this.saving.set(false);
        });
    }
}

impl Default for DesignUploadViewModel {
    fn default() -> Self {
        Self::new()
    }
}
