use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

use crate::domain::common::{AggregateId, AggregateRoot, EntityMetadata};

/// Image shown for designs uploaded without one
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

// ============================================================================
// ID Type
// ============================================================================

/// Design reference code, e.g. "RN001"
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DesignId(pub String);

impl DesignId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AggregateId for DesignId {
    fn from_string(s: &str) -> Result<Self, String> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("Design id cannot be empty".into());
        }
        Ok(DesignId(trimmed.to_string()))
    }
}

impl std::fmt::Display for DesignId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Garment template in the catalog, with the measurements it requires
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Design {
    pub id: DesignId,
    pub name: String,
    pub category: String,
    pub image: String,
    /// Required measurement field names, in display order
    pub measurements: Vec<String>,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Design {
    /// Build a design from an already validated authoring form
    pub fn new_for_insert(id: DesignId, dto: ValidDesignDto) -> Self {
        let ValidDesignDto(dto) = dto;
        Self {
            id,
            name: dto.name,
            category: dto.category,
            image: dto.image.unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
            measurements: dto.measurements,
            metadata: EntityMetadata::new(),
        }
    }

    /// Case-insensitive substring match on name or reference id.
    /// The empty query matches every design.
    pub fn matches_query(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&needle)
            || self.id.as_str().to_lowercase().contains(&needle)
    }
}

/// Filter the catalog by `query`, keeping catalog order.
pub fn search_designs(catalog: &[Design], query: &str) -> Vec<Design> {
    catalog
        .iter()
        .filter(|design| design.matches_query(query))
        .cloned()
        .collect()
}

impl AggregateRoot for Design {
    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "design"
    }

    fn id_prefix() -> &'static str {
        "RN"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Admin input for uploading a new design
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DesignDto {
    pub name: String,
    pub category: String,
    pub measurements: Vec<String>,
    /// Image reference (URL or path); storage of the file itself happens elsewhere
    pub image: Option<String>,
}

/// A `DesignDto` that passed `normalize_and_validate`
#[derive(Debug, Clone, PartialEq)]
pub struct ValidDesignDto(DesignDto);

impl ValidDesignDto {
    pub fn get(&self) -> &DesignDto {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DesignError {
    #[error("Design name is required")]
    MissingName,
    #[error("Category is required")]
    MissingCategory,
    #[error("At least one measurement is required")]
    NoMeasurements,
    #[error("Measurement #{0} has no name")]
    BlankMeasurement(usize),
    #[error("Measurement '{0}' is listed more than once")]
    DuplicateMeasurement(String),
}

impl DesignDto {
    /// Trim every field and check the authoring rules.
    pub fn normalize_and_validate(self) -> Result<ValidDesignDto, DesignError> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(DesignError::MissingName);
        }
        let category = self.category.trim().to_string();
        if category.is_empty() {
            return Err(DesignError::MissingCategory);
        }
        if self.measurements.is_empty() {
            return Err(DesignError::NoMeasurements);
        }

        let mut seen = HashSet::new();
        let mut measurements = Vec::with_capacity(self.measurements.len());
        for (idx, raw) in self.measurements.iter().enumerate() {
            let field = raw.trim();
            if field.is_empty() {
                return Err(DesignError::BlankMeasurement(idx + 1));
            }
            if !seen.insert(field.to_lowercase()) {
                return Err(DesignError::DuplicateMeasurement(field.to_string()));
            }
            measurements.push(field.to_string());
        }

        let image = self
            .image
            .map(|i| i.trim().to_string())
            .filter(|i| !i.is_empty());

        Ok(ValidDesignDto(DesignDto {
            name,
            category,
            measurements,
            image,
        }))
    }
}
