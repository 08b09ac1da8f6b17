//! Batch-related types for the coffee plant tracker
//!
//! This module defines the Batch record as stored in the inventory file and
//! the BatchDraft used to validate new batches before they are written.

use super::error::PlantError;
use serde::{Deserialize, Serialize};

/// Batch identifier
///
/// Free-form text, unique across the inventory.
pub type BatchId = String;

/// Status a batch gets when the caller does not choose one
pub const DEFAULT_STATUS: &str = "received";

/// A tracked quantity of coffee beans from a single receiving event
///
/// Field order matches the inventory line layout:
/// `batch_id,date,farmer_id,bean_type,weight_kg,status`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Batch {
    /// Unique batch identifier
    pub batch_id: BatchId,

    /// Creation date as entered (conventionally `YYYY-MM-DD`)
    pub date: String,

    /// Supplying farmer
    pub farmer_id: String,

    /// Bean variety, e.g. Arabica or Robusta
    pub bean_type: String,

    /// Current weight in kilograms
    ///
    /// Set when the batch is received. Processing stages do not change it.
    pub weight_kg: f64,

    /// Current processing status
    ///
    /// An open set: received, washing, drying, roasting or any other text.
    /// No transition graph is enforced.
    pub status: String,
}

/// Unvalidated input for a new batch
///
/// Every attribute is optional so that an incomplete submission can be
/// detected and rejected before anything touches storage.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchDraft {
    pub batch_id: Option<String>,
    pub date: Option<String>,
    pub farmer_id: Option<String>,
    pub bean_type: Option<String>,
    pub weight_kg: Option<f64>,
    pub status: Option<String>,
}

impl BatchDraft {
    /// Create a fully populated draft
    pub fn new(
        batch_id: &str,
        date: &str,
        farmer_id: &str,
        bean_type: &str,
        weight_kg: f64,
        status: &str,
    ) -> Self {
        BatchDraft {
            batch_id: Some(batch_id.to_string()),
            date: Some(date.to_string()),
            farmer_id: Some(farmer_id.to_string()),
            bean_type: Some(bean_type.to_string()),
            weight_kg: Some(weight_kg),
            status: Some(status.to_string()),
        }
    }

    /// Validate the draft and turn it into a Batch
    ///
    /// Attributes are checked in line order and the first problem is reported.
    ///
    /// # Errors
    ///
    /// - `MissingField` if an attribute is absent or blank
    /// - `InvalidField` if a text attribute contains the delimiter or a line break
    ///
    /// Weight sign and status values are not checked.
    pub fn validate(self) -> Result<Batch, PlantError> {
        Ok(Batch {
            batch_id: required_text("batch_id", self.batch_id)?,
            date: required_text("date", self.date)?,
            farmer_id: required_text("farmer_id", self.farmer_id)?,
            bean_type: required_text("bean_type", self.bean_type)?,
            weight_kg: self
                .weight_kg
                .ok_or_else(|| PlantError::missing_field("weight_kg"))?,
            status: required_text("status", self.status)?,
        })
    }
}

impl From<&Batch> for BatchDraft {
    fn from(batch: &Batch) -> Self {
        BatchDraft::new(
            &batch.batch_id,
            &batch.date,
            &batch.farmer_id,
            &batch.bean_type,
            batch.weight_kg,
            &batch.status,
        )
    }
}

/// Check a required text attribute
///
/// The value is trimmed. Blank counts as absent.
pub(crate) fn required_text(field: &str, value: Option<String>) -> Result<String, PlantError> {
    let value = value.ok_or_else(|| PlantError::missing_field(field))?;
    let value = value.trim();
    if value.is_empty() {
        return Err(PlantError::missing_field(field));
    }
    storable_text(field, value)?;
    Ok(value.to_string())
}

/// Reject text the line format cannot round-trip
pub(crate) fn storable_text(field: &str, value: &str) -> Result<(), PlantError> {
    if value.contains(',') {
        return Err(PlantError::invalid_field(field, value, "contains ','"));
    }
    if value.contains(['\n', '\r']) {
        return Err(PlantError::invalid_field(
            field,
            value,
            "contains a line break",
        ));
    }
    Ok(())
}
