//! Processing-stage types for the coffee plant tracker
//!
//! This module defines the ProcessingRecord written to the processing file,
//! the StageDraft used to validate it, and the StageOutcome returned once a
//! stage has been recorded.

use super::batch::{required_text, Batch, BatchId};
use super::error::PlantError;
use serde::{Deserialize, Serialize};

/// One completed processing stage for a batch
///
/// Field order matches the processing line layout:
/// `batch_id,process_type,start_date,end_date,weight_after`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessingRecord {
    /// The batch this stage was applied to
    ///
    /// Not required to exist in the inventory.
    pub batch_id: BatchId,

    /// washing, drying, roasting or any other text
    pub process_type: String,

    pub start_date: String,

    pub end_date: String,

    /// Weight in kilograms once the stage finished
    pub weight_after: f64,
}

/// Unvalidated input for a processing stage
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StageDraft {
    pub batch_id: Option<String>,
    pub process_type: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub weight_after: Option<f64>,
}

impl StageDraft {
    /// Create a fully populated draft
    pub fn new(
        batch_id: &str,
        process_type: &str,
        start_date: &str,
        end_date: &str,
        weight_after: f64,
    ) -> Self {
        StageDraft {
            batch_id: Some(batch_id.to_string()),
            process_type: Some(process_type.to_string()),
            start_date: Some(start_date.to_string()),
            end_date: Some(end_date.to_string()),
            weight_after: Some(weight_after),
        }
    }

    /// Validate the draft and turn it into a ProcessingRecord
    ///
    /// Same rules as `BatchDraft::validate`: the first absent or unstorable
    /// attribute, in line order, is reported.
    pub fn validate(self) -> Result<ProcessingRecord, PlantError> {
        Ok(ProcessingRecord {
            batch_id: required_text("batch_id", self.batch_id)?,
            process_type: required_text("process_type", self.process_type)?,
            start_date: required_text("start_date", self.start_date)?,
            end_date: required_text("end_date", self.end_date)?,
            weight_after: self
                .weight_after
                .ok_or_else(|| PlantError::missing_field("weight_after"))?,
        })
    }
}

/// Result of recording a processing stage
///
/// The processing record is appended before the batch status is updated and
/// is never rolled back, so a failed status update still leaves a recorded stage.
#[derive(Debug, Clone, PartialEq)]
pub struct StageOutcome {
    /// The record that was appended
    pub record: ProcessingRecord,

    /// The batch after its status changed, or why the change failed
    pub status_update: Result<Batch, PlantError>,
}

impl StageOutcome {
    /// Whether the batch status now equals the stage's process type
    pub fn status_updated(&self) -> bool {
        self.status_update.is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn complete_draft() -> StageDraft {
        StageDraft::new("B100", "washing", "2023-05-26", "2023-05-27", 98.0)
    }

    #[test]
    fn test_validate_complete_draft() {
        let record = complete_draft().validate().unwrap();

        assert_eq!(
            record,
            ProcessingRecord {
                batch_id: "B100".to_string(),
                process_type: "washing".to_string(),
                start_date: "2023-05-26".to_string(),
                end_date: "2023-05-27".to_string(),
                weight_after: 98.0,
            }
        );
    }

    #[rstest]
    #[case::batch_id(StageDraft { batch_id: None, ..complete_draft() }, "batch_id")]
    #[case::process_type(StageDraft { process_type: None, ..complete_draft() }, "process_type")]
    #[case::start_date(StageDraft { start_date: None, ..complete_draft() }, "start_date")]
    #[case::end_date(StageDraft { end_date: None, ..complete_draft() }, "end_date")]
    #[case::weight_after(StageDraft { weight_after: None, ..complete_draft() }, "weight_after")]
    #[case::only_batch_id(
        StageDraft { batch_id: Some("B001".to_string()), ..StageDraft::default() },
        "process_type"
    )]
    fn test_validate_missing_field(#[case] draft: StageDraft, #[case] field: &str) {
        assert_eq!(draft.validate(), Err(PlantError::missing_field(field)));
    }

    #[test]
    fn test_validate_rejects_delimiter_in_process_type() {
        let draft = StageDraft {
            process_type: Some("washing,drying".to_string()),
            ..complete_draft()
        };

        assert!(matches!(
            draft.validate(),
            Err(PlantError::InvalidField { .. })
        ));
    }

    #[test]
    fn test_status_updated_reflects_outcome() {
        let record = complete_draft().validate().unwrap();
        let outcome = StageOutcome {
            record,
            status_update: Err(PlantError::batch_not_found("B100")),
        };

        assert!(!outcome.status_updated());
    }
}
