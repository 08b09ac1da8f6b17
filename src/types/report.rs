//! Aggregate report types
//!
//! Produced by the analytics component and consumed by the report printers.
//! Groupings keep first-appearance order so output follows the data files.

/// Weight accumulated under one grouping key (a bean type or a status)
#[derive(Debug, Clone, PartialEq)]
pub struct WeightGroup {
    pub name: String,
    pub weight_kg: f64,
}

impl WeightGroup {
    /// Share of `total_kg` held by this group, as a percentage
    ///
    /// Returns 0.0 when `total_kg` is zero.
    pub fn percentage_of(&self, total_kg: f64) -> f64 {
        if total_kg == 0.0 {
            return 0.0;
        }
        self.weight_kg / total_kg * 100.0
    }
}

/// Inventory totals
///
/// Only built for a non-empty inventory; an empty one has no summary at all.
#[derive(Debug, Clone, PartialEq)]
pub struct InventorySummary {
    pub total_batches: usize,
    pub total_weight: f64,
    /// Weight grouped by bean type
    pub bean_types: Vec<WeightGroup>,
    /// Weight grouped by batch status
    pub stages: Vec<WeightGroup>,
}

impl InventorySummary {
    /// Total weight recorded for a bean type
    pub fn bean_type_weight(&self, bean_type: &str) -> Option<f64> {
        find_weight(&self.bean_types, bean_type)
    }

    /// Total weight of batches currently in a status
    pub fn stage_weight(&self, status: &str) -> Option<f64> {
        find_weight(&self.stages, status)
    }
}

fn find_weight(groups: &[WeightGroup], name: &str) -> Option<f64> {
    groups
        .iter()
        .find(|group| group.name == name)
        .map(|group| group.weight_kg)
}

/// Average yield of one process type
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessYield {
    pub process_type: String,
    /// Mean of `weight_after / batch weight * 100`, rounded to 2 decimal places
    pub average_yield_percentage: f64,
    /// Number of records that contributed to the average
    pub count: usize,
}

/// Yield statistics keyed by process type
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProcessingYields {
    groups: Vec<ProcessYield>,
}

impl ProcessingYields {
    pub fn new(groups: Vec<ProcessYield>) -> Self {
        ProcessingYields { groups }
    }

    /// Statistics for a process type, if any of its records resolved
    pub fn get(&self, process_type: &str) -> Option<&ProcessYield> {
        self.groups
            .iter()
            .find(|group| group.process_type == process_type)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProcessYield> {
        self.groups.iter()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
