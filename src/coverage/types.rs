use crate::model::{ShiftTypeId, Worker, WorkerId};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoverageError {
    #[error("worker {worker} references unknown shift type {shift_type}")]
    UnknownShiftType {
        worker: WorkerId,
        shift_type: ShiftTypeId,
    },
    #[error("duplicate shift type id: {0}")]
    DuplicateShiftType(ShiftTypeId),
}

/// Résultat d'un comptage : les employés dont le shift est inconnu
/// sont exclus du compte et listés dans `skipped`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CoverageCount {
    pub count: usize,
    pub skipped: Vec<WorkerId>,
}

/// Employés couverts, dans l'ordre d'entrée.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageReport<'w> {
    pub covered: Vec<&'w Worker>,
    pub skipped: Vec<WorkerId>,
}

impl<'w> CoverageReport<'w> {
    pub fn count(&self) -> usize {
        self.covered.len()
    }

    pub fn is_partial(&self) -> bool {
        !self.skipped.is_empty()
    }
}

impl From<CoverageReport<'_>> for CoverageCount {
    fn from(report: CoverageReport<'_>) -> Self {
        Self {
            count: report.covered.len(),
            skipped: report.skipped,
        }
    }
}
