mod types;
mod window;

pub use types::{CoverageCount, CoverageError, CoverageReport};

use crate::model::{Roster, ShiftType, ShiftTypeId, Worker};
use crate::time::TimeOfDay;
use std::collections::HashMap;

/// Moteur de couverture : qui est en poste à un instant donné.
///
/// Construit une fois à partir des types de shift (configuration explicite),
/// puis interrogé sans état.
#[derive(Debug, Clone, Default)]
pub struct ShiftCoverageEngine {
    shift_types: HashMap<ShiftTypeId, ShiftType>,
}

impl ShiftCoverageEngine {
    /// Échoue si deux types de shift partagent le même id.
    pub fn new<I>(shift_types: I) -> Result<Self, CoverageError>
    where
        I: IntoIterator<Item = ShiftType>,
    {
        let mut index = HashMap::new();
        for shift_type in shift_types {
            let id = shift_type.id;
            if index.insert(id, shift_type).is_some() {
                return Err(CoverageError::DuplicateShiftType(id));
            }
        }
        Ok(Self { shift_types: index })
    }

    pub fn from_roster(roster: &Roster) -> Result<Self, CoverageError> {
        Self::new(roster.shift_types.iter().cloned())
    }

    pub fn shift_type(&self, id: ShiftTypeId) -> Option<&ShiftType> {
        self.shift_types.get(&id)
    }

    fn resolve(&self, worker: &Worker) -> Result<&ShiftType, CoverageError> {
        self.shift_type(worker.shift_type_id)
            .ok_or(CoverageError::UnknownShiftType {
                worker: worker.id,
                shift_type: worker.shift_type_id,
            })
    }

    /// `UnknownShiftType` si le shift de l'employé n'est pas défini.
    pub fn is_covered(&self, worker: &Worker, instant: TimeOfDay) -> Result<bool, CoverageError> {
        Ok(self.resolve(worker)?.covers(instant))
    }

    /// Sous-ensemble des employés en poste, ordre d'entrée conservé.
    ///
    /// N'échoue jamais : un employé au shift inconnu est écarté et signalé
    /// dans `skipped`.
    pub fn list_covered<'w>(&self, workers: &'w [Worker], instant: TimeOfDay) -> CoverageReport<'w> {
        let mut covered = Vec::new();
        let mut skipped = Vec::new();

        for worker in workers {
            match self.is_covered(worker, instant) {
                Ok(true) => covered.push(worker),
                Ok(false) => {}
                Err(err) => {
                    tracing::warn!(worker = %worker.id, %instant, "skipping worker: {err}");
                    skipped.push(worker.id);
                }
            }
        }

        tracing::debug!(
            %instant,
            covered = covered.len(),
            skipped = skipped.len(),
            "coverage evaluated"
        );
        CoverageReport { covered, skipped }
    }

    pub fn count_covered(&self, workers: &[Worker], instant: TimeOfDay) -> CoverageCount {
        self.list_covered(workers, instant).into()
    }
}

/// Variante sans moteur : résout le shift dans une simple liste.
pub fn is_covered(
    worker: &Worker,
    shift_types: &[ShiftType],
    instant: TimeOfDay,
) -> Result<bool, CoverageError> {
    shift_types
        .iter()
        .find(|t| t.id == worker.shift_type_id)
        .map(|t| t.covers(instant))
        .ok_or(CoverageError::UnknownShiftType {
            worker: worker.id,
            shift_type: worker.shift_type_id,
        })
}
