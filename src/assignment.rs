use crate::model::{TaskRecord, Worker};
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Attribue à chaque tâche un employé tiré au hasard, de façon reproductible.
///
/// Même graine et mêmes entrées = même résultat. Sans employé, les tâches
/// restent non assignées. Les tâches d'entrée ne sont pas modifiées.
pub fn assign_tasks(tasks: &[TaskRecord], workers: &[Worker], seed: u64) -> Vec<TaskRecord> {
    let mut rng = StdRng::seed_from_u64(seed);
    tasks
        .iter()
        .map(|task| TaskRecord {
            assignee_id: workers.choose(&mut rng).map(|w| w.id),
            ..task.clone()
        })
        .collect()
}
