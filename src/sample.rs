//! Effectif d'exemple : trois types de shift, six employés, quatre sites.

use crate::model::{Factory, Roster, ShiftType, ShiftTypeId, TaskId, TaskRecord, Worker, WorkerId};
use crate::time::TimeOfDay;

const SHIFT_TYPES: [(u32, &str, (u32, u32, u32), (u32, u32, u32)); 3] = [
    (1, "FullTime", (9, 0, 0), (17, 0, 0)),
    (2, "MidTime", (12, 0, 0), (21, 0, 0)),
    (3, "HalfTime", (20, 0, 0), (0, 0, 0)),
];

const WORKERS: [(u32, &str, u32); 6] = [
    (1, "Alice", 2),
    (2, "Bob", 3),
    (3, "John", 2),
    (4, "Karen", 1),
    (5, "Miles", 3),
    (6, "Henry", 1),
];

const TASKS: [(u32, &str, u32); 10] = [
    (1, "Inventory count", 90),
    (2, "Restock shelves", 45),
    (3, "Clean loading dock", 30),
    (4, "Forklift inspection", 20),
    (5, "Order packaging", 120),
    (6, "Safety briefing", 15),
    (7, "Quality sampling", 60),
    (8, "Label printing", 25),
    (9, "Pallet wrapping", 40),
    (10, "Night shift handover", 10),
];

const FACTORIES: [(&str, &[&str]); 4] = [
    ("BR1", &["John", "Alice", "Bob", "Jessie", "Karen"]),
    ("BR2", &["Jessie", "Karen", "John"]),
    ("BR3", &["Miles", "Eric", "Henry", "Bob"]),
    ("BR4", &[]),
];

/// Construit l'effectif d'exemple (tâches non assignées).
pub fn sample_roster() -> Roster {
    let shift_types = SHIFT_TYPES
        .iter()
        .map(|&(id, name, start, end)| {
            ShiftType::new(ShiftTypeId::new(id), name, clock(start), clock(end))
        })
        .collect();
    let workers = WORKERS
        .iter()
        .map(|&(id, name, ty)| Worker::new(WorkerId::new(id), name, ShiftTypeId::new(ty)))
        .collect();
    let tasks = TASKS
        .iter()
        .map(|&(id, title, minutes)| TaskRecord::new(TaskId::new(id), title, minutes))
        .collect();
    let factories = FACTORIES
        .iter()
        .map(|&(name, employees)| Factory {
            name: name.to_string(),
            employees: employees.iter().map(|e| e.to_string()).collect(),
        })
        .collect();

    Roster {
        shift_types,
        workers,
        tasks,
        factories,
    }
}

fn clock((h, m, s): (u32, u32, u32)) -> TimeOfDay {
    TimeOfDay::from_seconds(h * 3600 + m * 60 + s).unwrap_or(TimeOfDay::MIDNIGHT)
}
