//! Colonnes des deux tables de l'effectif : employés et tâches.

use crate::model::{Roster, TaskRecord, Worker, WorkerId};
use crate::table::{CellValue, ColumnDescriptor, Columns, PageState, SortState, TableError};

pub const UNASSIGNED: &str = "Unassigned";

/// Tri initial de la table des employés.
pub fn employee_initial_sort() -> SortState {
    SortState::asc("name")
}

/// Tri initial de la table des tâches (non paginée).
pub fn task_initial_sort() -> SortState {
    SortState::asc("title")
}

pub fn employee_initial_page() -> Option<PageState> {
    Some(PageState::default())
}

pub fn employee_columns(roster: &Roster) -> Result<Columns<'_, Worker>, TableError> {
    Columns::new(vec![
        ColumnDescriptor::new("name", "Name", |w: &Worker| CellValue::from(w.name.as_str())),
        ColumnDescriptor::new("type", "Work Type", move |w: &Worker| {
            CellValue::from(roster.shift_type_of(w).map(|t| t.name.as_str()))
        }),
        ColumnDescriptor::new("start_time", "Start time", move |w: &Worker| {
            CellValue::from(roster.shift_type_of(w).map(|t| t.start_of_day))
        }),
        ColumnDescriptor::new("end_time", "End time", move |w: &Worker| {
            CellValue::from(roster.shift_type_of(w).map(|t| t.end_of_day))
        }),
    ])
}

pub fn task_columns(roster: &Roster) -> Result<Columns<'_, TaskRecord>, TableError> {
    Columns::new(vec![
        ColumnDescriptor::new("title", "Title", |t: &TaskRecord| {
            CellValue::from(t.title.as_str())
        }),
        ColumnDescriptor::new("duration", "Duration", |t: &TaskRecord| {
            CellValue::from(t.duration_minutes)
        }),
        ColumnDescriptor::new("assignee", "Assign", move |t: &TaskRecord| {
            CellValue::from(assignee_name(roster, t))
        }),
    ])
}

/// Nom de l'assigné, ou `"Unassigned"` si absent ou introuvable.
pub fn assignee_name<'a>(roster: &'a Roster, task: &TaskRecord) -> &'a str {
    task.assignee_id
        .and_then(|id| roster.find_worker(id))
        .map_or(UNASSIGNED, |w| w.name.as_str())
}

/// Tâches assignées à un employé, ordre d'entrée conservé.
pub fn tasks_for_worker(tasks: &[TaskRecord], worker: WorkerId) -> Vec<&TaskRecord> {
    tasks
        .iter()
        .filter(|t| t.assignee_id == Some(worker))
        .collect()
}
