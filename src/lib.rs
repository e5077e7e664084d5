#![forbid(unsafe_code)]
//! Effectifs — consultation d'un effectif statique (sans BD).
//!
//! - Couverture des shifts à un instant donné, passage de minuit compris.
//! - Projection de tables : tri stable, pagination, bascule du tri.
//! - Heure au format `HH:MM:SS`, sans date ni fuseau ; affichage hors de la lib.

pub mod assignment;
pub mod coverage;
pub mod io;
pub mod model;
pub mod sample;
pub mod table;
pub mod time;
pub mod views;

pub use assignment::assign_tasks;
pub use coverage::{CoverageCount, CoverageError, CoverageReport, ShiftCoverageEngine};
pub use model::{Factory, Roster, ShiftType, ShiftTypeId, TaskId, TaskRecord, Worker, WorkerId};
pub use sample::sample_roster;
pub use table::{
    next_sort_state, paginate, project, sort, CellValue, ColumnDescriptor, Columns, Page,
    PageState, Projection, SortDirection, SortState, TableError,
};
pub use time::{TimeError, TimeOfDay};
pub use views::{assignee_name, employee_columns, task_columns, tasks_for_worker};
