use crate::time::TimeOfDay;
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::fmt;

macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            pub fn new(raw: u32) -> Self {
                Self(raw)
            }
            pub fn get(self) -> u32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

numeric_id!(
    /// Identifiant fort pour ShiftType
    ShiftTypeId
);
numeric_id!(
    /// Identifiant fort pour Worker
    WorkerId
);
numeric_id!(
    /// Identifiant fort pour TaskRecord
    TaskId
);

/// Type de shift : fenêtre horaire partagée par plusieurs employés.
///
/// `end_of_day <= start_of_day` signifie un shift de nuit (passage de minuit) ;
/// l'égalité vaut un shift de 24 h.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftType {
    pub id: ShiftTypeId,
    pub name: String,
    pub start_of_day: TimeOfDay,
    pub end_of_day: TimeOfDay,
}

impl ShiftType {
    pub fn new<N: Into<String>>(
        id: ShiftTypeId,
        name: N,
        start_of_day: TimeOfDay,
        end_of_day: TimeOfDay,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            start_of_day,
            end_of_day,
        }
    }

    pub fn is_overnight(&self) -> bool {
        self.end_of_day <= self.start_of_day
    }
}

/// Employé
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worker {
    pub id: WorkerId,
    pub name: String,
    pub shift_type_id: ShiftTypeId,
}

impl Worker {
    pub fn new<N: Into<String>>(id: WorkerId, name: N, shift_type_id: ShiftTypeId) -> Self {
        Self {
            id,
            name: name.into(),
            shift_type_id,
        }
    }
}

/// Tâche ; `assignee_id` absent ou non résolu = tâche non assignée.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: TaskId,
    pub title: String,
    pub duration_minutes: u32,
    #[serde(default)]
    pub assignee_id: Option<WorkerId>,
}

impl TaskRecord {
    pub fn new<T: Into<String>>(id: TaskId, title: T, duration_minutes: u32) -> Self {
        Self {
            id,
            title: title.into(),
            duration_minutes,
            assignee_id: None,
        }
    }
}

/// Site (branche) et la liste des noms d'employés qui y travaillent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Factory {
    pub name: String,
    #[serde(default)]
    pub employees: Vec<String>,
}

/// Effectif complet : configuration de référence, possédée par l'appelant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Roster {
    #[serde(default)]
    pub shift_types: Vec<ShiftType>,
    #[serde(default)]
    pub workers: Vec<Worker>,
    #[serde(default)]
    pub tasks: Vec<TaskRecord>,
    #[serde(default)]
    pub factories: Vec<Factory>,
}

impl Roster {
    pub fn find_shift_type<'a>(&'a self, id: ShiftTypeId) -> Option<&'a ShiftType> {
        self.shift_types.iter().find(|t| t.id == id)
    }
    pub fn find_worker<'a>(&'a self, id: WorkerId) -> Option<&'a Worker> {
        self.workers.iter().find(|w| w.id == id)
    }
    pub fn shift_type_of<'a>(&'a self, worker: &Worker) -> Option<&'a ShiftType> {
        self.find_shift_type(worker.shift_type_id)
    }

    /// Noms d'employés de tous les sites, dédoublonnés et triés.
    pub fn ordered_employee_names(&self) -> Vec<&str> {
        self.factories
            .iter()
            .flat_map(|f| f.employees.iter().map(String::as_str))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Vérifie l'intégrité de la configuration.
    ///
    /// Les références de shift non résolues ne sont qu'un avertissement :
    /// le calcul de couverture les isole enregistrement par enregistrement.
    pub fn validate(&self) -> Result<()> {
        ensure_unique("shift type", self.shift_types.iter().map(|t| t.id))?;
        ensure_unique("worker", self.workers.iter().map(|w| w.id))?;
        ensure_unique("task", self.tasks.iter().map(|t| t.id))?;

        for shift_type in &self.shift_types {
            if shift_type.name.trim().is_empty() {
                bail!("shift type {} has an empty name", shift_type.id);
            }
        }
        for worker in &self.workers {
            if worker.name.trim().is_empty() {
                bail!("worker {} has an empty name", worker.id);
            }
            if self.shift_type_of(worker).is_none() {
                tracing::warn!(
                    worker = %worker.id,
                    shift_type = %worker.shift_type_id,
                    "worker references an unknown shift type"
                );
            }
        }
        Ok(())
    }
}

fn ensure_unique<I, K>(what: &str, ids: I) -> Result<()>
where
    I: IntoIterator<Item = K>,
    K: fmt::Display,
{
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id.to_string()) {
            bail!("duplicate {what} id: {id}");
        }
    }
    Ok(())
}
