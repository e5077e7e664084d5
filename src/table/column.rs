use super::{CellValue, TableError};
use std::collections::HashSet;
use std::fmt;

/// Colonne : identifiant unique, libellé, accesseur de valeur.
///
/// Le rendu reste du ressort de l'appelant (`CellValue` implémente `Display`).
pub struct ColumnDescriptor<'a, T> {
    id: String,
    label: String,
    value: Box<dyn Fn(&T) -> CellValue + 'a>,
}

impl<'a, T> ColumnDescriptor<'a, T> {
    pub fn new<I, L, F>(id: I, label: L, value: F) -> Self
    where
        I: Into<String>,
        L: Into<String>,
        F: Fn(&T) -> CellValue + 'a,
    {
        Self {
            id: id.into(),
            label: label.into(),
            value: Box::new(value),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
    pub fn label(&self) -> &str {
        &self.label
    }
    pub fn value(&self, row: &T) -> CellValue {
        (self.value)(row)
    }
}

impl<T> fmt::Debug for ColumnDescriptor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDescriptor")
            .field("id", &self.id)
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// Jeu ordonné de colonnes aux identifiants uniques.
#[derive(Debug)]
pub struct Columns<'a, T> {
    columns: Vec<ColumnDescriptor<'a, T>>,
}

impl<'a, T> Columns<'a, T> {
    /// Échoue avec `DuplicateColumnId` (erreur de configuration).
    pub fn new(columns: Vec<ColumnDescriptor<'a, T>>) -> Result<Self, TableError> {
        let mut seen = HashSet::new();
        for column in &columns {
            if !seen.insert(column.id()) {
                return Err(TableError::DuplicateColumnId(column.id().to_string()));
            }
        }
        Ok(Self { columns })
    }

    pub fn find(&self, id: &str) -> Option<&ColumnDescriptor<'a, T>> {
        self.columns.iter().find(|c| c.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ColumnDescriptor<'a, T>> {
        self.columns.iter()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.columns.iter().map(ColumnDescriptor::label).collect()
    }

    /// Valeurs d'une ligne, dans l'ordre des colonnes.
    pub fn row_values(&self, row: &T) -> Vec<CellValue> {
        self.columns.iter().map(|c| c.value(row)).collect()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
