use std::cmp::Ordering;
use thiserror::Error;

/// Tailles de page proposées par le widget de pagination.
pub const PAGE_SIZE_OPTIONS: [usize; 3] = [5, 10, 25];
pub const DEFAULT_PAGE_SIZE: usize = 5;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("duplicate column id: {0}")]
    DuplicateColumnId(String),
    #[error("page size must be > 0")]
    InvalidPageSize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub(super) fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// Colonne de tri courante (aucune = ordre d'entrée).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortState {
    pub column_id: Option<String>,
    pub direction: SortDirection,
}

impl SortState {
    pub fn none() -> Self {
        Self::default()
    }
    pub fn asc<S: Into<String>>(column_id: S) -> Self {
        Self {
            column_id: Some(column_id.into()),
            direction: SortDirection::Asc,
        }
    }
    pub fn desc<S: Into<String>>(column_id: S) -> Self {
        Self {
            column_id: Some(column_id.into()),
            direction: SortDirection::Desc,
        }
    }
}

/// Page courante ; `page_size` toujours > 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    page_index: usize,
    page_size: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageState {
    pub fn new(page_index: usize, page_size: usize) -> Result<Self, TableError> {
        if page_size == 0 {
            return Err(TableError::InvalidPageSize);
        }
        Ok(Self {
            page_index,
            page_size,
        })
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn offset(&self) -> usize {
        self.page_index.saturating_mul(self.page_size)
    }

    pub fn with_page(self, page_index: usize) -> Self {
        Self { page_index, ..self }
    }

    /// Changer la taille de page ramène à la première page.
    pub fn with_page_size(self, page_size: usize) -> Result<Self, TableError> {
        Self::new(0, page_size)
    }

    pub fn page_count(&self, total_count: usize) -> usize {
        total_count.div_ceil(self.page_size)
    }

    /// Ramène l'index dans `[0, page_count)` (0 si aucune donnée).
    pub fn clamped(self, total_count: usize) -> Self {
        let last = self.page_count(total_count).saturating_sub(1);
        self.with_page(self.page_index.min(last))
    }
}

/// Tranche paginée et nombre total d'enregistrements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<R> {
    pub rows: Vec<R>,
    pub total_count: usize,
}

/// Vue projetée : lignes visibles, total, tri réellement appliqué.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projection<'r, T> {
    pub rows: Vec<&'r T>,
    pub total_count: usize,
    pub effective_sort: SortState,
}
