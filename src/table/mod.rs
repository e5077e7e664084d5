//! Projection tabulaire : tri stable, pagination, bascule du tri.
//!
//! Aucun rendu ici ; la couche de présentation consomme `Projection`.

mod cell;
mod column;
mod types;

pub use cell::CellValue;
pub use column::{ColumnDescriptor, Columns};
pub use types::{
    Page, PageState, Projection, SortDirection, SortState, TableError, DEFAULT_PAGE_SIZE,
    PAGE_SIZE_OPTIONS,
};

/// Tri stable selon la colonne demandée ; l'entrée n'est jamais modifiée.
///
/// Colonne absente ou inconnue : ordre d'entrée.
pub fn sort<'r, T>(records: &'r [T], columns: &Columns<'_, T>, state: &SortState) -> Vec<&'r T> {
    let Some(column) = state.column_id.as_deref().and_then(|id| columns.find(id)) else {
        return records.iter().collect();
    };

    // une seule évaluation de l'accesseur par ligne
    let mut keyed: Vec<(CellValue, &T)> = records.iter().map(|r| (column.value(r), r)).collect();
    keyed.sort_by(|a, b| state.direction.apply(a.0.cmp(&b.0)));
    keyed.into_iter().map(|(_, r)| r).collect()
}

/// Tranche `[i*size, i*size + size)` bornée ; page hors limites = lignes vides.
pub fn paginate<R: Clone>(sorted: &[R], page: PageState) -> Page<R> {
    let total_count = sorted.len();
    let start = page.offset().min(total_count);
    let end = start.saturating_add(page.page_size()).min(total_count);
    Page {
        rows: sorted[start..end].to_vec(),
        total_count,
    }
}

/// Tri puis pagination optionnelle.
pub fn project<'r, T>(
    records: &'r [T],
    columns: &Columns<'_, T>,
    sort_state: &SortState,
    page_state: Option<PageState>,
) -> Projection<'r, T> {
    let effective_sort = match sort_state.column_id.as_deref() {
        Some(id) if columns.find(id).is_some() => sort_state.clone(),
        _ => SortState {
            column_id: None,
            direction: sort_state.direction,
        },
    };

    let sorted = sort(records, columns, &effective_sort);
    let (rows, total_count) = match page_state {
        Some(page) => {
            let page = paginate(&sorted, page);
            (page.rows, page.total_count)
        }
        None => {
            let total = sorted.len();
            (sorted, total)
        }
    };

    tracing::debug!(
        sort = ?effective_sort.column_id,
        direction = ?effective_sort.direction,
        rows = rows.len(),
        total_count,
        "table projected"
    );

    Projection {
        rows,
        total_count,
        effective_sort,
    }
}

/// Clic sur un en-tête : même colonne = inversion, autre colonne = tri ascendant.
pub fn next_sort_state(current: &SortState, column_id: &str) -> SortState {
    if current.column_id.as_deref() == Some(column_id) {
        SortState {
            column_id: current.column_id.clone(),
            direction: current.direction.flipped(),
        }
    } else {
        SortState::asc(column_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: &'static str,
        rank: i64,
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "carol", rank: 2 },
            Row { name: "alice", rank: 1 },
            Row { name: "dave", rank: 2 },
            Row { name: "bob", rank: 1 },
            Row { name: "erin", rank: 3 },
            Row { name: "frank", rank: 2 },
        ]
    }

    fn columns<'a>() -> Columns<'a, Row> {
        Columns::new(vec![
            ColumnDescriptor::new("name", "Name", |r: &Row| CellValue::from(r.name)),
            ColumnDescriptor::new("rank", "Rank", |r: &Row| CellValue::Int(r.rank)),
        ])
        .unwrap()
    }

    fn names(rows: &[&Row]) -> Vec<&'static str> {
        rows.iter().map(|r| r.name).collect()
    }

    #[test]
    fn sorts_text_ascending_and_descending() {
        let data = rows();
        let cols = columns();
        let asc = sort(&data, &cols, &SortState::asc("name"));
        assert_eq!(names(&asc), ["alice", "bob", "carol", "dave", "erin", "frank"]);
        let desc = sort(&data, &cols, &SortState::desc("name"));
        assert_eq!(names(&desc), ["frank", "erin", "dave", "carol", "bob", "alice"]);
    }

    #[test]
    fn sort_is_stable_on_ties() {
        let data = rows();
        let cols = columns();
        let asc = sort(&data, &cols, &SortState::asc("rank"));
        assert_eq!(names(&asc), ["alice", "bob", "carol", "dave", "frank", "erin"]);
        let desc = sort(&data, &cols, &SortState::desc("rank"));
        assert_eq!(names(&desc), ["erin", "carol", "dave", "frank", "alice", "bob"]);
    }

    #[test]
    fn numbers_compare_numerically() {
        let data = vec![
            Row { name: "ten", rank: 10 },
            Row { name: "nine", rank: 9 },
            Row { name: "hundred", rank: 100 },
        ];
        let sorted = sort(&data, &columns(), &SortState::asc("rank"));
        assert_eq!(names(&sorted), ["nine", "ten", "hundred"]);
    }

    #[test]
    fn unknown_or_absent_column_keeps_input_order() {
        let data = rows();
        let cols = columns();
        let original: Vec<&str> = data.iter().map(|r| r.name).collect();
        assert_eq!(names(&sort(&data, &cols, &SortState::asc("nope"))), original);
        assert_eq!(names(&sort(&data, &cols, &SortState::none())), original);
    }

    #[test]
    fn sorting_does_not_touch_input() {
        let data = rows();
        let before: Vec<&str> = data.iter().map(|r| r.name).collect();
        let _ = sort(&data, &columns(), &SortState::desc("name"));
        let after: Vec<&str> = data.iter().map(|r| r.name).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn duplicate_column_ids_fail_fast() {
        let err = Columns::new(vec![
            ColumnDescriptor::new("name", "Name", |r: &Row| CellValue::from(r.name)),
            ColumnDescriptor::new("name", "Other", |r: &Row| CellValue::Int(r.rank)),
        ])
        .unwrap_err();
        assert_eq!(err, TableError::DuplicateColumnId("name".into()));
    }

    #[test]
    fn paginate_clips_and_keeps_total() {
        let data = rows();
        let page = PageState::new(0, 5).unwrap();

        assert_eq!(paginate(&data, page).rows.len(), 5);

        let second = paginate(&data, page.with_page(1));
        assert_eq!(second.rows.len(), 1);
        assert_eq!(second.total_count, 6);

        let beyond = paginate(&data, page.with_page(2));
        assert!(beyond.rows.is_empty());
        assert_eq!(beyond.total_count, 6);

        let far = paginate(&data, page.with_page(usize::MAX));
        assert!(far.rows.is_empty());
        assert_eq!(far.total_count, 6);
    }

    #[test]
    fn project_without_pages_returns_everything() {
        let data = rows();
        let projection = project(&data, &columns(), &SortState::asc("name"), None);
        assert_eq!(projection.rows.len(), data.len());
        assert_eq!(projection.total_count, data.len());
        assert_eq!(projection.effective_sort, SortState::asc("name"));
    }

    #[test]
    fn project_sorts_then_paginates() {
        let data = rows();
        let page = PageState::new(1, 2).unwrap();
        let projection = project(&data, &columns(), &SortState::asc("name"), Some(page));
        assert_eq!(names(&projection.rows), ["carol", "dave"]);
        assert_eq!(projection.total_count, 6);
    }

    #[test]
    fn project_reports_unmatched_sort_as_none() {
        let data = rows();
        let projection = project(&data, &columns(), &SortState::desc("ghost"), None);
        assert_eq!(projection.effective_sort.column_id, None);
        assert_eq!(projection.effective_sort.direction, SortDirection::Desc);
    }

    #[test]
    fn toggle_rules() {
        let current = SortState::asc("name");
        assert_eq!(next_sort_state(&current, "name"), SortState::desc("name"));
        assert_eq!(next_sort_state(&SortState::desc("name"), "name"), SortState::asc("name"));
        assert_eq!(next_sort_state(&current, "type"), SortState::asc("type"));
        assert_eq!(next_sort_state(&SortState::desc("name"), "type"), SortState::asc("type"));
        assert_eq!(next_sort_state(&SortState::none(), "name"), SortState::asc("name"));
    }

    #[test]
    fn page_state_transitions() {
        assert_eq!(PageState::new(0, 0), Err(TableError::InvalidPageSize));

        let page = PageState::default().with_page(3);
        assert_eq!(page.page_size(), DEFAULT_PAGE_SIZE);
        let resized = page.with_page_size(10).unwrap();
        assert_eq!(resized.page_index(), 0);
        assert_eq!(resized.page_size(), 10);
        assert!(page.with_page_size(0).is_err());

        assert_eq!(page.page_count(6), 2);
        assert_eq!(page.page_count(0), 0);
        assert_eq!(page.clamped(6).page_index(), 1);
        assert_eq!(page.clamped(0).page_index(), 0);
        assert_eq!(page.clamped(100).page_index(), 3);
    }

    #[test]
    fn missing_values_sort_first() {
        let mut values = vec![
            CellValue::from("b"),
            CellValue::Missing,
            CellValue::from("a"),
        ];
        values.sort();
        assert_eq!(values[0], CellValue::Missing);
        assert_eq!(values[1], CellValue::from("a"));
    }
}
