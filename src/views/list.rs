//! List view state as a pure reducer.
//!
//! The whole working set lives in [`ListState`]; every transition goes through
//! [`reduce`], which also re-applies the page clamp. Filtering and pagination
//! are free functions of the collection so they can be exercised without any
//! service behind them.

use crate::config::PAGE_SIZE;
use crate::models::RucRecord;
use crate::status::{self, BadgeVariant, Standing};

pub const ACTIVE_CAPTION: &str = "Mostrando RUCs activos.";
pub const DELETED_CAPTION: &str = "Mostrando RUCs borrados lógicamente.";
pub const EMPTY_PLACEHOLDER: &str = "No hay RUCs para mostrar.";

// ---------------------------------------------------------------------------
// ListState / ListAction
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct ListState {
    /// Full collection from the last successful load, deleted rows included.
    pub records: Vec<RucRecord>,
    pub show_deleted: bool,
    /// 1-based page number.
    pub current_page: usize,
    pub loading: bool,
    /// Mutations issued and not yet settled. Shared by every row.
    pub pending: usize,
    /// RUC of the record opened in the detail view.
    pub selected: Option<String>,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            show_deleted: false,
            current_page: 1,
            loading: true,
            pending: 0,
            selected: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListAction {
    LoadStarted,
    /// Replaces the collection wholesale.
    Loaded(Vec<RucRecord>),
    /// Ends loading and keeps the previous collection.
    LoadFailed,
    ShowDeleted(bool),
    GoToPage(usize),
    MutationStarted,
    MutationSettled,
    Select(Option<String>),
}

/// Apply one action and re-clamp the current page.
pub fn reduce(mut state: ListState, action: ListAction) -> ListState {
    match action {
        ListAction::LoadStarted => state.loading = true,
        ListAction::Loaded(records) => {
            state.records = records;
            state.loading = false;
            if let Some(ruc) = &state.selected {
                if !state.records.iter().any(|r| &r.ruc == ruc) {
                    state.selected = None;
                }
            }
        }
        ListAction::LoadFailed => state.loading = false,
        ListAction::ShowDeleted(show) => {
            state.show_deleted = show;
            state.current_page = 1;
        }
        ListAction::GoToPage(page) => state.current_page = page.max(1),
        ListAction::MutationStarted => state.pending += 1,
        ListAction::MutationSettled => state.pending = state.pending.saturating_sub(1),
        ListAction::Select(ruc) => {
            state.selected = ruc.filter(|r| state.records.iter().any(|rec| &rec.ruc == r));
        }
    }
    let total = total_pages(filter_records(&state.records, state.show_deleted).len());
    state.current_page = clamp_page(state.current_page, total);
    state
}

/// Pull the current page back into range. An empty filtered set leaves the
/// page untouched; it is corrected once there is something to show again.
pub fn clamp_page(current: usize, total: usize) -> usize {
    if total == 0 {
        current
    } else if current > total {
        total
    } else if current == 0 {
        1
    } else {
        current
    }
}

// ---------------------------------------------------------------------------
// Filtering and pagination
// ---------------------------------------------------------------------------

/// Records whose delete flag matches `show_deleted`, in collection order.
pub fn filter_records(records: &[RucRecord], show_deleted: bool) -> Vec<&RucRecord> {
    records
        .iter()
        .filter(|r| r.is_deleted() == show_deleted)
        .collect()
}

pub fn total_pages(len: usize) -> usize {
    len.div_ceil(PAGE_SIZE)
}

/// Items of the 1-based `page`. Out-of-range pages are empty.
pub fn paginate<T>(items: &[T], page: usize) -> &[T] {
    let Some(start) = page
        .checked_sub(1)
        .and_then(|p| p.checked_mul(PAGE_SIZE))
    else {
        return &[];
    };
    if start >= items.len() {
        return &[];
    }
    let end = (start + PAGE_SIZE).min(items.len());
    &items[start..end]
}

// ---------------------------------------------------------------------------
// ListPage — What a renderer shows
// ---------------------------------------------------------------------------

/// Mutating action offered on a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Delete,
    Restore,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListRow {
    pub ruc: String,
    pub razon_social: String,
    pub estado: Option<String>,
    pub condicion: Option<String>,
    pub estado_badge: BadgeVariant,
    pub condicion_badge: BadgeVariant,
    pub standing: Standing,
    /// De-emphasized while any mutation is in flight. Still actionable.
    pub dimmed: bool,
    pub action: RowAction,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListPage {
    pub caption: &'static str,
    pub rows: Vec<ListRow>,
    /// Shown in place of an empty table body.
    pub placeholder: Option<&'static str>,
    pub current_page: usize,
    pub total_pages: usize,
    pub show_pagination: bool,
}

impl ListState {
    pub fn is_pending(&self) -> bool {
        self.pending > 0
    }

    pub fn filtered(&self) -> Vec<&RucRecord> {
        filter_records(&self.records, self.show_deleted)
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered().len())
    }

    pub fn selected_record(&self) -> Option<&RucRecord> {
        let ruc = self.selected.as_deref()?;
        self.records.iter().find(|r| r.ruc == ruc)
    }

    /// Derive the page currently on screen.
    pub fn page(&self) -> ListPage {
        let filtered = self.filtered();
        let total = total_pages(filtered.len());
        let action = if self.show_deleted {
            RowAction::Restore
        } else {
            RowAction::Delete
        };
        let dimmed = self.is_pending();

        let rows: Vec<ListRow> = paginate(&filtered, self.current_page)
            .iter()
            .map(|r| ListRow {
                ruc: r.ruc.clone(),
                razon_social: r.razon_social.clone(),
                estado: r.estado.clone(),
                condicion: r.condicion.clone(),
                estado_badge: status::estado_badge(r.estado.as_deref()),
                condicion_badge: status::condicion_badge(r.condicion.as_deref()),
                standing: r.standing(),
                dimmed,
                action,
            })
            .collect();

        ListPage {
            caption: if self.show_deleted {
                DELETED_CAPTION
            } else {
                ACTIVE_CAPTION
            },
            placeholder: rows.is_empty().then_some(EMPTY_PLACEHOLDER),
            rows,
            current_page: self.current_page,
            total_pages: total,
            show_pagination: total > 1,
        }
    }
}
