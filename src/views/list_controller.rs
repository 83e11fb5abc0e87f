//! Drives a [`ListState`] from a [`RucService`].
//!
//! The controller owns the state and borrows the service. Loads replace the
//! collection wholesale; a mutation that succeeds is followed by exactly one
//! reload, issued only after the mutation has returned. A failed mutation
//! leaves the collection as it was and triggers no reload.
//!
//! A mutation is split into [`ListController::begin`], which raises the shared
//! pending tracker, and [`ListController::finish`], which settles it. The
//! request itself is a [`PendingMutation`] run in between, so a renderer sees
//! the dimmed rows and further actions can be issued meanwhile.

use tracing::{debug, info};

use crate::client::RucService;
use crate::error::Result;
use crate::views::list::{reduce, ListAction, ListPage, ListState, RowAction};
use crate::views::notice::Notice;

pub const LOAD_ERROR_TITLE: &str = "Error al cargar la lista";
pub const SUCCESS_TITLE: &str = "Éxito";

impl RowAction {
    fn error_title(self) -> &'static str {
        match self {
            RowAction::Delete => "Error al borrar",
            RowAction::Restore => "Error al restaurar",
        }
    }

    fn success_message(self) -> &'static str {
        match self {
            RowAction::Delete => "RUC borrado correctamente.",
            RowAction::Restore => "RUC restaurado correctamente.",
        }
    }
}

// ---------------------------------------------------------------------------
// ListController
// ---------------------------------------------------------------------------

pub struct ListController<'a, S: RucService + ?Sized> {
    service: &'a S,
    state: ListState,
}

impl<'a, S: RucService + ?Sized> ListController<'a, S> {
    /// Create a controller in its initial loading state. Nothing is fetched
    /// until [`load()`](Self::load) is called.
    pub fn new(service: &'a S) -> Self {
        Self {
            service,
            state: ListState::default(),
        }
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    /// The service mutations and loads go through.
    pub fn service(&self) -> &'a S {
        self.service
    }

    pub fn page(&self) -> ListPage {
        self.state.page()
    }

    fn dispatch(&mut self, action: ListAction) {
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, action);
    }

    /// Fetch the full collection and replace the current one.
    ///
    /// On failure the previous collection stays and an error notice is
    /// returned.
    pub fn load(&mut self) -> Option<Notice> {
        self.dispatch(ListAction::LoadStarted);
        match self.service.list_all() {
            Ok(records) => {
                debug!(count = records.len(), "RUC list loaded");
                self.dispatch(ListAction::Loaded(records));
                None
            }
            Err(err) => {
                self.dispatch(ListAction::LoadFailed);
                Some(Notice::error(LOAD_ERROR_TITLE, &err))
            }
        }
    }

    /// Switch between active and soft-deleted records. Always returns to
    /// page 1.
    pub fn show_deleted(&mut self, show: bool) {
        self.dispatch(ListAction::ShowDeleted(show));
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.dispatch(ListAction::GoToPage(page));
    }

    /// Open the detail view for a record in the current collection. Unknown
    /// identifiers clear the selection.
    pub fn select(&mut self, ruc: Option<&str>) {
        self.dispatch(ListAction::Select(ruc.map(str::to_owned)));
    }

    pub fn soft_delete(&mut self, ruc: &str) -> Vec<Notice> {
        self.apply(ruc, RowAction::Delete)
    }

    pub fn restore(&mut self, ruc: &str) -> Vec<Notice> {
        self.apply(ruc, RowAction::Restore)
    }

    /// Run a row action from start to finish.
    ///
    /// Returns the action's notice, followed by the reload's error notice if
    /// the reload failed. Use [`begin`](Self::begin) and
    /// [`finish`](Self::finish) directly to render while the request is in
    /// flight.
    pub fn apply(&mut self, ruc: &str, action: RowAction) -> Vec<Notice> {
        let mutation = self.begin(ruc, action);
        let result = mutation.run(self.service);
        self.finish(mutation, result)
    }

    /// Raise the shared pending tracker and hand back the request to run.
    ///
    /// Every row is dimmed until the matching [`finish`](Self::finish).
    /// There is no per-row lock: beginning a second action while one is
    /// pending simply increments the tracker.
    pub fn begin(&mut self, ruc: &str, action: RowAction) -> PendingMutation {
        self.dispatch(ListAction::MutationStarted);
        debug!(ruc, ?action, pending = self.state.pending, "RUC mutation started");
        PendingMutation {
            ruc: ruc.to_owned(),
            action,
        }
    }

    /// Settle a mutation with the result of running it.
    ///
    /// A success is followed by exactly one reload; a failure leaves the
    /// collection as it was. The tracker drops only after the reload.
    pub fn finish(&mut self, mutation: PendingMutation, result: Result<()>) -> Vec<Notice> {
        let action = mutation.action;
        let notices = match result {
            Ok(()) => {
                info!(ruc = %mutation.ruc, ?action, "RUC updated");
                let mut notices = vec![Notice::success(SUCCESS_TITLE, action.success_message())];
                notices.extend(self.load());
                notices
            }
            Err(err) => vec![Notice::error(action.error_title(), &err)],
        };
        self.dispatch(ListAction::MutationSettled);
        notices
    }
}

// ---------------------------------------------------------------------------
// PendingMutation
// ---------------------------------------------------------------------------

/// A row action issued through [`ListController::begin`] and not yet settled.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a begun mutation keeps the list dimmed until it is finished"]
pub struct PendingMutation {
    ruc: String,
    action: RowAction,
}

impl PendingMutation {
    pub fn ruc(&self) -> &str {
        &self.ruc
    }

    pub fn action(&self) -> RowAction {
        self.action
    }

    /// Send the request. Does not touch any list state, so it can run on
    /// another thread while the controller keeps rendering.
    pub fn run<S: RucService + ?Sized>(&self, service: &S) -> Result<()> {
        service.set_deleted(&self.ruc, self.action == RowAction::Delete)
    }
}
