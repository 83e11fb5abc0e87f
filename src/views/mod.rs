//! View models for the lookup and list screens.
//!
//! Each view borrows a [`RucService`](crate::client::RucService) and keeps its
//! own state; nothing here performs I/O except through that service.

pub mod detail;
pub mod list;
pub mod list_controller;
pub mod notice;
pub mod search;

pub use detail::{FieldValue, RecordDetail};
pub use list::{ListAction, ListPage, ListRow, ListState, RowAction};
pub use list_controller::{ListController, PendingMutation};
pub use notice::{Notice, NoticeKind};
pub use search::{SearchForm, SearchOutcome};
