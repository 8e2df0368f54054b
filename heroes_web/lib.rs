pub mod confirm;
pub mod forms;
pub mod notification;
pub mod pages;
pub mod routes;

mod app_state;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use app_state::AppState;
pub use confirm::{ConfirmDialogData, Confirmer, DialogKind};
pub use notification::{Notification, NotificationKind, Notifier};
pub use routes::{Navigator, Route};
