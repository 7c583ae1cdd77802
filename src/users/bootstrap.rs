//! Startup flow of the users list screen.

use crate::persistence::UsersRepository;
use crate::remote::UserSource;
use crate::scope::ScopeHandle;
use crate::store::Store;

use super::action::{UiAction, UsersAction};
use super::model::User;
use super::reducer::UsersAppReducer;

/// The single error string shown when the list cannot be loaded.
pub const LOAD_ERROR: &str = "Failed to load users.";

/// Where the initial list came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// A non-empty list was found in storage; the remote was not called.
    Storage { count: usize },
    /// Storage was empty or unusable; the list was fetched.
    Remote { count: usize },
    /// The fetch failed and `LOAD_ERROR` was set.
    Failed,
    /// The screen went away before the fetch resolved. Nothing was
    /// dispatched after the cancellation.
    Cancelled,
}

/// Populate the store: storage first, remote as fallback.
///
/// Sequences the `ui` flags around the work: loading on and error cleared
/// first, loading off at the end. Saving the fetched list is left to the
/// persistence observer, which sees the `SetUsers` dispatch.
pub async fn init_users<S: UserSource>(
    store: &Store<UsersAppReducer>,
    repository: &UsersRepository,
    source: &S,
    scope: &ScopeHandle,
) -> BootstrapOutcome {
    store.dispatch(UiAction::SetLoading(true).into());
    store.dispatch(UiAction::SetError(None).into());

    let outcome = match load_stored(repository).await {
        Some(users) => {
            let count = users.len();
            store.dispatch(UsersAction::SetUsers(users).into());
            BootstrapOutcome::Storage { count }
        }
        None => match scope.run(source.fetch_users()).await {
            None => {
                tracing::debug!("Users fetch abandoned, screen scope cancelled");
                return BootstrapOutcome::Cancelled;
            }
            Some(Ok(users)) => {
                let count = users.len();
                store.dispatch(UsersAction::SetUsers(users).into());
                BootstrapOutcome::Remote { count }
            }
            Some(Err(e)) => {
                tracing::warn!(error = %e, "Failed to load users");
                store.dispatch(UiAction::SetError(Some(LOAD_ERROR.to_string())).into());
                BootstrapOutcome::Failed
            }
        },
    };

    store.dispatch(UiAction::SetLoading(false).into());
    tracing::info!(outcome = ?outcome, "Users bootstrap finished");
    outcome
}

/// Read the stored list off the runtime threads. Empty counts as missing.
async fn load_stored(repository: &UsersRepository) -> Option<Vec<User>> {
    let repository = repository.clone();
    match tokio::task::spawn_blocking(move || repository.load()).await {
        Ok(users) => users.filter(|users| !users.is_empty()),
        Err(e) => {
            tracing::warn!(error = %e, "Storage read task failed");
            None
        }
    }
}
