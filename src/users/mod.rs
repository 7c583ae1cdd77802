//! Users directory: the `users` and `ui` slices and their screen flows.

mod action;
mod bootstrap;
mod form;
mod model;
mod reducer;
mod state;

pub use action::{UiAction, UsersAction, UsersAppAction};
pub use bootstrap::{init_users, BootstrapOutcome, LOAD_ERROR};
pub use form::{submit_user, FormErrors, UserForm};
pub use model::User;
pub use reducer::{UiReducer, UsersAppReducer, UsersReducer};
pub use state::{UiState, UsersAppState, UsersState, UsersView};
