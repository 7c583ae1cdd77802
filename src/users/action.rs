//! Actions for the users directory.

use crate::store::Action;

use super::model::User;

/// Actions owned by the `users` slice.
#[derive(Debug, Clone)]
pub enum UsersAction {
    /// Replace the whole list (bootstrap from storage or remote).
    SetUsers(Vec<User>),
    /// Prepend a user. No id collision check.
    AddUser(User),
    /// Remove every user with this id.
    DeleteUser(i64),
}

impl Action for UsersAction {}

/// Actions owned by the `ui` slice.
#[derive(Debug, Clone)]
pub enum UiAction {
    SetLoading(bool),
    SetError(Option<String>),
}

impl Action for UiAction {}

/// Root action for the users application, routed to the owning slice.
#[derive(Debug, Clone)]
pub enum UsersAppAction {
    Users(UsersAction),
    Ui(UiAction),
}

impl Action for UsersAppAction {}

impl From<UsersAction> for UsersAppAction {
    fn from(action: UsersAction) -> Self {
        Self::Users(action)
    }
}

impl From<UiAction> for UsersAppAction {
    fn from(action: UiAction) -> Self {
        Self::Ui(action)
    }
}
