//! State for the users directory.

use crate::store::SliceState;

use super::model::User;

/// The `users` slice. Insertion order is significant: new users prepend.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UsersState {
    pub list: Vec<User>,
}

impl SliceState for UsersState {}

/// The `ui` slice. The two fields are independent; see `UsersView` for the
/// exclusive view derived from them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UiState {
    pub loading: bool,
    pub error: Option<String>,
}

impl SliceState for UiState {}

/// Root state of the users application.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UsersAppState {
    pub users: UsersState,
    pub ui: UiState,
}

impl SliceState for UsersAppState {}

/// What the list screen shows. Exactly one variant applies at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsersView<'a> {
    Loading,
    Error(&'a str),
    Ready(&'a [User]),
}

impl UsersAppState {
    /// Derive the list screen view. Loading wins over error, error over data.
    pub fn view(&self) -> UsersView<'_> {
        if self.ui.loading {
            UsersView::Loading
        } else if let Some(error) = self.ui.error.as_deref() {
            UsersView::Error(error)
        } else {
            UsersView::Ready(&self.users.list)
        }
    }

    /// Look up a user for the detail screen.
    pub fn find_user(&self, id: i64) -> Option<&User> {
        self.users.list.iter().find(|user| user.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i64) -> User {
        User {
            id,
            name: format!("User {id}"),
            email: format!("u{id}@example.com"),
            phone: "555-0100".into(),
            website: "example.com".into(),
        }
    }

    #[test]
    fn empty_state_is_ready_with_no_users() {
        let state = UsersAppState::default();
        assert_eq!(state.view(), UsersView::Ready(&[]));
    }

    #[test]
    fn loading_hides_error_and_list() {
        let state = UsersAppState {
            users: UsersState {
                list: vec![user(1)],
            },
            ui: UiState {
                loading: true,
                error: Some("boom".into()),
            },
        };
        assert_eq!(state.view(), UsersView::Loading);
    }

    #[test]
    fn error_hides_list() {
        let state = UsersAppState {
            users: UsersState {
                list: vec![user(1)],
            },
            ui: UiState {
                loading: false,
                error: Some("boom".into()),
            },
        };
        assert_eq!(state.view(), UsersView::Error("boom"));
    }

    #[test]
    fn find_user_by_id() {
        let state = UsersAppState {
            users: UsersState {
                list: vec![user(1), user(2)],
            },
            ui: UiState::default(),
        };
        assert_eq!(state.find_user(2).map(|u| u.id), Some(2));
        assert!(state.find_user(3).is_none());
    }
}
