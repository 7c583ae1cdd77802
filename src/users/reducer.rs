use crate::store::Reducer;

use super::action::{UiAction, UsersAction, UsersAppAction};
use super::state::{UiState, UsersAppState, UsersState};

pub struct UsersReducer;

impl Reducer for UsersReducer {
    type State = UsersState;
    type Action = UsersAction;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State {
        match action {
            UsersAction::SetUsers(list) => UsersState { list },
            UsersAction::AddUser(user) => {
                let mut list = Vec::with_capacity(state.list.len() + 1);
                list.push(user);
                list.extend(state.list);
                UsersState { list }
            }
            UsersAction::DeleteUser(id) => {
                let mut list = state.list;
                list.retain(|user| user.id != id);
                UsersState { list }
            }
        }
    }
}

pub struct UiReducer;

impl Reducer for UiReducer {
    type State = UiState;
    type Action = UiAction;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State {
        match action {
            UiAction::SetLoading(loading) => UiState { loading, ..state },
            UiAction::SetError(error) => UiState { error, ..state },
        }
    }
}

/// Root reducer: only the owning slice is reduced, the other passes through.
pub struct UsersAppReducer;

impl Reducer for UsersAppReducer {
    type State = UsersAppState;
    type Action = UsersAppAction;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State {
        match action {
            UsersAppAction::Users(action) => UsersAppState {
                users: UsersReducer::reduce(state.users, action),
                ..state
            },
            UsersAppAction::Ui(action) => UsersAppState {
                ui: UiReducer::reduce(state.ui, action),
                ..state
            },
        }
    }
}
