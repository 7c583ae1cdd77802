//! The add-user form.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::navigation::UsersRoute;
use crate::store::Store;
use crate::validation::is_valid_email;

use super::action::UsersAction;
use super::model::User;
use super::reducer::UsersAppReducer;

/// Editable form fields, as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub website: String,
}

/// Per-field messages. A `None` field passed validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub phone: Option<&'static str>,
    pub website: Option<&'static str>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.phone.is_none() && self.website.is_none()
    }

    /// Messages in field order.
    pub fn messages(&self) -> Vec<&'static str> {
        [self.name, self.email, self.phone, self.website]
            .into_iter()
            .flatten()
            .collect()
    }
}

impl UserForm {
    pub fn validate(&self) -> FormErrors {
        let email = self.email.trim();
        FormErrors {
            name: self.name.trim().is_empty().then_some("Name is required."),
            email: if email.is_empty() {
                Some("Email is required.")
            } else if !is_valid_email(email) {
                Some("Enter a valid email address.")
            } else {
                None
            },
            phone: self.phone.trim().is_empty().then_some("Phone is required."),
            website: self.website.trim().is_empty().then_some("Website is required."),
        }
    }

    /// Build the record to add, trimming every field.
    pub fn to_user(&self, id: i64) -> User {
        User {
            id,
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            website: self.website.trim().to_string(),
        }
    }
}

/// Validate and add the user, returning the route to go back to.
///
/// Nothing is dispatched when validation fails.
pub fn submit_user(
    store: &Store<UsersAppReducer>,
    form: &UserForm,
) -> Result<(User, UsersRoute), FormErrors> {
    let errors = form.validate();
    if !errors.is_empty() {
        return Err(errors);
    }
    let user = form.to_user(local_user_id());
    store.dispatch(UsersAction::AddUser(user.clone()).into());
    tracing::info!(user_id = user.id, "User added");
    Ok((user, UsersRoute::UserList))
}

/// Ids for locally created users are the creation time in Unix milliseconds.
fn local_user_id() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| i64::try_from(d.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}
