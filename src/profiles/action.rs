//! Actions for the profiles slice.

use crate::store::Action;

use super::model::{DraftProfile, UserProfile};

#[derive(Debug, Clone)]
pub enum ProfileAction {
    /// Shallow-merge a partial into the draft.
    UpdateDraftProfile(DraftProfile),
    /// Reset the draft without touching the profiles.
    ClearDraftProfile,
    /// Append and reset the draft.
    AddProfile(UserProfile),
    /// Replace by id in place (no-op on unknown id) and reset the draft.
    UpdateProfile(UserProfile),
    /// Remove by id.
    DeleteProfile(String),
    /// Replace the draft with a copy of an existing profile.
    LoadProfileToDraft(String),
    SetLoading(bool),
}

impl Action for ProfileAction {}
