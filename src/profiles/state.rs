//! State for the profile wizard.

use crate::store::SliceState;

use super::model::{DraftProfile, UserProfile};

/// The `profiles` slice: committed profiles plus the in-progress draft.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProfileState {
    pub profiles: Vec<UserProfile>,
    pub draft: DraftProfile,
    pub is_loading: bool,
}

impl SliceState for ProfileState {}

impl ProfileState {
    pub fn find_profile(&self, id: &str) -> Option<&UserProfile> {
        self.profiles.iter().find(|profile| profile.id == id)
    }

    /// Whether the draft was seeded from a profile that still exists.
    pub fn is_editing(&self) -> bool {
        self.draft
            .editing_id
            .as_deref()
            .is_some_and(|id| self.find_profile(id).is_some())
    }

    /// Header line of the home screen, e.g. `1 profile` or `3 profiles`.
    pub fn summary(&self) -> String {
        match self.profiles.len() {
            1 => "1 profile".to_string(),
            n => format!("{n} profiles"),
        }
    }
}
