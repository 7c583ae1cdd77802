//! Screen controllers for the three-step profile wizard.
//!
//! ```text
//! Home ──new/edit──→ Page1 ──→ Page2 ──→ Page3 ──submit──→ Home
//!                      ↑         │         │
//!                      └──back───┘         └──cancel──→ Home
//! ```
//!
//! Each step validates its own fields and merges them into the draft. The
//! review step commits the draft as an add or an update.

use std::time::Duration;

use thiserror::Error;

use crate::navigation::WizardRoute;
use crate::scope::ScopeHandle;
use crate::store::Store;
use crate::validation::{is_valid_email, parse_age};

use super::action::ProfileAction;
use super::model::DraftProfile;
use super::reducer::ProfilesReducer;

/// A step's input was rejected. Nothing was dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Full Name is required")]
    FullNameRequired,
    #[error("Email is required")]
    EmailRequired,
    #[error("Please enter a valid email")]
    InvalidEmail,
    #[error("Age is required")]
    AgeRequired,
    #[error("Please enter a valid age (1-120)")]
    InvalidAge,
    #[error("City is required")]
    CityRequired,
    #[error("State is required")]
    StateRequired,
    #[error("Country is required")]
    CountryRequired,
}

/// Fields of step 1.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BasicInfo {
    pub full_name: String,
    pub email: String,
    pub age: String,
}

impl BasicInfo {
    pub fn from_draft(draft: &DraftProfile) -> Self {
        Self {
            full_name: draft.full_name.clone().unwrap_or_default(),
            email: draft.email.clone().unwrap_or_default(),
            age: draft.age.clone().unwrap_or_default(),
        }
    }

    /// First failing check wins, in field order.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.full_name.trim().is_empty() {
            return Err(ValidationError::FullNameRequired);
        }
        if self.email.trim().is_empty() {
            return Err(ValidationError::EmailRequired);
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        if self.age.trim().is_empty() {
            return Err(ValidationError::AgeRequired);
        }
        match parse_age(&self.age) {
            Some(age) if (1..=120).contains(&age) => Ok(()),
            _ => Err(ValidationError::InvalidAge),
        }
    }

    fn into_partial(self) -> DraftProfile {
        DraftProfile {
            full_name: Some(self.full_name),
            email: Some(self.email),
            age: Some(self.age),
            ..Default::default()
        }
    }
}

/// Fields of step 2.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Address {
    pub city: String,
    pub state: String,
    pub country: String,
}

impl Address {
    pub fn from_draft(draft: &DraftProfile) -> Self {
        Self {
            city: draft.city.clone().unwrap_or_default(),
            state: draft.state.clone().unwrap_or_default(),
            country: draft.country.clone().unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.city.trim().is_empty() {
            return Err(ValidationError::CityRequired);
        }
        if self.state.trim().is_empty() {
            return Err(ValidationError::StateRequired);
        }
        if self.country.trim().is_empty() {
            return Err(ValidationError::CountryRequired);
        }
        Ok(())
    }

    fn into_partial(self) -> DraftProfile {
        DraftProfile {
            city: Some(self.city),
            state: Some(self.state),
            country: Some(self.country),
            ..Default::default()
        }
    }
}

/// Result of the review step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created { id: String },
    Updated { id: String },
}

impl SubmitOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            Self::Created { .. } => "Profile created successfully!",
            Self::Updated { .. } => "Profile updated successfully!",
        }
    }
}

/// Drives the wizard screens against a profiles store.
#[derive(Clone)]
pub struct ProfileWizard {
    store: Store<ProfilesReducer>,
    submit_delay: Duration,
}

impl ProfileWizard {
    /// `submit_delay` stands in for backend latency on the review step.
    pub fn new(store: Store<ProfilesReducer>, submit_delay: Duration) -> Self {
        Self {
            store,
            submit_delay,
        }
    }

    pub fn store(&self) -> &Store<ProfilesReducer> {
        &self.store
    }

    /// Home → "Add profile": start from an empty draft.
    pub fn start_new(&self) -> WizardRoute {
        self.store.dispatch(ProfileAction::ClearDraftProfile);
        WizardRoute::Page1 { profile_id: None }
    }

    /// Home → "Edit": seed the draft from an existing profile.
    pub fn start_edit(&self, id: &str) -> WizardRoute {
        self.store
            .dispatch(ProfileAction::LoadProfileToDraft(id.to_string()));
        WizardRoute::Page1 {
            profile_id: Some(id.to_string()),
        }
    }

    /// Home → "Delete".
    pub fn delete(&self, id: &str) {
        self.store
            .dispatch(ProfileAction::DeleteProfile(id.to_string()));
    }

    /// Step 1 form, prefilled from the draft.
    pub fn basic_info(&self) -> BasicInfo {
        self.store.select(|s| BasicInfo::from_draft(&s.draft))
    }

    pub fn submit_basic_info(&self, form: BasicInfo) -> Result<WizardRoute, ValidationError> {
        form.validate()?;
        self.store
            .dispatch(ProfileAction::UpdateDraftProfile(form.into_partial()));
        Ok(WizardRoute::Page2)
    }

    /// Step 2 form, prefilled from the draft.
    pub fn address(&self) -> Address {
        self.store.select(|s| Address::from_draft(&s.draft))
    }

    pub fn submit_address(&self, form: Address) -> Result<WizardRoute, ValidationError> {
        form.validate()?;
        self.store
            .dispatch(ProfileAction::UpdateDraftProfile(form.into_partial()));
        Ok(WizardRoute::Page3)
    }

    /// Going back keeps what was typed, valid or not.
    pub fn back_from_address(&self, form: Address) -> WizardRoute {
        self.store
            .dispatch(ProfileAction::UpdateDraftProfile(form.into_partial()));
        WizardRoute::Page1 {
            profile_id: self.store.select(|s| s.draft.editing_id.clone()),
        }
    }

    /// Abandon the draft from any step.
    pub fn cancel(&self) -> WizardRoute {
        self.store.dispatch(ProfileAction::ClearDraftProfile);
        WizardRoute::Home
    }

    /// Review step: wait out the simulated latency, then commit the draft.
    ///
    /// Updates when the draft was seeded from a profile that still exists,
    /// adds under a fresh id otherwise. Returns `None` without committing if
    /// the scope is cancelled during the delay.
    pub async fn submit(&self, scope: &ScopeHandle) -> Option<SubmitOutcome> {
        self.store.dispatch(ProfileAction::SetLoading(true));

        scope.run(tokio::time::sleep(self.submit_delay)).await?;

        let (draft, editing) = self
            .store
            .select(|s| (s.draft.clone(), s.is_editing()));

        let outcome = match draft.editing_id.clone().filter(|_| editing) {
            Some(id) => {
                self.store
                    .dispatch(ProfileAction::UpdateProfile(draft.to_profile(id.clone())));
                SubmitOutcome::Updated { id }
            }
            None => {
                let id = uuid::Uuid::new_v4().to_string();
                self.store
                    .dispatch(ProfileAction::AddProfile(draft.to_profile(id.clone())));
                SubmitOutcome::Created { id }
            }
        };

        self.store.dispatch(ProfileAction::SetLoading(false));
        self.store.dispatch(ProfileAction::ClearDraftProfile);
        tracing::info!(outcome = ?outcome, "Profile submitted");
        Some(outcome)
    }
}
