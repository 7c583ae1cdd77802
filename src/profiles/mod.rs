//! Profile wizard: the `profiles` slice, its draft lifecycle and the
//! step controllers.

mod action;
mod model;
mod reducer;
mod state;
mod wizard;

pub use action::ProfileAction;
pub use model::{DraftProfile, UserProfile};
pub use reducer::ProfilesReducer;
pub use state::ProfileState;
pub use wizard::{Address, BasicInfo, ProfileWizard, SubmitOutcome, ValidationError};
