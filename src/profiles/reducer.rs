use crate::store::Reducer;

use super::action::ProfileAction;
use super::model::DraftProfile;
use super::state::ProfileState;

pub struct ProfilesReducer;

impl Reducer for ProfilesReducer {
    type State = ProfileState;
    type Action = ProfileAction;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State {
        match action {
            ProfileAction::UpdateDraftProfile(partial) => ProfileState {
                draft: state.draft.merge(partial),
                ..state
            },
            ProfileAction::ClearDraftProfile => ProfileState {
                draft: DraftProfile::default(),
                ..state
            },
            ProfileAction::AddProfile(profile) => {
                let mut profiles = state.profiles;
                profiles.push(profile);
                ProfileState {
                    profiles,
                    draft: DraftProfile::default(),
                    ..state
                }
            }
            ProfileAction::UpdateProfile(profile) => {
                let mut profiles = state.profiles;
                match profiles.iter_mut().find(|p| p.id == profile.id) {
                    Some(slot) => *slot = profile,
                    None => tracing::debug!(id = %profile.id, "Update for unknown profile ignored"),
                }
                ProfileState {
                    profiles,
                    draft: DraftProfile::default(),
                    ..state
                }
            }
            ProfileAction::DeleteProfile(id) => {
                let mut profiles = state.profiles;
                profiles.retain(|p| p.id != id);
                ProfileState { profiles, ..state }
            }
            ProfileAction::LoadProfileToDraft(id) => {
                let Some(draft) = state.find_profile(&id).map(DraftProfile::from) else {
                    return state;
                };
                ProfileState { draft, ..state }
            }
            ProfileAction::SetLoading(is_loading) => ProfileState {
                is_loading,
                ..state
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiles::UserProfile;

    fn profile(id: &str, name: &str) -> UserProfile {
        UserProfile {
            id: id.into(),
            full_name: name.into(),
            email: format!("{}@x.com", name.to_lowercase()),
            age: "30".into(),
            city: "X".into(),
            state: "Y".into(),
            country: "Z".into(),
        }
    }

    #[test]
    fn merge_keeps_fields_not_in_partial() {
        let state = ProfilesReducer::reduce(
            ProfileState::default(),
            ProfileAction::UpdateDraftProfile(DraftProfile {
                full_name: Some("A".into()),
                city: Some("Old".into()),
                ..Default::default()
            }),
        );
        let state = ProfilesReducer::reduce(
            state,
            ProfileAction::UpdateDraftProfile(DraftProfile {
                city: Some("New".into()),
                ..Default::default()
            }),
        );
        assert_eq!(state.draft.full_name.as_deref(), Some("A"));
        assert_eq!(state.draft.city.as_deref(), Some("New"));
    }

    #[test]
    fn update_preserves_index() {
        let state = ProfileState {
            profiles: vec![profile("1", "Ann"), profile("2", "Bob"), profile("3", "Cy")],
            ..Default::default()
        };
        let state =
            ProfilesReducer::reduce(state, ProfileAction::UpdateProfile(profile("2", "Bea")));
        let names: Vec<&str> = state.profiles.iter().map(|p| p.full_name.as_str()).collect();
        assert_eq!(names, vec!["Ann", "Bea", "Cy"]);
    }

    #[test]
    fn load_unknown_id_keeps_draft() {
        let state = ProfileState {
            draft: DraftProfile {
                email: Some("keep@x.com".into()),
                ..Default::default()
            },
            ..Default::default()
        };
        let next = ProfilesReducer::reduce(
            state.clone(),
            ProfileAction::LoadProfileToDraft("missing".into()),
        );
        assert_eq!(next, state);
    }

    #[test]
    fn load_replaces_draft_wholesale() {
        let state = ProfileState {
            profiles: vec![profile("7", "Ann")],
            draft: DraftProfile {
                city: Some("Stale".into()),
                ..Default::default()
            },
            ..Default::default()
        };
        let state = ProfilesReducer::reduce(state, ProfileAction::LoadProfileToDraft("7".into()));
        assert_eq!(state.draft.editing_id.as_deref(), Some("7"));
        assert_eq!(state.draft.city.as_deref(), Some("X"));
        assert!(state.is_editing());
    }

    #[test]
    fn delete_removes_only_matching() {
        let state = ProfileState {
            profiles: vec![profile("1", "Ann"), profile("2", "Bob")],
            ..Default::default()
        };
        let state = ProfilesReducer::reduce(state, ProfileAction::DeleteProfile("1".into()));
        assert_eq!(state.profiles, vec![profile("2", "Bob")]);
    }

    #[test]
    fn set_loading_touches_only_flag() {
        let state = ProfileState {
            profiles: vec![profile("1", "Ann")],
            ..Default::default()
        };
        let next = ProfilesReducer::reduce(state.clone(), ProfileAction::SetLoading(true));
        assert!(next.is_loading);
        assert_eq!(next.profiles, state.profiles);
    }

    #[test]
    fn summary_pluralizes() {
        let mut state = ProfileState::default();
        assert_eq!(state.summary(), "0 profiles");
        state.profiles.push(profile("1", "Ann"));
        assert_eq!(state.summary(), "1 profile");
        state.profiles.push(profile("2", "Bob"));
        assert_eq!(state.summary(), "2 profiles");
    }
}
