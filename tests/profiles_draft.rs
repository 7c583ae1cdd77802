use slicestore::profiles::{DraftProfile, ProfileAction, ProfileState, ProfilesReducer, UserProfile};
use slicestore::store::{Reducer, Store};

fn ann() -> UserProfile {
    UserProfile {
        id: "1".into(),
        full_name: "Ann".into(),
        email: "a@x.com".into(),
        age: "30".into(),
        city: "X".into(),
        state: "Y".into(),
        country: "Z".into(),
    }
}

fn draft_with_name() -> DraftProfile {
    DraftProfile {
        full_name: Some("Draft".into()),
        ..Default::default()
    }
}

#[test]
fn draft_updates_merge() {
    let state = ProfilesReducer::reduce(
        ProfileState::default(),
        ProfileAction::UpdateDraftProfile(DraftProfile {
            full_name: Some("A".into()),
            ..Default::default()
        }),
    );
    let state = ProfilesReducer::reduce(
        state,
        ProfileAction::UpdateDraftProfile(DraftProfile {
            email: Some("b@x.com".into()),
            ..Default::default()
        }),
    );
    assert_eq!(
        state.draft,
        DraftProfile {
            full_name: Some("A".into()),
            email: Some("b@x.com".into()),
            ..Default::default()
        }
    );
}

#[test]
fn add_resets_draft() {
    let state = ProfileState {
        draft: draft_with_name(),
        ..Default::default()
    };
    let state = ProfilesReducer::reduce(state, ProfileAction::AddProfile(ann()));
    assert!(state.draft.is_empty());
    assert_eq!(state.profiles, vec![ann()]);
}

#[test]
fn add_appends_at_end() {
    let mut bob = ann();
    bob.id = "2".into();
    bob.full_name = "Bob".into();
    let state = ProfileState {
        profiles: vec![ann()],
        ..Default::default()
    };
    let state = ProfilesReducer::reduce(state, ProfileAction::AddProfile(bob.clone()));
    assert_eq!(state.profiles, vec![ann(), bob]);
}

#[test]
fn update_resets_draft() {
    let mut edited = ann();
    edited.city = "W".into();
    let state = ProfileState {
        profiles: vec![ann()],
        draft: draft_with_name(),
        ..Default::default()
    };
    let state = ProfilesReducer::reduce(state, ProfileAction::UpdateProfile(edited.clone()));
    assert!(state.draft.is_empty());
    assert_eq!(state.profiles, vec![edited]);
}

#[test]
fn update_unknown_id_leaves_profiles_unchanged() {
    let mut stranger = ann();
    stranger.id = "99".into();
    let state = ProfileState {
        profiles: vec![ann()],
        draft: draft_with_name(),
        ..Default::default()
    };
    let next = ProfilesReducer::reduce(state.clone(), ProfileAction::UpdateProfile(stranger));
    assert_eq!(next.profiles, state.profiles);
    assert!(next.draft.is_empty());
}

#[test]
fn load_then_clear_empties_draft_only() {
    let mut seven = ann();
    seven.id = "7".into();
    let state = ProfileState {
        profiles: vec![seven.clone()],
        ..Default::default()
    };

    let loaded = ProfilesReducer::reduce(state, ProfileAction::LoadProfileToDraft("7".into()));
    assert_eq!(loaded.draft.full_name.as_deref(), Some("Ann"));

    let cleared = ProfilesReducer::reduce(loaded, ProfileAction::ClearDraftProfile);
    assert_eq!(cleared.draft, DraftProfile::default());
    assert_eq!(cleared.profiles, vec![seven]);
}

#[test]
fn wizard_scenario_commits_single_record() {
    let store = Store::<ProfilesReducer>::default();
    store.dispatch(ProfileAction::UpdateDraftProfile(DraftProfile {
        full_name: Some("Ann".into()),
        email: Some("a@x.com".into()),
        age: Some("30".into()),
        ..Default::default()
    }));
    store.dispatch(ProfileAction::UpdateDraftProfile(DraftProfile {
        city: Some("X".into()),
        state: Some("Y".into()),
        country: Some("Z".into()),
        ..Default::default()
    }));

    let draft = store.get_state().draft;
    assert_eq!(draft.to_profile("1".into()), ann());

    store.dispatch(ProfileAction::AddProfile(ann()));
    let state = store.get_state();
    assert_eq!(state.profiles, vec![ann()]);
    assert_eq!(state.draft, DraftProfile::default());
}

#[test]
fn delete_profile_keeps_draft() {
    let state = ProfileState {
        profiles: vec![ann()],
        draft: draft_with_name(),
        ..Default::default()
    };
    let state = ProfilesReducer::reduce(state, ProfileAction::DeleteProfile("1".into()));
    assert!(state.profiles.is_empty());
    assert_eq!(state.draft, draft_with_name());
}
