/// A committed profile. All fields are strings, `age` included.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserProfile {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub age: String,
    pub city: String,
    pub state: String,
    pub country: String,
}

/// In-progress profile data. Every field is optional.
///
/// `editing_id` records which committed profile the draft was seeded from,
/// so the submit step knows to update rather than add.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DraftProfile {
    pub editing_id: Option<String>,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub age: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
}

impl DraftProfile {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Overwrite the fields present in `partial`; keep the rest.
    pub fn merge(self, partial: DraftProfile) -> Self {
        Self {
            editing_id: partial.editing_id.or(self.editing_id),
            full_name: partial.full_name.or(self.full_name),
            email: partial.email.or(self.email),
            age: partial.age.or(self.age),
            city: partial.city.or(self.city),
            state: partial.state.or(self.state),
            country: partial.country.or(self.country),
        }
    }

    /// Fill a complete profile, defaulting missing fields to empty strings.
    pub fn to_profile(&self, id: String) -> UserProfile {
        UserProfile {
            id,
            full_name: self.full_name.clone().unwrap_or_default(),
            email: self.email.clone().unwrap_or_default(),
            age: self.age.clone().unwrap_or_default(),
            city: self.city.clone().unwrap_or_default(),
            state: self.state.clone().unwrap_or_default(),
            country: self.country.clone().unwrap_or_default(),
        }
    }
}

impl From<&UserProfile> for DraftProfile {
    fn from(profile: &UserProfile) -> Self {
        Self {
            editing_id: Some(profile.id.clone()),
            full_name: Some(profile.full_name.clone()),
            email: Some(profile.email.clone()),
            age: Some(profile.age.clone()),
            city: Some(profile.city.clone()),
            state: Some(profile.state.clone()),
            country: Some(profile.country.clone()),
        }
    }
}
