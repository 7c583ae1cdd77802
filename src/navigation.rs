//! Route identifiers for both applications.
//!
//! The navigation stack itself lives with the presentation layer. Screen
//! controllers only return the route to go to next.

/// Routes of the users directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsersRoute {
    UserList,
    UserDetail { user_id: i64 },
    AddUser,
}

impl UsersRoute {
    pub fn name(&self) -> &'static str {
        match self {
            Self::UserList => "UserList",
            Self::UserDetail { .. } => "UserDetail",
            Self::AddUser => "AddUser",
        }
    }
}

/// Routes of the profile wizard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardRoute {
    Home,
    /// Basic information step. Carries the profile id when editing.
    Page1 { profile_id: Option<String> },
    /// Address step.
    Page2,
    /// Review and submit.
    Page3,
}

impl WizardRoute {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Page1 { .. } => "Page1",
            Self::Page2 => "Page2",
            Self::Page3 => "Page3",
        }
    }

    /// Step label shown on the wizard pages.
    pub fn step(&self) -> Option<&'static str> {
        match self {
            Self::Home => None,
            Self::Page1 { .. } => Some("Step 1 of 3"),
            Self::Page2 => Some("Step 2 of 3"),
            Self::Page3 => Some("Step 3 of 3"),
        }
    }
}
