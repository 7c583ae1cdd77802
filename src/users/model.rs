use serde::{Deserialize, Serialize};

/// A directory entry.
///
/// Records come from the remote source or are created locally by the
/// add-user form. They are replaced or removed as a whole, never edited.
/// Extra fields in remote payloads (address, company, ...) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub website: String,
}
