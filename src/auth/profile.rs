use serde::{Deserialize, Serialize};

/// Role attached to a signed-in profile.
///
/// The closed set the backend's `profiles` table allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Client,
    Trainer,
    Nutritionist,
    Admin,
    Hr,
}

impl UserRole {
    /// Whether this role coaches other users (and so sees client rosters).
    pub fn is_coach(&self) -> bool {
        matches!(self, UserRole::Trainer | UserRole::Nutritionist)
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Client => write!(f, "client"),
            UserRole::Trainer => write!(f, "trainer"),
            UserRole::Nutritionist => write!(f, "nutritionist"),
            UserRole::Admin => write!(f, "admin"),
            UserRole::Hr => write!(f, "hr"),
        }
    }
}

/// The signed-in user, as the backend describes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub email: String,
    pub full_name: Option<String>,
    pub role: UserRole,
}

impl Profile {
    /// Name to greet the user with.
    pub fn display_name(&self) -> &str {
        match self.full_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.email,
        }
    }
}
