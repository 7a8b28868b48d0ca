use serde::{Deserialize, Serialize};

/// Access level of a roster entry.
/// Serialized as `"admin"` / `"user"` in the storage slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "admin")]
    Admin,
    #[serde(rename = "user")]
    Standard,
}

impl Role {
    pub fn role_from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "admin" => Some(Self::Admin),
            "user" | "standard" => Some(Self::Standard),
            _ => None,
        }
    }

    pub fn role_as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Standard => "user",
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

/// Identity record held in the roster slot.
/// Created at seeding or by the admin add operation; never deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub department: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub courses: Option<Vec<String>>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Course names assigned to this user, empty when none.
    pub fn course_names(&self) -> &[String] {
        self.courses.as_deref().unwrap_or_default()
    }
}
