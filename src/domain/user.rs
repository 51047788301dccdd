use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Coarse authorization label attached to a user account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Manager,
    Hr,
    Employee,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Manager => "MANAGER",
            Role::Hr => "HR",
            Role::Employee => "EMPLOYEE",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADMIN" => Ok(Role::Admin),
            "MANAGER" => Ok(Role::Manager),
            "HR" => Ok(Role::Hr),
            "EMPLOYEE" => Ok(Role::Employee),
            other => Err(format!("Unknown role: {}", other)),
        }
    }
}

/// Email value object
///
/// # Invariants
/// - contains `@` and is at least 3 characters long
/// - normalized to lowercase at construction, so comparisons and the
///   uniqueness constraint are case-insensitive
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
    pub fn new(email: impl Into<String>) -> Result<Self, String> {
        let email = email.into().trim().to_lowercase();
        if email.contains('@') && email.len() >= 3 {
            Ok(Email(email))
        } else {
            Err(format!("Invalid email: {}", email))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// User account row
///
/// # Invariants
/// - `email` is unique across all users and stored lowercase
/// - `password_hash` never leaves the persistence/auth layers
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub email: Email,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub roles: Vec<Role>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_str() {
        for role in [Role::Admin, Role::Manager, Role::Hr, Role::Employee] {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn unknown_role_fails() {
        assert!("SUPERUSER".parse::<Role>().is_err());
    }

    #[test]
    fn role_serializes_screaming_snake() {
        assert_eq!(serde_json::to_string(&Role::Hr).unwrap(), "\"HR\"");
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"ADMIN\"");
    }

    #[test]
    fn valid_email() {
        assert!(Email::new("test@example.com").is_ok());
    }

    #[test]
    fn email_is_lowercased() {
        let email = Email::new("Test@Example.COM").unwrap();
        assert_eq!(email.as_str(), "test@example.com");
    }

    #[test]
    fn invalid_email_no_at_symbol() {
        assert!(Email::new("invalid").is_err());
    }

    #[test]
    fn invalid_email_too_short() {
        assert!(Email::new("a@").is_err());
    }

    #[test]
    fn invalid_email_empty() {
        assert!(Email::new("").is_err());
    }
}
