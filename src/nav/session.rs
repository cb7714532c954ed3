use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Student,
    Admin,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The logged-in user. Lives in memory only; there is no logout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl Session {
    pub fn new(name: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            role,
        }
    }

    pub fn student(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self::new(name, email, Role::Student)
    }

    pub fn admin(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self::new(name, email, Role::Admin)
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// First word of the name, used for greetings
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_role() {
        assert_eq!(Session::student("Alex Johnson", "a@b.c").role, Role::Student);
        assert!(Session::admin("Admin User", "admin@smartjob.com").is_admin());
    }

    #[test]
    fn test_first_name() {
        let session = Session::student("Alex Johnson", "alex.johnson@university.edu");
        assert_eq!(session.first_name(), "Alex");

        let blank = Session::student("", "x@y.z");
        assert_eq!(blank.first_name(), "");
    }

    #[test]
    fn test_role_display() {
        assert_eq!(Role::Admin.to_string(), "admin");
        assert_eq!(Role::default(), Role::Student);
    }
}
